//! Merge layer between the local store and the external API.
//!
//! External data wins whenever it is non-empty; the local season tables
//! stand in otherwise. The returned enums name which side was used.

pub mod aggregate;
pub mod models;

pub use models::*;

use crate::api::FootballApi;
use crate::config::AppConfig;
use crate::error::Result;
use crate::store::{LeagueStore, Player, Team, DEFAULT_SCORER_LIMIT, DEFAULT_SEASON};
use aggregate::{efficiency_row, round_to};

pub struct StatsService {
    store: LeagueStore,
    api: FootballApi,
}

impl StatsService {
    pub fn new(store: LeagueStore, api: FootballApi) -> Self {
        Self { store, api }
    }

    /// Open the configured database and build the API client.
    /// With `offline` set no HTTP request is ever made.
    pub fn from_config(config: &AppConfig, offline: bool) -> Result<Self> {
        let store = LeagueStore::open(&config.database_path, config.cache_ttl)?;
        let api = if offline {
            FootballApi::offline(config)
        } else {
            FootballApi::new(config)?
        };
        Ok(Self::new(store, api))
    }

    pub fn store(&self) -> &LeagueStore {
        &self.store
    }

    pub fn api(&self) -> &FootballApi {
        &self.api
    }

    pub fn classification(&self) -> Result<Classification> {
        let standings = self.api.standings();
        if !standings.is_empty() {
            return Ok(Classification::External(standings));
        }
        tracing::debug!("External standings empty, using local season stats");
        Ok(Classification::Local(self.store.season_stats(DEFAULT_SEASON)?))
    }

    pub fn top_scorers(&self) -> Result<Scorers> {
        let scorers = self.api.top_scorers();
        if !scorers.is_empty() {
            return Ok(Scorers::External(scorers));
        }
        tracing::debug!("External scorers empty, using local players");
        Ok(Scorers::Local(self.store.top_scorers(DEFAULT_SCORER_LIMIT)?))
    }

    pub fn efficiency(&self) -> Result<Vec<EfficiencyRow>> {
        Ok(self
            .store
            .season_stats(DEFAULT_SEASON)?
            .into_iter()
            .map(efficiency_row)
            .collect())
    }

    /// Season figures and recent form for two teams, looked up independently
    pub fn comparison(&self, team1: &str, team2: &str) -> Result<TeamComparison> {
        let stats = self.store.season_stats(DEFAULT_SEASON)?;
        let profile = |name: &str| TeamProfile {
            nombre: name.to_string(),
            stats: stats.iter().find(|s| s.nombre == name).cloned(),
            form: self.api.team_form(name),
        };

        Ok(TeamComparison {
            team1: profile(team1),
            team2: profile(team2),
        })
    }

    pub fn position_distribution(&self) -> Result<Vec<PositionGroup>> {
        Ok(aggregate::position_distribution(&self.store.players(None)?))
    }

    pub fn nationality_distribution(&self) -> Result<Vec<NationalityGroup>> {
        Ok(aggregate::nationality_distribution(&self.store.players(None)?))
    }

    pub fn dashboard_metrics(&self) -> Result<DashboardMetrics> {
        let summary = self.store.league_summary()?;
        let (lider, lider_puntos) = self
            .api
            .standings()
            .first()
            .map(|row| (row.equipo.clone(), row.pts))
            .unwrap_or_else(|| ("-".to_string(), 0));

        Ok(DashboardMetrics {
            total_equipos: summary.total_equipos,
            total_jugadores: summary.total_jugadores,
            total_goles: summary.total_goles,
            total_asistencias: summary.total_asistencias,
            valor_medio: round_to(summary.valor_medio.unwrap_or(0.0), 2),
            edad_media: round_to(summary.edad_media.unwrap_or(0.0), 1),
            lider,
            lider_puntos,
        })
    }

    pub fn matches(&self) -> Matches {
        Matches {
            upcoming: self.api.upcoming_fixtures(),
            recent: self.api.recent_results(),
        }
    }

    pub fn players(&self, team_id: Option<i64>) -> Result<Vec<Player>> {
        self.store.players(team_id)
    }

    pub fn teams(&self) -> Result<Vec<Team>> {
        self.store.teams()
    }
}
