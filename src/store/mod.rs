//! SQLite-backed league store.
//!
//! A connection is opened per operation and dropped when the operation
//! ends. Reads are memoized per argument tuple for the configured TTL.

pub mod models;
pub mod schema_gen;
pub mod seed;

pub use models::*;
pub use seed::DEFAULT_SEASON;

use rusqlite::{params, Connection, OptionalExtension};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache::TtlCache;
use crate::error::Result;
use crate::schema::{TableSchema, ALL_TABLES};
use schema_gen::{generate_create_table, generate_indexes};

pub const DEFAULT_SCORER_LIMIT: u32 = 10;

pub struct LeagueStore {
    db_path: PathBuf,
    teams_cache: TtlCache<(), Vec<Team>>,
    players_cache: TtlCache<Option<i64>, Vec<Player>>,
    season_cache: TtlCache<String, Vec<SeasonStatRow>>,
    scorers_cache: TtlCache<u32, Vec<ScorerRow>>,
    summary_cache: TtlCache<(), LeagueSummary>,
}

impl LeagueStore {
    /// Open (creating if needed) the database at `db_path`, ensure the
    /// schema exists and seed demo data into an empty database.
    pub fn open(db_path: impl AsRef<Path>, cache_ttl: Duration) -> Result<Self> {
        let db_path = db_path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let store = Self {
            db_path,
            teams_cache: TtlCache::new(cache_ttl),
            players_cache: TtlCache::new(cache_ttl),
            season_cache: TtlCache::new(cache_ttl),
            scorers_cache: TtlCache::new(cache_ttl),
            summary_cache: TtlCache::new(cache_ttl),
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    fn connection(&self) -> Result<Connection> {
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(conn)
    }

    fn initialize(&self) -> Result<()> {
        let mut conn = self.connection()?;
        create_tables(&conn, ALL_TABLES)?;

        let team_count: i64 = conn.query_row("SELECT COUNT(*) FROM equipos", [], |row| row.get(0))?;
        if team_count == 0 {
            let tx = conn.transaction()?;
            let inserted = seed::insert_sample_data(&tx)?;
            tx.commit()?;
            tracing::info!(path = %self.db_path.display(), rows = inserted, "Seeded demo data");
        } else {
            tracing::debug!(path = %self.db_path.display(), teams = team_count, "Database already populated");
        }
        Ok(())
    }

    /// All teams ordered by name
    pub fn teams(&self) -> Result<Vec<Team>> {
        self.teams_cache.get_or_try_insert_with((), || -> Result<_> {
            let conn = self.connection()?;
            let mut stmt = conn.prepare(
                "SELECT id, nombre, liga, pais, fundacion, estadio, capacidad
                 FROM equipos ORDER BY nombre",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(Team {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    liga: row.get(2)?,
                    pais: row.get(3)?,
                    fundacion: row.get(4)?,
                    estadio: row.get(5)?,
                    capacidad: row.get(6)?,
                })
            })?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Players, optionally limited to one team, best scorers first
    pub fn players(&self, team_id: Option<i64>) -> Result<Vec<Player>> {
        self.players_cache.get_or_try_insert_with(team_id, || -> Result<_> {
            let conn = self.connection()?;
            let mut stmt = conn.prepare(
                "SELECT j.id, j.nombre, j.equipo_id, j.posicion, j.nacionalidad, j.edad,
                        j.valor_mercado, COALESCE(j.goles, 0), COALESCE(j.asistencias, 0),
                        COALESCE(j.partidos, 0), e.nombre
                 FROM jugadores j
                 LEFT JOIN equipos e ON j.equipo_id = e.id
                 WHERE ?1 IS NULL OR j.equipo_id = ?1
                 ORDER BY j.goles DESC, j.id",
            )?;
            let rows = stmt.query_map(params![team_id], |row| {
                Ok(Player {
                    id: row.get(0)?,
                    nombre: row.get(1)?,
                    equipo_id: row.get(2)?,
                    posicion: row.get(3)?,
                    nacionalidad: row.get(4)?,
                    edad: row.get(5)?,
                    valor_mercado: row.get(6)?,
                    goles: row.get(7)?,
                    asistencias: row.get(8)?,
                    partidos: row.get(9)?,
                    equipo_nombre: row.get(10)?,
                })
            })?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Season statistics for one season label, most points first
    pub fn season_stats(&self, season: &str) -> Result<Vec<SeasonStatRow>> {
        self.season_cache.get_or_try_insert_with(season.to_string(), || -> Result<_> {
            let conn = self.connection()?;
            let mut stmt = conn.prepare(
                "SELECT est.id, est.equipo_id, e.nombre, e.liga, est.temporada,
                        COALESCE(est.partidos_jugados, 0), COALESCE(est.victorias, 0),
                        COALESCE(est.empates, 0), COALESCE(est.derrotas, 0),
                        COALESCE(est.goles_favor, 0), COALESCE(est.goles_contra, 0),
                        COALESCE(est.puntos, 0), COALESCE(est.posesion_media, 0.0),
                        COALESCE(est.tiros_partido, 0.0), COALESCE(est.pases_completados, 0.0)
                 FROM estadisticas_equipo est
                 JOIN equipos e ON est.equipo_id = e.id
                 WHERE est.temporada = ?1
                 ORDER BY est.puntos DESC, est.id",
            )?;
            let rows = stmt.query_map(params![season], |row| {
                Ok(SeasonStatRow {
                    id: row.get(0)?,
                    equipo_id: row.get(1)?,
                    nombre: row.get(2)?,
                    liga: row.get(3)?,
                    temporada: row.get(4)?,
                    partidos_jugados: row.get(5)?,
                    victorias: row.get(6)?,
                    empates: row.get(7)?,
                    derrotas: row.get(8)?,
                    goles_favor: row.get(9)?,
                    goles_contra: row.get(10)?,
                    puntos: row.get(11)?,
                    posesion_media: row.get(12)?,
                    tiros_partido: row.get(13)?,
                    pases_completados: row.get(14)?,
                })
            })?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// Top `limit` scorers with their team name
    pub fn top_scorers(&self, limit: u32) -> Result<Vec<ScorerRow>> {
        self.scorers_cache.get_or_try_insert_with(limit, || -> Result<_> {
            let conn = self.connection()?;
            let mut stmt = conn.prepare(
                "SELECT j.nombre, j.posicion, j.nacionalidad, COALESCE(j.goles, 0),
                        COALESCE(j.asistencias, 0), COALESCE(j.partidos, 0), e.nombre
                 FROM jugadores j
                 JOIN equipos e ON j.equipo_id = e.id
                 ORDER BY j.goles DESC, j.id
                 LIMIT ?1",
            )?;
            let rows = stmt.query_map(params![limit], |row| {
                Ok(ScorerRow {
                    nombre: row.get(0)?,
                    posicion: row.get(1)?,
                    nacionalidad: row.get(2)?,
                    goles: row.get(3)?,
                    asistencias: row.get(4)?,
                    partidos: row.get(5)?,
                    equipo: row.get(6)?,
                })
            })?;
            Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
        })
    }

    /// League-wide counts, sums and means
    pub fn league_summary(&self) -> Result<LeagueSummary> {
        self.summary_cache.get_or_try_insert_with((), || -> Result<_> {
            let conn = self.connection()?;
            let summary = conn
                .query_row(
                    "SELECT (SELECT COUNT(DISTINCT id) FROM equipos),
                            COUNT(DISTINCT j.id),
                            COALESCE(SUM(j.goles), 0),
                            COALESCE(SUM(j.asistencias), 0),
                            AVG(j.valor_mercado),
                            AVG(j.edad)
                     FROM jugadores j",
                    [],
                    |row| {
                        Ok(LeagueSummary {
                            total_equipos: row.get(0)?,
                            total_jugadores: row.get(1)?,
                            total_goles: row.get(2)?,
                            total_asistencias: row.get(3)?,
                            valor_medio: row.get(4)?,
                            edad_media: row.get(5)?,
                        })
                    },
                )
                .optional()?
                .unwrap_or_default();
            Ok(summary)
        })
    }
}

/// Create all tables (and their FK indexes) that do not exist yet
fn create_tables(conn: &Connection, schemas: &[&TableSchema]) -> Result<()> {
    for schema in schemas {
        conn.execute(&generate_create_table(schema), [])?;
        for index_sql in generate_indexes(schema) {
            conn.execute(&index_sql, [])?;
        }
    }
    Ok(())
}
