//! Dashboard-ready records produced by the merge layer.

use serde::Serialize;

use crate::api::{form_string, ApiScorerRow, FixtureRow, Form, ResultRow, StandingRow};
use crate::store::{ScorerRow, SeasonStatRow};
use crate::table::{fmt_num, Table, Tabular};

/// Where a merged table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    External,
    Local,
}

/// League table: external standings when available, local season stats otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "rows", rename_all = "lowercase")]
pub enum Classification {
    External(Vec<StandingRow>),
    Local(Vec<SeasonStatRow>),
}

impl Classification {
    pub fn source(&self) -> DataSource {
        match self {
            Classification::External(_) => DataSource::External,
            Classification::Local(_) => DataSource::Local,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Classification::External(rows) => rows.len(),
            Classification::Local(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn table(&self) -> Table {
        match self {
            Classification::External(rows) => Table::from_rows(rows),
            Classification::Local(rows) => Table::from_rows(rows),
        }
    }
}

/// Top scorers: external list when available, local players otherwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "rows", rename_all = "lowercase")]
pub enum Scorers {
    External(Vec<ApiScorerRow>),
    Local(Vec<ScorerRow>),
}

impl Scorers {
    pub fn source(&self) -> DataSource {
        match self {
            Scorers::External(_) => DataSource::External,
            Scorers::Local(_) => DataSource::Local,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Scorers::External(rows) => rows.is_empty(),
            Scorers::Local(rows) => rows.is_empty(),
        }
    }

    pub fn table(&self) -> Table {
        match self {
            Scorers::External(rows) => Table::from_rows(rows),
            Scorers::Local(rows) => Table::from_rows(rows),
        }
    }
}

/// Season statistics plus per-match ratios
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EfficiencyRow {
    #[serde(flatten)]
    pub stats: SeasonStatRow,
    pub goles_por_partido: f64,
    pub goles_contra_partido: f64,
    /// Win percentage
    pub efectividad: f64,
    pub puntos_por_partido: f64,
}

impl Tabular for EfficiencyRow {
    fn columns() -> &'static [&'static str] {
        &[
            "nombre",
            "partidos_jugados",
            "victorias",
            "goles_favor",
            "goles_contra",
            "puntos",
            "goles_por_partido",
            "goles_contra_partido",
            "efectividad",
            "puntos_por_partido",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.stats.nombre.clone(),
            self.stats.partidos_jugados.to_string(),
            self.stats.victorias.to_string(),
            self.stats.goles_favor.to_string(),
            self.stats.goles_contra.to_string(),
            self.stats.puntos.to_string(),
            fmt_num(self.goles_por_partido),
            fmt_num(self.goles_contra_partido),
            fmt_num(self.efectividad),
            fmt_num(self.puntos_por_partido),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamProfile {
    pub nombre: String,
    /// `None` when the team has no row for the season
    pub stats: Option<SeasonStatRow>,
    pub form: Form,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamComparison {
    pub team1: TeamProfile,
    pub team2: TeamProfile,
}

impl TeamComparison {
    /// Side-by-side table of the compared figures
    pub fn table(&self) -> Table {
        fn figures(profile: &TeamProfile) -> Vec<String> {
            let mut cells = match &profile.stats {
                Some(s) => vec![
                    s.puntos.to_string(),
                    s.victorias.to_string(),
                    s.empates.to_string(),
                    s.derrotas.to_string(),
                    s.goles_favor.to_string(),
                    s.goles_contra.to_string(),
                    fmt_num(s.posesion_media),
                    fmt_num(s.tiros_partido),
                    fmt_num(s.pases_completados),
                ],
                None => vec!["-".to_string(); 9],
            };
            cells.push(form_string(&profile.form));
            cells
        }

        let labels = [
            "puntos",
            "victorias",
            "empates",
            "derrotas",
            "goles_favor",
            "goles_contra",
            "posesion_media",
            "tiros_partido",
            "pases_completados",
            "forma",
        ];
        let left = figures(&self.team1);
        let right = figures(&self.team2);

        Table {
            columns: vec![
                "metrica".to_string(),
                self.team1.nombre.clone(),
                self.team2.nombre.clone(),
            ],
            rows: labels
                .iter()
                .zip(left.into_iter().zip(right))
                .map(|(label, (l, r))| vec![label.to_string(), l, r])
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionGroup {
    pub posicion: String,
    pub jugadores: u32,
    pub goles: u32,
    pub asistencias: u32,
    /// Mean market value, `None` when no player in the group has one
    pub valor_medio: Option<f64>,
}

impl Tabular for PositionGroup {
    fn columns() -> &'static [&'static str] {
        &["posicion", "jugadores", "goles", "asistencias", "valor_medio"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.posicion.clone(),
            self.jugadores.to_string(),
            self.goles.to_string(),
            self.asistencias.to_string(),
            self.valor_medio.map(fmt_num).unwrap_or_else(|| "-".into()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NationalityGroup {
    pub nacionalidad: String,
    pub jugadores: u32,
    pub goles_totales: u32,
    pub valor_total: f64,
}

impl Tabular for NationalityGroup {
    fn columns() -> &'static [&'static str] {
        &["nacionalidad", "jugadores", "goles_totales", "valor_total"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nacionalidad.clone(),
            self.jugadores.to_string(),
            self.goles_totales.to_string(),
            fmt_num(self.valor_total),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matches {
    pub upcoming: Vec<FixtureRow>,
    pub recent: Vec<ResultRow>,
}

/// Headline figures for the summary view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_equipos: u32,
    pub total_jugadores: u32,
    pub total_goles: u32,
    pub total_asistencias: u32,
    pub valor_medio: f64,
    pub edad_media: f64,
    /// `"-"` when standings are empty
    pub lider: String,
    pub lider_puntos: u32,
}

impl DashboardMetrics {
    /// (label, value) pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total Equipos", self.total_equipos.to_string()),
            ("Total Jugadores", self.total_jugadores.to_string()),
            ("Total Goles", self.total_goles.to_string()),
            ("Total Asistencias", self.total_asistencias.to_string()),
            ("Valor Medio", fmt_num(self.valor_medio)),
            ("Edad Media", fmt_num(self.edad_media)),
            ("Lider", self.lider.clone()),
            ("Puntos Lider", self.lider_puntos.to_string()),
        ]
    }

    pub fn table(&self) -> Table {
        Table {
            columns: vec!["metrica".to_string(), "valor".to_string()],
            rows: self
                .entries()
                .into_iter()
                .map(|(label, value)| vec![label.to_string(), value])
                .collect(),
        }
    }
}
