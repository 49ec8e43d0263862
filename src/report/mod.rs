//! Printable reports.
//!
//! Builders assemble a [`ReportDocument`] from merged data; [`pdf::render`]
//! lays it out.

pub mod document;
pub mod pdf;

pub use document::{write_pdf, Orientation, ReportDocument, ReportKind, Section, DEFAULT_FOOTER};
pub use pdf::render;

use crate::analytics::{Classification, DashboardMetrics, TeamComparison};
use crate::store::{Player, DEFAULT_SEASON};
use crate::table::Table;

const PLAYER_COLUMNS: &[&str] = &[
    "nombre",
    "posicion",
    "nacionalidad",
    "edad",
    "goles",
    "asistencias",
    "partidos",
    "equipo_nombre",
];
const PLAYER_LABELS: &[&str] = &[
    "Jugador",
    "Posicion",
    "Nacionalidad",
    "Edad",
    "Goles",
    "Asistencias",
    "Partidos",
    "Equipo",
];

const SCORER_COLUMNS: &[&str] = &["nombre", "goles", "asistencias", "equipo_nombre"];
const SCORER_LABELS: &[&str] = &["Jugador", "Goles", "Asistencias", "Equipo"];

const CLASSIFICATION_TOP: usize = 10;
const SCORERS_TOP: usize = 10;

pub fn classification_report(
    classification: &Classification,
    metrics: Option<&DashboardMetrics>,
) -> ReportDocument {
    let mut doc = ReportDocument::new("La Liga - Clasificacion", Orientation::Portrait);
    if let Some(m) = metrics {
        doc = doc.with_summary(format!(
            "Temporada {} | Lider: {} ({} pts)",
            DEFAULT_SEASON, m.lider, m.lider_puntos
        ));
    }
    doc.section(Some("Tabla de Posiciones"), classification.table(), false)
}

pub fn players_report(players: &[Player]) -> ReportDocument {
    ReportDocument::new("Analisis de Jugadores", Orientation::Landscape)
        .section(None, player_table(players, PLAYER_COLUMNS, PLAYER_LABELS), false)
}

/// Summary, classification top 10 and scorers top 10, each on its own page
pub fn full_report(
    classification: &Classification,
    players: &[Player],
    metrics: &DashboardMetrics,
) -> ReportDocument {
    let mut scorers = players.to_vec();
    // Stable: ties keep their incoming order
    scorers.sort_by(|a, b| b.goles.cmp(&a.goles));
    scorers.truncate(SCORERS_TOP);

    ReportDocument::new("Football Analytics Dashboard", Orientation::Portrait)
        .with_subtitle(format!("Reporte Completo - La Liga {}", DEFAULT_SEASON))
        .section(
            Some("Resumen Ejecutivo"),
            metrics.table().relabel(&["Metrica", "Valor"]),
            false,
        )
        .section(
            Some("Clasificacion"),
            classification.table().head(CLASSIFICATION_TOP),
            true,
        )
        .section(
            Some("Maximos Goleadores"),
            player_table(&scorers, SCORER_COLUMNS, SCORER_LABELS),
            true,
        )
}

/// Full report headed by a side-by-side comparison of two teams
pub fn comparison_report(
    comparison: &TeamComparison,
    classification: &Classification,
    players: &[Player],
    metrics: &DashboardMetrics,
) -> ReportDocument {
    let mut doc = full_report(classification, players, metrics).with_subtitle(format!(
        "{} vs {} - La Liga {}",
        comparison.team1.nombre, comparison.team2.nombre, DEFAULT_SEASON
    ));
    let section = Section {
        heading: Some("Comparacion".to_string()),
        table: comparison.table().relabel(&["Metrica"]),
        new_page: false,
    };
    doc.sections.insert(0, section);
    doc
}

fn player_table(players: &[Player], columns: &[&str], labels: &[&str]) -> Table {
    Table::from_rows(players).select(columns).relabel(labels)
}
