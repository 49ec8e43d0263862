//! football-data.org payloads and the rows they map to.

use serde::{Deserialize, Serialize};

use crate::table::Tabular;

// =============================================================================
// Wire payloads
// =============================================================================
//
// Top-level arrays are required; anything below them is optional and
// defaults to zero or an empty string.

#[derive(Debug, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<StandingGroup>,
}

#[derive(Debug, Deserialize)]
pub struct StandingGroup {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub table: Vec<StandingEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingEntry {
    pub position: u32,
    pub team: TeamRef,
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TeamRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchEntry {
    pub utc_date: String,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub score: Score,
    pub competition: CompetitionRef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Score {
    pub full_time: ScoreLine,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScoreLine {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompetitionRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ScorersResponse {
    pub scorers: Vec<ScorerEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScorerEntry {
    pub player: PlayerRef,
    pub team: TeamRef,
    pub goals: Option<u32>,
    pub assists: Option<u32>,
    pub played_matches: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlayerRef {
    pub name: String,
}

// =============================================================================
// Rows
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingRow {
    pub posicion: u32,
    pub equipo: String,
    pub pj: u32,
    pub pg: u32,
    pub pe: u32,
    pub pp: u32,
    pub gf: u32,
    pub gc: u32,
    pub dg: i32,
    pub pts: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureRow {
    pub fecha: String,
    pub hora: String,
    pub local: String,
    pub visitante: String,
    pub competicion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub fecha: String,
    pub local: String,
    pub resultado: String,
    pub visitante: String,
    pub competicion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiScorerRow {
    pub jugador: String,
    pub equipo: String,
    pub goles: u32,
    pub asistencias: u32,
    pub partidos: u32,
    pub minutos: u32,
}

impl From<&StandingEntry> for StandingRow {
    fn from(e: &StandingEntry) -> Self {
        Self {
            posicion: e.position,
            equipo: e.team.name.clone(),
            pj: e.played_games,
            pg: e.won,
            pe: e.draw,
            pp: e.lost,
            gf: e.goals_for,
            gc: e.goals_against,
            dg: e.goal_difference,
            pts: e.points,
        }
    }
}

impl From<&MatchEntry> for FixtureRow {
    fn from(m: &MatchEntry) -> Self {
        let (fecha, hora) = split_utc_date(&m.utc_date);
        Self {
            fecha,
            hora,
            local: m.home_team.name.clone(),
            visitante: m.away_team.name.clone(),
            competicion: m.competition.name.clone(),
        }
    }
}

impl From<&MatchEntry> for ResultRow {
    fn from(m: &MatchEntry) -> Self {
        let (fecha, _) = split_utc_date(&m.utc_date);
        let line = &m.score.full_time;
        Self {
            fecha,
            local: m.home_team.name.clone(),
            resultado: format!("{} - {}", line.home.unwrap_or(0), line.away.unwrap_or(0)),
            visitante: m.away_team.name.clone(),
            competicion: m.competition.name.clone(),
        }
    }
}

impl From<&ScorerEntry> for ApiScorerRow {
    fn from(s: &ScorerEntry) -> Self {
        Self {
            jugador: s.player.name.clone(),
            equipo: s.team.name.clone(),
            goles: s.goals.unwrap_or(0),
            asistencias: s.assists.unwrap_or(0),
            partidos: s.played_matches.unwrap_or(0),
            // Not reported by the scorers endpoint
            minutos: 0,
        }
    }
}

/// Split `2024-08-18T17:00:00Z` into `("2024-08-18", "17:00")`.
fn split_utc_date(utc: &str) -> (String, String) {
    match chrono::DateTime::parse_from_rfc3339(utc) {
        Ok(dt) => (
            dt.format("%Y-%m-%d").to_string(),
            dt.format("%H:%M").to_string(),
        ),
        Err(_) => (utc.chars().take(10).collect(), "-".to_string()),
    }
}

impl Tabular for StandingRow {
    fn columns() -> &'static [&'static str] {
        &["posicion", "equipo", "pj", "pg", "pe", "pp", "gf", "gc", "dg", "pts"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.posicion.to_string(),
            self.equipo.clone(),
            self.pj.to_string(),
            self.pg.to_string(),
            self.pe.to_string(),
            self.pp.to_string(),
            self.gf.to_string(),
            self.gc.to_string(),
            self.dg.to_string(),
            self.pts.to_string(),
        ]
    }
}

impl Tabular for FixtureRow {
    fn columns() -> &'static [&'static str] {
        &["fecha", "hora", "local", "visitante", "competicion"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.fecha.clone(),
            self.hora.clone(),
            self.local.clone(),
            self.visitante.clone(),
            self.competicion.clone(),
        ]
    }
}

impl Tabular for ResultRow {
    fn columns() -> &'static [&'static str] {
        &["fecha", "local", "resultado", "visitante", "competicion"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.fecha.clone(),
            self.local.clone(),
            self.resultado.clone(),
            self.visitante.clone(),
            self.competicion.clone(),
        ]
    }
}

impl Tabular for ApiScorerRow {
    fn columns() -> &'static [&'static str] {
        &["jugador", "equipo", "goles", "asistencias", "partidos", "minutos"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.jugador.clone(),
            self.equipo.clone(),
            self.goles.to_string(),
            self.asistencias.to_string(),
            self.partidos.to_string(),
            self.minutos.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_utc_date() {
        assert_eq!(
            split_utc_date("2024-08-18T17:00:00Z"),
            ("2024-08-18".to_string(), "17:00".to_string())
        );
        assert_eq!(split_utc_date("2024-08-18"), ("2024-08-18".to_string(), "-".to_string()));
    }

    #[test]
    fn test_missing_optional_fields_are_zero() {
        let entry: ScorerEntry =
            serde_json::from_str(r#"{"player": {"name": "Isco"}, "goals": 4, "assists": null}"#)
                .unwrap();
        let row = ApiScorerRow::from(&entry);
        assert_eq!(row.goles, 4);
        assert_eq!(row.asistencias, 0);
        assert_eq!(row.partidos, 0);
        assert_eq!(row.equipo, "");
    }

    #[test]
    fn test_result_line() {
        let entry: MatchEntry = serde_json::from_str(
            r#"{"utcDate": "2025-03-01T20:00:00Z",
                "homeTeam": {"name": "Real Madrid CF"}, "awayTeam": {"name": "CA Osasuna"},
                "score": {"fullTime": {"home": 3, "away": 1}},
                "competition": {"name": "Primera Division"}}"#,
        )
        .unwrap();
        let row = ResultRow::from(&entry);
        assert_eq!(row.resultado, "3 - 1");
        assert_eq!(row.fecha, "2025-03-01");
    }
}
