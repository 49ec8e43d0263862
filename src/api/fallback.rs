//! Fixed datasets served when the API cannot be reached.

use chrono::{Duration, Local, NaiveDate};

use super::models::{ApiScorerRow, FixtureRow, ResultRow, StandingRow};

const COMPETITION: &str = "La Liga";

// (team, played, won, drawn, lost, goals for, goals against, points)
const STANDINGS: &[(&str, u32, u32, u32, u32, u32, u32, u32)] = &[
    ("Real Madrid", 28, 20, 5, 3, 58, 22, 65),
    ("FC Barcelona", 28, 19, 6, 3, 62, 28, 63),
    ("Atletico Madrid", 28, 15, 8, 5, 42, 25, 53),
    ("Real Sociedad", 28, 14, 7, 7, 38, 28, 49),
    ("Athletic Bilbao", 28, 14, 6, 8, 42, 32, 48),
    ("Real Betis", 28, 13, 8, 7, 40, 35, 47),
    ("Villarreal CF", 28, 12, 10, 6, 36, 30, 46),
    ("Sevilla FC", 28, 12, 9, 7, 35, 32, 45),
    ("Osasuna", 28, 11, 9, 8, 38, 36, 42),
    ("Valencia CF", 28, 10, 10, 8, 32, 35, 40),
];

// (days from today, kick-off, home, away)
const FIXTURES: &[(i64, &str, &str, &str)] = &[
    (1, "21:00", "Real Madrid", "Sevilla FC"),
    (2, "18:30", "FC Barcelona", "Athletic Bilbao"),
    (2, "21:00", "Atletico Madrid", "Real Sociedad"),
    (3, "16:00", "Real Betis", "Villarreal CF"),
    (3, "18:30", "Valencia CF", "Osasuna"),
    (5, "21:00", "Sevilla FC", "FC Barcelona"),
    (6, "21:00", "Real Sociedad", "Real Madrid"),
];

// (days before today, home, score, away)
const RESULTS: &[(i64, &str, &str, &str)] = &[
    (1, "Real Madrid", "3 - 1", "Osasuna"),
    (2, "Athletic Bilbao", "2 - 2", "FC Barcelona"),
    (2, "Atletico Madrid", "1 - 0", "Villarreal CF"),
    (3, "Sevilla FC", "2 - 1", "Valencia CF"),
    (4, "Real Betis", "3 - 0", "Real Sociedad"),
    (7, "FC Barcelona", "4 - 2", "Real Betis"),
    (7, "Osasuna", "1 - 1", "Athletic Bilbao"),
];

// (player, team, goals, assists, matches, minutes)
const SCORERS: &[(&str, &str, u32, u32, u32, u32)] = &[
    ("Kylian Mbappe", "Real Madrid", 18, 5, 26, 2180),
    ("Robert Lewandowski", "FC Barcelona", 14, 4, 25, 2050),
    ("Vinicius Junior", "Real Madrid", 15, 7, 25, 2100),
    ("Ante Budimir", "Osasuna", 13, 2, 27, 2350),
    ("Julian Alvarez", "Atletico Madrid", 12, 6, 27, 2280),
    ("Jude Bellingham", "Real Madrid", 12, 8, 28, 2450),
    ("Hugo Duro", "Valencia CF", 11, 3, 24, 1980),
    ("Antoine Griezmann", "Atletico Madrid", 10, 8, 26, 2150),
    ("Youssef En-Nesyri", "Sevilla FC", 9, 3, 23, 1850),
    ("Lamine Yamal", "FC Barcelona", 8, 12, 27, 2300),
];

pub fn standings() -> Vec<StandingRow> {
    STANDINGS
        .iter()
        .enumerate()
        .map(|(i, &(equipo, pj, pg, pe, pp, gf, gc, pts))| StandingRow {
            posicion: i as u32 + 1,
            equipo: equipo.to_string(),
            pj,
            pg,
            pe,
            pp,
            gf,
            gc,
            dg: gf as i32 - gc as i32,
            pts,
        })
        .collect()
}

pub fn upcoming_fixtures() -> Vec<FixtureRow> {
    let today = Local::now().date_naive();
    FIXTURES
        .iter()
        .map(|&(days, hora, local, visitante)| FixtureRow {
            fecha: format_day(today + Duration::days(days)),
            hora: hora.to_string(),
            local: local.to_string(),
            visitante: visitante.to_string(),
            competicion: COMPETITION.to_string(),
        })
        .collect()
}

pub fn recent_results() -> Vec<ResultRow> {
    let today = Local::now().date_naive();
    RESULTS
        .iter()
        .map(|&(days, local, resultado, visitante)| ResultRow {
            fecha: format_day(today - Duration::days(days)),
            local: local.to_string(),
            resultado: resultado.to_string(),
            visitante: visitante.to_string(),
            competicion: COMPETITION.to_string(),
        })
        .collect()
}

pub fn top_scorers() -> Vec<ApiScorerRow> {
    SCORERS
        .iter()
        .map(|&(jugador, equipo, goles, asistencias, partidos, minutos)| ApiScorerRow {
            jugador: jugador.to_string(),
            equipo: equipo.to_string(),
            goles,
            asistencias,
            partidos,
            minutos,
        })
        .collect()
}

fn format_day(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}
