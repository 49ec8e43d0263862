//! Demo data set inserted on first startup.

use rusqlite::{params, Transaction};

use super::schema_gen::generate_insert;
use crate::schema::{PLAYERS, SEASON_STATS, TEAMS};

/// Season label the demo statistics are recorded under
pub const DEFAULT_SEASON: &str = "2024-25";

type TeamSeed = (&'static str, &'static str, &'static str, i64, &'static str, i64);
type PlayerSeed = (&'static str, i64, &'static str, &'static str, i64, f64, u32, u32, u32);
type SeasonSeed = (i64, u32, u32, u32, u32, u32, u32, u32, f64, f64, f64);

pub const SEED_TEAMS: &[TeamSeed] = &[
    ("Real Madrid", "La Liga", "Espana", 1902, "Santiago Bernabeu", 81044),
    ("FC Barcelona", "La Liga", "Espana", 1899, "Spotify Camp Nou", 99354),
    ("Atletico Madrid", "La Liga", "Espana", 1903, "Civitas Metropolitano", 68456),
    ("Sevilla FC", "La Liga", "Espana", 1890, "Ramon Sanchez-Pizjuan", 43883),
    ("Real Sociedad", "La Liga", "Espana", 1909, "Reale Arena", 39500),
    ("Real Betis", "La Liga", "Espana", 1907, "Benito Villamarin", 60721),
    ("Villarreal CF", "La Liga", "Espana", 1923, "Estadio de la Ceramica", 23500),
    ("Athletic Bilbao", "La Liga", "Espana", 1898, "San Mames", 53289),
    ("Valencia CF", "La Liga", "Espana", 1919, "Mestalla", 49430),
    ("Osasuna", "La Liga", "Espana", 1920, "El Sadar", 23516),
];

// (name, team id, position, nationality, age, market value, goals, assists, matches)
pub const SEED_PLAYERS: &[PlayerSeed] = &[
    ("Vinicius Junior", 1, "Extremo Izquierdo", "Brasil", 24, 180.0, 15, 7, 25),
    ("Jude Bellingham", 1, "Centrocampista", "Inglaterra", 21, 150.0, 12, 8, 28),
    ("Kylian Mbappe", 1, "Delantero Centro", "Francia", 26, 180.0, 18, 5, 26),
    ("Lamine Yamal", 2, "Extremo Derecho", "Espana", 17, 120.0, 8, 12, 27),
    ("Robert Lewandowski", 2, "Delantero Centro", "Polonia", 36, 15.0, 14, 4, 25),
    ("Pedri", 2, "Centrocampista", "Espana", 22, 100.0, 5, 9, 24),
    ("Antoine Griezmann", 3, "Mediapunta", "Francia", 33, 25.0, 10, 8, 26),
    ("Julian Alvarez", 3, "Delantero Centro", "Argentina", 24, 90.0, 12, 6, 27),
    ("Youssef En-Nesyri", 4, "Delantero Centro", "Marruecos", 27, 30.0, 9, 3, 23),
    ("Takefusa Kubo", 5, "Extremo Derecho", "Japon", 23, 60.0, 7, 6, 25),
    ("Isco", 6, "Centrocampista", "Espana", 32, 8.0, 4, 7, 22),
    ("Gerard Moreno", 7, "Delantero Centro", "Espana", 32, 20.0, 8, 4, 21),
    ("Nico Williams", 8, "Extremo Izquierdo", "Espana", 22, 70.0, 6, 10, 26),
    ("Hugo Duro", 9, "Delantero Centro", "Espana", 25, 25.0, 11, 3, 24),
    ("Ante Budimir", 10, "Delantero Centro", "Croacia", 33, 8.0, 13, 2, 27),
];

// (team id, played, won, drawn, lost, goals for, goals against, points,
//  possession %, shots per game, pass completion %)
pub const SEED_SEASON_STATS: &[SeasonSeed] = &[
    (1, 28, 20, 5, 3, 58, 22, 65, 58.5, 16.2, 89.3),
    (2, 28, 19, 6, 3, 62, 28, 63, 62.1, 17.8, 90.1),
    (3, 28, 15, 8, 5, 42, 25, 53, 51.2, 13.4, 84.5),
    (4, 28, 12, 9, 7, 35, 32, 45, 48.3, 12.1, 82.7),
    (5, 28, 14, 7, 7, 38, 28, 49, 53.6, 14.2, 86.2),
    (6, 28, 13, 8, 7, 40, 35, 47, 55.4, 13.8, 85.9),
    (7, 28, 12, 10, 6, 36, 30, 46, 52.8, 14.5, 87.1),
    (8, 28, 14, 6, 8, 42, 32, 48, 50.1, 12.9, 83.4),
    (9, 28, 10, 10, 8, 32, 35, 40, 49.7, 11.8, 81.2),
    (10, 28, 11, 9, 8, 38, 36, 42, 45.2, 11.2, 79.8),
];

/// Insert the demo teams, players and season statistics.
///
/// Runs inside the caller's transaction; the team ids referenced by the
/// player and statistic rows assume an empty `equipos` table.
pub fn insert_sample_data(tx: &Transaction) -> rusqlite::Result<u64> {
    let mut count: u64 = 0;

    let mut stmt = tx.prepare_cached(&generate_insert(&TEAMS))?;
    for (nombre, liga, pais, fundacion, estadio, capacidad) in SEED_TEAMS {
        stmt.execute(params![nombre, liga, pais, fundacion, estadio, capacidad])?;
        count += 1;
    }

    let mut stmt = tx.prepare_cached(&generate_insert(&PLAYERS))?;
    for (nombre, equipo_id, posicion, nacionalidad, edad, valor, goles, asistencias, partidos) in
        SEED_PLAYERS
    {
        stmt.execute(params![
            nombre,
            equipo_id,
            posicion,
            nacionalidad,
            edad,
            valor,
            goles,
            asistencias,
            partidos
        ])?;
        count += 1;
    }

    let mut stmt = tx.prepare_cached(&generate_insert(&SEASON_STATS))?;
    for (equipo_id, pj, pg, pe, pp, gf, gc, pts, posesion, tiros, pases) in SEED_SEASON_STATS {
        stmt.execute(params![
            equipo_id,
            DEFAULT_SEASON,
            pj,
            pg,
            pe,
            pp,
            gf,
            gc,
            pts,
            posesion,
            tiros,
            pases
        ])?;
        count += 1;
    }

    Ok(count)
}
