//! Row records returned by the league store.

use serde::Serialize;

use crate::table::{fmt_num, fmt_opt, Tabular};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: i64,
    pub nombre: String,
    pub liga: String,
    pub pais: String,
    pub fundacion: Option<i64>,
    pub estadio: Option<String>,
    pub capacidad: Option<i64>,
}

/// A player joined with the name of their team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: i64,
    pub nombre: String,
    pub equipo_id: Option<i64>,
    pub posicion: Option<String>,
    pub nacionalidad: Option<String>,
    pub edad: Option<i64>,
    pub valor_mercado: Option<f64>,
    pub goles: u32,
    pub asistencias: u32,
    pub partidos: u32,
    pub equipo_nombre: Option<String>,
}

/// One team's figures for one season, joined with team name and league.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonStatRow {
    pub id: i64,
    pub equipo_id: i64,
    pub nombre: String,
    pub liga: String,
    pub temporada: String,
    pub partidos_jugados: u32,
    pub victorias: u32,
    pub empates: u32,
    pub derrotas: u32,
    pub goles_favor: u32,
    pub goles_contra: u32,
    pub puntos: u32,
    pub posesion_media: f64,
    pub tiros_partido: f64,
    pub pases_completados: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorerRow {
    pub nombre: String,
    pub posicion: Option<String>,
    pub nacionalidad: Option<String>,
    pub goles: u32,
    pub asistencias: u32,
    pub partidos: u32,
    pub equipo: String,
}

/// League-wide totals. Means are `None` when there are no players.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeagueSummary {
    pub total_equipos: u32,
    pub total_jugadores: u32,
    pub total_goles: u32,
    pub total_asistencias: u32,
    pub valor_medio: Option<f64>,
    pub edad_media: Option<f64>,
}

impl Tabular for Team {
    fn columns() -> &'static [&'static str] {
        &["id", "nombre", "liga", "pais", "fundacion", "estadio", "capacidad"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            self.liga.clone(),
            self.pais.clone(),
            fmt_opt(&self.fundacion),
            fmt_opt(&self.estadio),
            fmt_opt(&self.capacidad),
        ]
    }
}

impl Tabular for Player {
    fn columns() -> &'static [&'static str] {
        &[
            "id",
            "nombre",
            "equipo_id",
            "posicion",
            "nacionalidad",
            "edad",
            "valor_mercado",
            "goles",
            "asistencias",
            "partidos",
            "equipo_nombre",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.nombre.clone(),
            fmt_opt(&self.equipo_id),
            fmt_opt(&self.posicion),
            fmt_opt(&self.nacionalidad),
            fmt_opt(&self.edad),
            self.valor_mercado.map(fmt_num).unwrap_or_else(|| "-".into()),
            self.goles.to_string(),
            self.asistencias.to_string(),
            self.partidos.to_string(),
            fmt_opt(&self.equipo_nombre),
        ]
    }
}

impl Tabular for SeasonStatRow {
    fn columns() -> &'static [&'static str] {
        &[
            "nombre",
            "liga",
            "temporada",
            "partidos_jugados",
            "victorias",
            "empates",
            "derrotas",
            "goles_favor",
            "goles_contra",
            "puntos",
            "posesion_media",
            "tiros_partido",
            "pases_completados",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            self.liga.clone(),
            self.temporada.clone(),
            self.partidos_jugados.to_string(),
            self.victorias.to_string(),
            self.empates.to_string(),
            self.derrotas.to_string(),
            self.goles_favor.to_string(),
            self.goles_contra.to_string(),
            self.puntos.to_string(),
            fmt_num(self.posesion_media),
            fmt_num(self.tiros_partido),
            fmt_num(self.pases_completados),
        ]
    }
}

impl Tabular for ScorerRow {
    fn columns() -> &'static [&'static str] {
        &["nombre", "posicion", "nacionalidad", "goles", "asistencias", "partidos", "equipo"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.nombre.clone(),
            fmt_opt(&self.posicion),
            fmt_opt(&self.nacionalidad),
            self.goles.to_string(),
            self.asistencias.to_string(),
            self.partidos.to_string(),
            self.equipo.clone(),
        ]
    }
}
