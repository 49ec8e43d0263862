//! Table schema definitions for the league database

use super::types::*;

pub static TEAMS: TableSchema = TableSchema {
    name: "equipos",
    columns: &[
        Column::required("nombre", ColumnType::Text),
        Column::required("liga", ColumnType::Text),
        Column::required("pais", ColumnType::Text),
        Column::new("fundacion", ColumnType::Integer),
        Column::new("estadio", ColumnType::Text),
        Column::new("capacidad", ColumnType::Integer),
    ],
    foreign_keys: &[],
};

pub static PLAYERS: TableSchema = TableSchema {
    name: "jugadores",
    columns: &[
        Column::required("nombre", ColumnType::Text),
        Column::new("equipo_id", ColumnType::Integer),
        Column::new("posicion", ColumnType::Text),
        Column::new("nacionalidad", ColumnType::Text),
        Column::new("edad", ColumnType::Integer),
        Column::new("valor_mercado", ColumnType::Real),
        Column::new("goles", ColumnType::Integer).default_to("0"),
        Column::new("asistencias", ColumnType::Integer).default_to("0"),
        Column::new("partidos", ColumnType::Integer).default_to("0"),
    ],
    foreign_keys: &[ForeignKey::new("equipo_id", "equipos")],
};

pub static MATCHES: TableSchema = TableSchema {
    name: "partidos",
    columns: &[
        Column::new("fecha", ColumnType::Text),
        Column::new("equipo_local_id", ColumnType::Integer),
        Column::new("equipo_visitante_id", ColumnType::Integer),
        Column::new("goles_local", ColumnType::Integer),
        Column::new("goles_visitante", ColumnType::Integer),
        Column::new("competicion", ColumnType::Text),
        Column::new("temporada", ColumnType::Text),
    ],
    foreign_keys: &[
        ForeignKey::new("equipo_local_id", "equipos"),
        ForeignKey::new("equipo_visitante_id", "equipos"),
    ],
};

pub static SEASON_STATS: TableSchema = TableSchema {
    name: "estadisticas_equipo",
    columns: &[
        Column::new("equipo_id", ColumnType::Integer),
        Column::new("temporada", ColumnType::Text),
        Column::new("partidos_jugados", ColumnType::Integer),
        Column::new("victorias", ColumnType::Integer),
        Column::new("empates", ColumnType::Integer),
        Column::new("derrotas", ColumnType::Integer),
        Column::new("goles_favor", ColumnType::Integer),
        Column::new("goles_contra", ColumnType::Integer),
        Column::new("puntos", ColumnType::Integer),
        Column::new("posesion_media", ColumnType::Real),
        Column::new("tiros_partido", ColumnType::Real),
        Column::new("pases_completados", ColumnType::Real),
    ],
    foreign_keys: &[ForeignKey::new("equipo_id", "equipos")],
};

/// All tables, parents before children
pub static ALL_TABLES: &[&TableSchema] = &[&TEAMS, &PLAYERS, &MATCHES, &SEASON_STATS];

/// Get all table names
pub fn table_names() -> Vec<&'static str> {
    ALL_TABLES.iter().map(|t| t.name).collect()
}
