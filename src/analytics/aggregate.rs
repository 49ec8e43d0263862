//! Pure derivations over store rows.

use std::collections::BTreeMap;

use super::models::{EfficiencyRow, NationalityGroup, PositionGroup};
use crate::store::{Player, SeasonStatRow};

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Per-match ratios for one season row. Zero matches played gives 0.0 ratios.
pub fn efficiency_row(stats: SeasonStatRow) -> EfficiencyRow {
    let played = stats.partidos_jugados;
    if played == 0 {
        tracing::debug!(team = %stats.nombre, "No matches played, ratios set to zero");
        return EfficiencyRow {
            stats,
            goles_por_partido: 0.0,
            goles_contra_partido: 0.0,
            efectividad: 0.0,
            puntos_por_partido: 0.0,
        };
    }

    let per_match = |n: u32| n as f64 / played as f64;
    EfficiencyRow {
        goles_por_partido: round_to(per_match(stats.goles_favor), 2),
        goles_contra_partido: round_to(per_match(stats.goles_contra), 2),
        efectividad: round_to(per_match(stats.victorias) * 100.0, 1),
        puntos_por_partido: round_to(per_match(stats.puntos), 2),
        stats,
    }
}

/// Players grouped by position, groups ordered by position name.
/// Players without a position are left out.
pub fn position_distribution(players: &[Player]) -> Vec<PositionGroup> {
    #[derive(Default)]
    struct Acc {
        count: u32,
        goals: u32,
        assists: u32,
        value_sum: f64,
        valued: u32,
    }

    let mut groups: BTreeMap<&str, Acc> = BTreeMap::new();
    for player in players {
        let Some(position) = player.posicion.as_deref() else {
            continue;
        };
        let acc = groups.entry(position).or_default();
        acc.count += 1;
        acc.goals += player.goles;
        acc.assists += player.asistencias;
        if let Some(value) = player.valor_mercado {
            acc.value_sum += value;
            acc.valued += 1;
        }
    }

    groups
        .into_iter()
        .map(|(posicion, acc)| PositionGroup {
            posicion: posicion.to_string(),
            jugadores: acc.count,
            goles: acc.goals,
            asistencias: acc.assists,
            valor_medio: (acc.valued > 0).then(|| round_to(acc.value_sum / acc.valued as f64, 2)),
        })
        .collect()
}

/// Players grouped by nationality, largest groups first; ties keep name order.
/// Players without a nationality are left out.
pub fn nationality_distribution(players: &[Player]) -> Vec<NationalityGroup> {
    let mut groups: BTreeMap<&str, NationalityGroup> = BTreeMap::new();
    for player in players {
        let Some(nationality) = player.nacionalidad.as_deref() else {
            continue;
        };
        let group = groups.entry(nationality).or_insert_with(|| NationalityGroup {
            nacionalidad: nationality.to_string(),
            jugadores: 0,
            goles_totales: 0,
            valor_total: 0.0,
        });
        group.jugadores += 1;
        group.goles_totales += player.goles;
        group.valor_total += player.valor_mercado.unwrap_or(0.0);
    }

    let mut groups: Vec<NationalityGroup> = groups.into_values().collect();
    groups.sort_by(|a, b| b.jugadores.cmp(&a.jugadores));
    groups
}
