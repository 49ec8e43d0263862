//! Recent-form lookup from a fixed table.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FormResult {
    Win,
    Draw,
    Loss,
    Unknown,
}

impl FormResult {
    pub fn symbol(self) -> char {
        match self {
            FormResult::Win => 'V',
            FormResult::Draw => 'E',
            FormResult::Loss => 'D',
            FormResult::Unknown => '?',
        }
    }
}

impl fmt::Display for FormResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Last five results, oldest first
pub type Form = [FormResult; 5];

pub const UNKNOWN_FORM: Form = [FormResult::Unknown; 5];

use FormResult::{Draw as E, Loss as D, Win as V};

const FORM_TABLE: &[(&str, Form)] = &[
    ("Real Madrid", [V, V, V, E, V]),
    ("FC Barcelona", [V, E, V, V, D]),
    ("Atletico Madrid", [V, V, E, V, E]),
    ("Real Sociedad", [E, D, V, V, E]),
    ("Athletic Bilbao", [V, E, V, D, V]),
    ("Real Betis", [V, V, D, E, V]),
    ("Villarreal CF", [E, V, E, V, E]),
    ("Sevilla FC", [V, E, V, D, E]),
    ("Osasuna", [E, V, D, V, V]),
    ("Valencia CF", [D, E, V, E, D]),
];

/// Look up a team's form.
///
/// An exact key wins; otherwise the first key (in table order) that
/// contains `team_name` or is contained in it. Matching is case-sensitive.
pub fn lookup_form(team_name: &str) -> Form {
    if team_name.is_empty() {
        return UNKNOWN_FORM;
    }

    FORM_TABLE
        .iter()
        .find(|(key, _)| *key == team_name)
        .or_else(|| {
            FORM_TABLE
                .iter()
                .find(|(key, _)| key.contains(team_name) || team_name.contains(key))
        })
        .map(|(_, form)| *form)
        .unwrap_or(UNKNOWN_FORM)
}

pub fn form_string(form: &Form) -> String {
    form.iter()
        .map(|r| r.symbol().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
