//! Uniform tabular view over the typed row records.
//!
//! Row types keep their own fields; `Tabular` exposes them as named string
//! cells so the CLI and the report generator can lay out any of them.

use serde::Serialize;

pub trait Tabular {
    /// Internal field names, one per cell, in display order.
    fn columns() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// A rendered table: header names plus string cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows<T: Tabular>(rows: &[T]) -> Self {
        Self {
            columns: T::columns().iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(Tabular::cells).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the wanted columns that exist, in the wanted order.
    pub fn select(&self, wanted: &[&str]) -> Self {
        let indices: Vec<usize> = wanted
            .iter()
            .filter_map(|w| self.columns.iter().position(|c| c == w))
            .collect();

        Self {
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
            rows: self
                .rows
                .iter()
                .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
                .collect(),
        }
    }

    /// Replace headers with display labels, truncating the label list to the
    /// number of columns present. Extra columns keep their internal name.
    pub fn relabel(mut self, labels: &[&str]) -> Self {
        for (column, label) in self.columns.iter_mut().zip(labels) {
            *column = label.to_string();
        }
        self
    }

    pub fn head(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }
}

/// Format a float the way the tables show it: integral values keep one decimal.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

pub fn fmt_opt<T: ToString>(value: &Option<T>) -> String {
    value
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_else(|| "-".to_string())
}
