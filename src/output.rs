//! Terminal rendering of tables.

use serde::Serialize;

use crate::table::Table;

/// Left-aligned text table with a dashed rule under the header
pub fn format_table(table: &Table) -> String {
    if table.columns.is_empty() {
        return String::new();
    }
    if table.is_empty() {
        return "(no rows)\n".to_string();
    }

    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.chars().count()).collect();
    for row in &table.rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:<w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&render_row(&table.columns));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    out.push('\n');
    for row in &table.rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_align() {
        let table = Table {
            columns: vec!["equipo".into(), "pts".into()],
            rows: vec![
                vec!["Real Madrid".into(), "65".into()],
                vec!["Osasuna".into(), "42".into()],
            ],
        };
        let text = format_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "equipo       pts");
        assert_eq!(lines[1], "-----------  ---");
        assert_eq!(lines[2], "Real Madrid  65");
        assert_eq!(lines[3], "Osasuna      42");
    }

    #[test]
    fn test_empty_table() {
        let table = Table {
            columns: vec!["a".into()],
            rows: vec![],
        };
        assert_eq!(format_table(&table), "(no rows)\n");
        assert_eq!(format_table(&Table::default()), "");
    }
}
