//! Layout-independent report model.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::table::Table;

pub const DEFAULT_FOOTER: &str = "Football Analytics Dashboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub heading: Option<String>,
    pub table: Table,
    /// Start the section on a fresh page
    pub new_page: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub title: String,
    pub subtitle: Option<String>,
    pub generated_at: DateTime<Local>,
    pub summary: Option<String>,
    pub orientation: Orientation,
    pub sections: Vec<Section>,
    pub footer: String,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>, orientation: Orientation) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            generated_at: Local::now(),
            summary: None,
            orientation,
            sections: Vec::new(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    /// Append a section. Tables without rows are dropped along with their heading.
    pub fn section(mut self, heading: Option<&str>, table: Table, new_page: bool) -> Self {
        if table.is_empty() {
            tracing::debug!(heading = heading.unwrap_or(""), "Skipping empty report section");
            return self;
        }
        self.sections.push(Section {
            heading: heading.map(String::from),
            table,
            new_page,
        });
        self
    }

    /// `Generado: dd/mm/YYYY HH:MM`
    pub fn timestamp_line(&self) -> String {
        format!("Generado: {}", self.generated_at.format("%d/%m/%Y %H:%M"))
    }
}

/// Kinds of report the CLI can produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportKind {
    Classification,
    Players,
    Full,
    Comparison { team1: String, team2: String },
}

impl ReportKind {
    pub fn file_name(&self) -> String {
        match self {
            ReportKind::Classification => "clasificacion_laliga.pdf".to_string(),
            ReportKind::Players => "analisis_jugadores.pdf".to_string(),
            ReportKind::Full => "reporte_completo.pdf".to_string(),
            ReportKind::Comparison { team1, team2 } => {
                format!("comparacion_{}_{}.pdf", file_safe(team1), file_safe(team2))
            }
        }
    }
}

/// Whitespace and path separators become underscores
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_whitespace() || c == '/' || c == '\\' || c == std::path::MAIN_SEPARATOR {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Write rendered bytes under `dir`, creating it if needed
pub fn write_pdf(dir: &Path, kind: &ReportKind, bytes: &[u8]) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(kind.file_name());
    std::fs::write(&path, bytes)?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "Report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_row() -> Table {
        Table {
            columns: vec!["a".into()],
            rows: vec![vec!["1".into()]],
        }
    }

    #[test]
    fn test_empty_sections_are_skipped() {
        let doc = ReportDocument::new("Title", Orientation::Portrait)
            .section(Some("Empty"), Table::default(), false)
            .section(Some("Full"), one_row(), true);
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].heading.as_deref(), Some("Full"));
        assert!(doc.sections[0].new_page);
    }

    #[test]
    fn test_timestamp_format() {
        let doc = ReportDocument::new("Title", Orientation::Portrait);
        let line = doc.timestamp_line();
        // "Generado: " + "dd/mm/YYYY HH:MM"
        assert_eq!(line.len(), 10 + 16);
        assert_eq!(&line[12..13], "/");
        assert_eq!(&line[15..16], "/");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ReportKind::Classification.file_name(), "clasificacion_laliga.pdf");
        assert_eq!(ReportKind::Players.file_name(), "analisis_jugadores.pdf");
        assert_eq!(ReportKind::Full.file_name(), "reporte_completo.pdf");
        let cmp = ReportKind::Comparison {
            team1: "Real Madrid".into(),
            team2: "Osasuna".into(),
        };
        assert_eq!(cmp.file_name(), "comparacion_Real_Madrid_Osasuna.pdf");
    }

    #[test]
    fn test_write_pdf_creates_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let out = dir.path().join("reports");
        let path = write_pdf(&out, &ReportKind::Full, b"%PDF-1.3").unwrap();
        assert_eq!(path, out.join("reporte_completo.pdf"));
        assert_eq!(std::fs::read(path).unwrap(), b"%PDF-1.3");
    }
}
