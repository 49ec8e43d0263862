//! PDF rendering of a [`ReportDocument`] with printpdf.
//!
//! Layout is a single top-down cursor: text blocks and table rows move it
//! down, and a row that would cross the bottom margin opens a new page
//! where the header row is drawn again.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Rect, Rgb,
};

use super::document::{Orientation, ReportDocument, Section};
use crate::error::Result;
use crate::table::Table;

const A4_SHORT: f32 = 210.0;
const A4_LONG: f32 = 297.0;
const MARGIN_X: f32 = 15.0;
const MARGIN_Y: f32 = 20.0;

const TITLE_SIZE: f32 = 20.0;
const HEADING_SIZE: f32 = 14.0;
const NORMAL_SIZE: f32 = 10.0;
const SMALL_SIZE: f32 = 8.0;
const HEADER_CELL_SIZE: f32 = 9.0;

const HEADER_ROW_HEIGHT: f32 = 8.0;
const BODY_ROW_HEIGHT: f32 = 6.5;
const CELL_PADDING: f32 = 1.5;
const GRID_THICKNESS: f32 = 0.5;

const PT_TO_MM: f32 = 0.3528;
/// Average Helvetica glyph width as a fraction of the font size
const AVG_GLYPH_WIDTH: f32 = 0.5;

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        None,
    ))
}

fn accent() -> Color {
    rgb(0x1E, 0x88, 0xE5)
}

/// Estimated rendered width in mm
pub fn text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * PT_TO_MM * AVG_GLYPH_WIDTH
}

/// Shorten `text` with a trailing ".." until it fits `width` mm
pub fn fit_text(text: &str, width: f32, size: f32) -> String {
    if text_width(text, size) <= width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate: String = chars.iter().collect::<String>() + "..";
        if text_width(&candidate, size) <= width {
            return candidate;
        }
    }
    String::new()
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

struct Renderer {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    fonts: Fonts,
    width: f32,
    height: f32,
    /// Distance of the cursor from the bottom edge, in mm
    y: f32,
    pages: usize,
    header_rows: usize,
}

impl Renderer {
    fn new(title: &str, orientation: Orientation) -> Result<Self> {
        let (width, height) = match orientation {
            Orientation::Portrait => (A4_SHORT, A4_LONG),
            Orientation::Landscape => (A4_LONG, A4_SHORT),
        };
        let (doc, page, layer) = PdfDocument::new(title, Mm(width), Mm(height), "Layer 1");
        let fonts = Fonts {
            regular: doc.add_builtin_font(BuiltinFont::Helvetica)?,
            bold: doc.add_builtin_font(BuiltinFont::HelveticaBold)?,
        };
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            fonts,
            width,
            height,
            y: height - MARGIN_Y,
            pages: 1,
            header_rows: 0,
        })
    }

    fn content_width(&self) -> f32 {
        self.width - 2.0 * MARGIN_X
    }

    fn new_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(self.width), Mm(self.height), format!("Layer {}", self.pages + 1));
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = self.height - MARGIN_Y;
        self.pages += 1;
    }

    /// Open a new page unless `needed` mm remain above the bottom margin
    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < MARGIN_Y {
            self.new_page();
        }
    }

    fn line(&mut self, text: &str, size: f32, bold: bool, color: Color, centered: bool) {
        let line_height = size * PT_TO_MM * 1.4;
        self.ensure_space(line_height);
        self.y -= line_height;

        let text = fit_text(text, self.content_width(), size);
        let x = if centered {
            (self.width - text_width(&text, size)) / 2.0
        } else {
            MARGIN_X
        };
        let font = if bold { &self.fonts.bold } else { &self.fonts.regular };
        self.layer.set_fill_color(color);
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn gap(&mut self, mm: f32) {
        self.y -= mm;
    }

    fn section(&mut self, section: &Section) {
        if section.new_page {
            self.new_page();
        }
        if let Some(heading) = &section.heading {
            // Keep the heading with the header row and the first data row
            self.ensure_space(HEADING_SIZE * PT_TO_MM * 1.4 + HEADER_ROW_HEIGHT + BODY_ROW_HEIGHT + 6.0);
            self.gap(6.0);
            self.line(heading, HEADING_SIZE, true, rgb(0x42, 0x42, 0x42), false);
            self.gap(3.0);
        }
        self.table(&section.table);
        self.gap(6.0);
    }

    fn table(&mut self, table: &Table) {
        if table.columns.is_empty() {
            return;
        }
        let col_width = self.content_width() / table.columns.len() as f32;

        self.ensure_space(HEADER_ROW_HEIGHT + BODY_ROW_HEIGHT);
        self.header_row(&table.columns, col_width);

        for (i, row) in table.rows.iter().enumerate() {
            if self.y - BODY_ROW_HEIGHT < MARGIN_Y {
                self.new_page();
                self.header_row(&table.columns, col_width);
            }
            let shade = if i % 2 == 0 { rgb(0xFF, 0xFF, 0xFF) } else { rgb(0xF5, 0xF5, 0xF5) };
            self.row(row, col_width, BODY_ROW_HEIGHT, shade, SMALL_SIZE, false, rgb(0, 0, 0));
        }
    }

    fn header_row(&mut self, columns: &[String], col_width: f32) {
        self.header_rows += 1;
        self.row(columns, col_width, HEADER_ROW_HEIGHT, accent(), HEADER_CELL_SIZE, true, rgb(0xFF, 0xFF, 0xFF));
    }

    #[allow(clippy::too_many_arguments)]
    fn row(
        &mut self,
        cells: &[String],
        col_width: f32,
        height: f32,
        background: Color,
        size: f32,
        bold: bool,
        text_color: Color,
    ) {
        let top = self.y;
        let bottom = top - height;

        self.layer.set_fill_color(background);
        self.layer.set_outline_color(rgb(0xBD, 0xBD, 0xBD));
        self.layer.set_outline_thickness(GRID_THICKNESS);
        for i in 0..cells.len() {
            let left = MARGIN_X + i as f32 * col_width;
            let rect = Rect::new(Mm(left), Mm(bottom), Mm(left + col_width), Mm(top))
                .with_mode(PaintMode::FillStroke);
            self.layer.add_rect(rect);
        }

        let font = if bold { &self.fonts.bold } else { &self.fonts.regular };
        let baseline = bottom + (height - size * PT_TO_MM) / 2.0 + 0.5;
        self.layer.set_fill_color(text_color);
        for (i, cell) in cells.iter().enumerate() {
            let text = fit_text(cell, col_width - 2.0 * CELL_PADDING, size);
            let left = MARGIN_X + i as f32 * col_width;
            let x = left + (col_width - text_width(&text, size)) / 2.0;
            self.layer.use_text(text, size, Mm(x), Mm(baseline), font);
        }

        self.y = bottom;
    }

    fn finish(self) -> Result<Vec<u8>> {
        tracing::debug!(pages = self.pages, header_rows = self.header_rows, "PDF layout complete");
        Ok(self.doc.save_to_bytes()?)
    }
}

/// Render the document to PDF bytes
pub fn render(document: &ReportDocument) -> Result<Vec<u8>> {
    let mut r = Renderer::new(&document.title, document.orientation)?;

    r.line(&document.title, TITLE_SIZE, true, accent(), true);
    if let Some(subtitle) = &document.subtitle {
        r.gap(2.0);
        r.line(subtitle, HEADING_SIZE, true, rgb(0x42, 0x42, 0x42), true);
    }
    r.gap(2.0);
    r.line(&document.timestamp_line(), SMALL_SIZE, false, rgb(0x80, 0x80, 0x80), true);
    r.gap(6.0);

    if let Some(summary) = &document.summary {
        r.line(summary, NORMAL_SIZE, false, rgb(0x21, 0x21, 0x21), false);
        r.gap(4.0);
    }

    for section in &document.sections {
        r.section(section);
    }

    r.gap(8.0);
    r.line(&document.footer, SMALL_SIZE, false, rgb(0x80, 0x80, 0x80), true);

    r.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(rows: usize) -> Table {
        Table {
            columns: vec!["posicion".into(), "equipo".into(), "pts".into()],
            rows: (0..rows)
                .map(|i| vec![(i + 1).to_string(), format!("Team {}", i), (rows - i).to_string()])
                .collect(),
        }
    }

    #[test]
    fn test_fit_text() {
        assert_eq!(fit_text("Osasuna", 100.0, 8.0), "Osasuna");
        let short = fit_text("Ramon Sanchez-Pizjuan Stadium Extended Name", 20.0, 8.0);
        assert!(short.ends_with(".."));
        assert!(text_width(&short, 8.0) <= 20.0);
        assert_eq!(fit_text("abc", 0.0, 8.0), "");
    }

    #[test]
    fn test_empty_document_is_valid_pdf() {
        let doc = ReportDocument::new("La Liga - Clasificacion", Orientation::Portrait)
            .section(Some("Tabla de Posiciones"), Table::default(), false);
        let bytes = render(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_table_paginates() {
        let doc = ReportDocument::new("Long", Orientation::Landscape)
            .with_summary("Many rows")
            .section(Some("Rows"), numbered(120), false);
        let mut r = Renderer::new(&doc.title, doc.orientation).unwrap();
        r.table(&doc.sections[0].table);
        assert!(r.pages > 1);
        assert!(r.y >= MARGIN_Y);
        // Column headers open every page the table spans
        assert_eq!(r.header_rows, r.pages);

        let bytes = render(&doc).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_page_break_before_section() {
        let doc = ReportDocument::new("Breaks", Orientation::Portrait)
            .section(None, numbered(2), false)
            .section(Some("Next"), numbered(2), true);
        let mut r = Renderer::new(&doc.title, doc.orientation).unwrap();
        for section in &doc.sections {
            r.section(section);
        }
        assert_eq!(r.pages, 2);
    }
}
