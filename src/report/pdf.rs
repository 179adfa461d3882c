// PDF report
//
// A4 portrait, one text line per 10 mm row, automatic page break above the
// 15 mm bottom margin. Each input line is word-wrapped to the printable
// width by Helvetica glyph metrics, so long lines flow onto extra rows.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use crate::errors::DocumentError;

const PT_TO_MM: f32 = 0.352_778;

/// Helvetica advance widths (1/1000 em) for ' ' through '~', from the AFM
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const LAYER_NAME: &str = "Layer 1";

/// Page geometry and font for the PDF report
#[derive(Debug, Clone, PartialEq)]
pub struct PdfStyle {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub side_margin_mm: f32,
    pub top_margin_mm: f32,
    pub bottom_margin_mm: f32,
    pub font_size_pt: f32,
    pub line_height_mm: f32,
    /// TrueType font file; built-in Helvetica when `None`
    pub font: Option<PathBuf>,
}

impl Default for PdfStyle {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            side_margin_mm: 10.0,
            top_margin_mm: 10.0,
            bottom_margin_mm: 15.0,
            font_size_pt: 11.0,
            line_height_mm: 10.0,
            font: None,
        }
    }
}

impl PdfStyle {
    pub fn with_font(mut self, font: Option<PathBuf>) -> Self {
        self.font = font;
        self
    }

    /// Printable width in em units of the configured font size
    pub fn line_width_em(&self) -> f32 {
        let printable = self.page_width_mm - 2.0 * self.side_margin_mm;
        printable / (self.font_size_pt * PT_TO_MM)
    }
}

/// Advance width of one glyph in em
///
/// Non-ASCII letters (accented Latin) take the width of a typical base
/// letter; other non-ASCII symbols a digit's width.
pub fn glyph_width_em(c: char) -> f32 {
    let units = match c {
        ' '..='~' => HELVETICA_WIDTHS[c as usize - ' ' as usize],
        c if c.is_uppercase() => 722,
        _ => 556,
    };
    f32::from(units) / 1000.0
}

pub fn text_width_em(text: &str) -> f32 {
    text.chars().map(glyph_width_em).sum()
}

/// Split one line into rows no wider than `max_width_em`
///
/// Breaks at spaces where possible; a word wider than a row is hard-split.
/// An empty line yields one empty row.
pub fn wrap_line(line: &str, max_width_em: f32) -> Vec<String> {
    let space = glyph_width_em(' ');
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for word in line.split(' ') {
        let word_width = text_width_em(word);
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + space + word_width
        };

        if needed <= max_width_em {
            if !current.is_empty() {
                current.push(' ');
                current_width += space;
            }
            current.push_str(word);
            current_width += word_width;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0.0;
        }

        for c in word.chars() {
            let w = glyph_width_em(c);
            if !current.is_empty() && current_width + w > max_width_em {
                rows.push(std::mem::take(&mut current));
                current_width = 0.0;
            }
            current.push(c);
            current_width += w;
        }
    }

    rows.push(current);
    rows
}

/// Render the report text as PDF bytes
pub fn render_pdf(text: &str, style: &PdfStyle) -> Result<Vec<u8>, DocumentError> {
    let width = Mm(style.page_width_mm);
    let height = Mm(style.page_height_mm);
    let (doc, page, layer) = PdfDocument::new("Relatório", width, height, LAYER_NAME);
    let font = load_font(&doc, style)?;

    let mut layer_ref = doc.get_page(page).get_layer(layer);
    let top = style.page_height_mm - style.top_margin_mm;
    let font_height_mm = style.font_size_pt * PT_TO_MM;
    let max_width = style.line_width_em();
    let mut cursor = top;
    let mut pages = 1;

    for line in text.split('\n') {
        for row in wrap_line(line, max_width) {
            if cursor - style.line_height_mm < style.bottom_margin_mm {
                let (page, layer) = doc.add_page(width, height, LAYER_NAME);
                layer_ref = doc.get_page(page).get_layer(layer);
                cursor = top;
                pages += 1;
            }

            // Vertically centre the glyphs in the row, like a text cell
            let baseline = cursor - (style.line_height_mm + font_height_mm * 0.7) / 2.0;
            if !row.is_empty() {
                layer_ref.use_text(
                    row,
                    style.font_size_pt,
                    Mm(style.side_margin_mm),
                    Mm(baseline),
                    &font,
                );
            }
            cursor -= style.line_height_mm;
        }
    }

    drop(layer_ref);
    tracing::debug!(pages, "Rendered PDF report");
    doc.save_to_bytes()
        .map_err(|e| DocumentError::PdfRender(e.to_string()))
}

fn load_font(doc: &PdfDocumentReference, style: &PdfStyle) -> Result<IndirectFontRef, DocumentError> {
    match &style.font {
        Some(path) => {
            let file = File::open(path).map_err(|e| DocumentError::Font {
                path: path.clone(),
                message: e.to_string(),
            })?;
            doc.add_external_font(BufReader::new(file))
                .map_err(|e| DocumentError::Font {
                    path: path.clone(),
                    message: e.to_string(),
                })
        }
        None => doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::PdfRender(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_width_default_style() {
        // 190 mm printable at 11 pt (3.88 mm per em)
        let width = PdfStyle::default().line_width_em();
        assert!(width > 48.9 && width < 49.0, "{width}");
    }

    #[test]
    fn test_glyph_widths() {
        assert_eq!(glyph_width_em(' '), 0.278);
        assert_eq!(glyph_width_em('W'), 0.944);
        assert_eq!(glyph_width_em('i'), 0.222);
        assert_eq!(glyph_width_em('~'), 0.584);
        assert_eq!(glyph_width_em('ç'), 0.556);
        assert_eq!(glyph_width_em('Ã'), 0.722);
    }

    #[test]
    fn test_wrap_short_and_empty_lines() {
        assert_eq!(wrap_line("curta", 10.0), vec!["curta"]);
        assert_eq!(wrap_line("", 10.0), vec![""]);
    }

    #[test]
    fn test_wrap_at_word_boundaries() {
        let rows = wrap_line("horas extras e adicional noturno devidos", 7.2);
        assert_eq!(rows, vec!["horas extras e", "adicional", "noturno devidos"]);
        assert!(rows.iter().all(|r| text_width_em(r) <= 7.2));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        // 'x' is exactly half an em
        let rows = wrap_line("ab xxxxxxxxxx", 2.0);
        assert_eq!(rows, vec!["ab", "xxxx", "xxxx", "xx"]);
    }

    #[test]
    fn test_capitals_wrap_sooner_than_lowercase() {
        assert_eq!(wrap_line("iiii iiii", 4.0), vec!["iiii iiii"]);
        assert_eq!(wrap_line("MMMM MMMM", 4.0), vec!["MMMM", "MMMM"]);
    }

    #[test]
    fn test_uppercase_rows_fit_printable_width() {
        let style = PdfStyle::default();
        let line = "RECLAMANTE WAGNER MOURA DA SILVA ".repeat(8);
        let rows = wrap_line(line.trim_end(), style.line_width_em());
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|r| text_width_em(r) <= style.line_width_em()));
    }

    #[test]
    fn test_render_pdf_header() {
        let bytes = render_pdf("Relatorio\n\nLinha dois", &PdfStyle::default()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_long_text_spills_onto_more_pages() {
        let short = render_pdf("x", &PdfStyle::default()).unwrap();
        let long_text = vec!["linha"; 200].join("\n");
        let long = render_pdf(&long_text, &PdfStyle::default()).unwrap();
        assert!(long.len() > short.len());
    }

    #[test]
    fn test_missing_font_is_error() {
        let style = PdfStyle::default().with_font(Some(PathBuf::from("/nonexistent/font.ttf")));
        assert!(matches!(render_pdf("x", &style), Err(DocumentError::Font { .. })));
    }
}
