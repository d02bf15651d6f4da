use super::{text_origin, text_width, Align, Canvas, Font, Rect, RectStyle, Rgb, Weight};
use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
    Pt, Rect as PdfRect, Rgb as PdfRgb,
};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;
use thiserror::Error;

const LINE_COLOR: Rgb = Rgb::new(0, 0, 0);

const TEXT_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Stroke width in points
const LINE_THICKNESS: f64 = 0.567;

/// A single-page PDF document that draw commands are replayed onto
pub(crate) struct PdfCanvas {
    title: String,
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    page_height: f64,
}

impl PdfCanvas {
    /// Creates a document with one page of `width` × `height` points
    pub(crate) fn new(title: &str, width: f64, height: f64) -> Result<PdfCanvas, PdfError> {
        let (doc, page, layer) = PdfDocument::new(title, mm(width), mm(height), "Calendar");
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PdfError::Font(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::Font(e.to_string()))?;
        layer.set_outline_color(color(LINE_COLOR));
        layer.set_outline_thickness(points(LINE_THICKNESS));
        Ok(PdfCanvas {
            title: title.to_owned(),
            doc,
            layer,
            regular,
            bold,
            page_height: height,
        })
    }

    pub(crate) fn save(self, path: &Path) -> Result<(), PdfError> {
        let file = File::create(path).map_err(PdfError::Create)?;
        self.doc
            .save(&mut BufWriter::new(file))
            .map_err(|e| PdfError::Write(e.to_string()))
    }

    fn font(&self, weight: Weight) -> &IndirectFontRef {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }

    // PDF puts the origin at the bottom-left corner
    fn flip(&self, y: f64) -> f64 {
        self.page_height - y
    }
}

impl Canvas for PdfCanvas {
    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        let mode = match style {
            RectStyle::Stroke => PaintMode::Stroke,
            RectStyle::FillStroke(fill) => {
                self.layer.set_fill_color(color(fill));
                PaintMode::FillStroke
            }
        };
        let shape = PdfRect::new(
            mm(rect.x),
            mm(self.flip(rect.bottom())),
            mm(rect.right()),
            mm(self.flip(rect.y)),
        )
        .with_mode(mode);
        self.layer.add_rect(shape);
    }

    fn draw_text(&mut self, rect: Rect, text: &str, align: Align, font: Font) {
        if text.is_empty() {
            return;
        }
        let (x, y) = text_origin(rect, text_width(text, font), align, font);
        self.layer.set_fill_color(color(TEXT_COLOR));
        self.layer.use_text(
            text,
            points(font.size),
            mm(x),
            mm(self.flip(y)),
            self.font(font.weight),
        );
    }
}

impl fmt::Debug for PdfCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PdfCanvas")
            .field("title", &self.title)
            .field("page_height", &self.page_height)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Error)]
pub(crate) enum PdfError {
    #[error("failed to load font: {0}")]
    Font(String),
    #[error("failed to create file")]
    Create(#[source] io::Error),
    #[error("failed to write PDF: {0}")]
    Write(String),
}

// printpdf measures in f32; page coordinates never come near its limits.
#[allow(clippy::cast_possible_truncation)]
fn points(value: f64) -> f32 {
    value as f32
}

fn mm(value: f64) -> Mm {
    Mm::from(Pt(points(value)))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(PdfRgb::new(
        f32::from(rgb.r) / 255.0,
        f32::from(rgb.g) / 255.0,
        f32::from(rgb.b) / 255.0,
        None,
    ))
}
