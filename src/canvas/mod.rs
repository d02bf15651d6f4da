mod metrics;
mod pdf;
pub(crate) use self::metrics::text_width;
pub(crate) use self::pdf::{PdfCanvas, PdfError};

/// An axis-aligned box in points, measured from the top-left corner of the
/// page with `y` growing downwards
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Rect {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Rect {
    pub(crate) const fn new(x: f64, y: f64, width: f64, height: f64) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub(crate) fn right(&self) -> f64 {
        self.x + self.width
    }

    pub(crate) fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Shrinks the box by `left` and `right` points horizontally and `top`
    /// points from above
    pub(crate) fn inset(self, left: f64, right: f64, top: f64) -> Rect {
        Rect::new(
            self.x + left,
            self.y + top,
            self.width - left - right,
            self.height - top,
        )
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum RectStyle {
    /// Outline only
    Stroke,
    /// Filled with the given color, then outlined
    FillStroke(Rgb),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Align {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Weight {
    Regular,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Font {
    pub(crate) weight: Weight,
    /// Size in points
    pub(crate) size: f64,
}

impl Font {
    pub(crate) const fn regular(size: f64) -> Font {
        Font {
            weight: Weight::Regular,
            size,
        }
    }

    pub(crate) const fn bold(size: f64) -> Font {
        Font {
            weight: Weight::Bold,
            size,
        }
    }
}

/// Horizontal gap between a text box's edge and left- or right-aligned text
pub(crate) const TEXT_PADDING: f64 = 72.0 / 25.4;

/// Fraction of the font size by which a vertically centered baseline sits
/// below the middle of its box
const BASELINE_DROP: f64 = 0.3;

/// Places `width` points of text inside `rect` and returns the baseline
/// origin.  Text wider than the box is not wrapped or clipped; it simply
/// runs past the box edges.
pub(crate) fn text_origin(rect: Rect, width: f64, align: Align, font: Font) -> (f64, f64) {
    let x = match align {
        Align::Left => rect.x + TEXT_PADDING,
        Align::Center => rect.x + (rect.width - width) / 2.0,
        Align::Right => rect.right() - TEXT_PADDING - width,
    };
    let y = BASELINE_DROP.mul_add(font.size, rect.y + rect.height / 2.0);
    (x, y)
}

/// The drawing capability a calendar page is rendered onto
pub(crate) trait Canvas {
    fn draw_rect(&mut self, rect: Rect, style: RectStyle);

    fn draw_text(&mut self, rect: Rect, text: &str, align: Align, font: Font);
}

/// A recorded [`Canvas`] call
#[cfg(test)]
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DrawCommand {
    Rect {
        rect: Rect,
        style: RectStyle,
    },
    Text {
        rect: Rect,
        text: String,
        align: Align,
        font: Font,
    },
}

#[cfg(test)]
impl DrawCommand {
    pub(crate) fn rect(&self) -> Rect {
        match self {
            DrawCommand::Rect { rect, .. } | DrawCommand::Text { rect, .. } => *rect,
        }
    }

    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            DrawCommand::Rect { .. } => None,
        }
    }
}

/// Records commands in the order they are issued
#[cfg(test)]
impl Canvas for Vec<DrawCommand> {
    fn draw_rect(&mut self, rect: Rect, style: RectStyle) {
        self.push(DrawCommand::Rect { rect, style });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, align: Align, font: Font) {
        self.push(DrawCommand::Text {
            rect,
            text: text.to_owned(),
            align,
            font,
        });
    }
}
