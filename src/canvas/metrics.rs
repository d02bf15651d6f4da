use super::{Font, Weight};

/// Advance widths of the printable ASCII range (space through tilde) in the
/// standard Helvetica font, in thousandths of an em
#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Same as [`HELVETICA`], for Helvetica-Bold
#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Width used for characters outside the table
const FALLBACK_WIDTH: u16 = 556;

/// Returns the width in points of `text` set in `font`
pub(crate) fn text_width(text: &str, font: Font) -> f64 {
    let table = match font.weight {
        Weight::Regular => &HELVETICA,
        Weight::Bold => &HELVETICA_BOLD,
    };
    let units = text
        .chars()
        .map(|ch| {
            u32::from(ch)
                .checked_sub(0x20)
                .and_then(|i| usize::try_from(i).ok())
                .and_then(|i| table.get(i))
                .copied()
                .unwrap_or(FALLBACK_WIDTH)
        })
        .map(u32::from)
        .sum::<u32>();
    f64::from(units) * font.size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_width() {
        // Four digits and a slash
        let w = text_width("03/02", Font::regular(7.0));
        assert!((w - (4.0 * 556.0 + 278.0) * 7.0 / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_bold_is_wider() {
        let label = "Week";
        assert!(text_width(label, Font::bold(10.0)) > text_width(label, Font::regular(10.0)));
    }

    #[test]
    fn test_empty() {
        assert!(text_width("", Font::regular(12.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_ascii_fallback() {
        let w = text_width("é", Font::regular(10.0));
        assert!((w - 5.56).abs() < 1e-9);
    }
}
