use crate::canvas::{Font, Rgb};

/// Fill for every cell of the header row (light blue)
pub(crate) const HEADER_FILL: Rgb = Rgb::new(173, 216, 230);

/// Fill for the week-number cells (peach)
pub(crate) const WEEK_NUMBER_FILL: Rgb = Rgb::new(255, 218, 185);

pub(crate) const HEADER_FONT: Font = Font::bold(10.0);

pub(crate) const WEEK_NUMBER_FONT: Font = Font::regular(10.0);

pub(crate) const DATE_FONT: Font = Font::regular(7.0);

pub(crate) const DAY_LABEL_FONT: Font = Font::regular(9.0);

pub(crate) const TOTALS_FONT: Font = Font::regular(8.0);

pub(crate) mod day {
    /// Distance from the top of a day cell to the top of its date line
    pub(crate) const DATE_TOP: f64 = 5.0;

    pub(crate) const DATE_HEIGHT: f64 = 5.0;

    /// Gap between the right edge of a day cell and the date's text box
    pub(crate) const DATE_RIGHT_INSET: f64 = 1.0;
}

pub(crate) mod totals {
    /// Horizontal inset of the totals lines on either side
    pub(crate) const SIDE_INSET: f64 = 2.0;
}
