use super::dates::{DAYS_IN_WEEK, DAY_NAMES, WEEKS_PER_CALENDAR};
use crate::canvas::Rect;

/// Points per inch
const PT_PER_IN: f64 = 72.0;

/// Fixed page dimensions in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct PageLayout {
    pub(crate) width: f64,
    pub(crate) height: f64,
    /// Blank space on every side of the grid
    pub(crate) margin: f64,
    /// Height of the row of column labels
    pub(crate) header_height: f64,
}

impl PageLayout {
    /// US letter, landscape
    pub(crate) const LETTER_LANDSCAPE: PageLayout = PageLayout {
        width: 11.0 * PT_PER_IN,
        height: 8.5 * PT_PER_IN,
        margin: 20.0,
        header_height: 20.0,
    };

    pub(crate) fn usable_width(&self) -> f64 {
        2.0f64.mul_add(-self.margin, self.width)
    }

    pub(crate) fn usable_height(&self) -> f64 {
        2.0f64.mul_add(-self.margin, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Column {
    pub(crate) label: &'static str,
    pub(crate) relative_width: f64,
}

/// The week-number column, one column per weekday, and an optional totals
/// column, with widths given relative to each other
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ColumnSchema {
    columns: Vec<Column>,
    has_totals: bool,
}

impl ColumnSchema {
    pub(crate) fn new(week_width: f64, day_width: f64, totals_width: Option<f64>) -> ColumnSchema {
        assert!(
            week_width > 0.0 && day_width > 0.0 && totals_width.is_none_or(|w| w > 0.0),
            "column widths must be positive"
        );
        let mut columns = Vec::with_capacity(DAYS_IN_WEEK + 2);
        columns.push(Column {
            label: "Week",
            relative_width: week_width,
        });
        columns.extend(DAY_NAMES.iter().map(|&label| Column {
            label,
            relative_width: day_width,
        }));
        if let Some(w) = totals_width {
            columns.push(Column {
                label: "TOTAL",
                relative_width: w,
            });
        }
        ColumnSchema {
            columns,
            has_totals: totals_width.is_some(),
        }
    }

    pub(crate) fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn has_totals(&self) -> bool {
        self.has_totals
    }

    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }

    pub(crate) fn total_relative_width(&self) -> f64 {
        self.columns.iter().map(|c| c.relative_width).sum()
    }
}

/// Absolute positions of every grid column and row on a page
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct GridGeometry {
    page: PageLayout,
    xs: Vec<f64>,
    widths: Vec<f64>,
    row_height: f64,
}

impl GridGeometry {
    /// Scales `schema` so that its columns exactly span the usable width of
    /// `page`, and splits the height left under the header into equal week
    /// rows
    pub(crate) fn compute(schema: &ColumnSchema, page: PageLayout) -> GridGeometry {
        let scale = page.usable_width() / schema.total_relative_width();
        let widths = schema
            .columns()
            .iter()
            .map(|c| c.relative_width * scale)
            .collect::<Vec<_>>();
        let xs = widths
            .iter()
            .scan(page.margin, |x, &w| {
                let left = *x;
                *x += w;
                Some(left)
            })
            .collect::<Vec<_>>();
        let row_height = (page.usable_height() - page.header_height) / rows_f64();
        GridGeometry {
            page,
            xs,
            widths,
            row_height,
        }
    }

    pub(crate) fn column_count(&self) -> usize {
        self.widths.len()
    }

    pub(crate) fn column_x(&self, column: usize) -> f64 {
        self.xs[column]
    }

    pub(crate) fn column_width(&self, column: usize) -> f64 {
        self.widths[column]
    }

    pub(crate) fn header_height(&self) -> f64 {
        self.page.header_height
    }

    pub(crate) fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Top edge of week row `week` (0-based)
    pub(crate) fn row_top(&self, week: u16) -> f64 {
        f64::from(week).mul_add(self.row_height, self.page.margin + self.header_height())
    }

    pub(crate) fn header_cell(&self, column: usize) -> Rect {
        Rect::new(
            self.column_x(column),
            self.page.margin,
            self.column_width(column),
            self.header_height(),
        )
    }

    pub(crate) fn cell(&self, column: usize, week: u16) -> Rect {
        Rect::new(
            self.column_x(column),
            self.row_top(week),
            self.column_width(column),
            self.row_height,
        )
    }
}

fn rows_f64() -> f64 {
    let rows = u16::try_from(WEEKS_PER_CALENDAR).expect("week count should fit in a u16");
    f64::from(rows)
}
