use super::dates::format_short;
use super::grid::{ColumnSchema, GridGeometry};
use super::weeks::{CalendarMatrix, WeekDates};
use crate::canvas::{Align, Canvas, Rect, RectStyle};
use crate::theme::{
    self, DATE_FONT, DAY_LABEL_FONT, HEADER_FILL, HEADER_FONT, TOTALS_FONT, WEEK_NUMBER_FILL,
    WEEK_NUMBER_FONT,
};
use crate::variant::CellContent;

/// Index of the week-number column
const WEEK_COLUMN: usize = 0;

/// Index of the first (Monday) day column
const FIRST_DAY_COLUMN: usize = 1;

/// One page of a tracking calendar: the header row followed by a row for
/// each week
#[derive(Clone, Copy, Debug)]
pub(crate) struct CalendarPage<'a> {
    weeks: &'a CalendarMatrix,
    schema: &'a ColumnSchema,
    content: &'a CellContent,
}

impl<'a> CalendarPage<'a> {
    pub(crate) fn new(
        weeks: &'a CalendarMatrix,
        schema: &'a ColumnSchema,
        content: &'a CellContent,
    ) -> CalendarPage<'a> {
        CalendarPage {
            weeks,
            schema,
            content,
        }
    }

    pub(crate) fn render<C: Canvas>(&self, geometry: &GridGeometry, canvas: &mut C) {
        let mut painter = GridPainter::new(geometry, canvas);
        painter.draw_header(self.schema);
        for (i, week) in std::iter::zip(0u16.., self.weeks) {
            painter.draw_week_number(i);
            painter.draw_days(i, week, self.content);
            if self.schema.has_totals() {
                painter.draw_totals(i, &self.content.total_lines(i));
            }
        }
    }
}

#[derive(Debug)]
struct GridPainter<'a, C> {
    geometry: &'a GridGeometry,
    canvas: &'a mut C,
}

impl<'a, C: Canvas> GridPainter<'a, C> {
    fn new(geometry: &'a GridGeometry, canvas: &'a mut C) -> Self {
        GridPainter { geometry, canvas }
    }

    fn draw_header(&mut self, schema: &ColumnSchema) {
        for (i, column) in schema.columns().iter().enumerate() {
            let rect = self.geometry.header_cell(i);
            self.canvas.draw_rect(rect, RectStyle::FillStroke(HEADER_FILL));
            self.canvas.draw_text(rect, column.label, Align::Center, HEADER_FONT);
        }
    }

    // Weeks are numbered from 1 on the page
    fn draw_week_number(&mut self, week: u16) {
        let rect = self.geometry.cell(WEEK_COLUMN, week);
        self.canvas.draw_rect(rect, RectStyle::FillStroke(WEEK_NUMBER_FILL));
        self.canvas.draw_text(
            rect,
            &(week + 1).to_string(),
            Align::Center,
            WEEK_NUMBER_FONT,
        );
    }

    fn draw_days(&mut self, week: u16, dates: &WeekDates, content: &CellContent) {
        for (day, &date) in dates.iter().enumerate() {
            let rect = self.geometry.cell(FIRST_DAY_COLUMN + day, week);
            self.canvas.draw_rect(rect, RectStyle::Stroke);
            let date_box = Rect::new(
                rect.x,
                rect.y + theme::day::DATE_TOP,
                rect.width - theme::day::DATE_RIGHT_INSET,
                theme::day::DATE_HEIGHT,
            );
            self.canvas.draw_text(date_box, &format_short(date), Align::Right, DATE_FONT);
            if let Some(label) = content.day_label(day) {
                let label_box = rect.inset(0.0, 0.0, theme::day::DATE_TOP);
                self.canvas.draw_text(label_box, label, Align::Center, DAY_LABEL_FONT);
            }
        }
    }

    fn draw_totals(&mut self, week: u16, lines: &[String]) {
        let column = self.geometry.column_count() - 1;
        let rect = self.geometry.cell(column, week);
        self.canvas.draw_rect(rect, RectStyle::Stroke);
        let Ok(count) = u16::try_from(lines.len()) else {
            return;
        };
        if count == 0 {
            return;
        }
        let line_height = rect.height / f64::from(count);
        let inset = theme::totals::SIDE_INSET;
        for (i, line) in std::iter::zip(0u16.., lines) {
            let line_box = Rect::new(
                rect.x + inset,
                f64::from(i).mul_add(line_height, rect.y),
                2.0f64.mul_add(-inset, rect.width),
                line_height,
            );
            self.canvas.draw_text(line_box, line, Align::Left, TOTALS_FONT);
        }
    }
}
