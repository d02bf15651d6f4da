mod dates;
mod grid;
mod page;
mod weeks;
pub(crate) use self::dates::{next_monday, validate_monday, StartDate, DAYS_IN_WEEK, DAY_NAMES};
pub(crate) use self::grid::{ColumnSchema, GridGeometry, PageLayout};
pub(crate) use self::page::CalendarPage;
pub(crate) use self::weeks::generate_weeks;
