use super::dates::{StartDate, DAYS_IN_WEEK, WEEKS_PER_CALENDAR};
use std::iter::successors;
use std::ops::Index;
use time::Date;

/// Seven consecutive dates, Monday first
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WeekDates([Date; DAYS_IN_WEEK]);

impl WeekDates {
    // `monday` must be followed by six representable days
    fn starting(monday: Date) -> WeekDates {
        let mut days = [monday; DAYS_IN_WEEK];
        for (slot, d) in days.iter_mut().zip(iter_days_from(monday)) {
            *slot = d;
        }
        WeekDates(days)
    }

    pub(crate) fn first(&self) -> Date {
        self.0[0]
    }

    pub(crate) fn last(&self) -> Date {
        self.0[DAYS_IN_WEEK - 1]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, Date> {
        self.0.iter()
    }
}

impl Index<usize> for WeekDates {
    type Output = Date;

    fn index(&self, day: usize) -> &Date {
        &self.0[day]
    }
}

impl<'a> IntoIterator for &'a WeekDates {
    type Item = &'a Date;
    type IntoIter = std::slice::Iter<'a, Date>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ten contiguous weeks starting on a [`StartDate`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct CalendarMatrix([WeekDates; WEEKS_PER_CALENDAR]);

impl CalendarMatrix {
    pub(crate) fn first_day(&self) -> Date {
        self.0[0].first()
    }

    pub(crate) fn last_day(&self) -> Date {
        self.0[WEEKS_PER_CALENDAR - 1].last()
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, WeekDates> {
        self.0.iter()
    }
}

impl Index<usize> for CalendarMatrix {
    type Output = WeekDates;

    fn index(&self, week: usize) -> &WeekDates {
        &self.0[week]
    }
}

impl<'a> IntoIterator for &'a CalendarMatrix {
    type Item = &'a WeekDates;
    type IntoIter = std::slice::Iter<'a, WeekDates>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lays out the ten weeks beginning at `start`
pub(crate) fn generate_weeks(start: StartDate) -> CalendarMatrix {
    let mut weeks = [WeekDates::starting(start.date()); WEEKS_PER_CALENDAR];
    let mondays = successors(Some(start.date()), |&d| d.next_day()).step_by(DAYS_IN_WEEK);
    for (week, monday) in weeks.iter_mut().zip(mondays) {
        *week = WeekDates::starting(monday);
    }
    CalendarMatrix(weeks)
}

fn iter_days_from(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}
