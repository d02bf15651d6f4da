use crate::calendar::{ColumnSchema, DAYS_IN_WEEK};
use std::fmt;
use std::num::NonZeroU32;

const WEEK_WIDTH: f64 = 40.0;

const TRACKER_DAY_WIDTH: f64 = 90.0;

const TRACKER_TOTALS_WIDTH: f64 = 80.0;

const WORKOUT_DAY_WIDTH: f64 = 100.0;

static PROJECT_HOURS_LINES: &[&str] = &["Hours This Week:", "Debt:"];

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) enum VariantKind {
    PagesRead,
    ProjectHours,
    Workouts,
}

impl VariantKind {
    pub(crate) const ALL: [VariantKind; 3] = [
        VariantKind::PagesRead,
        VariantKind::ProjectHours,
        VariantKind::Workouts,
    ];

    /// Output file name without its extension; also the document title
    pub(crate) fn file_stem(self) -> &'static str {
        match self {
            VariantKind::PagesRead => "Pages Read",
            VariantKind::ProjectHours => "Project Hours",
            VariantKind::Workouts => "Workouts",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// One label per weekday, Monday first, shown in every week
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct DailyLabels([String; DAYS_IN_WEEK]);

impl DailyLabels {
    pub(crate) fn new(labels: [String; DAYS_IN_WEEK]) -> DailyLabels {
        DailyLabels(labels)
    }

    pub(crate) fn get(&self, day: usize) -> Option<&str> {
        self.0.get(day).map(String::as_str)
    }
}

/// What gets written inside the cells beyond the dates
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CellContent {
    /// `Goal: N` and a blank `Actual:` in every totals cell
    PerWeekGoal(NonZeroU32),
    /// The same lines in every totals cell
    PerWeekFixed(&'static [&'static str]),
    /// A label for each weekday, repeated every week
    DailyLabels(DailyLabels),
}

impl CellContent {
    /// Lines for the totals cell of week `week` (0-based)
    pub(crate) fn total_lines(&self, _week: u16) -> Vec<String> {
        match self {
            CellContent::PerWeekGoal(goal) => vec![format!("Goal: {goal}"), "Actual:".to_owned()],
            CellContent::PerWeekFixed(lines) => lines.iter().map(|&s| s.to_owned()).collect(),
            CellContent::DailyLabels(_) => Vec::new(),
        }
    }

    /// Label to center in day `day` (0 = Monday) of every week
    pub(crate) fn day_label(&self, day: usize) -> Option<&str> {
        match self {
            CellContent::DailyLabels(labels) => labels.get(day),
            CellContent::PerWeekGoal(_) | CellContent::PerWeekFixed(_) => None,
        }
    }
}

/// A calendar variant together with the user input it is drawn from
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Variant {
    PagesRead { goal: NonZeroU32 },
    ProjectHours,
    Workouts { labels: DailyLabels },
}

impl Variant {
    pub(crate) fn kind(&self) -> VariantKind {
        match self {
            Variant::PagesRead { .. } => VariantKind::PagesRead,
            Variant::ProjectHours => VariantKind::ProjectHours,
            Variant::Workouts { .. } => VariantKind::Workouts,
        }
    }

    pub(crate) fn schema(&self) -> ColumnSchema {
        match self {
            Variant::PagesRead { .. } | Variant::ProjectHours => {
                ColumnSchema::new(WEEK_WIDTH, TRACKER_DAY_WIDTH, Some(TRACKER_TOTALS_WIDTH))
            }
            Variant::Workouts { .. } => ColumnSchema::new(WEEK_WIDTH, WORKOUT_DAY_WIDTH, None),
        }
    }

    pub(crate) fn content(&self) -> CellContent {
        match self {
            Variant::PagesRead { goal } => CellContent::PerWeekGoal(*goal),
            Variant::ProjectHours => CellContent::PerWeekFixed(PROJECT_HOURS_LINES),
            Variant::Workouts { labels } => CellContent::DailyLabels(labels.clone()),
        }
    }

    pub(crate) fn file_name(&self) -> String {
        format!("{}.pdf", self.kind().file_stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> DailyLabels {
        DailyLabels::new(
            ["4 Miles", "Weights", "Rest", "4 Miles", "Weights", "Rest", "Rest"]
                .map(String::from),
        )
    }

    #[test]
    fn test_pages_read() {
        let goal = NonZeroU32::new(100).unwrap();
        let variant = Variant::PagesRead { goal };
        assert_eq!(variant.kind(), VariantKind::PagesRead);
        assert_eq!(variant.file_name(), "Pages Read.pdf");
        let schema = variant.schema();
        assert_eq!(schema.len(), 9);
        assert!(schema.has_totals());
        let content = variant.content();
        assert_eq!(content.total_lines(0), ["Goal: 100", "Actual:"]);
        assert_eq!(content.total_lines(9), ["Goal: 100", "Actual:"]);
        assert_eq!(content.day_label(0), None);
    }

    #[test]
    fn test_project_hours() {
        let variant = Variant::ProjectHours;
        assert_eq!(variant.file_name(), "Project Hours.pdf");
        assert!(variant.schema().has_totals());
        assert_eq!(
            variant.content().total_lines(4),
            ["Hours This Week:", "Debt:"]
        );
    }

    #[test]
    fn test_workouts() {
        let variant = Variant::Workouts { labels: labels() };
        assert_eq!(variant.file_name(), "Workouts.pdf");
        let schema = variant.schema();
        assert_eq!(schema.len(), 8);
        assert!(!schema.has_totals());
        let content = variant.content();
        assert!(content.total_lines(0).is_empty());
        assert_eq!(content.day_label(0), Some("4 Miles"));
        assert_eq!(content.day_label(6), Some("Rest"));
        assert_eq!(content.day_label(7), None);
    }

    #[test]
    fn test_kind_display() {
        let names = VariantKind::ALL.map(|k| k.to_string());
        assert_eq!(names, ["Pages Read", "Project Hours", "Workouts"]);
    }
}
