use crate::calendar::{next_monday, validate_monday, StartDate, DAYS_IN_WEEK, DAY_NAMES};
use crate::variant::{DailyLabels, Variant, VariantKind};
use anyhow::Context;
use dialoguer::{theme::ColorfulTheme, Input};
use std::fmt;
use std::num::NonZeroU32;
use thiserror::Error;
use time::Date;

/// Menu entry that selects every calendar
const ALL_KEY: &str = "4";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum StartChoice {
    NextMonday,
    Custom,
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum PromptError {
    #[error("invalid choice; please enter 1 or 2")]
    InvalidChoice,
    #[error("invalid selection; enter menu numbers separated by commas, e.g. 1,3")]
    InvalidSelection,
    #[error("please enter a valid number")]
    InvalidNumber,
    #[error("goal must be a positive number")]
    NotPositive,
}

pub(crate) fn parse_start_choice(input: &str) -> Result<StartChoice, PromptError> {
    match input.trim() {
        "1" => Ok(StartChoice::NextMonday),
        "2" => Ok(StartChoice::Custom),
        _ => Err(PromptError::InvalidChoice),
    }
}

fn menu_key(kind: VariantKind) -> &'static str {
    match kind {
        VariantKind::PagesRead => "1",
        VariantKind::ProjectHours => "2",
        VariantKind::Workouts => "3",
    }
}

/// Parses a comma-separated list of menu numbers.  Unrecognized entries are
/// skipped and repeats collapse, keeping the order in which calendars were
/// first named.  `4` (or `all`) anywhere in the list selects every calendar.
pub(crate) fn parse_selection(input: &str) -> Result<Vec<VariantKind>, PromptError> {
    let mut selected = Vec::new();
    for token in input.split(',').map(str::trim) {
        // A mixed list such as `1,4` still means every calendar
        if token == ALL_KEY || token.eq_ignore_ascii_case("all") {
            return Ok(VariantKind::ALL.to_vec());
        }
        if let Some(kind) = VariantKind::ALL.into_iter().find(|&k| menu_key(k) == token) {
            if !selected.contains(&kind) {
                selected.push(kind);
            }
        }
    }
    if selected.is_empty() {
        Err(PromptError::InvalidSelection)
    } else {
        Ok(selected)
    }
}

pub(crate) fn parse_goal(input: &str) -> Result<NonZeroU32, PromptError> {
    let n = input
        .trim()
        .parse::<i64>()
        .map_err(|_| PromptError::InvalidNumber)?;
    if n <= 0 {
        return Err(PromptError::NotPositive);
    }
    u32::try_from(n)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(PromptError::InvalidNumber)
}

/// Pairs each selected calendar with the input it needs.  Calendars whose
/// input is missing are left out.
pub(crate) fn assemble_variants(
    kinds: &[VariantKind],
    goal: Option<NonZeroU32>,
    labels: Option<&DailyLabels>,
) -> Vec<Variant> {
    kinds
        .iter()
        .filter_map(|kind| match kind {
            VariantKind::PagesRead => goal.map(|goal| Variant::PagesRead { goal }),
            VariantKind::ProjectHours => Some(Variant::ProjectHours),
            VariantKind::Workouts => labels.map(|labels| Variant::Workouts {
                labels: labels.clone(),
            }),
        })
        .collect()
}

/// Asks the user for everything needed to generate calendars, re-asking
/// whenever an answer does not parse
#[derive(Default)]
pub(crate) struct Prompter {
    theme: ColorfulTheme,
}

impl Prompter {
    pub(crate) fn start_date(&self, today: Date) -> anyhow::Result<StartDate> {
        let next = next_monday(today);
        println!();
        println!("Choose start date:");
        println!("  1. Use next Monday ({next})");
        println!("  2. Enter a custom Monday");
        match self.ask("Enter choice (1 or 2)", parse_start_choice)? {
            StartChoice::NextMonday => Ok(next),
            StartChoice::Custom => self.ask(
                "Enter start date (MM/DD/YYYY, must be a Monday)",
                validate_monday,
            ),
        }
    }

    pub(crate) fn calendars(&self) -> anyhow::Result<Vec<VariantKind>> {
        println!();
        println!("Which calendar(s) would you like to generate?");
        for kind in VariantKind::ALL {
            println!("  {}. {kind}", menu_key(kind));
        }
        println!("  {ALL_KEY}. All");
        self.ask(
            "Enter choice(s) separated by commas (e.g. 1,3)",
            parse_selection,
        )
    }

    pub(crate) fn goal(&self) -> anyhow::Result<NonZeroU32> {
        println!();
        self.ask("Enter weekly page goal (e.g. 100)", parse_goal)
    }

    pub(crate) fn workout_labels(&self) -> anyhow::Result<DailyLabels> {
        println!();
        println!("Enter workout labels for each day (these repeat every week):");
        let mut labels = <[String; DAYS_IN_WEEK]>::default();
        for (slot, day) in labels.iter_mut().zip(DAY_NAMES) {
            let answer = Input::<String>::with_theme(&self.theme)
                .with_prompt(format!("  {day}"))
                .allow_empty(true)
                .interact_text()
                .with_context(|| format!("failed to read workout label for {day}"))?;
            *slot = answer.trim().to_owned();
        }
        Ok(DailyLabels::new(labels))
    }

    /// Asks for whatever the selected calendars need, then builds them
    pub(crate) fn variants(&self, kinds: &[VariantKind]) -> anyhow::Result<Vec<Variant>> {
        let goal = if kinds.contains(&VariantKind::PagesRead) {
            Some(self.goal()?)
        } else {
            None
        };
        let labels = if kinds.contains(&VariantKind::Workouts) {
            Some(self.workout_labels()?)
        } else {
            None
        };
        Ok(assemble_variants(kinds, goal, labels.as_ref()))
    }

    // Re-prompts until `parse` accepts the answer, showing its error message
    // each time it does not
    fn ask<T, E, F>(&self, prompt: &str, parse: F) -> anyhow::Result<T>
    where
        F: Fn(&str) -> Result<T, E>,
        E: fmt::Display,
    {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| parse(input).map(|_| ()))
            .interact_text()
            .with_context(|| format!("failed to read answer to {prompt:?}"))?;
        parse(&answer).map_err(|e| anyhow::anyhow!("{e}"))
    }
}

impl fmt::Debug for Prompter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_start_choice() {
        assert_eq!(parse_start_choice("1"), Ok(StartChoice::NextMonday));
        assert_eq!(parse_start_choice(" 2 "), Ok(StartChoice::Custom));
        assert_eq!(parse_start_choice("3"), Err(PromptError::InvalidChoice));
        assert_eq!(parse_start_choice(""), Err(PromptError::InvalidChoice));
    }

    #[test]
    fn test_parse_selection() {
        use VariantKind::*;
        assert_eq!(parse_selection("1"), Ok(vec![PagesRead]));
        assert_eq!(parse_selection("1,3"), Ok(vec![PagesRead, Workouts]));
        assert_eq!(parse_selection(" 3 , 1 "), Ok(vec![Workouts, PagesRead]));
        assert_eq!(parse_selection("2,2,2"), Ok(vec![ProjectHours]));
        assert_eq!(parse_selection("2,9,x"), Ok(vec![ProjectHours]));
    }

    #[test]
    fn test_parse_selection_all() {
        let all = Ok(VariantKind::ALL.to_vec());
        assert_eq!(parse_selection("4"), all);
        assert_eq!(parse_selection("ALL"), all);
        assert_eq!(parse_selection("1,4"), all);
    }

    #[test]
    fn test_parse_selection_invalid() {
        for s in ["", "0", "5", "one", ",,", "1 3"] {
            assert_eq!(
                parse_selection(s),
                Err(PromptError::InvalidSelection),
                "{s:?}"
            );
        }
    }

    #[test]
    fn test_parse_goal() {
        assert_eq!(parse_goal("100"), Ok(NonZeroU32::new(100).unwrap()));
        assert_eq!(parse_goal(" 7\n"), Ok(NonZeroU32::new(7).unwrap()));
        assert_eq!(parse_goal("0"), Err(PromptError::NotPositive));
        assert_eq!(parse_goal("-5"), Err(PromptError::NotPositive));
        assert_eq!(parse_goal("ten"), Err(PromptError::InvalidNumber));
        assert_eq!(parse_goal("1.5"), Err(PromptError::InvalidNumber));
        assert_eq!(parse_goal("99999999999"), Err(PromptError::InvalidNumber));
    }

    #[test]
    fn test_assemble_variants() {
        let goal = NonZeroU32::new(50).unwrap();
        let labels = DailyLabels::new(std::array::from_fn(|i| format!("Day {i}")));
        let variants = assemble_variants(
            &[VariantKind::Workouts, VariantKind::PagesRead, VariantKind::ProjectHours],
            Some(goal),
            Some(&labels),
        );
        assert_eq!(
            variants,
            [
                Variant::Workouts {
                    labels: labels.clone()
                },
                Variant::PagesRead { goal },
                Variant::ProjectHours,
            ]
        );
    }

    #[test]
    fn test_assemble_variants_missing_input() {
        let variants = assemble_variants(&VariantKind::ALL, None, None);
        assert_eq!(variants, [Variant::ProjectHours]);
    }

    #[test]
    fn test_error_messages() {
        assert!(PromptError::InvalidSelection.to_string().contains("selection"));
        assert!(PromptError::NotPositive.to_string().contains("positive"));
    }
}
