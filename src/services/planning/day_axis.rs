//! Visible day columns of the planning board.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::settings::ViewMode;
use crate::utils::date::{first_day_of_month, last_day_of_month, shift_month_preserving_day};

/// Monday of the ISO week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Ordered day columns for the view containing `reference`.
///
/// Week mode covers the Monday-start week, month mode the whole calendar
/// month. Saturdays and Sundays are dropped when `show_weekend` is false.
pub fn visible_days(reference: NaiveDate, mode: ViewMode, show_weekend: bool) -> Vec<NaiveDate> {
    let (first, last) = match mode {
        ViewMode::Week => {
            let start = week_start(reference);
            (start, start + Duration::days(6))
        }
        ViewMode::Month => (first_day_of_month(reference), last_day_of_month(reference)),
    };

    first
        .iter_days()
        .take_while(|day| *day <= last)
        .filter(|day| show_weekend || !is_weekend(*day))
        .collect()
}

/// Moves the reference date by `steps` weeks or months.
pub fn shift_reference(reference: NaiveDate, mode: ViewMode, steps: i32) -> NaiveDate {
    match mode {
        ViewMode::Week => reference + Duration::weeks(steps as i64),
        ViewMode::Month => shift_month_preserving_day(reference, steps),
    }
}

/// Header title for the visible range, e.g. "Semaine 11 · 2025" or "03/2025".
pub fn range_title(reference: NaiveDate, mode: ViewMode) -> String {
    match mode {
        ViewMode::Week => {
            let iso = reference.iso_week();
            format!("Semaine {} · {}", iso.week(), iso.year())
        }
        ViewMode::Month => reference.format("%m/%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(date(2025, 3, 10) ; "monday")]
    #[test_case(date(2025, 3, 13) ; "thursday")]
    #[test_case(date(2025, 3, 16) ; "sunday")]
    fn test_week_with_weekend_has_seven_days_from_monday(reference: NaiveDate) {
        let days = visible_days(reference, ViewMode::Week, true);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 3, 10));
        assert_eq!(days[0].weekday(), Weekday::Mon);
        assert_eq!(days[6], date(2025, 3, 16));
    }

    #[test]
    fn test_week_without_weekend_has_five_days() {
        let days = visible_days(date(2025, 3, 12), ViewMode::Week, false);
        assert_eq!(days.len(), 5);
        assert!(days.iter().all(|d| !is_weekend(*d)));
        assert_eq!(days.last().copied(), Some(date(2025, 3, 14)));
    }

    #[test]
    fn test_week_across_year_boundary() {
        let days = visible_days(date(2025, 1, 1), ViewMode::Week, true);
        assert_eq!(days[0], date(2024, 12, 30));
        assert_eq!(days[6], date(2025, 1, 5));
    }

    #[test_case(date(2024, 2, 14), 29 ; "leap february")]
    #[test_case(date(2025, 2, 1), 28 ; "february")]
    #[test_case(date(2025, 4, 30), 30 ; "april")]
    #[test_case(date(2025, 12, 25), 31 ; "december")]
    fn test_month_spans_whole_month(reference: NaiveDate, expected_len: usize) {
        let days = visible_days(reference, ViewMode::Month, true);
        assert_eq!(days.len(), expected_len);
        assert_eq!(days[0].day(), 1);
        assert_eq!(days.last().map(|d| d.month()), Some(reference.month()));
    }

    #[test]
    fn test_month_without_weekend() {
        // March 2025 has 10 weekend days
        let days = visible_days(date(2025, 3, 1), ViewMode::Month, false);
        assert_eq!(days.len(), 21);
    }

    #[test]
    fn test_shift_reference() {
        assert_eq!(
            shift_reference(date(2025, 3, 12), ViewMode::Week, -1),
            date(2025, 3, 5)
        );
        assert_eq!(
            shift_reference(date(2025, 1, 31), ViewMode::Month, 1),
            date(2025, 2, 28)
        );
    }

    #[test]
    fn test_range_title() {
        assert_eq!(range_title(date(2025, 3, 12), ViewMode::Week), "Semaine 11 · 2025");
        assert_eq!(range_title(date(2025, 3, 12), ViewMode::Month), "03/2025");
    }
}
