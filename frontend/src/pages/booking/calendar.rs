use chrono::{Datelike, Months, NaiveDate};

use crate::utils::time::format_month;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// The month currently shown in the picker. Always anchored to the first of
/// the month, so prev/next never land on an invalid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor(NaiveDate);

impl MonthCursor {
    pub fn for_date(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn prev(self) -> Self {
        Self(self.0.checked_sub_months(Months::new(1)).unwrap_or(self.0))
    }

    pub fn next(self) -> Self {
        Self(self.0.checked_add_months(Months::new(1)).unwrap_or(self.0))
    }

    pub fn label(self) -> String {
        format_month(self.0)
    }

    pub fn days_in_month(self) -> u32 {
        self.next()
            .first_day()
            .signed_duration_since(self.0)
            .num_days() as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_past: bool,
    pub is_selected: bool,
}

impl DayCell {
    /// Past days are inert; everything else can be picked.
    pub fn selectable(&self) -> bool {
        !self.is_past
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn cell_count(&self) -> usize {
        self.leading_blanks as usize + self.days.len()
    }
}

/// Lays out one month: leading blanks up to the weekday of day 1
/// (Sunday = 0), then a cell per day with its derived flags. Comparison for
/// `is_past` is strict and at day granularity.
pub fn month_grid(cursor: MonthCursor, today: NaiveDate, selected: Option<NaiveDate>) -> MonthGrid {
    let first = cursor.first_day();
    let leading_blanks = first.weekday().num_days_from_sunday();
    let days = (1..=cursor.days_in_month())
        .filter_map(|day| {
            let date = first.with_day(day)?;
            Some(DayCell {
                day,
                date,
                is_today: date == today,
                is_past: date < today,
                is_selected: selected == Some(date),
            })
        })
        .collect();
    MonthGrid {
        leading_blanks,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn grid_shape_holds_for_every_month_in_a_leap_cycle() {
        let today = date(2026, 8, 5);
        for year in 2023..=2027 {
            for month in 1..=12 {
                let cursor = MonthCursor::for_date(date(year, month, 1));
                let grid = month_grid(cursor, today, None);
                assert_eq!(
                    grid.leading_blanks,
                    cursor.first_day().weekday().num_days_from_sunday(),
                    "leading blanks for {}-{}",
                    year,
                    month
                );
                assert_eq!(
                    grid.cell_count(),
                    (grid.leading_blanks + cursor.days_in_month()) as usize,
                    "cell count for {}-{}",
                    year,
                    month
                );
            }
        }
    }

    #[test]
    fn february_lengths_respect_leap_years() {
        assert_eq!(MonthCursor::for_date(date(2024, 2, 10)).days_in_month(), 29);
        assert_eq!(MonthCursor::for_date(date(2026, 2, 10)).days_in_month(), 28);
    }

    #[test]
    fn days_before_today_are_past_and_inert() {
        let today = date(2026, 8, 5);
        let grid = month_grid(MonthCursor::for_date(today), today, None);
        for cell in &grid.days {
            if cell.day < 5 {
                assert!(cell.is_past, "day {} should be past", cell.day);
                assert!(!cell.selectable());
            } else {
                assert!(!cell.is_past, "day {} should not be past", cell.day);
                assert!(cell.selectable());
            }
        }
    }

    #[test]
    fn today_and_selection_flags_mark_single_cells() {
        let today = date(2026, 8, 5);
        let selected = Some(date(2026, 8, 12));
        let grid = month_grid(MonthCursor::for_date(today), today, selected);
        assert_eq!(grid.days.iter().filter(|cell| cell.is_today).count(), 1);
        assert_eq!(grid.days.iter().filter(|cell| cell.is_selected).count(), 1);
        assert!(grid.days[11].is_selected);
    }

    #[test]
    fn past_months_have_no_today_and_all_past_days() {
        let today = date(2026, 8, 5);
        let grid = month_grid(MonthCursor::for_date(date(2026, 7, 1)), today, None);
        assert!(grid.days.iter().all(|cell| cell.is_past));
        assert!(grid.days.iter().all(|cell| !cell.is_today));
    }

    #[test]
    fn month_navigation_rolls_over_year_boundaries() {
        let cursor = MonthCursor::for_date(date(2026, 1, 15));
        let prev = cursor.prev();
        assert_eq!((prev.year(), prev.month()), (2025, 12));

        let cursor = MonthCursor::for_date(date(2025, 12, 3));
        let next = cursor.next();
        assert_eq!((next.year(), next.month()), (2026, 1));
    }

    #[test]
    fn cursor_anchors_to_the_first_of_the_month() {
        let cursor = MonthCursor::for_date(date(2026, 3, 31));
        assert_eq!(cursor.first_day(), date(2026, 3, 1));
        assert_eq!(cursor.label(), "March 2026");
        // Navigating from an anchored cursor is stable in both directions.
        assert_eq!(cursor.next().prev(), cursor);
    }
}
