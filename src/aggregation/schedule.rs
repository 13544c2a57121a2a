//! Due-date scheduling: which habits are due on which days.

use std::collections::{HashMap, HashSet};

use chrono::{Duration, NaiveDate};

use crate::models::Habit;


/// Build the window of dates ending at `today`, oldest first.
///
/// Contains `days_back + 1` dates so today is always included.
pub fn window_ending(today: NaiveDate, days_back: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(days_back + 1);
    let mut current = today - Duration::days(days_back as i64);

    while current <= today {
        dates.push(current);
        current += Duration::days(1);
    }

    dates
}


/// The set of active habit ids due on a date.
pub fn due_on(habits: &[Habit], date: NaiveDate) -> HashSet<i64> {
    habits
        .iter()
        .filter(|h| h.is_active() && h.is_due_on(date))
        .map(|h| h.id)
        .collect()
}


/// Map each date in the window to the habits due on it, keyed by YYYY-MM-DD.
pub fn due_by_date(habits: &[Habit], window: &[NaiveDate]) -> HashMap<String, HashSet<i64>> {
    window
        .iter()
        .map(|&d| (d.format("%Y-%m-%d").to_string(), due_on(habits, d)))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Frequency};

    fn habit(id: i64, frequency: Frequency, mask: Option<&str>, archived: bool) -> Habit {
        Habit {
            id,
            name: format!("habit-{id}"),
            difficulty: Difficulty::Medium,
            frequency,
            weekly_mask: mask.map(String::from),
            created_at: "2026-01-01T00:00:00Z".to_string(),
            archived_at: archived.then(|| "2026-02-01".to_string()),
        }
    }

    #[test]
    fn test_window_length_and_order() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let window = window_ending(today, 60);

        assert_eq!(window.len(), 61);
        assert_eq!(window[0], NaiveDate::from_ymd_opt(2026, 6, 25).unwrap());
        assert_eq!(*window.last().unwrap(), today);
    }

    #[test]
    fn test_due_on_skips_archived() {
        let habits = vec![
            habit(1, Frequency::Daily, None, false),
            habit(2, Frequency::Daily, None, true),
        ];
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();

        let due = due_on(&habits, monday);
        assert!(due.contains(&1));
        assert!(!due.contains(&2));
    }

    #[test]
    fn test_due_on_custom_mask() {
        // Due Monday and Friday only
        let habits = vec![habit(1, Frequency::Custom, Some("1000100"), false)];

        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let tuesday = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(due_on(&habits, monday).len(), 1);
        assert!(due_on(&habits, tuesday).is_empty());
    }

    #[test]
    fn test_due_by_date_keys() {
        let habits = vec![habit(1, Frequency::Daily, None, false)];
        let today = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let window = window_ending(today, 2);

        let due = due_by_date(&habits, &window);
        assert_eq!(due.len(), 3);
        assert!(due["2026-08-24"].contains(&1));
        assert!(due["2026-08-22"].contains(&1));
    }
}
