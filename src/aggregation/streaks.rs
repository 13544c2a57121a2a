//! Streak and bonus-currency calculations.
//!
//! A day counts toward a streak when every habit due that day was completed.
//! Days with nothing due neither extend nor break a streak.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::Completion;


/// Stats payload produced by [`summarize`].
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub total_habits: i64,
    pub total_completions: i64,
    pub current_streak: i64,
    pub longest_streak: i64,
    pub currency: i64,
}


/// Index completions as date -> set of completed habit ids.
fn completions_by_date(completions: &[Completion]) -> HashMap<String, HashSet<i64>> {
    let mut by_date: HashMap<String, HashSet<i64>> = HashMap::new();
    for completion in completions {
        by_date
            .entry(completion.date.clone())
            .or_default()
            .insert(completion.habit_id);
    }
    by_date
}


/// Count the current streak, walking backward from the newest due day.
///
/// The due map's window ends at today, so the walk starts there. Stops at the
/// first due day with an incomplete habit, so a due-but-unfinished today
/// resets the streak to zero.
pub fn current_streak(
    completions: &[Completion],
    due_by_date: &HashMap<String, HashSet<i64>>,
) -> i64 {
    if due_by_date.is_empty() {
        return 0;
    }

    let completed = completions_by_date(completions);

    let mut dates: Vec<&str> = due_by_date.keys().map(String::as_str).collect();
    // ISO dates sort lexicographically
    dates.sort_unstable();

    let mut streak = 0;
    for date in dates.iter().rev() {
        let Some(due) = due_by_date.get(*date).filter(|due| !due.is_empty()) else {
            continue;
        };

        let done = completed.get(*date);
        if due.iter().all(|id| done.map_or(false, |d| d.contains(id))) {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}


/// The longest run of fully-completed due days in the window.
pub fn longest_streak(
    completions: &[Completion],
    due_by_date: &HashMap<String, HashSet<i64>>,
) -> i64 {
    if due_by_date.is_empty() {
        return 0;
    }

    let completed = completions_by_date(completions);

    let mut dates: Vec<&String> = due_by_date.keys().collect();
    dates.sort_unstable();

    let mut best = 0;
    let mut run = 0;
    for date in dates {
        let due = &due_by_date[date];
        if due.is_empty() {
            continue;
        }

        let done = completed.get(date);
        if due.iter().all(|id| done.map_or(false, |d| d.contains(id))) {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
    }

    best
}


/// Bonus currency: one unit per completion plus the streak beyond its first day.
pub fn bonus_currency(total_completions: i64, current_streak: i64) -> i64 {
    total_completions + (current_streak - 1).max(0)
}


/// Produce the full stats summary.
pub fn summarize(
    total_habits: i64,
    total_completions: i64,
    completions: &[Completion],
    due_by_date: &HashMap<String, HashSet<i64>>,
) -> StatsSummary {
    let current = current_streak(completions, due_by_date);
    let longest = longest_streak(completions, due_by_date);

    StatsSummary {
        total_habits,
        total_completions,
        current_streak: current,
        longest_streak: longest,
        currency: bonus_currency(total_completions, current),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn completion(habit_id: i64, date: &str) -> Completion {
        Completion {
            habit_id,
            date: date.to_string(),
        }
    }

    fn due(entries: &[(&str, &[i64])]) -> HashMap<String, HashSet<i64>> {
        entries
            .iter()
            .map(|(date, ids)| (date.to_string(), ids.iter().copied().collect()))
            .collect()
    }

    #[test]
    fn test_current_streak_counts_back_from_today() {
        let due = due(&[
            ("2026-08-22", &[1]),
            ("2026-08-23", &[1]),
            ("2026-08-24", &[1]),
        ]);
        let completions = vec![
            completion(1, "2026-08-23"),
            completion(1, "2026-08-24"),
        ];

        assert_eq!(current_streak(&completions, &due), 2);
    }

    #[test]
    fn test_current_streak_breaks_on_unfinished_today() {
        let due = due(&[("2026-08-23", &[1]), ("2026-08-24", &[1])]);
        let completions = vec![completion(1, "2026-08-23")];

        assert_eq!(current_streak(&completions, &due), 0);
    }

    #[test]
    fn test_current_streak_requires_all_due_habits() {
        let due = due(&[("2026-08-24", &[1, 2])]);
        let completions = vec![completion(1, "2026-08-24")];

        assert_eq!(current_streak(&completions, &due), 0);
    }

    #[test]
    fn test_days_with_nothing_due_are_skipped() {
        // Weekend gap: nothing due on the 23rd
        let due = due(&[
            ("2026-08-22", &[1]),
            ("2026-08-23", &[]),
            ("2026-08-24", &[1]),
        ]);
        let completions = vec![
            completion(1, "2026-08-22"),
            completion(1, "2026-08-24"),
        ];

        assert_eq!(current_streak(&completions, &due), 2);
    }

    #[test]
    fn test_longest_streak_survives_later_miss() {
        let due = due(&[
            ("2026-08-20", &[1]),
            ("2026-08-21", &[1]),
            ("2026-08-22", &[1]),
            ("2026-08-23", &[1]),
            ("2026-08-24", &[1]),
        ]);
        let completions = vec![
            completion(1, "2026-08-20"),
            completion(1, "2026-08-21"),
            completion(1, "2026-08-22"),
            // miss on the 23rd
            completion(1, "2026-08-24"),
        ];

        assert_eq!(longest_streak(&completions, &due), 3);
        assert_eq!(current_streak(&completions, &due), 1);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(current_streak(&[], &HashMap::new()), 0);
        assert_eq!(longest_streak(&[], &HashMap::new()), 0);
    }

    #[test]
    fn test_bonus_currency() {
        assert_eq!(bonus_currency(10, 4), 13);
        assert_eq!(bonus_currency(10, 0), 10);
        assert_eq!(bonus_currency(0, 0), 0);
    }

    #[test]
    fn test_summarize() {
        let due = due(&[("2026-08-24", &[1])]);
        let completions = vec![completion(1, "2026-08-24")];

        let summary = summarize(1, 1, &completions, &due);
        assert_eq!(summary.total_habits, 1);
        assert_eq!(summary.total_completions, 1);
        assert_eq!(summary.current_streak, 1);
        assert_eq!(summary.longest_streak, 1);
        assert_eq!(summary.currency, 1);
    }
}
