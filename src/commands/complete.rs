//! Done and undo commands - manage completions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::storage;


/// Parse an optional YYYY-MM-DD argument, defaulting to today.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{s}', use YYYY-MM-DD")),
        None => Ok(Local::now().date_naive()),
    }
}


/// Run the done command.
pub fn run_done(db_path: PathBuf, habit_id: i64, date: Option<&str>) -> Result<()> {
    let date = resolve_date(date)?;
    let completion = storage::mark_complete(&db_path, habit_id, date)?;
    let habit = storage::get_habit(&db_path, habit_id)?;

    println!(
        "Marked '{}' complete for {} (+{} coins)",
        habit.name,
        completion.date,
        habit.difficulty.coin_value()
    );
    Ok(())
}


/// Run the undo command.
pub fn run_undo(db_path: PathBuf, habit_id: i64, date: Option<&str>) -> Result<()> {
    let date = resolve_date(date)?;
    storage::unmark_complete(&db_path, habit_id, date)?;

    println!("Removed completion for {}", date.format("%Y-%m-%d"));
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date() {
        let date = resolve_date(Some("2026-08-24")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 24).unwrap());

        assert!(resolve_date(Some("24-08-2026")).is_err());
        assert!(resolve_date(None).is_ok());
    }
}
