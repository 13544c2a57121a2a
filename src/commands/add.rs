//! Add command - create a new habit.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::models::{Difficulty, Frequency};
use crate::storage;


/// Run the add command.
pub fn run(db_path: PathBuf, name: &str, difficulty: &str, days: Option<&str>) -> Result<()> {
    let difficulty = match Difficulty::parse(difficulty) {
        Some(d) => d,
        None => bail!("difficulty must be easy, medium, or hard (got '{difficulty}')"),
    };

    let mask = days.map(parse_days).transpose()?;
    let frequency = if mask.is_some() {
        Frequency::Custom
    } else {
        Frequency::Daily
    };

    storage::init_database(&db_path)?;
    let habit = storage::create_habit(&db_path, name, difficulty, frequency, mask.as_deref())?;

    let schedule = match &habit.weekly_mask {
        Some(mask) => format!("on {}", mask_to_days(mask)),
        None => "daily".to_string(),
    };
    println!(
        "Added habit #{}: {} ({}, {})",
        habit.id,
        habit.name,
        habit.difficulty.as_str(),
        schedule
    );
    Ok(())
}


const DAY_NAMES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];


/// Turn a comma-separated weekday list like "mon,wed,fri" into a weekly mask.
fn parse_days(days: &str) -> Result<String> {
    let mut mask = [b'0'; 7];

    for day in days.split(',') {
        let day = day.trim().to_lowercase();
        if day.is_empty() {
            continue;
        }
        match DAY_NAMES.iter().position(|&name| name == day) {
            Some(index) => mask[index] = b'1',
            None => bail!("unknown weekday '{day}' (use mon,tue,wed,thu,fri,sat,sun)"),
        }
    }

    if !mask.contains(&b'1') {
        bail!("at least one weekday is required");
    }

    Ok(mask.iter().map(|&b| b as char).collect())
}


/// Render a weekly mask back as weekday names.
fn mask_to_days(mask: &str) -> String {
    mask.bytes()
        .zip(DAY_NAMES)
        .filter(|(bit, _)| *bit == b'1')
        .map(|(_, name)| name)
        .collect::<Vec<_>>()
        .join(",")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("mon,wed,fri").unwrap(), "1010100");
        assert_eq!(parse_days("sun").unwrap(), "0000001");
        assert_eq!(parse_days(" Sat , Sun ").unwrap(), "0000011");
    }

    #[test]
    fn test_parse_days_rejects_unknown() {
        assert!(parse_days("mon,funday").is_err());
        assert!(parse_days("").is_err());
    }

    #[test]
    fn test_mask_to_days() {
        assert_eq!(mask_to_days("1010100"), "mon,wed,fri");
        assert_eq!(mask_to_days("0000000"), "");
    }
}
