//! Habit and completion models.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};


/// Habit difficulty, which determines the coin award per completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}


impl Difficulty {
    /// Coins awarded for one completion at this difficulty.
    pub fn coin_value(&self) -> i64 {
        match self {
            Difficulty::Easy => 50,
            Difficulty::Medium => 100,
            Difficulty::Hard => 200,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}


/// How often a habit is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Due every day.
    #[default]
    Daily,
    /// Due on the weekdays selected by the habit's weekly mask.
    Custom,
}


impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Custom => "custom",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Frequency::Daily),
            "custom" => Some(Frequency::Custom),
            _ => None,
        }
    }
}


/// A user-defined recurring task tracked for completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub difficulty: Difficulty,
    pub frequency: Frequency,
    /// 7 characters of `0`/`1`, Monday first. Only set for custom frequency.
    pub weekly_mask: Option<String>,
    pub created_at: String,
    pub archived_at: Option<String>,
}


impl Habit {
    /// Archived habits are excluded from listings, schedules, and streaks.
    pub fn is_active(&self) -> bool {
        self.archived_at.is_none()
    }

    /// Whether this habit is due on the given date.
    ///
    /// Daily habits are always due. Custom habits consult the weekly mask;
    /// a missing or malformed mask means never due.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Custom => {
                let weekday = date.weekday().num_days_from_monday() as usize;
                self.weekly_mask
                    .as_ref()
                    .filter(|mask| mask.len() == 7)
                    .map_or(false, |mask| mask.as_bytes()[weekday] == b'1')
            }
        }
    }
}


/// A recorded instance of a habit being performed on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub habit_id: i64,
    /// Date in YYYY-MM-DD format.
    pub date: String,
}
