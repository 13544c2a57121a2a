//! Application settings and path constants.

use std::path::PathBuf;


/// Maximum habit name length after trimming.
pub const NAME_MAX_LEN: usize = 80;

/// Days of history considered for streak calculations.
pub const STREAK_WINDOW_DAYS: usize = 60;

/// Default range for the completions listing (days back from today).
pub const PROGRESS_DEFAULT_DAYS: i64 = 30;

/// Server bind defaults.
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8077;


/// Get the default database path.
pub fn default_db_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".habit-garden")
        .join("habits.db")
}
