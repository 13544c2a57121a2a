//! Configuration and settings for Habit Garden.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    default_db_path,
    NAME_MAX_LEN,
    STREAK_WINDOW_DAYS,
    PROGRESS_DEFAULT_DAYS,
    DEFAULT_HOST,
    DEFAULT_PORT,
};
