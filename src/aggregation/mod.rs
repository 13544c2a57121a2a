//! Aggregation layer for schedules, streaks, and the stats summary.

mod schedule;
mod streaks;

#[allow(unused_imports)]
pub use schedule::{due_by_date, due_on, window_ending};
#[allow(unused_imports)]
pub use streaks::{bonus_currency, current_streak, longest_streak, summarize, StatsSummary};
