//! Data models for habits, completions, and the garden shop.

mod garden;
mod habit;

#[allow(unused_imports)]
pub use garden::{CoinLedger, GardenItem, Purchase};
#[allow(unused_imports)]
pub use habit::{Completion, Difficulty, Frequency, Habit};
