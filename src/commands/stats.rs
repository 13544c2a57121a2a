//! Stats command - show streaks, totals, and the coin balance.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use crate::aggregation::{due_by_date, summarize, window_ending};
use crate::config::STREAK_WINDOW_DAYS;
use crate::storage;


/// Run the stats command.
pub fn run(db_path: PathBuf) -> Result<()> {
    if !db_path.exists() {
        println!("No database found. Run 'hbg init' to get started.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let habits = storage::list_habits(&db_path, false)?;
    let counts = storage::counts(&db_path)?;
    let completions = storage::all_completions(&db_path)?;

    let window = window_ending(today, STREAK_WINDOW_DAYS);
    let due = due_by_date(&habits, &window);
    let summary = summarize(
        counts.total_habits,
        counts.total_completions,
        &completions,
        &due,
    );
    let coins = storage::coin_ledger(&db_path)?;

    println!("\n{}", "=".repeat(48));
    println!("{:^48}", "Habit Garden");
    println!("{}\n", "=".repeat(48));

    println!("HABITS");
    println!("{}", "-".repeat(32));
    println!("  Active habits:     {:>10}", summary.total_habits);
    println!("  Total completions: {:>10}", summary.total_completions);
    println!();

    println!("STREAKS (last {STREAK_WINDOW_DAYS} days)");
    println!("{}", "-".repeat(32));
    println!("  Current streak:    {:>10}", summary.current_streak);
    println!("  Longest streak:    {:>10}", summary.longest_streak);
    println!("  Bonus currency:    {:>10}", summary.currency);
    println!();

    println!("COINS");
    println!("{}", "-".repeat(32));
    println!("  Earned:            {:>10}", coins.earned);
    println!("  Spent:             {:>10}", coins.spent);
    println!("  Balance:           {:>10}", coins.balance);
    println!();

    Ok(())
}
