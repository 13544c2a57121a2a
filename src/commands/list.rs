//! List command - show habits with today's due and done markers.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use crate::storage;


/// Run the list command.
pub fn run(db_path: PathBuf, all: bool) -> Result<()> {
    if !db_path.exists() {
        println!("No database found. Run 'hbg init' to get started.");
        return Ok(());
    }

    let habits = storage::list_habits(&db_path, all)?;
    if habits.is_empty() {
        println!("No habits yet. Add one with 'hbg add <name>'.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let today_key = today.format("%Y-%m-%d").to_string();
    let done_today: Vec<i64> = storage::all_completions(&db_path)?
        .into_iter()
        .filter(|c| c.date == today_key)
        .map(|c| c.habit_id)
        .collect();

    println!("{:>4}  {:<32} {:<8} {:<8} {}", "ID", "NAME", "LEVEL", "TODAY", "STATUS");
    println!("{}", "-".repeat(64));

    for habit in habits {
        let today_marker = if !habit.is_active() {
            "-"
        } else if !habit.is_due_on(today) {
            "off"
        } else if done_today.contains(&habit.id) {
            "done"
        } else {
            "due"
        };
        let status = if habit.is_active() { "active" } else { "archived" };

        println!(
            "{:>4}  {:<32} {:<8} {:<8} {}",
            habit.id,
            habit.name,
            habit.difficulty.as_str(),
            today_marker,
            status
        );
    }

    Ok(())
}
