//! Edit command - rename or archive a habit.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::storage;


/// Run the edit command.
pub fn run(
    db_path: PathBuf,
    habit_id: i64,
    rename: Option<&str>,
    archive: bool,
    unarchive: bool,
) -> Result<()> {
    if archive && unarchive {
        bail!("--archive and --unarchive are mutually exclusive");
    }
    if rename.is_none() && !archive && !unarchive {
        bail!("nothing to do: pass --rename, --archive, or --unarchive");
    }

    let archived = if archive {
        Some(true)
    } else if unarchive {
        Some(false)
    } else {
        None
    };

    let habit = storage::update_habit(&db_path, habit_id, rename, archived)?;

    let status = if habit.is_active() { "active" } else { "archived" };
    println!("Habit #{}: {} ({status})", habit.id, habit.name);
    Ok(())
}
