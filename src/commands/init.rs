//! Init command - create the schema and seed starter data.

use std::path::PathBuf;

use anyhow::Result;

use crate::storage;


/// Run the init command.
pub fn run(db_path: PathBuf) -> Result<()> {
    storage::init_database(&db_path)?;
    storage::seed_defaults(&db_path)?;

    println!("Database ready at {}", db_path.display());
    Ok(())
}
