//! Serve command - run the HTTP API server.

use std::path::PathBuf;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use crate::server;
use crate::storage;


/// Run the serve command.
pub fn run(db_path: PathBuf, host: &str, port: u16, no_seed: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    storage::init_database(&db_path)?;
    if !no_seed {
        storage::seed_defaults(&db_path)?;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(db_path, host, port))
}
