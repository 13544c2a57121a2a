//! Habit Garden - habit tracker with a virtual garden.
//!
//! One binary: a CLI for local habit management and an HTTP JSON API,
//! both over the same SQLite database.

mod aggregation;
mod cli;
mod commands;
mod config;
mod models;
mod server;
mod storage;


fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
