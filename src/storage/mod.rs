//! Storage layer over the SQLite database.

mod database;
mod error;

#[allow(unused_imports)]
pub use database::{
    init_database,
    seed_defaults,
    create_habit,
    list_habits,
    get_habit,
    update_habit,
    mark_complete,
    unmark_complete,
    completions_in_range,
    all_completions,
    counts,
    coin_ledger,
    list_items,
    purchase_item,
    list_purchases,
    Counts,
};
pub use error::{StoreError, StoreResult};
