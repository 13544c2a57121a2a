//! CLI command implementations.

pub mod add;
pub mod complete;
pub mod edit;
pub mod init;
pub mod list;
pub mod serve;
pub mod shop;
pub mod stats;
