//! CLI commands

pub mod filter;
pub mod list;
pub mod show;
