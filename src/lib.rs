//! Library crate root for the Telegram MCP setup wizard.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod cli;
pub mod config;
pub mod telegram;
pub mod wizard;
