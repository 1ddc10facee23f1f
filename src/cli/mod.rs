//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer.

pub mod ledger;

pub use ledger::{handle_ledger_command, LedgerCommands, LedgerContext};
