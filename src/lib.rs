//! PisoPiso - a file-backed income and expense ledger
//!
//! The core is a [`LedgerStore`](storage::LedgerStore): an ordered list of
//! [`Record`](models::Record)s kept identical to a CSV file by rewriting the
//! file after every change. [`summarize`](reports::summarize) derives income,
//! expense and balance from the records. Front ends validate user input with
//! [`RecordInput`](services::RecordInput) and usually go through
//! [`LedgerService`](services::LedgerService), which also writes the audit
//! log.
//!
//! # Architecture
//!
//! - `config`: Base directory and settings
//! - `error`: Error types
//! - `models`: Records, kinds, categories, money
//! - `storage`: CSV encoding and the ledger store
//! - `services`: Entry validation and the ledger service
//! - `reports`: Summary and category breakdown
//! - `export`: CSV / JSON / YAML copies of the ledger
//! - `audit`: Append-only change log
//! - `display`, `cli`: Terminal front end
//!
//! # Example
//!
//! ```rust,no_run
//! use pisopiso::models::TransactionKind;
//! use pisopiso::reports::summarize;
//! use pisopiso::services::{LedgerService, RecordInput};
//! use pisopiso::storage::LedgerStore;
//!
//! # fn main() -> pisopiso::PisoResult<()> {
//! let mut store = LedgerStore::open("transactions.csv")?;
//! let categories = pisopiso::models::default_categories();
//! let mut service = LedgerService::new(&mut store, &categories);
//!
//! service.add(RecordInput {
//!     date: Some("2024-01-01".into()),
//!     kind: TransactionKind::Income,
//!     category: "Salary".into(),
//!     amount: "50000".into(),
//!     description: Some("Jan pay".into()),
//! })?;
//!
//! let summary = summarize(store.records());
//! println!("{}", summary.balance);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{PisoError, PisoResult};
