//! Ledger CLI commands
//!
//! The command-line front end: each command opens the ledger, calls the
//! service, and prints the refreshed summary after any mutation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::{PisoPaths, Settings};
use crate::display::{
    format_category_breakdown, format_record_details, format_record_table, format_summary_line,
};
use crate::error::{PisoError, PisoResult};
use crate::models::TransactionKind;
use crate::reports::{category_breakdown, summarize};
use crate::services::{LedgerService, RecordInput, RecordPatch};
use crate::storage::LedgerStore;

/// Ledger subcommands
#[derive(Subcommand)]
pub enum LedgerCommands {
    /// Record a new income or expense
    Add {
        /// income or expense
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: TransactionKind,
        /// Category (Salary, Food, Bills, Transport, Other by default)
        #[arg(short, long)]
        category: String,
        /// Positive amount, e.g. "500" or "1250.75"
        #[arg(short, long, allow_hyphen_values = true)]
        amount: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Change fields of an existing record
    Edit {
        /// Row number as shown by `list`
        number: usize,
        /// New type: income or expense
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        kind: Option<TransactionKind>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New positive amount, e.g. "500" or "1250.75"
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New transaction date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
    },
    /// Remove a record
    Remove {
        /// Row number as shown by `list`
        number: usize,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Remove every record
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// Show all records
    #[command(alias = "ls")]
    List,
    /// Show total income, expense and balance
    Summary {
        /// Also break totals down by category
        #[arg(long)]
        by_category: bool,
    },
    /// Copy the ledger to another file (.csv, .json, .yaml)
    Export {
        /// Destination path
        path: PathBuf,
    },
    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Everything a ledger command needs from the environment
pub struct LedgerContext {
    pub paths: PisoPaths,
    pub settings: Settings,
    pub ledger_path: PathBuf,
    /// Whether to color the balance
    pub colored: bool,
}

impl LedgerContext {
    fn summary_line(&self, store: &LedgerStore) -> String {
        format_summary_line(
            &summarize(store.records()),
            &self.settings.currency_symbol,
            self.colored,
        )
    }
}

/// Handle a ledger command
pub fn handle_ledger_command(ctx: &LedgerContext, cmd: LedgerCommands) -> PisoResult<()> {
    let mut store = LedgerStore::open(&ctx.ledger_path)?;
    let audit = AuditLogger::new(ctx.paths.audit_log());

    match cmd {
        LedgerCommands::Add {
            kind,
            category,
            amount,
            date,
            description,
        } => {
            let input = RecordInput {
                date,
                kind,
                category,
                amount,
                description,
            };

            let mut service =
                LedgerService::new(&mut store, &ctx.settings.categories).with_audit(&audit);
            let record = service.add(input)?;

            println!("Added: {}", record);
            println!("{}", ctx.summary_line(&store));
        }
        LedgerCommands::Edit {
            number,
            kind,
            category,
            amount,
            date,
            description,
        } => {
            let index = row_index(number, store.len())?;
            let patch = RecordPatch {
                date,
                kind,
                category,
                amount,
                description,
            };

            if patch.is_empty() {
                return Err(PisoError::Validation(
                    "Nothing to change. Pass at least one of --type, --category, --amount, --date, --description".into(),
                ));
            }

            let mut service =
                LedgerService::new(&mut store, &ctx.settings.categories).with_audit(&audit);
            let record = service.edit(index, patch)?;

            println!("Updated #{}: {}", number, record);
            println!("{}", ctx.summary_line(&store));
        }
        LedgerCommands::Remove { number, force } => {
            let index = row_index(number, store.len())?;

            if !force {
                if let Some(record) = store.get(index) {
                    println!("About to remove:");
                    print!(
                        "{}",
                        format_record_details(number, record, &ctx.settings.date_format)
                    );
                }
                println!();
                println!("Use --force to confirm removal");
                return Ok(());
            }

            let mut service =
                LedgerService::new(&mut store, &ctx.settings.categories).with_audit(&audit);
            let removed = service.remove(index)?;

            println!("Removed #{}: {}", number, removed);
            println!("{}", ctx.summary_line(&store));
        }
        LedgerCommands::Clear { force } => {
            if !force {
                println!(
                    "About to remove all {} record(s) from {}",
                    store.len(),
                    store.path().display()
                );
                println!("Use --force to confirm");
                return Ok(());
            }

            let mut service =
                LedgerService::new(&mut store, &ctx.settings.categories).with_audit(&audit);
            let dropped = service.clear()?;

            println!("Cleared {} record(s)", dropped);
            println!("{}", ctx.summary_line(&store));
        }
        LedgerCommands::List => {
            println!("{}", format_record_table(store.records(), &ctx.settings.date_format));
            println!("{}", ctx.summary_line(&store));
        }
        LedgerCommands::Summary { by_category } => {
            println!("{}", ctx.summary_line(&store));
            if by_category {
                println!();
                print!(
                    "{}",
                    format_category_breakdown(
                        &category_breakdown(store.records()),
                        &ctx.settings.currency_symbol
                    )
                );
            }
        }
        LedgerCommands::Export { path } => {
            if same_file(&path, store.path()) {
                return Err(PisoError::Export(format!(
                    "{} is the live ledger; choose another destination",
                    path.display()
                )));
            }

            let service = LedgerService::new(&mut store, &ctx.settings.categories);
            let format = service.export(&path)?;
            println!(
                "Exported {} record(s) as {} to {}",
                service.records().len(),
                format,
                path.display()
            );
        }
        LedgerCommands::History { limit } => {
            let entries = audit.read_recent(limit)?;
            if entries.is_empty() {
                println!("No changes recorded yet.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
    }

    Ok(())
}

/// Whether two paths name the same file, resolving links when both exist
fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Convert a 1-based row number to a ledger index
fn row_index(number: usize, len: usize) -> PisoResult<usize> {
    match number.checked_sub(1) {
        Some(index) if index < len => Ok(index),
        Some(index) => Err(PisoError::index_out_of_range(index, len)),
        None => Err(PisoError::Validation("Row numbers start at 1".into())),
    }
}
