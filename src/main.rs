use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use pisopiso::cli::{handle_ledger_command, LedgerCommands, LedgerContext};
use pisopiso::config::{PisoPaths, Settings};

#[derive(Parser)]
#[command(
    name = "pisopiso",
    version,
    about = "Track income and expenses in a plain CSV ledger",
    long_about = "PisoPiso records income and expense transactions in a CSV file \
                  and keeps running totals of income, expense and balance."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(long, env = "PISOPISO_LEDGER", global = true)]
    ledger: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Ledger(LedgerCommands),

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let paths = PisoPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ledger_path = cli
        .ledger
        .clone()
        .unwrap_or_else(|| settings.ledger_path(&paths));

    match cli.command {
        Some(Commands::Ledger(cmd)) => {
            let ctx = LedgerContext {
                paths,
                settings,
                ledger_path,
                colored: std::io::stdout().is_terminal(),
            };
            handle_ledger_command(&ctx, cmd)?;
        }
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized PisoPiso at: {}", paths.base_dir().display());
            }
            println!("Ledger file: {}", ledger_path.display());
        }
        Some(Commands::Config) => {
            println!("PisoPiso Configuration");
            println!("======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Ledger file:      {}", ledger_path.display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Categories:      {}", settings.categories.join(", "));
        }
        None => {
            println!("PisoPiso - income and expense ledger");
            println!();
            println!("Run 'pisopiso --help' for usage information.");
            println!("Run 'pisopiso add --type income --category Salary --amount 1000' to get started.");
        }
    }

    Ok(())
}
