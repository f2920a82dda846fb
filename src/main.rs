use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_ledger::audit::AuditLogger;
use expense_ledger::cli::{run_menu, Console};
use expense_ledger::config::{paths::LedgerPaths, settings::Settings};
use expense_ledger::display::format_audit_log;
use expense_ledger::services::ExpenseService;
use expense_ledger::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Menu-driven personal expense ledger",
    long_about = "Keeps a personal expense ledger in a CSV file. Run without a \
                  command to open the interactive menu."
)]
struct Cli {
    /// Ledger file to use instead of the one in the data directory
    #[arg(short, long, global = true, env = "EXPENSE_LEDGER_FILE")]
    file: Option<PathBuf>,

    /// Do not record changes in the audit log
    #[arg(long, global = true)]
    no_audit: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Create the data directory, ledger file and settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    Log {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let ledger_path = cli
        .file
        .clone()
        .unwrap_or_else(|| paths.ledger_file(&settings));
    let store = LedgerStore::new(ledger_path);
    let audit = AuditLogger::new(paths.audit_log());
    let audit_enabled = settings.audit_enabled && !cli.no_audit;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            paths.ensure_directories()?;
            store.ensure_initialized()?;

            let service = if audit_enabled {
                ExpenseService::with_audit(&store, &audit)
            } else {
                ExpenseService::new(&store)
            };

            let mut console = Console::stdio();
            run_menu(&mut console, &service, &settings.date_format)?;
        }
        Commands::Init => {
            paths.ensure_directories()?;
            let created = store.ensure_initialized()?;
            settings.save(&paths)?;

            if created {
                println!("Created ledger at: {}", store.path().display());
            } else {
                println!("Ledger already exists at: {}", store.path().display());
            }
            println!("Settings saved to: {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("Expense Ledger Configuration");
            println!("============================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", store.path().display());
            println!("Audit log:      {}", audit.path().display());
            println!();
            println!("Settings:");
            println!("  Date format:   {}", settings.date_format);
            println!("  Audit enabled: {}", audit_enabled);
        }
        Commands::Log { limit } => {
            let entries = audit.read_recent(limit)?;
            print!("{}", format_audit_log(&entries));
        }
    }

    Ok(())
}
