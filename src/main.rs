use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use assistant_bot::cli::Session;
use assistant_bot::config::{AppPaths, Settings};
use assistant_bot::display::ConsoleView;
use assistant_bot::storage::Storage;

#[derive(Parser)]
#[command(
    name = "assistant-bot",
    version,
    about = "Interactive command-line address book",
    long_about = "The assistant bot keeps contact names, phone numbers and birthdays, \
                  and tells you whose birthday is coming up in the next week."
)]
struct Cli {
    /// Directory holding the address book and settings
    /// (default: $ASSISTANT_BOT_DATA_DIR, then ~/.config/assistant-bot)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable info logging on stderr
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable debug logging on stderr (implies --debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assistant (the default)
    Session,

    /// Write all contacts to a plain-text file
    Export {
        /// Target file (defaults to contacts.txt in the data directory)
        path: Option<PathBuf>,
    },

    /// Merge contacts from a plain-text file into the address book
    Import {
        /// Source file (defaults to contacts.txt in the data directory)
        path: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.debug {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("assistant_bot={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    let paths = AppPaths::resolve(cli.data_dir.clone())?;
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths)?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => {
            let book = storage.load_book()?;
            let mut session = Session::new(book, ConsoleView::stdio(), &storage, &settings);
            session.run()?;
        }
        Commands::Export { path } => {
            let path = path.unwrap_or_else(|| storage.paths().contacts_text_file());
            let book = storage.load_book()?;
            storage.export_text(&path, &book)?;
            println!("Exported {} contacts to {}", book.len(), path.display());
        }
        Commands::Import { path } => {
            let path = path.unwrap_or_else(|| storage.paths().contacts_text_file());
            let import = storage.import_text(&path)?;
            let count = import.records.len();
            let skipped = import.warnings.len();

            let mut book = storage.load_book()?;
            book.extend(import.records);
            storage.save_book(&book)?;

            println!("Imported {} contacts from {}", count, path.display());
            if skipped > 0 {
                println!("Skipped {} invalid entries (see warnings above)", skipped);
            }
        }
        Commands::Config => {
            let paths = storage.paths();
            println!("Assistant Bot Configuration");
            println!("===========================");
            println!("Data directory:  {}", paths.base_dir().display());
            println!("Address book:    {}", paths.snapshot_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Birthday window: {} days", settings.upcoming_window_days);
            println!("  Prompt:          {:?}", settings.prompt);
        }
    }

    Ok(())
}
