//! Pantry CLI - terminal surface for the form/list screen

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::Term;
use pantry::config::{self, PantryConfig};
use pantry::storage::SqliteStore;
use pantry::ui;
use pantry::{ItemScreen, Rejection, SaveOutcome};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(version = "0.1.0")]
#[command(about = "Tiny local inventory list backed by SQLite")]
#[command(long_about = r#"
Pantry keeps a flat list of name + quantity entries in a local SQLite file.

Example usage:
  pantry init
  pantry add --name Apples --quantity 5
  pantry list
  pantry screen
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides pantry.toml)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive form/list screen
    Screen,

    /// Add one item without entering the interactive screen
    Add {
        /// Item name
        #[arg(short, long)]
        name: String,

        /// Quantity, as typed (validated as a base-10 integer)
        #[arg(short, long)]
        quantity: String,
    },

    /// Print the full item list
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show item count and database location
    Stats,

    /// Write a pantry.toml recording the database location
    Init {
        /// Overwrite an existing pantry.toml
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Screen => {
            let (store, db_path) = open_store(cli.database)?;
            tracing::debug!("Opened database at {:?}", db_path);

            let mut screen = ItemScreen::new(store);
            screen.mount();
            run_screen(&mut screen)?;
        }

        Commands::Add { name, quantity } => {
            let (store, _) = open_store(cli.database)?;

            let mut screen = ItemScreen::new(store);
            screen.mount();
            screen.name_input = name;
            screen.quantity_input = quantity;

            let outcome = screen.save();
            report_outcome(&screen, outcome);
        }

        Commands::List { format } => {
            let (store, _) = open_store(cli.database)?;
            let items = store.fetch_all()?;

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if items.is_empty() {
                println!("{}", ui::muted("(no items yet)"));
            } else {
                println!("{}", ui::items_table(&items));
            }
        }

        Commands::Stats => {
            let (store, db_path) = open_store(cli.database)?;
            let count = store.fetch_all()?.len();

            println!("{} Pantry", ui::Icons::STATS);
            println!(
                "{}",
                ui::stats_table(&[
                    ("Items", &count.to_string()),
                    ("Database", &db_path.display().to_string()),
                ])
            );
        }

        Commands::Init { force } => {
            let db_path = cli
                .database
                .unwrap_or_else(|| config::default_database_path_in(Path::new(".")));

            let config_path = config::default_config_path();
            let config = PantryConfig {
                database: Some(db_path.display().to_string()),
            };
            config::write_config(&config_path, &config, force)?;
            SqliteStore::open(&db_path)?;

            ui::success(&format!(
                "Initialized {} (database at {})",
                config_path.display(),
                db_path.display()
            ));
        }
    }

    Ok(())
}

/// Open the store at the resolved database path. Schema initialization
/// and parent directory creation happen inside open.
fn open_store(flag: Option<PathBuf>) -> anyhow::Result<(SqliteStore, PathBuf)> {
    let config = config::load_config(None)?;
    let db_path = config::resolve_database_path(flag, config.as_ref());
    let store = SqliteStore::open(&db_path)?;
    Ok((store, db_path))
}

fn report_outcome(screen: &ItemScreen, outcome: SaveOutcome) {
    match outcome {
        SaveOutcome::Saved { id } => {
            let item = screen.items.iter().find(|i| i.id == id);
            match item {
                Some(item) => ui::success(&format!("Saved {} x{}", item.name, item.quantity)),
                None => ui::success("Saved"),
            }
        }
        SaveOutcome::Rejected(Rejection::EmptyName) => {
            ui::warn("Skipped: name is empty");
        }
        SaveOutcome::Rejected(Rejection::InvalidQuantity) => {
            ui::warn("Skipped: quantity is not a whole number");
        }
        SaveOutcome::Failed => {
            ui::error("Save failed (details in the log)");
        }
    }
}

/// Interactive loop: render the list, prompt for both fields, save.
/// A blank name ends the loop; validation rejects re-render silently.
fn run_screen(screen: &mut ItemScreen) -> anyhow::Result<()> {
    let term = Term::stdout();

    loop {
        ui::header("Pantry");
        let table = ui::items_table(&screen.items);
        if table.is_empty() {
            println!("{}", ui::muted("(no items yet)"));
        } else {
            println!("{}", table);
        }
        println!();

        term.write_str(&format!("{} ", ui::dim("Name (blank to quit):")))?;
        let name = term.read_line()?;
        if name.trim().is_empty() {
            break;
        }

        term.write_str(&format!("{} ", ui::dim("Quantity:")))?;
        let quantity = term.read_line()?;

        screen.name_input = name;
        screen.quantity_input = quantity;

        if let SaveOutcome::Saved { .. } = screen.save() {
            ui::success("Saved");
        }
        println!();
    }

    Ok(())
}
