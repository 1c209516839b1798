use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use split_ledger::cli::{handle_add, handle_export, handle_show, ExportFormat};
use split_ledger::config::{paths::SplitPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "split-ledger",
    version,
    about = "Split shared expenses proportionally to income",
    long_about = "split-ledger records two users' monthly income and expenses, \
                  splits the shared expenses proportionally to income, and keeps \
                  the history in a per-month ledger that can be encrypted at rest."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record this month's income and expenses (the default)
    Add,

    /// Show the stored ledger as JSON
    Show,

    /// Export the stored ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = SplitPaths::new()?;
    let settings = Settings::load(&paths)?;

    match cli.command {
        None | Some(Commands::Add) => handle_add(&paths, &settings)?,
        Some(Commands::Show) => handle_show(&paths, &settings)?,
        Some(Commands::Export { format, output }) => {
            handle_export(&paths, &settings, format, output)?;
        }
        Some(Commands::Config) => {
            println!("split-ledger Configuration");
            println!("==========================");
            println!("Config file: {}", paths.config_file().display());
            println!(
                "Ledger file: {}",
                paths.ledger_file(&settings.json_output.name).display()
            );
            println!();
            println!("Settings:");
            println!("  Users:               {} and {}", settings.users[0], settings.users[1]);
            println!("  Output enabled:      {}", settings.json_output.enable);
            println!("  Encryption enabled:  {}", settings.json_output.encrypt);
            println!(
                "  Overwrite duplicate: {}",
                settings.json_output.overwrite_duplicate_month
            );
        }
    }

    Ok(())
}
