use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use mechanic_invoice::config::{paths::DIR_ENV_VAR, InvoicePaths, Settings};
use mechanic_invoice::display::format_menu;
use mechanic_invoice::session::InvoiceSession;

#[derive(Parser)]
#[command(
    name = "mechanic-invoice",
    author = "Kaylee Beyene",
    version,
    about = "Interactive invoice builder for mechanic jobs",
    long_about = "Builds an invoice one job at a time, checks each price against \
                  the allowed range for its job type, and prints an invoice \
                  ready to paste into a document."
)]
struct Cli {
    /// Directory holding the optional config.json
    #[arg(long, global = true, env = DIR_ENV_VAR)]
    config_dir: Option<PathBuf>,

    /// Increase diagnostic logging on stderr (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new invoice (the default)
    #[command(alias = "start")]
    New,

    /// Show the job catalog with allowed price ranges
    Catalog,

    /// Write a default config.json to edit
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    mechanic_invoice::logging::init(cli.verbose);

    let paths = match cli.config_dir {
        Some(dir) => InvoicePaths::with_base_dir(dir),
        None => InvoicePaths::new()?,
    };

    match cli.command.unwrap_or(Commands::New) {
        Commands::New => {
            let settings = Settings::load_or_create(&paths)?;
            let catalog = settings.catalog()?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            InvoiceSession::new(
                stdin.lock(),
                stdout.lock(),
                catalog,
                settings.render_options(),
            )
            .run()?;
        }
        Commands::Catalog => {
            let settings = Settings::load_or_create(&paths)?;
            let catalog = settings.catalog()?;
            println!("Job types");
            println!("=========");
            print!("{}", format_menu(&catalog, &settings.currency_symbol));
        }
        Commands::Init { force } => {
            if paths.is_initialized() && !force {
                println!(
                    "Config already exists at {} (use --force to overwrite)",
                    paths.settings_file().display()
                );
                return Ok(());
            }
            Settings::default().save(&paths)?;
            tracing::info!(path = %paths.settings_file().display(), "wrote default settings");
            println!("Wrote default config to {}", paths.settings_file().display());
            println!();
            println!("Edit \"job_ranges\" to set ranges, e.g.:");
            println!("  \"job_ranges\": {{ \"Cosmetic\": {{ \"min\": 50, \"max\": 300 }} }}");
        }
        Commands::Config => {
            let settings = Settings::load_or_create(&paths)?;
            println!("Mechanic Invoice Configuration");
            println!("==============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!(
                "Config file:      {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created, using defaults)" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:  {}", settings.currency_symbol);
            println!("  Timestamp format: {}", settings.timestamp_format);
            println!("  Flag overrides:   {}", settings.flag_overrides);
            if settings.job_ranges.is_empty() {
                println!("  Range overrides:  none");
            } else {
                println!("  Range overrides:");
                for (label, range) in &settings.job_ranges {
                    println!("    {}: {} - {}", label, range.min, range.max);
                }
            }
        }
    }

    Ok(())
}
