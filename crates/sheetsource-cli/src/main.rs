//! sheetsource - prints spreadsheet-backed site data as JSON.
//!
//! The static site build shells out to this binary to read the Services
//! and Organizations sheets, look up single records, and get the startup
//! flags for the frontend.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use sheetsource_core::{bootstrap, Config, DataSource, SheetName, SheetsClient};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "sheetsource", version, about = "Spreadsheet-backed data source for the site build")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(flatten)]
    Data(DataCommand),
    /// Print the frontend startup flags
    Flags {
        #[arg(long, default_value_t = 1280)]
        width: u32,
        #[arg(long, default_value_t = 800)]
        height: u32,
    },
}

/// Commands that read from the spreadsheet.
#[derive(Debug, Subcommand)]
enum DataCommand {
    /// Print every record of a sheet
    List {
        /// services or organizations
        sheet: SheetName,
        /// Print raw rows instead of decoded records
        #[arg(long)]
        raw: bool,
    },
    /// Print the record whose id matches
    Get {
        sheet: SheetName,
        id: String,
        #[arg(long)]
        raw: bool,
    },
    /// Print services and organizations together, fetched concurrently
    All,
    /// Print the embedded map URL for an address
    MapUrl { address: String },
}

#[derive(Serialize)]
struct AllData<A, B> {
    services: A,
    organizations: B,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug).
    // Logs go to stderr; stdout carries the JSON output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Flags { width, height } => print_json(&bootstrap::flags(width, height)),
        Command::Data(command) => {
            let config = Config::load().context("Failed to load configuration")?;
            debug!(?config, "Configuration loaded");
            let source = DataSource::from_config(&config)?;
            run(&source, command).await
        }
    }
}

async fn run(source: &DataSource<SheetsClient>, command: DataCommand) -> Result<()> {
    match command {
        DataCommand::List { sheet, raw: true } => {
            let sheet = source.list_sheet(sheet).await?;
            print_json(&sheet.rows)
        }
        DataCommand::List { sheet: SheetName::Services, raw: false } => {
            print_json(&source.services().await?)
        }
        DataCommand::List { sheet: SheetName::Organizations, raw: false } => {
            print_json(&source.organizations().await?)
        }
        DataCommand::Get { sheet, id, raw } => {
            let found = match (sheet, raw) {
                (_, true) => source
                    .lookup_row(sheet, &id)
                    .await?
                    .map(serde_json::to_value)
                    .transpose()?,
                (SheetName::Services, false) => source
                    .service(&id)
                    .await?
                    .map(serde_json::to_value)
                    .transpose()?,
                (SheetName::Organizations, false) => source
                    .organization(&id)
                    .await?
                    .map(serde_json::to_value)
                    .transpose()?,
            };
            match found {
                Some(value) => print_json(&value),
                None => anyhow::bail!("{} '{}' not found", sheet, id),
            }
        }
        DataCommand::All => {
            let (services, organizations) =
                futures::future::try_join(source.services(), source.organizations()).await?;
            info!(
                services = services.len(),
                organizations = organizations.len(),
                "Fetched all sheets"
            );
            print_json(&AllData { services, organizations })
        }
        DataCommand::MapUrl { address } => {
            println!("{}", source.map_url(&address));
            Ok(())
        }
    }
}
