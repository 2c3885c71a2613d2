//! Command-line front-end for the build planner.
//!
//! Run with: `cargo run -p planner-bootstrap --bin planner -- <command>`

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use planner_bootstrap::{BootstrapConfig, PlannerSetup, init_tracing};
use planner_core::{BuildPayload, ItemCategory, UserId};
use planner_runtime::{BuildQuery, Planner};

/// Build planner tools
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Derived stats and listings for saved builds", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Save build payloads (JSON) and print their build sheets
    Sheet(Sheet),

    /// Browse saved builds, newest first
    Browse(Browse),

    /// List catalog items of one category
    Catalog(Catalog),
}

#[derive(Parser, Debug)]
struct Sheet {
    /// Payload files to save
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Owner of the saved builds (default: a fresh id)
    #[arg(long)]
    owner: Option<UserId>,
}

#[derive(Parser, Debug)]
struct Browse {
    /// Case-insensitive match on build name or author
    #[arg(long)]
    search: Option<String>,

    /// Zero-based page index
    #[arg(long, default_value_t = 0)]
    page: usize,

    /// Builds per page (default: configured page size)
    #[arg(long)]
    page_size: Option<usize>,
}

#[derive(Parser, Debug)]
struct Catalog {
    /// Item category, e.g. `weapons` or `crystal_tears`
    category: ItemCategory,

    /// Case-insensitive match on item name
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = BootstrapConfig::from_env();
    init_tracing()?;

    let cli = Cli::parse();
    let planner = PlannerSetup::from_config(&config)?;

    match cli.command {
        Command::Sheet(cmd) => cmd.execute(&planner).await,
        Command::Browse(cmd) => cmd.execute(&planner).await,
        Command::Catalog(cmd) => cmd.execute(&planner),
    }
}

impl Sheet {
    async fn execute(self, planner: &Planner) -> Result<()> {
        let owner = self.owner.unwrap_or_else(UserId::new_v4);
        for file in &self.files {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let payload: BuildPayload = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse {}", file.display()))?;

            let build_id = planner
                .create_build(owner, &payload)
                .await
                .with_context(|| format!("Rejected {}", file.display()))?;
            let sheet = planner
                .build_sheet(build_id, Some(owner))
                .await?
                .with_context(|| format!("Build {} vanished after saving", build_id))?;

            println!("{}", serde_json::to_string_pretty(&sheet)?);
        }
        Ok(())
    }
}

impl Browse {
    async fn execute(self, planner: &Planner) -> Result<()> {
        let query = BuildQuery {
            search: self.search,
            page: self.page,
            page_size: self.page_size,
        };
        let summaries = planner.browse(&query).await?;
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        Ok(())
    }
}

impl Catalog {
    fn execute(self, planner: &Planner) -> Result<()> {
        let items = planner.catalog_items(self.category, self.search.as_deref());
        println!("{}", serde_json::to_string_pretty(&items)?);
        Ok(())
    }
}
