//! Catalog Sidebar CLI
//!
//! Lists, validates, and exports the sidebar table.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use catalog_sidebar::Sidebar;
use catalog_sidebar::config::Config;

#[derive(Parser)]
#[command(name = "catalog-sidebar", version, about = "Catalog sidebar menu table")]
struct Cli {
    /// Table file (.json or .toml) to use instead of the built-in table.
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every group and its entries in display order.
    List,
    /// Check the table and exit non-zero on the first problem.
    Validate,
    /// Write the table to stdout.
    Export {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        /// Variable name for script output (default: SIDEBAR_VAR_NAME or sidebar_info).
        #[arg(long)]
        var: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Script,
    Toml,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();

    let config = Config::from_env()
        .context("failed to load configuration")?
        .with_file(cli.file);

    let sidebar = config.sidebar()?;

    let mut out = io::stdout().lock();
    match cli.command {
        Command::List => write_listing(&mut out, &sidebar)?,
        Command::Validate => {
            write_summary(&mut out, &config.source(), &sidebar)?;
            info!(groups = sidebar.len(), "Sidebar table is valid");
        }
        Command::Export { format, var } => {
            let rendered = match format {
                Format::Json => sidebar.to_json()?,
                Format::Script => {
                    let var_name = var.unwrap_or(config.var_name);
                    sidebar.to_script(&var_name)?
                }
                Format::Toml => sidebar.to_toml()?,
            };
            out.write_all(rendered.as_bytes())
                .context("failed to write export")?;
            if !rendered.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

fn write_listing(out: &mut impl Write, sidebar: &Sidebar) -> io::Result<()> {
    for group in sidebar {
        writeln!(out, "{} [{}]", group.name, group.icon_name)?;
        for entry in group.entries() {
            writeln!(out, "  - {} [{}]", entry.label, entry.icon)?;
        }
    }
    Ok(())
}

/// One line per table: where it came from and how much it holds.
fn write_summary(out: &mut impl Write, source: &str, sidebar: &Sidebar) -> io::Result<()> {
    let entries: usize = sidebar.iter().map(|g| g.len()).sum();
    writeln!(
        out,
        "{source}: {} groups, {entries} entries, valid",
        sidebar.len()
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
