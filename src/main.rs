//! reverse-router command line.
//!
//! Loads a routes file, registers every route and generates URLs by name.
//!
//! ```text
//! reverse-router --config routes.toml gen article id=999 title=foo
//! reverse-router --config routes.toml gen article --json '{"id": 1}'
//! reverse-router --config routes.toml routes
//! reverse-router --config routes.toml dump
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use reverse_router::config::{load_config, RouterConfig};
use reverse_router::generator::{RouteGenerator, StdGenerator, Values};
use reverse_router::observability::logging;
use reverse_router::routing::RouteCollector;

#[derive(Parser)]
#[command(name = "reverse-router")]
#[command(about = "Generate URLs for named routes", long_about = None)]
struct Cli {
    /// Routes file (TOML).
    #[arg(short, long, default_value = "routes.toml")]
    config: PathBuf,

    /// Override the configured log level.
    #[arg(short, long)]
    log_level: Option<String>,

    /// Check values against placeholder patterns.
    #[arg(long)]
    validate: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the URL for a named route
    Gen {
        /// Route name
        route: String,
        /// Placeholder values as key=value
        values: Vec<String>,
        /// Placeholder values as a JSON object
        #[arg(long, conflicts_with = "values")]
        json: Option<String>,
    },
    /// List registered routes
    Routes,
    /// Print the parsed route table as JSON
    Dump,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config: RouterConfig = load_config(&cli.config)?;
    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.observability.log_level);
    logging::init(level);

    let collector = RouteCollector::from_config(&config.routes)?;

    match cli.command {
        Commands::Gen { route, values, json } => {
            let values = match json {
                Some(text) => Values::from_json(&serde_json::from_str(&text)?)?,
                None => Values::from_pairs(&values)?,
            };
            let should_validate = cli.validate || config.generator.validate;
            let generator = StdGenerator::with_validation(collector.into_table(), should_validate)?;
            println!("{}", generator.generate(&route, &values)?);
        }
        Commands::Routes => {
            for (name, entry) in collector.parsed_routes().iter() {
                let methods = collector.methods_for(name).unwrap_or_default().join(",");
                println!("{name}\t{methods}\t{} branch(es)", entry.len());
            }
        }
        Commands::Dump => {
            println!("{}", serde_json::to_string_pretty(collector.parsed_routes())?);
        }
    }

    Ok(())
}
