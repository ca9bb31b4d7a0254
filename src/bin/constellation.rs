//! Constellation CLI — build and query keyword constellation graphs.
//!
//! Usage:
//!   constellation graph [--input path] [--pretty]
//!   constellation neighbors <node-id> [--k 5] [--input path]
//!   constellation profile [--input path] [--pretty]

use clap::{Parser, Subcommand};
use constellation::{
    parse_snapshot, sync_profiles, ConstellationEngine, ConstellationError, EngineConfig,
    NodeId, RawKeywordRecord,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "constellation",
    version,
    about = "Constellation graph engine for research-keyword framing"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the full graph (nodes + edges) and print it as JSON
    Graph {
        /// Path to the keyword snapshot (JSON array of records)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Path to an engine configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the top-k neighbors of a node
    Neighbors {
        /// Node id to query
        node_id: String,
        /// Number of neighbors to return
        #[arg(long, default_value_t = 5)]
        k: usize,
        /// Path to the keyword snapshot (JSON array of records)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Path to an engine configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Print derived keyword profiles (orientation/role distributions)
    Profile {
        /// Path to the keyword snapshot (JSON array of records)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },
}

/// Get the default snapshot path (~/.local/share/constellation/keywords.json)
fn default_input_path() -> PathBuf {
    let data_dir = dirs::data_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_default().join(".local/share"));
    data_dir.join("constellation").join("keywords.json")
}

fn load_snapshot(input: Option<PathBuf>) -> Result<Vec<RawKeywordRecord>, ConstellationError> {
    let path = input.unwrap_or_else(default_input_path);
    let text = std::fs::read_to_string(&path)?;
    parse_snapshot(&text)
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig, ConstellationError> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<(), ConstellationError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}

fn cmd_graph(input: Option<PathBuf>, config: Option<PathBuf>, pretty: bool) -> i32 {
    let result = (|| {
        let records = load_snapshot(input)?;
        let config = load_config(config.as_deref())?;
        let graph = ConstellationEngine::with_config(config).build(&records);
        print_json(&graph, pretty)
    })();
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_neighbors(
    node_id: &str,
    k: usize,
    input: Option<PathBuf>,
    config: Option<PathBuf>,
) -> i32 {
    let result = (|| {
        let records = load_snapshot(input)?;
        let config = load_config(config.as_deref())?;
        let engine = ConstellationEngine::with_config(config);
        let neighbors = engine.neighbors(&records, &NodeId::from_string(node_id), k);
        print_json(&neighbors, false)
    })();
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn cmd_profile(input: Option<PathBuf>, pretty: bool) -> i32 {
    let result = (|| {
        let records = load_snapshot(input)?;
        print_json(&sync_profiles(&records), pretty)
    })();
    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

fn main() {
    // Logs go to stderr so stdout stays valid JSON.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let code = match cli.command {
        Commands::Graph { input, config, pretty } => cmd_graph(input, config, pretty),
        Commands::Neighbors { node_id, k, input, config } => {
            cmd_neighbors(&node_id, k, input, config)
        }
        Commands::Profile { input, pretty } => cmd_profile(input, pretty),
    };
    std::process::exit(code);
}
