//! CLI argument parsing for graphkit
//!
//! Uses clap for argument parsing.
//! Supports global flags: --file, --representation, --undirected, --format,
//! --precision, --config, --quiet, --verbose

pub mod format;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use graphkit_core::format::OutputFormat;
use graphkit_core::config::CONFIG_ENV;
use graphkit_core::{NodeId, StoreKind};

/// Graphkit - weighted graph traversal and shortest paths
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list file to read (stdin when omitted)
    #[arg(long, short, global = true)]
    pub file: Option<PathBuf>,

    /// Storage representation: list or matrix
    #[arg(long, global = true)]
    pub representation: Option<StoreKind>,

    /// Mirror every edge instead of treating edges as directed
    #[arg(long, global = true)]
    pub undirected: bool,

    /// Output format: human or json
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Decimal places for printed weights
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, graphkit_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the adjacency of every node
    Print,

    /// Depth-first visiting order
    Dfs {
        /// Start node (default from config)
        #[arg(long, short)]
        source: Option<NodeId>,

        /// Use the stack-based variant (last neighbor explored first)
        #[arg(long)]
        iterative: bool,
    },

    /// Breadth-first visiting order
    Bfs {
        /// Start node (default from config)
        #[arg(long, short)]
        source: Option<NodeId>,
    },

    /// Shortest path with Dijkstra's algorithm (non-negative weights)
    Dijkstra {
        /// Start node (default from config)
        #[arg(long, short)]
        source: Option<NodeId>,

        /// Target node (default from config, else the last node)
        #[arg(long, short)]
        dest: Option<NodeId>,
    },

    /// Shortest path with Bellman-Ford (negative weights allowed)
    BellmanFord {
        /// Start node (default from config)
        #[arg(long, short)]
        source: Option<NodeId>,

        /// Target node (default from config, else the last node)
        #[arg(long, short)]
        dest: Option<NodeId>,
    },

    /// All-pairs shortest distances
    FloydWarshall,

    /// Topological order of a directed acyclic graph
    Toposort,

    /// Report whether a directed graph has a cycle
    HasCycle,
}
