//! Command trait and context for dispatching commands

use std::io::{self, IsTerminal};
use std::time::Instant;

use crate::cli::Cli;
use graphkit_core::error::Result;
use graphkit_core::{EdgeList, GraphConfig, GraphStore, NodeId};

use super::macros::trace_phase;

/// Resolve the effective configuration: file (or defaults), then CLI flags
pub fn resolve_config(cli: &Cli) -> Result<GraphConfig> {
    let mut config = GraphConfig::load_or_default(cli.config.as_deref())?;
    if let Some(kind) = cli.representation {
        config.representation = kind;
    }
    if cli.undirected {
        config.directed = false;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    Ok(config)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GraphConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GraphConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Read the edge list from `--file` or stdin and build the configured store
    pub fn load_graph(&self) -> Result<Box<dyn GraphStore<f64>>> {
        let edges: EdgeList<f64> = match &self.cli.file {
            Some(path) => EdgeList::from_path(path)?,
            None => {
                let stdin = io::stdin();
                if stdin.is_terminal() {
                    trace_phase!(
                        self,
                        "reading edge list from terminal, end input with Ctrl-D"
                    );
                }
                EdgeList::from_reader(stdin.lock())?
            }
        };
        trace_phase!(
            self,
            "read_input",
            nodes = edges.node_count,
            edges = edges.edges.len()
        );

        let store = edges.build(self.config.representation, self.config.directed)?;
        trace_phase!(
            self,
            "build_store",
            known_nodes = store.node_count(),
            stored_edges = store.edges().len()
        );
        Ok(store)
    }

    pub fn precision(&self) -> Option<usize> {
        Some(self.config.precision)
    }

    pub fn source(&self, flag: Option<NodeId>) -> NodeId {
        flag.unwrap_or(self.config.source)
    }

    pub fn destination(&self, flag: Option<NodeId>, size: usize) -> NodeId {
        flag.unwrap_or_else(|| self.config.destination_for(size))
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No subcommand: print the graph, then the Bellman-Ford distance and path
/// between the configured source and destination
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        crate::commands::print::execute_default(ctx)
    }
}
