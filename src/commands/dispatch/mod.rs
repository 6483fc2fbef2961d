//! Command dispatch logic for graphkit

use std::time::Instant;

use crate::cli::{Cli, Commands};
use graphkit_core::error::Result;
use tracing::debug;

mod command;
pub(crate) mod macros;

pub use command::CommandContext;
use command::{resolve_config, Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = resolve_config(cli)?;

    debug!(elapsed = ?start.elapsed(), ?config, "resolve_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        use crate::commands::{order, paths, print, traverse};

        match self {
            Commands::Print => print::execute(ctx),
            Commands::Dfs { source, iterative } => traverse::execute_dfs(ctx, *source, *iterative),
            Commands::Bfs { source } => traverse::execute_bfs(ctx, *source),
            Commands::Dijkstra { source, dest } => {
                paths::execute_single_source(ctx, paths::Solver::Dijkstra, *source, *dest)
            }
            Commands::BellmanFord { source, dest } => {
                paths::execute_single_source(ctx, paths::Solver::BellmanFord, *source, *dest)
            }
            Commands::FloydWarshall => paths::execute_all_pairs(ctx),
            Commands::Toposort => order::execute_toposort(ctx),
            Commands::HasCycle => order::execute_has_cycle(ctx),
        }
    }
}
