//! `graphkit dijkstra`, `graphkit bellman-ford` and `graphkit floyd-warshall`

use graphkit_core::algos::{bellman_ford, dijkstra, floyd_warshall};
use graphkit_core::bail_invalid_ref;
use graphkit_core::error::Result;
use graphkit_core::format::{render_distance, render_path};
use graphkit_core::{GraphStore, NodeId};
use serde_json::json;

use super::dispatch::macros::trace_algorithm;
use super::dispatch::CommandContext;
use super::print_json;
use crate::output_by_format_result;

/// Single-source shortest-path algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dijkstra,
    BellmanFord,
}

impl Solver {
    fn label(self) -> &'static str {
        match self {
            Solver::Dijkstra => "Dijkstra",
            Solver::BellmanFord => "Bellman-Ford",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Solver::Dijkstra => "dijkstra",
            Solver::BellmanFord => "bellman-ford",
        }
    }
}

pub fn execute_single_source(
    ctx: &CommandContext,
    solver: Solver,
    source: Option<NodeId>,
    dest: Option<NodeId>,
) -> Result<()> {
    let mut store = ctx.load_graph()?;
    let source = ctx.source(source);
    let dest = ctx.destination(dest, store.size());
    if !store.contains(dest) {
        bail_invalid_ref!(dest);
    }

    let paths = match solver {
        Solver::Dijkstra => dijkstra(&mut *store, source)?,
        Solver::BellmanFord => bellman_ford(&mut *store, source)?,
    };
    let distance = paths.distance(dest);
    let path = paths.path_to(dest);
    trace_algorithm!(
        ctx,
        solver.key(),
        source = source,
        dest = dest,
        reachable = distance.is_some(),
    );

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "algorithm": solver.key(),
                "source": source,
                "dest": dest,
                "distance": distance,
                "path": path,
            }))
        },
        human => {
            println!(
                "Minimum Distance from Node {} to {} ({}): {}",
                source,
                dest,
                solver.label(),
                render_distance(distance, ctx.precision())
            );
            if !ctx.cli.quiet {
                match &path {
                    Some(path) => println!("Path: {}", render_path(path)),
                    None => println!("Path: none"),
                }
            }
        }
    )
}

pub fn execute_all_pairs(ctx: &CommandContext) -> Result<()> {
    let mut store = ctx.load_graph()?;
    let distances = floyd_warshall(&mut *store)?;
    trace_algorithm!(ctx, "floyd-warshall", size = distances.size());

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "algorithm": "floyd-warshall",
                "size": distances.size(),
                "distances": distances.rows(),
            }))
        },
        human => {
            print!("{}", distances.render(ctx.precision()));
        }
    )
}
