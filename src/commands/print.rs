//! `graphkit print` and the default run

use graphkit_core::algos::bellman_ford;
use graphkit_core::bail_invalid_ref;
use graphkit_core::error::Result;
use graphkit_core::format::{render_adjacency, render_distance, render_path};
use graphkit_core::GraphStore;
use serde_json::json;

use super::dispatch::macros::trace_algorithm;
use super::dispatch::CommandContext;
use super::{graph_json, print_json};
use crate::cli::OutputFormat;
use crate::output_by_format_result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let store = ctx.load_graph()?;

    output_by_format_result!(ctx.cli.format,
        json => {
            let mut value = graph_json(&*store);
            value["representation"] = json!(ctx.config.representation);
            print_json(&value)
        },
        human => {
            print!("{}", render_adjacency(&*store, ctx.precision()));
        }
    )?;

    trace_algorithm!(ctx, "print", nodes = store.node_count());
    Ok(())
}

/// Print the graph, then Bellman-Ford from the configured source to the
/// configured destination. The graph is printed before the search runs, so
/// a negative cycle still leaves the adjacency on stdout.
pub fn execute_default(ctx: &CommandContext) -> Result<()> {
    let mut store = ctx.load_graph()?;
    let source = ctx.source(None);
    let dest = ctx.destination(None, store.size());
    if !store.contains(dest) {
        bail_invalid_ref!(dest);
    }

    if ctx.cli.format == OutputFormat::Human {
        println!("{}", render_adjacency(&*store, ctx.precision()));
    }
    let paths = bellman_ford(&mut *store, source)?;
    let distance = paths.distance(dest);
    let path = paths.path_to(dest);
    trace_algorithm!(
        ctx,
        "bellman-ford",
        source = source,
        dest = dest,
        reachable = distance.is_some(),
    );

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "graph": graph_json(&*store),
                "algorithm": "bellman-ford",
                "source": source,
                "dest": dest,
                "distance": distance,
                "path": path,
            }))
        },
        human => {
            println!(
                "Minimum Distance from Node {} to {} (Bellman-Ford): {}",
                source,
                dest,
                render_distance(distance, ctx.precision())
            );
            if !ctx.cli.quiet {
                if let Some(path) = &path {
                    println!("Path: {}", render_path(path));
                }
            }
        }
    )
}
