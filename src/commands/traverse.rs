//! `graphkit dfs` and `graphkit bfs`

use graphkit_core::algos::{bfs, dfs, dfs_iterative};
use graphkit_core::error::Result;
use graphkit_core::format::render_order;
use graphkit_core::NodeId;
use serde_json::json;

use super::dispatch::macros::trace_algorithm;
use super::dispatch::CommandContext;
use super::print_json;
use crate::output_by_format_result;

pub fn execute_dfs(ctx: &CommandContext, source: Option<NodeId>, iterative: bool) -> Result<()> {
    let mut store = ctx.load_graph()?;
    let source = ctx.source(source);
    let order = if iterative {
        dfs_iterative(&mut *store, source)?
    } else {
        dfs(&mut *store, source)?
    };
    let algorithm = if iterative { "dfs-iterative" } else { "dfs" };
    trace_algorithm!(ctx, algorithm, source = source, visited = order.len());

    report(ctx, algorithm, source, &order)
}

pub fn execute_bfs(ctx: &CommandContext, source: Option<NodeId>) -> Result<()> {
    let mut store = ctx.load_graph()?;
    let source = ctx.source(source);
    let order = bfs(&mut *store, source)?;
    trace_algorithm!(ctx, "bfs", source = source, visited = order.len());

    report(ctx, "bfs", source, &order)
}

fn report(ctx: &CommandContext, algorithm: &str, source: NodeId, order: &[NodeId]) -> Result<()> {
    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({
                "algorithm": algorithm,
                "source": source,
                "order": order,
            }))
        },
        human => {
            println!("{}", render_order(order));
        }
    )
}
