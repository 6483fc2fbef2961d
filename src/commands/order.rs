//! `graphkit toposort` and `graphkit has-cycle`

use graphkit_core::algos::{has_cycle, topological_sort};
use graphkit_core::error::Result;
use graphkit_core::format::render_order;
use serde_json::json;

use super::dispatch::macros::trace_algorithm;
use super::dispatch::CommandContext;
use super::print_json;
use crate::output_by_format_result;

pub fn execute_toposort(ctx: &CommandContext) -> Result<()> {
    let mut store = ctx.load_graph()?;
    let order = topological_sort(&mut *store)?;
    trace_algorithm!(ctx, "toposort", ordered = order.len());

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({ "order": order }))
        },
        human => {
            println!("{}", render_order(&order));
        }
    )
}

pub fn execute_has_cycle(ctx: &CommandContext) -> Result<()> {
    let mut store = ctx.load_graph()?;
    let cyclic = has_cycle(&mut *store)?;
    trace_algorithm!(ctx, "has-cycle", cyclic = cyclic);

    output_by_format_result!(ctx.cli.format,
        json => {
            print_json(&json!({ "cyclic": cyclic }))
        },
        human => {
            println!("{}", cyclic);
        }
    )
}
