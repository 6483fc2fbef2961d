//! CLI commands for graphkit

pub mod dispatch;
pub mod order;
pub mod paths;
pub mod print;
pub mod traverse;

use graphkit_core::GraphStore;
use serde_json::{json, Value};

/// JSON view of a loaded graph: known nodes plus every stored edge
pub(crate) fn graph_json<S>(store: &S) -> Value
where
    S: GraphStore<f64> + ?Sized,
{
    json!({
        "directed": store.is_directed(),
        "nodes": store.node_ids(),
        "edges": store.edges(),
    })
}

pub(crate) fn print_json(value: &Value) -> graphkit_core::Result<()> {
    println!("{:#}", value);
    Ok(())
}
