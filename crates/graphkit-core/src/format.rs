//! Output format handling for graphkit
//!
//! Supports two output formats:
//! - human: the classic text layout (`id:(s, e, w)...`, `(a -> b -> c)`)
//! - json: machine-readable JSON built from the serde representations

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bail_usage;
use crate::error::GraphError;
use crate::node::NodeId;
use crate::store::GraphStore;
use crate::weight::Weight;

/// Output format for graphkit commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => bail_usage!(format!(
                "unknown format: {} (expected: human or json)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format a weight, honoring `precision` for floating-point types.
pub fn render_weight<W: Weight>(weight: W, precision: Option<usize>) -> String {
    match precision {
        Some(p) => format!("{:.*}", p, weight),
        None => weight.to_string(),
    }
}

/// Format a tentative distance; unreached renders as `inf`.
pub fn render_distance<W: Weight>(distance: Option<W>, precision: Option<usize>) -> String {
    match distance {
        Some(w) => render_weight(w, precision),
        None => "inf".to_string(),
    }
}

/// One line per known node, ascending ID: `<id>:(<start>, <end>, <weight>)...`
pub fn render_adjacency<W, S>(store: &S, precision: Option<usize>) -> String
where
    W: Weight,
    S: GraphStore<W> + ?Sized,
{
    let mut out = String::new();
    for id in store.node_ids() {
        let _ = write!(out, "{}:", id);
        for edge in store.adjacent(id).unwrap_or_default() {
            let _ = match precision {
                Some(p) => write!(out, "{:.*}", p, edge),
                None => write!(out, "{}", edge),
            };
        }
        out.push('\n');
    }
    out
}

/// `(a -> b -> c)` from source to destination inclusive
pub fn render_path(path: &[NodeId]) -> String {
    let hops: Vec<String> = path.iter().map(|id| id.to_string()).collect();
    format!("({})", hops.join(" -> "))
}

/// Visitation order as `a, b, c`
pub fn render_order(order: &[NodeId]) -> String {
    order
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
