//! Numeric edge weights
//!
//! Stores and algorithms are generic over any [`Weight`]. The "unreached"
//! sentinel is never a weight value: tentative distances are `Option<W>`,
//! with `None` meaning no path has been found yet.
//!
//! Path sums go through [`Weight::checked_add`], so an integer path longer
//! than the type can hold is reported as [`GraphError::WeightOverflow`]
//! instead of wrapping.

use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::node::NodeId;

/// A numeric type usable as an edge weight.
pub trait Weight:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// Additive identity, the distance from a node to itself
    const ZERO: Self;

    /// `self + rhs`, or `None` if the sum is not representable
    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_int_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }
            }
        )*
    };
}

// Floats saturate to infinity rather than overflowing
macro_rules! impl_float_weight {
    ($($t:ty),* $(,)?) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
            }
        )*
    };
}

impl_int_weight!(i32, i64, u32, u64);
impl_float_weight!(f32, f64);

/// Relaxation test shared by the shortest-path algorithms.
///
/// With `inclusive` set, ties count as an improvement (`<=`), so the most
/// recently seen predecessor wins.
pub(crate) fn improves<W: Weight>(candidate: W, current: Option<W>, inclusive: bool) -> bool {
    match current {
        None => true,
        Some(best) if inclusive => candidate <= best,
        Some(best) => candidate < best,
    }
}

/// Distance to `from` plus the weight of the hop `from -> to`.
pub(crate) fn path_sum<W: Weight>(base: W, step: W, from: NodeId, to: NodeId) -> Result<W> {
    base.checked_add(step)
        .ok_or(GraphError::WeightOverflow { from, to })
}
