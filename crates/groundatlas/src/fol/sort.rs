//! Sort domains: finite object sets and bounded integer intervals

use super::interner::{ConstantId, SortId};
use super::term::{Constant, Value};
use serde::{Deserialize, Serialize};

/// The domain extension of a sort
///
/// Either an explicit finite set of declared objects (in declaration order)
/// or an integer interval. Interval bounds may be set after the sort itself
/// was declared; an interval with `lower > upper` is empty, which is a valid
/// degenerate domain, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDomain {
    /// Enumerated objects, in declaration order
    Objects(Vec<ConstantId>),
    /// Closed integer interval `[lower, upper]`
    Interval { lower: i64, upper: i64 },
}

impl SortDomain {
    /// Number of values in this domain
    ///
    /// A width wider than `usize` saturates to `usize::MAX`, so callers
    /// comparing against resource limits still see a huge value rather
    /// than a wrapped small one.
    pub fn cardinality(&self) -> usize {
        match self {
            SortDomain::Objects(objects) => objects.len(),
            SortDomain::Interval { lower, upper } => {
                if lower > upper {
                    0
                } else {
                    let width = (*upper as i128) - (*lower as i128) + 1;
                    usize::try_from(width).unwrap_or(usize::MAX)
                }
            }
        }
    }

    /// Enumerate the domain as ground constants of the given sort
    pub fn values(&self, sort: SortId) -> Vec<Constant> {
        match self {
            SortDomain::Objects(objects) => objects
                .iter()
                .map(|&id| Constant::new(Value::Object(id), sort))
                .collect(),
            SortDomain::Interval { lower, upper } => (*lower..=*upper)
                .map(|n| Constant::new(Value::Int(n), sort))
                .collect(),
        }
    }

    /// Whether this is an interval domain
    pub fn is_interval(&self) -> bool {
        matches!(self, SortDomain::Interval { .. })
    }
}
