//! State variable enumeration: the full propositional state space
//!
//! Expands every fluent symbol over its argument sorts into concrete,
//! variable-free state variables. No filtering is applied; the result is
//! the complete state space a downstream solver ranges over.

use super::classify::{SymbolRef, TermReference};
use super::instantiation::GroundingSpace;
use crate::error::Result;
use crate::fol::{Constant, Interner, Language};
use indexmap::IndexSet;
use std::fmt;

/// A concrete, variable-free fluent term: the unit of the state space
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateVariable {
    pub symbol: SymbolRef,
    pub args: Vec<Constant>,
}

impl StateVariable {
    /// Format this state variable with an interner for name resolution
    pub fn display<'a>(&'a self, interner: &'a Interner) -> StateVariableDisplay<'a> {
        StateVariableDisplay {
            variable: self,
            interner,
        }
    }
}

/// Display wrapper for StateVariable with name resolution
pub struct StateVariableDisplay<'a> {
    variable: &'a StateVariable,
    interner: &'a Interner,
}

impl fmt::Display for StateVariableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.variable.symbol {
            SymbolRef::Predicate(id) => self.interner.resolve_predicate(id),
            SymbolRef::Function(id) => self.interner.resolve_function(id),
        };
        write!(f, "{}(", name)?;
        for (i, arg) in self.variable.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            match arg.value {
                crate::fol::Value::Object(id) => write!(f, "{}", self.interner.resolve_constant(id))?,
                crate::fol::Value::Int(n) => write!(f, "{}", n)?,
            }
        }
        write!(f, ")")
    }
}

/// Lazily enumerate every state variable induced by the fluent references
///
/// Each distinct fluent symbol is expanded exactly once over its declared
/// argument sorts, in first-occurrence order, so the produced sequence is
/// duplicate-free. A fluent reference to an undeclared symbol is an
/// upstream defect and fails the whole enumeration.
pub fn enumerate_state_variables<'a>(
    language: &Language,
    fluent_terms: impl IntoIterator<Item = &'a TermReference>,
) -> Result<StateVariables> {
    let mut seen = IndexSet::new();
    let mut spaces = Vec::new();
    for reference in fluent_terms {
        if !seen.insert(reference.symbol) {
            continue;
        }
        let sorts = match reference.symbol {
            SymbolRef::Predicate(id) => language
                .predicate_signature(id)
                .map(<[_]>::to_vec)
                .ok_or(crate::error::GroundingError::UndeclaredSymbol(id.as_u32()))?,
            SymbolRef::Function(id) => language
                .function_signature(id)
                .map(|sig| sig.arguments.clone())
                .ok_or(crate::error::GroundingError::UndeclaredSymbol(id.as_u32()))?,
        };
        spaces.push((reference.symbol, GroundingSpace::over_sorts(language, &sorts)?));
    }
    Ok(StateVariables {
        spaces,
        current: 0,
        next_rank: 0,
    })
}

/// Lazy iterator over the state variables of a set of fluent symbols
#[derive(Debug, Clone)]
pub struct StateVariables {
    spaces: Vec<(SymbolRef, GroundingSpace)>,
    current: usize,
    next_rank: usize,
}

impl Iterator for StateVariables {
    type Item = StateVariable;

    fn next(&mut self) -> Option<StateVariable> {
        while let Some((symbol, space)) = self.spaces.get(self.current) {
            if self.next_rank < space.cardinality() {
                let args = space.tuple_at(self.next_rank);
                self.next_rank += 1;
                return Some(StateVariable {
                    symbol: *symbol,
                    args,
                });
            }
            self.current += 1;
            self.next_rank = 0;
        }
        None
    }
}
