//! The typed symbol universe of a planning problem
//!
//! This module provides the fundamental types for representing typed
//! first-order planning languages: sorts, terms, formulas, substitutions and
//! the declaration table that ties them together.

pub mod formula;
pub mod interner;
pub mod language;
pub mod sort;
pub mod substitution;
pub mod term;

// Re-export commonly used types
pub use formula::{Atom, AtomDisplay, Connective, Formula, FormulaDisplay, PredicateSymbol, Quantifier};
pub use interner::{ConstantId, FunctionId, Interner, PredicateId, SortId, VariableId};
pub use language::{FunctionSignature, Language};
pub use sort::SortDomain;
pub use substitution::Substitution;
pub use term::{Constant, FunctionSymbol, Term, TermDisplay, Value, Variable};
