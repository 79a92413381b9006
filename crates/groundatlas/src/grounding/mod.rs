//! The grounding core: classification, enumeration, and naive expansion
//!
//! Ordering is a strict happens-before chain enforced by call sequence:
//! [`SymbolClassification::classify`] must complete before state variables
//! are enumerated or schemas are grounded (the downstream APIs take the
//! completed classification by reference). Each schema kind's grounding is
//! independent of the others.

pub mod classify;
pub mod instantiation;
pub mod naive;
pub mod state_variables;

pub use classify::{SymbolClassification, SymbolRef, TermReference};
pub use instantiation::{GroundingSpace, Tuples};
pub use naive::{
    ActionGrounder, ConstraintGrounder, DifferentialConstraintGrounder, ReactionGrounder, Schema,
    SensorGrounder,
};
pub use state_variables::{enumerate_state_variables, StateVariable, StateVariables};
