//! GroundAtlas: symbol classification and naive grounding for typed
//! first-order planning problems
//!
//! Given a typed planning problem (sorts, predicates, functions, and
//! parameterized action/constraint/sensor/dynamics/reaction schemas), this
//! library partitions every symbol usage into fluent and static sets via a
//! fixpoint analysis, and expands every schema into the complete set of
//! concrete, variable-free instances by enumerating all substitutions of
//! its typed parameters. Grounding is naive by design: complete, with no
//! reachability pruning.

pub mod config;
pub mod error;
pub mod fol;
pub mod fstrips;
pub mod grounding;
pub mod json;

// Re-export commonly used types from fol
pub use fol::{
    Atom, Connective, Constant, ConstantId, Formula, FunctionId, FunctionSymbol, Interner,
    Language, PredicateId, PredicateSymbol, Quantifier, SortDomain, SortId, Substitution, Term,
    Value, Variable, VariableId,
};

// Re-export schema and problem types
pub use fstrips::{
    Action, DifferentialConstraint, Effect, GroundAction, GroundConstraint,
    GroundDifferentialConstraint, GroundInstance, GroundReaction, GroundSensor, InstanceKey,
    ParameterBinding, Problem, Reaction, Sensor, State, StateConstraint,
};

// Re-export the grounding engine
pub use grounding::{
    enumerate_state_variables, ActionGrounder, ConstraintGrounder,
    DifferentialConstraintGrounder, GroundingSpace, ReactionGrounder, SensorGrounder,
    StateVariable, SymbolClassification, SymbolRef, TermReference,
};

pub use config::GroundingConfig;
pub use error::{GroundingError, LanguageError};
pub use json::GroundingJson;
