//! Planning problems: language, schemas, initial state, ground collections

use super::ground::{
    GroundAction, GroundConstraint, GroundDifferentialConstraint, GroundReaction, GroundSensor,
    InstanceKey,
};
use super::schema::{Action, DifferentialConstraint, Reaction, Sensor, StateConstraint};
use crate::error::LanguageError;
use crate::fol::{Atom, Constant, FunctionId, Language};
use indexmap::{IndexMap, IndexSet};

/// The initial-state assignment: true ground atoms plus function values
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Ground atoms true in the initial state
    pub atoms: IndexSet<Atom>,
    /// Initial value of each ground function application
    pub values: IndexMap<(FunctionId, Vec<Constant>), Constant>,
}

impl State {
    /// Create an empty state
    pub fn new() -> Self {
        State::default()
    }

    /// Mark a ground atom as initially true
    pub fn add(&mut self, atom: Atom) {
        debug_assert!(atom.is_ground());
        self.atoms.insert(atom);
    }

    /// Record the initial value of a function application
    pub fn set_value(&mut self, function: FunctionId, args: Vec<Constant>, value: Constant) {
        self.values.insert((function, args), value);
    }
}

/// A planning problem: declarations, schemas, initial state, and the ground
/// collections populated by the grounders
///
/// The language, schemas and initial state are constructed once by the front
/// end and treated as read-only by the grounding core. Ground collections
/// are derived artifacts: insertion-ordered, duplicate-free, addressable by
/// [`InstanceKey`], and deterministically re-derivable.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    pub name: String,
    pub domain_name: String,
    pub language: Language,
    pub init: State,

    pub actions: IndexMap<String, Action>,
    pub constraints: IndexMap<String, StateConstraint>,
    pub sensors: IndexMap<String, Sensor>,
    pub differential_constraints: IndexMap<String, DifferentialConstraint>,
    pub reactions: IndexMap<String, Reaction>,

    pub ground_actions: IndexMap<InstanceKey, GroundAction>,
    pub ground_constraints: IndexMap<InstanceKey, GroundConstraint>,
    pub ground_sensors: IndexMap<InstanceKey, GroundSensor>,
    pub ground_differential_constraints: IndexMap<InstanceKey, GroundDifferentialConstraint>,
    pub ground_reactions: IndexMap<InstanceKey, GroundReaction>,
}

impl Problem {
    /// Create an empty problem over a fresh language
    pub fn new(domain_name: &str, name: &str) -> Self {
        Problem {
            name: name.to_string(),
            domain_name: domain_name.to_string(),
            ..Problem::default()
        }
    }

    /// Add an action schema; duplicate names are rejected
    pub fn add_action(&mut self, action: Action) -> Result<(), LanguageError> {
        if self.actions.contains_key(&action.name) {
            return Err(LanguageError::DuplicateSchema(action.name));
        }
        self.actions.insert(action.name.clone(), action);
        Ok(())
    }

    /// Add a state constraint schema; duplicate names are rejected
    pub fn add_constraint(&mut self, constraint: StateConstraint) -> Result<(), LanguageError> {
        if self.constraints.contains_key(&constraint.name) {
            return Err(LanguageError::DuplicateSchema(constraint.name));
        }
        self.constraints.insert(constraint.name.clone(), constraint);
        Ok(())
    }

    /// Add a sensor schema; duplicate names are rejected
    pub fn add_sensor(&mut self, sensor: Sensor) -> Result<(), LanguageError> {
        if self.sensors.contains_key(&sensor.name) {
            return Err(LanguageError::DuplicateSchema(sensor.name));
        }
        self.sensors.insert(sensor.name.clone(), sensor);
        Ok(())
    }

    /// Add a differential constraint schema; duplicate names are rejected
    pub fn add_differential_constraint(
        &mut self,
        constraint: DifferentialConstraint,
    ) -> Result<(), LanguageError> {
        if self.differential_constraints.contains_key(&constraint.name) {
            return Err(LanguageError::DuplicateSchema(constraint.name));
        }
        self.differential_constraints
            .insert(constraint.name.clone(), constraint);
        Ok(())
    }

    /// Add a reaction schema; duplicate names are rejected
    pub fn add_reaction(&mut self, reaction: Reaction) -> Result<(), LanguageError> {
        if self.reactions.contains_key(&reaction.name) {
            return Err(LanguageError::DuplicateSchema(reaction.name));
        }
        self.reactions.insert(reaction.name.clone(), reaction);
        Ok(())
    }
}
