//! Parameterized schemas: actions, constraints, sensors, dynamics, reactions

use super::effect::Effect;
use crate::error::LanguageError;
use crate::fol::{Atom, Formula, Interner, Term, Variable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An ordered set of typed parameters with unique names
///
/// Defines a schema's free variables. Construction rejects duplicate
/// parameter names; schema bodies may only reference these variables.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParameterBinding {
    variables: Vec<Variable>,
}

impl ParameterBinding {
    /// An empty binding (zero-parameter schema)
    pub fn empty() -> Self {
        ParameterBinding::default()
    }

    /// Create a binding, rejecting duplicate parameter names
    pub fn new(variables: Vec<Variable>, interner: &Interner) -> Result<Self, LanguageError> {
        let mut seen = HashSet::new();
        for var in &variables {
            if !seen.insert(var.id) {
                return Err(LanguageError::DuplicateParameter(
                    interner.resolve_variable(var.id).to_string(),
                ));
            }
        }
        Ok(ParameterBinding { variables })
    }

    /// The parameters, in declaration order
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether the schema takes no parameters
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// An action schema: precondition plus an ordered list of effects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub parameters: ParameterBinding,
    pub precondition: Formula,
    pub effects: Vec<Effect>,
}

/// A state constraint schema: a formula that must hold in every state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConstraint {
    pub name: String,
    pub parameters: ParameterBinding,
    pub condition: Formula,
}

/// A sensor schema: a condition under which an observation becomes known
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    pub name: String,
    pub parameters: ParameterBinding,
    pub condition: Formula,
    pub observation: Atom,
}

/// A differential constraint schema for hybrid dynamics
///
/// While `condition` holds, `variate` evolves according to `ode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferentialConstraint {
    pub name: String,
    pub parameters: ParameterBinding,
    pub condition: Formula,
    pub variate: Term,
    pub ode: Term,
}

/// A reaction schema: an update triggered whenever its condition holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub name: String,
    pub parameters: ParameterBinding,
    pub condition: Formula,
    pub effect: Effect,
}
