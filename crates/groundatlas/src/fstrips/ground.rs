//! Ground artifacts: concrete, variable-free schema instances

use super::effect::Effect;
use crate::fol::{Atom, Constant, Formula, Term};
use serde::{Deserialize, Serialize};

/// Stable structural key of a ground instance: schema name plus the
/// concrete argument tuple it was instantiated with
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceKey {
    pub schema: String,
    pub binding: Vec<Constant>,
}

/// A fully substituted instance of some schema
///
/// Immutable once produced; `binding` records the concrete value assigned to
/// each parameter, in parameter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundInstance<B> {
    pub schema: String,
    pub binding: Vec<Constant>,
    pub body: B,
}

impl<B> GroundInstance<B> {
    /// The structural key addressing this instance
    pub fn key(&self) -> InstanceKey {
        InstanceKey {
            schema: self.schema.clone(),
            binding: self.binding.clone(),
        }
    }
}

/// Body of a ground action: precondition plus flat ground effects
/// (universal effects have been expanded away)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundActionBody {
    pub precondition: Formula,
    pub effects: Vec<Effect>,
}

/// Body of a ground sensor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundSensorBody {
    pub condition: Formula,
    pub observation: Atom,
}

/// Body of a ground differential constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundDifferentialBody {
    pub condition: Formula,
    pub variate: Term,
    pub ode: Term,
}

/// Body of a ground reaction: trigger plus flat ground effects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundReactionBody {
    pub condition: Formula,
    pub effects: Vec<Effect>,
}

/// A ground action
pub type GroundAction = GroundInstance<GroundActionBody>;
/// A ground state constraint
pub type GroundConstraint = GroundInstance<Formula>;
/// A ground sensor
pub type GroundSensor = GroundInstance<GroundSensorBody>;
/// A ground differential constraint
pub type GroundDifferentialConstraint = GroundInstance<GroundDifferentialBody>;
/// A ground reaction
pub type GroundReaction = GroundInstance<GroundReactionBody>;
