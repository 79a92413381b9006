//! JSON serialization of grounding results
//!
//! Core types serialize interned ids as raw `u32`; these views resolve ids
//! back to names so downstream consumers get self-contained output.

use crate::fol::{Constant, Interner, Term, Value};
use crate::fstrips::{InstanceKey, Problem};
use crate::grounding::{StateVariable, SymbolRef};
use serde::{Deserialize, Serialize};

/// JSON representation of a term
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TermJson {
    Variable { name: String },
    Constant { name: String },
    Application { function: String, args: Vec<TermJson> },
}

impl TermJson {
    pub fn from_term(term: &Term, interner: &Interner) -> Self {
        match term {
            Term::Variable(v) => TermJson::Variable {
                name: v.name(interner).to_string(),
            },
            Term::Constant(c) => TermJson::Constant {
                name: constant_name(c, interner),
            },
            Term::Application(func, args) => TermJson::Application {
                function: func.name(interner).to_string(),
                args: args.iter().map(|t| TermJson::from_term(t, interner)).collect(),
            },
        }
    }
}

/// JSON representation of a state variable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateVariableJson {
    pub symbol: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub args: Vec<String>,
}

impl StateVariableJson {
    pub fn from_state_variable(variable: &StateVariable, interner: &Interner) -> Self {
        let symbol = match variable.symbol {
            SymbolRef::Predicate(id) => interner.resolve_predicate(id).to_string(),
            SymbolRef::Function(id) => interner.resolve_function(id).to_string(),
        };
        StateVariableJson {
            symbol,
            args: variable
                .args
                .iter()
                .map(|c| constant_name(c, interner))
                .collect(),
        }
    }
}

/// JSON representation of a ground instance key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundInstanceJson {
    pub schema: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub args: Vec<String>,
}

impl GroundInstanceJson {
    pub fn from_key(key: &InstanceKey, interner: &Interner) -> Self {
        GroundInstanceJson {
            schema: key.schema.clone(),
            args: key
                .binding
                .iter()
                .map(|c| constant_name(c, interner))
                .collect(),
        }
    }
}

/// JSON representation of a ground differential constraint, body included
///
/// Unlike the other kinds, the dynamics terms are the payload downstream
/// simulators need, so the variate and its ODE are exported in full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundDifferentialJson {
    pub schema: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub args: Vec<String>,
    pub variate: TermJson,
    pub ode: TermJson,
}

/// The complete grounding output of a problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundingJson {
    pub problem: String,
    pub domain: String,
    pub state_variables: Vec<StateVariableJson>,
    pub actions: Vec<GroundInstanceJson>,
    pub constraints: Vec<GroundInstanceJson>,
    pub sensors: Vec<GroundInstanceJson>,
    pub differential_constraints: Vec<GroundDifferentialJson>,
    pub reactions: Vec<GroundInstanceJson>,
}

impl GroundingJson {
    /// Build the export view from a grounded problem
    pub fn from_problem(problem: &Problem, state_variables: &[StateVariable]) -> Self {
        let interner = problem.language.interner();
        GroundingJson {
            problem: problem.name.clone(),
            domain: problem.domain_name.clone(),
            state_variables: state_variables
                .iter()
                .map(|v| StateVariableJson::from_state_variable(v, interner))
                .collect(),
            actions: keys_to_json(&problem.ground_actions, interner),
            constraints: keys_to_json(&problem.ground_constraints, interner),
            sensors: keys_to_json(&problem.ground_sensors, interner),
            differential_constraints: problem
                .ground_differential_constraints
                .values()
                .map(|instance| GroundDifferentialJson {
                    schema: instance.schema.clone(),
                    args: instance
                        .binding
                        .iter()
                        .map(|c| constant_name(c, interner))
                        .collect(),
                    variate: TermJson::from_term(&instance.body.variate, interner),
                    ode: TermJson::from_term(&instance.body.ode, interner),
                })
                .collect(),
            reactions: keys_to_json(&problem.ground_reactions, interner),
        }
    }
}

fn keys_to_json<B>(
    map: &indexmap::IndexMap<InstanceKey, B>,
    interner: &Interner,
) -> Vec<GroundInstanceJson> {
    map.keys()
        .map(|key| GroundInstanceJson::from_key(key, interner))
        .collect()
}

fn constant_name(constant: &Constant, interner: &Interner) -> String {
    match constant.value {
        Value::Object(id) => interner.resolve_constant(id).to_string(),
        Value::Int(n) => n.to_string(),
    }
}
