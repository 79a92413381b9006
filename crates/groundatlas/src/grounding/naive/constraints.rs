//! Ground state constraint computation

use super::{expand_schema, verify_classified, Schema};
use crate::config::GroundingConfig;
use crate::error::Result;
use crate::fol::{Formula, Language, Substitution};
use crate::fstrips::{ParameterBinding, Problem, StateConstraint};
use crate::grounding::classify::formula_references;
use crate::grounding::SymbolClassification;
use indexmap::{IndexMap, IndexSet};

impl Schema for StateConstraint {
    type Body = Formula;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &ParameterBinding {
        &self.parameters
    }

    fn instantiate(&self, _language: &Language, subst: &Substitution) -> Result<Formula> {
        Ok(self.condition.substitute(subst))
    }
}

/// Expands every state constraint schema into ground constraints
pub struct ConstraintGrounder;

impl ConstraintGrounder {
    /// Ground all state constraints, replacing `problem.ground_constraints`
    pub fn ground_all(
        problem: &mut Problem,
        classification: &SymbolClassification,
    ) -> Result<usize> {
        Self::ground_all_with(problem, classification, &GroundingConfig::default())
    }

    /// Ground all state constraints under a resource guard
    pub fn ground_all_with(
        problem: &mut Problem,
        classification: &SymbolClassification,
        config: &GroundingConfig,
    ) -> Result<usize> {
        let mut ground = IndexMap::new();
        for constraint in problem.constraints.values() {
            let mut references = IndexSet::new();
            formula_references(&constraint.condition, &mut references);
            verify_classified(&constraint.name, &references, classification)?;
            for instance in expand_schema(&problem.language, constraint, config)? {
                ground.insert(instance.key(), instance);
            }
        }
        let count = ground.len();
        problem.ground_constraints = ground;
        Ok(count)
    }
}
