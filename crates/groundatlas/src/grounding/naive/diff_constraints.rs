//! Ground differential constraint computation

use super::{expand_schema, verify_classified, Schema};
use crate::config::GroundingConfig;
use crate::error::Result;
use crate::fol::{Language, Substitution};
use crate::fstrips::{DifferentialConstraint, GroundDifferentialBody, ParameterBinding, Problem};
use crate::grounding::classify::{formula_references, term_references};
use crate::grounding::SymbolClassification;
use indexmap::{IndexMap, IndexSet};

impl Schema for DifferentialConstraint {
    type Body = GroundDifferentialBody;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &ParameterBinding {
        &self.parameters
    }

    fn instantiate(
        &self,
        _language: &Language,
        subst: &Substitution,
    ) -> Result<GroundDifferentialBody> {
        Ok(GroundDifferentialBody {
            condition: self.condition.substitute(subst),
            variate: self.variate.substitute(subst),
            ode: self.ode.substitute(subst),
        })
    }
}

/// Expands every differential constraint schema into ground constraints
pub struct DifferentialConstraintGrounder;

impl DifferentialConstraintGrounder {
    /// Ground all differential constraint schemas, replacing
    /// `problem.ground_differential_constraints`
    pub fn ground_all(
        problem: &mut Problem,
        classification: &SymbolClassification,
    ) -> Result<usize> {
        Self::ground_all_with(problem, classification, &GroundingConfig::default())
    }

    /// Ground all differential constraint schemas under a resource guard
    pub fn ground_all_with(
        problem: &mut Problem,
        classification: &SymbolClassification,
        config: &GroundingConfig,
    ) -> Result<usize> {
        let mut ground = IndexMap::new();
        for constraint in problem.differential_constraints.values() {
            let mut references = IndexSet::new();
            formula_references(&constraint.condition, &mut references);
            term_references(&constraint.variate, &mut references);
            term_references(&constraint.ode, &mut references);
            verify_classified(&constraint.name, &references, classification)?;
            for instance in expand_schema(&problem.language, constraint, config)? {
                ground.insert(instance.key(), instance);
            }
        }
        let count = ground.len();
        problem.ground_differential_constraints = ground;
        Ok(count)
    }
}
