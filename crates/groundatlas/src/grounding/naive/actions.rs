//! Ground action computation

use super::{expand_schema, flatten_effects, verify_effect_targets, Schema};
use crate::config::GroundingConfig;
use crate::error::Result;
use crate::fol::{Language, Substitution};
use crate::fstrips::{Action, GroundActionBody, ParameterBinding, Problem};
use crate::grounding::SymbolClassification;
use indexmap::IndexMap;

impl Schema for Action {
    type Body = GroundActionBody;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &ParameterBinding {
        &self.parameters
    }

    fn instantiate(&self, language: &Language, subst: &Substitution) -> Result<GroundActionBody> {
        Ok(GroundActionBody {
            precondition: self.precondition.substitute(subst),
            effects: flatten_effects(language, &self.effects, subst)?,
        })
    }
}

/// Expands every action schema into the complete set of ground actions
pub struct ActionGrounder;

impl ActionGrounder {
    /// Ground all action schemas, replacing `problem.ground_actions`
    ///
    /// Deterministically repopulates the collection, so re-running cannot
    /// duplicate instances. Returns the number of ground actions.
    pub fn ground_all(
        problem: &mut Problem,
        classification: &SymbolClassification,
    ) -> Result<usize> {
        Self::ground_all_with(problem, classification, &GroundingConfig::default())
    }

    /// Ground all action schemas under a resource guard
    pub fn ground_all_with(
        problem: &mut Problem,
        classification: &SymbolClassification,
        config: &GroundingConfig,
    ) -> Result<usize> {
        let mut ground = IndexMap::new();
        for action in problem.actions.values() {
            verify_effect_targets(&action.name, &action.effects, classification)?;
            for instance in expand_schema(&problem.language, action, config)? {
                ground.insert(instance.key(), instance);
            }
        }
        let count = ground.len();
        problem.ground_actions = ground;
        Ok(count)
    }
}
