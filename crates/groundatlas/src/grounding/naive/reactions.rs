//! Ground reaction computation

use super::{expand_schema, flatten_effects, verify_effect_targets, Schema};
use crate::config::GroundingConfig;
use crate::error::Result;
use crate::fol::{Language, Substitution};
use crate::fstrips::{GroundReactionBody, ParameterBinding, Problem, Reaction};
use crate::grounding::SymbolClassification;
use indexmap::IndexMap;

impl Schema for Reaction {
    type Body = GroundReactionBody;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &ParameterBinding {
        &self.parameters
    }

    fn instantiate(&self, language: &Language, subst: &Substitution) -> Result<GroundReactionBody> {
        Ok(GroundReactionBody {
            condition: self.condition.substitute(subst),
            effects: flatten_effects(language, std::slice::from_ref(&self.effect), subst)?,
        })
    }
}

/// Expands every reaction schema into the complete set of ground reactions
pub struct ReactionGrounder;

impl ReactionGrounder {
    /// Ground all reaction schemas, replacing `problem.ground_reactions`
    pub fn ground_all(
        problem: &mut Problem,
        classification: &SymbolClassification,
    ) -> Result<usize> {
        Self::ground_all_with(problem, classification, &GroundingConfig::default())
    }

    /// Ground all reaction schemas under a resource guard
    pub fn ground_all_with(
        problem: &mut Problem,
        classification: &SymbolClassification,
        config: &GroundingConfig,
    ) -> Result<usize> {
        let mut ground = IndexMap::new();
        for reaction in problem.reactions.values() {
            verify_effect_targets(
                &reaction.name,
                std::slice::from_ref(&reaction.effect),
                classification,
            )?;
            for instance in expand_schema(&problem.language, reaction, config)? {
                ground.insert(instance.key(), instance);
            }
        }
        let count = ground.len();
        problem.ground_reactions = ground;
        Ok(count)
    }
}
