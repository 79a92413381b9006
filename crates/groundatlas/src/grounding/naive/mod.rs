//! Naive schema grounding
//!
//! One uniform expansion algorithm shared by five thin kind adapters:
//! enumerate every substitution of a schema's parameters, substitute it
//! structurally through the body, flatten universal effects, and emit one
//! ground instance per substitution. No satisfiability or reachability
//! filtering happens here; completeness is traded for combinatorial cost,
//! which the up-front cardinality (and the optional [`GroundingConfig`]
//! limit) lets callers bound before anything is materialized.

pub mod actions;
pub mod constraints;
pub mod diff_constraints;
pub mod reactions;
pub mod sensors;

pub use actions::ActionGrounder;
pub use constraints::ConstraintGrounder;
pub use diff_constraints::DifferentialConstraintGrounder;
pub use reactions::ReactionGrounder;
pub use sensors::SensorGrounder;

use super::classify::{effect_target_refs, SymbolClassification, TermReference};
use super::instantiation::GroundingSpace;
use crate::config::GroundingConfig;
use crate::error::{GroundingError, Result};
use crate::fol::{Language, Substitution};
use crate::fstrips::{Effect, GroundInstance, ParameterBinding};
use indexmap::IndexSet;

/// A parameterized schema that can be expanded into ground instances
pub trait Schema {
    /// The fully substituted body of one ground instance
    type Body;

    /// Schema name (carried onto every instance)
    fn name(&self) -> &str;

    /// The schema's typed parameters
    fn parameters(&self) -> &ParameterBinding;

    /// Build the body under a total substitution of the parameters
    fn instantiate(&self, language: &Language, subst: &Substitution) -> Result<Self::Body>;
}

/// Expand one schema into its complete list of ground instances
pub(crate) fn expand_schema<S: Schema>(
    language: &Language,
    schema: &S,
    config: &GroundingConfig,
) -> Result<Vec<GroundInstance<S::Body>>> {
    let space = GroundingSpace::for_parameters(language, schema.parameters().variables())?;
    if config.exceeds_limit(space.cardinality()) {
        return Err(GroundingError::InstanceLimitExceeded {
            name: schema.name().to_string(),
            cardinality: space.cardinality(),
            limit: config.max_instances,
        });
    }

    let mut instances = Vec::with_capacity(space.cardinality());
    for tuple in space.tuples() {
        let subst = Substitution::bind(space.variables(), &tuple)?;
        let body = schema.instantiate(language, &subst)?;
        instances.push(GroundInstance {
            schema: schema.name().to_string(),
            binding: tuple,
            body,
        });
    }
    Ok(instances)
}

/// Substitute through an effect list, expanding universal effects in place
///
/// A `Universal` effect is replaced by one substituted copy of its body per
/// combination of its own variables, enumerated through the same
/// [`GroundingSpace`] primitive used for schema parameters. Guard conditions
/// survive, substituted, on each flattened effect.
pub(crate) fn flatten_effects(
    language: &Language,
    effects: &[Effect],
    subst: &Substitution,
) -> Result<Vec<Effect>> {
    let mut out = Vec::new();
    for effect in effects {
        flatten_effect(language, effect, subst, &mut out)?;
    }
    Ok(out)
}

fn flatten_effect(
    language: &Language,
    effect: &Effect,
    subst: &Substitution,
    out: &mut Vec<Effect>,
) -> Result<()> {
    match effect {
        Effect::Universal { variables, effects } => {
            let scoped = subst.without(variables);
            let space = GroundingSpace::for_parameters(language, variables)?;
            for tuple in space.tuples() {
                let extended = scoped.extended(variables, &tuple)?;
                for inner in effects {
                    flatten_effect(language, inner, &extended, out)?;
                }
            }
            Ok(())
        }
        basic => {
            out.push(basic.substitute(subst));
            Ok(())
        }
    }
}

/// Check a schema's effect targets against the completed classification
///
/// Every mutation target must have been flagged fluent; a miss means the
/// classification does not belong to this problem (or was computed before
/// the schema existed), which is a fatal consistency defect rather than
/// something to patch up here.
pub(crate) fn verify_effect_targets(
    name: &str,
    effects: &[Effect],
    classification: &SymbolClassification,
) -> Result<()> {
    let mut targets: IndexSet<TermReference> = IndexSet::new();
    for effect in effects {
        effect_target_refs(effect, &mut targets);
    }
    for reference in &targets {
        if !classification.is_fluent(reference) {
            return Err(GroundingError::UnclassifiedReference(name.to_string()));
        }
    }
    Ok(())
}

/// Check that every read reference of a schema body was classified at all
pub(crate) fn verify_classified(
    name: &str,
    references: &IndexSet<TermReference>,
    classification: &SymbolClassification,
) -> Result<()> {
    for reference in references {
        if !classification.contains(reference) {
            return Err(GroundingError::UnclassifiedReference(name.to_string()));
        }
    }
    Ok(())
}
