//! Ground sensor computation

use super::{expand_schema, verify_classified, Schema};
use crate::config::GroundingConfig;
use crate::error::Result;
use crate::fol::{Language, Substitution};
use crate::fstrips::{GroundSensorBody, ParameterBinding, Problem, Sensor};
use crate::grounding::classify::{atom_references, formula_references};
use crate::grounding::SymbolClassification;
use indexmap::{IndexMap, IndexSet};

impl Schema for Sensor {
    type Body = GroundSensorBody;

    fn name(&self) -> &str {
        &self.name
    }

    fn parameters(&self) -> &ParameterBinding {
        &self.parameters
    }

    fn instantiate(&self, _language: &Language, subst: &Substitution) -> Result<GroundSensorBody> {
        Ok(GroundSensorBody {
            condition: self.condition.substitute(subst),
            observation: self.observation.substitute(subst),
        })
    }
}

/// Expands every sensor schema into the complete set of ground sensors
pub struct SensorGrounder;

impl SensorGrounder {
    /// Ground all sensor schemas, replacing `problem.ground_sensors`
    pub fn ground_all(
        problem: &mut Problem,
        classification: &SymbolClassification,
    ) -> Result<usize> {
        Self::ground_all_with(problem, classification, &GroundingConfig::default())
    }

    /// Ground all sensor schemas under a resource guard
    pub fn ground_all_with(
        problem: &mut Problem,
        classification: &SymbolClassification,
        config: &GroundingConfig,
    ) -> Result<usize> {
        let mut ground = IndexMap::new();
        for sensor in problem.sensors.values() {
            let mut references = IndexSet::new();
            formula_references(&sensor.condition, &mut references);
            atom_references(
                &sensor.observation.predicate,
                &sensor.observation.args,
                &mut references,
            );
            verify_classified(&sensor.name, &references, classification)?;
            for instance in expand_schema(&problem.language, sensor, config)? {
                ground.insert(instance.key(), instance);
            }
        }
        let count = ground.len();
        problem.ground_sensors = ground;
        Ok(count)
    }
}
