//! Grounding configuration

/// Resource guard for the naive grounders
///
/// Naive grounding is exponential in parameter count and domain sizes.
/// Because every schema's cardinality is known before any instance is
/// materialized, the guard can refuse up front instead of running out of
/// memory halfway through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroundingConfig {
    /// Maximum ground instances allowed per schema (0 means no limit)
    pub max_instances: usize,
}

impl Default for GroundingConfig {
    fn default() -> Self {
        GroundingConfig {
            max_instances: 0, // 0 means no limit
        }
    }
}

impl GroundingConfig {
    /// A guard rejecting schemas that ground to more than `max_instances`
    pub fn with_limit(max_instances: usize) -> Self {
        GroundingConfig { max_instances }
    }

    /// Whether the given cardinality exceeds the configured limit
    pub fn exceeds_limit(&self, cardinality: usize) -> bool {
        self.max_instances != 0 && cardinality > self.max_instances
    }
}
