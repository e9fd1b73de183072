//! Configuration for the SPELWork framework.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use scoring::{BiasType, TrustDimension};

use crate::types::Result;

/// Read-only configuration snapshot consulted by the evaluators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameworkConfig {
    /// Minimum acceptable score per trust dimension (declared, not consulted)
    pub trust_thresholds: HashMap<TrustDimension, f32>,
    /// Minimum ethics sub-scores (declared, not consulted)
    pub ethics_requirements: EthicsRequirements,
    /// Tolerated bias level per type (declared, not consulted)
    pub bias_tolerances: HashMap<BiasType, f32>,
    /// Whether complex lattices should be flagged for human oversight
    pub human_oversight_required: bool,
    /// Data retention period (days)
    pub data_retention_days: u32,
    /// Emit audit log lines for analysis reports
    pub auditing_enabled: bool,
    /// Thresholds the evaluators actually apply
    pub advisory: AdvisoryThresholds,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        let trust_thresholds = HashMap::from([
            (TrustDimension::Procedural, 0.7),
            (TrustDimension::Competence, 0.8),
            (TrustDimension::Contractual, 0.7),
            (TrustDimension::Communication, 0.6),
            (TrustDimension::Identification, 0.6),
        ]);

        let bias_tolerances = HashMap::from([
            (BiasType::Structural, 0.3),
            (BiasType::DataMeasurement, 0.2),
            (BiasType::CognitiveBehavioral, 0.4),
        ]);

        Self {
            trust_thresholds,
            ethics_requirements: EthicsRequirements::default(),
            bias_tolerances,
            human_oversight_required: true,
            data_retention_days: 365,
            auditing_enabled: true,
            advisory: AdvisoryThresholds::default(),
        }
    }
}

impl FrameworkConfig {
    /// Load config from YAML. Missing fields take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Minimum ethics sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EthicsRequirements {
    pub minimum_wish_ethics: f32,
    pub minimum_process_ethics: f32,
    pub minimum_outcome_ethics: f32,
}

impl Default for EthicsRequirements {
    fn default() -> Self {
        Self {
            minimum_wish_ethics: 0.7,
            minimum_process_ethics: 0.8,
            minimum_outcome_ethics: 0.7,
        }
    }
}

/// Thresholds behind the advisory recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryThresholds {
    /// A wish with any score below this needs attention
    pub poor_wish_threshold: f32,
    /// Overall trust below this is flagged
    pub trust_floor: f32,
    /// Overall ethics below this is flagged
    pub ethics_floor: f32,
    /// Latest ethics sub-scores below this are flagged per component
    pub ethics_subscore_floor: f32,
    /// Wish scores below this produce per-wish recommendations
    pub wish_recommendation_floor: f32,
    /// Node count above which oversight is recommended
    pub oversight_node_limit: usize,
}

impl Default for AdvisoryThresholds {
    fn default() -> Self {
        Self {
            poor_wish_threshold: 0.6,
            trust_floor: 0.7,
            ethics_floor: 0.7,
            ethics_subscore_floor: 0.7,
            wish_recommendation_floor: 0.7,
            oversight_node_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrameworkConfig::default();
        assert!(config.human_oversight_required);
        assert_eq!(config.data_retention_days, 365);
        assert_eq!(config.trust_thresholds[&TrustDimension::Competence], 0.8);
        assert_eq!(config.bias_tolerances[&BiasType::DataMeasurement], 0.2);
        assert_eq!(config.advisory.oversight_node_limit, 10);
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = FrameworkConfig::default();
        config.human_oversight_required = false;

        let yaml = config.to_yaml().unwrap();
        let parsed = FrameworkConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed = FrameworkConfig::from_yaml("human_oversight_required: false\n").unwrap();
        assert!(!parsed.human_oversight_required);
        assert!(parsed.auditing_enabled);
        assert_eq!(parsed.advisory.trust_floor, 0.7);
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = FrameworkConfig::from_yaml("human_oversight_required: [").unwrap_err();
        assert!(matches!(err, crate::types::SpelworkError::Config(_)));
    }
}
