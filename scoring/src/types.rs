//! Closed vocabularies shared by the scoring functions and the record types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of trustworthiness evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustDimension {
    /// Processes are followed predictably
    Procedural,
    /// Actor has the skill to deliver
    Competence,
    /// Commitments are honoured
    Contractual,
    /// Information is shared openly
    Communication,
    /// Shared identity and values
    Identification,
}

impl TrustDimension {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Procedural => "procedural",
            Self::Competence => "competence",
            Self::Contractual => "contractual",
            Self::Communication => "communication",
            Self::Identification => "identification",
        }
    }

    /// All dimensions in declaration order.
    pub fn all() -> [Self; 5] {
        [
            Self::Procedural,
            Self::Competence,
            Self::Contractual,
            Self::Communication,
            Self::Identification,
        ]
    }
}

impl fmt::Display for TrustDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction a trust metric is moving in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrustTrend {
    /// Getting better
    Improving,
    /// No observed change
    #[default]
    Stable,
    /// Getting worse
    Declining,
}

/// Origin of a systematic unfairness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasType {
    /// Built into organizational structures
    Structural,
    /// Introduced by how data is collected or measured
    DataMeasurement,
    /// Introduced by individual judgement
    CognitiveBehavioral,
}

impl BiasType {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::DataMeasurement => "data_measurement",
            Self::CognitiveBehavioral => "cognitive_behavioral",
        }
    }
}

impl fmt::Display for BiasType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a bias detection, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiasSeverity {
    /// Worth noting
    Low,
    /// Requires attention
    Medium,
    /// Escalated mitigation needed
    High,
    /// Escalated mitigation needed urgently
    Critical,
}

impl BiasSeverity {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Whether this severity calls for an escalation strategy.
    pub fn is_escalated(&self) -> bool {
        *self >= Self::High
    }
}

/// Lifecycle of a bias detection: `open -> mitigating -> resolved`.
///
/// Forward-only movement is a caller convention; nothing here rejects a
/// regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BiasStatus {
    /// Newly detected
    #[default]
    Open,
    /// Mitigation in progress
    Mitigating,
    /// Closed out
    Resolved,
}

impl BiasStatus {
    /// Open or mitigating.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::Mitigating)
    }
}
