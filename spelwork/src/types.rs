//! Core record types for the SPELWork engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use scoring::{BiasSeverity, BiasStatus, BiasType, TrustDimension, TrustTrend};

/// A recorded organizational objective with derived quality scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wish {
    /// Unique wish ID
    pub id: String,
    /// Free-text description
    pub description: String,
    /// How well the wish is articulated (0.0 - 1.0)
    pub clarity: f32,
    /// How well the system understands it (0.0 - 1.0)
    pub coherence: f32,
    /// Fit with organizational capabilities (0.0 - 1.0)
    pub alignment: f32,
    /// Named stakeholders, insertion ordered and unique
    pub stakeholders: Vec<String>,
    /// When the wish was created
    pub created: DateTime<Utc>,
    /// When the wish was last evaluated
    pub updated: DateTime<Utc>,
    /// Guidance and context that feed the scores
    pub metadata: WishMetadata,
}

impl Wish {
    /// Mean of clarity, coherence and alignment.
    pub fn quality(&self) -> f32 {
        (self.clarity + self.coherence + self.alignment) / 3.0
    }

    /// Whether any of the three scores is below `threshold`.
    pub fn falls_below(&self, threshold: f32) -> bool {
        self.clarity < threshold || self.coherence < threshold || self.alignment < threshold
    }
}

/// Metadata bag attached to a wish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishMetadata {
    /// Expert guidance provided at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expert_guidance: Option<String>,
    /// Domain knowledge merged in by an expert review
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_knowledge: Option<HashMap<String, serde_json::Value>>,
    /// Free-form context
    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
}

/// A directed dependency between two wishes sharing stakeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishDependency {
    /// Earlier wish
    pub from: String,
    /// Later wish
    pub to: String,
    /// Why the edge exists
    pub reason: String,
}

/// A conflict between two wishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishConflict {
    /// First wish
    pub wish_a: String,
    /// Second wish
    pub wish_b: String,
    /// Why they conflict
    pub reason: String,
}

/// Result of relationship analysis over a set of wishes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishRelationships {
    /// Dependency edges in pair order
    pub dependencies: Vec<WishDependency>,
    /// Always empty; conflict detection is not implemented
    pub conflicts: Vec<WishConflict>,
}

/// Current trust assessment for one dimension of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustMetric {
    /// Dimension assessed
    pub dimension: TrustDimension,
    /// Score (0.0 - 1.0)
    pub score: f32,
    /// Evidence supporting the score
    pub evidence: Vec<String>,
    /// When the dimension was last assessed
    pub last_assessed: DateTime<Utc>,
    /// Direction of change
    pub trend: TrustTrend,
}

/// Immutable snapshot of an ethics assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicsEvaluation {
    /// Ethics of the wish itself
    pub wish_ethics: f32,
    /// Ethics of the process
    pub process_ethics: f32,
    /// Ethics of the outcome
    pub outcome_ethics: f32,
    /// Impact score per stakeholder
    pub stakeholder_impact: HashMap<String, f32>,
    /// Concerns raised
    pub concerns: Vec<String>,
    /// Assessor recommendations
    pub recommendations: Vec<String>,
    /// Who made the assessment
    pub assessed_by: String,
    /// When the assessment was recorded
    pub assessed_at: DateTime<Utc>,
}

impl EthicsEvaluation {
    /// Mean of the three sub-scores. Inputs are not clamped.
    pub fn triad_score(&self) -> f32 {
        (self.wish_ethics + self.process_ethics + self.outcome_ethics) / 3.0
    }
}

/// Inputs for an ethics assessment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EthicsAssessment {
    /// Ethics of the wish itself
    pub wish_ethics: f32,
    /// Ethics of the process
    pub process_ethics: f32,
    /// Ethics of the outcome
    pub outcome_ethics: f32,
    /// Impact score per stakeholder
    pub stakeholder_impact: HashMap<String, f32>,
    /// Concerns raised
    pub concerns: Vec<String>,
    /// Assessor recommendations
    pub recommendations: Vec<String>,
    /// Who is making the assessment
    pub assessed_by: String,
}

/// A recorded concern about systematic unfairness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasDetection {
    /// Stable detection ID
    pub id: String,
    /// Bias category
    pub bias_type: BiasType,
    /// Severity
    pub severity: BiasSeverity,
    /// Description
    pub description: String,
    /// Components affected by the bias
    pub affected_components: Vec<String>,
    /// Suggested mitigations
    pub mitigation_strategies: Vec<String>,
    /// When the bias was detected
    pub detected_at: DateTime<Utc>,
    /// Lifecycle status
    pub status: BiasStatus,
}

/// Inputs for recording a bias detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiasReport {
    /// Bias category
    pub bias_type: BiasType,
    /// Description
    pub description: String,
    /// Components affected by the bias
    pub affected_components: Vec<String>,
    /// Severity
    pub severity: BiasSeverity,
}

/// Expertise boundary within an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Unique domain ID
    pub id: String,
    /// Name
    pub name: String,
    /// Boundaries of the domain
    pub boundaries: Vec<String>,
    /// Expertise held
    pub expertise: Vec<String>,
    /// Controls applied
    pub controls: Vec<String>,
    /// Free-form context
    pub context: HashMap<String, serde_json::Value>,
    /// Created at
    pub created: DateTime<Utc>,
    /// Updated at
    pub updated: DateTime<Utc>,
}

/// Kind of organizational resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Physical,
    Information,
    Transformative,
    Relational,
    Purpose,
}

/// An available asset or capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Unique resource ID
    pub id: String,
    /// Name
    pub name: String,
    /// Kind
    pub kind: ResourceKind,
    /// Availability (0.0 - 1.0)
    pub availability: f32,
    /// Capacity in resource-specific units
    pub capacity: f64,
    /// Quality (0.0 - 1.0)
    pub quality: f32,
    /// Free-form metadata
    pub metadata: HashMap<String, serde_json::Value>,
    /// Created at
    pub created: DateTime<Utc>,
    /// Updated at
    pub updated: DateTime<Utc>,
}

/// Role of a node in the process lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowNodeKind {
    Wish,
    Activity,
    Resource,
    Outcome,
    Boundary,
}

/// Point on the lattice canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A point in the process lattice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique node ID
    pub id: String,
    /// Role
    pub kind: FlowNodeKind,
    /// Name
    pub name: String,
    /// Layout position
    pub position: Position,
    /// Free-form properties
    pub properties: HashMap<String, serde_json::Value>,
    /// Created at
    pub created: DateTime<Utc>,
    /// Updated at
    pub updated: DateTime<Utc>,
}

/// Kind of connection between lattice nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowEdgeKind {
    Energy,
    Transformation,
    Dependency,
    Feedback,
}

/// A connection between two lattice nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Unique edge ID
    pub id: String,
    /// Kind
    pub kind: FlowEdgeKind,
    /// Source node ID
    pub source: String,
    /// Target node ID
    pub target: String,
    /// Weight (0.0 - 1.0)
    pub weight: f32,
    /// Free-form properties
    pub properties: HashMap<String, serde_json::Value>,
    /// Created at
    pub created: DateTime<Utc>,
    /// Updated at
    pub updated: DateTime<Utc>,
}

/// Aggregate container for one organizational process model.
///
/// Scores are never read off this snapshot; the analyzer recomputes them
/// from the evaluators' own histories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessLattice {
    /// Unique lattice ID
    pub id: String,
    /// Name
    pub name: String,
    /// Description
    pub description: String,
    #[serde(default)]
    pub nodes: Vec<FlowNode>,
    #[serde(default)]
    pub edges: Vec<FlowEdge>,
    #[serde(default)]
    pub wishes: Vec<Wish>,
    #[serde(default)]
    pub domains: Vec<Domain>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub trust_metrics: Vec<TrustMetric>,
    #[serde(default)]
    pub ethics_evaluations: Vec<EthicsEvaluation>,
    #[serde(default)]
    pub bias_detections: Vec<BiasDetection>,
    /// Created at
    pub created: DateTime<Utc>,
    /// Updated at
    pub updated: DateTime<Utc>,
    /// Model version
    pub version: String,
}

/// Direction of a metric trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// Trend annotation on an analytics result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricTrend {
    pub direction: TrendDirection,
    pub confidence: f32,
}

/// One named metric of a lattice report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    /// Metric name
    pub metric: String,
    /// Value
    pub value: f32,
    /// Unit
    pub unit: String,
    /// When the metric was computed
    pub timestamp: DateTime<Utc>,
    /// Context (lattice ID)
    pub context: HashMap<String, serde_json::Value>,
    /// Trend, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<MetricTrend>,
}

impl AnalyticsResult {
    /// Create a score metric for a lattice.
    pub fn score(metric: &str, value: f32, lattice_id: &str, timestamp: DateTime<Utc>) -> Self {
        let mut context = HashMap::new();
        context.insert(
            "lattice_id".to_string(),
            serde_json::Value::String(lattice_id.to_string()),
        );

        Self {
            metric: metric.to_string(),
            value,
            unit: "score".to_string(),
            timestamp,
            context,
            trend: None,
        }
    }
}

/// Composite lattice report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticeAnalysis {
    /// Mean wish quality
    pub health: AnalyticsResult,
    /// Overall trust
    pub trust: AnalyticsResult,
    /// Overall ethics
    pub ethics: AnalyticsResult,
    /// Bias level (lower is better)
    pub bias: AnalyticsResult,
    /// Advisory text
    pub recommendations: Vec<String>,
}

/// Kind of record a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Wish,
    Lattice,
    Component,
    BiasDetection,
}

impl RecordKind {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Wish => "wish",
            RecordKind::Lattice => "lattice",
            RecordKind::Component => "component",
            RecordKind::BiasDetection => "bias detection",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error types for SPELWork.
#[derive(Debug, thiserror::Error)]
pub enum SpelworkError {
    /// Unknown identity
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// Malformed input record
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl SpelworkError {
    /// Build a not-found error.
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SpelworkError>;
