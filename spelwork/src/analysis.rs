//! Lattice analysis.
//!
//! Composes the per-domain overall scores into one report. The analyzer only
//! borrows read handles: it never touches an evaluator's internal store and
//! knows nothing about evidence formats.
//!
//! Scores are process-wide. `health`, `trust` and `ethics` come from the
//! whole wish, trust and ethics stores, not from the records a particular
//! lattice references; the lattice only has to exist and supplies its node
//! count for the oversight check.

use chrono::Utc;
use tracing::{debug, warn};

use crate::config::FrameworkConfig;
use crate::ethics::EthicsManager;
use crate::lattice::LatticeManager;
use crate::trust::TrustManager;
use crate::types::{
    AnalyticsResult, LatticeAnalysis, ProcessLattice, RecordKind, Result, SpelworkError,
};
use crate::wish::WishManager;

/// Reported bias level. Detections do not feed into it yet.
pub const PLACEHOLDER_BIAS_SCORE: f32 = 0.2;

/// Read-only view over the stores needed to analyze a lattice.
pub struct LatticeAnalyzer<'a> {
    lattices: &'a LatticeManager,
    wishes: &'a WishManager,
    trust: &'a TrustManager,
    ethics: &'a EthicsManager,
    config: &'a FrameworkConfig,
}

impl<'a> LatticeAnalyzer<'a> {
    /// Create an analyzer over the given stores.
    pub fn new(
        lattices: &'a LatticeManager,
        wishes: &'a WishManager,
        trust: &'a TrustManager,
        ethics: &'a EthicsManager,
        config: &'a FrameworkConfig,
    ) -> Self {
        Self {
            lattices,
            wishes,
            trust,
            ethics,
            config,
        }
    }

    /// Produce the composite report for a registered lattice.
    pub fn analyze(&self, lattice_id: &str) -> Result<LatticeAnalysis> {
        let Some(lattice) = self.lattices.get_lattice(lattice_id) else {
            warn!(lattice_id = %lattice_id, "Analysis requested for unknown lattice");
            return Err(SpelworkError::not_found(RecordKind::Lattice, lattice_id));
        };

        let now = Utc::now();
        let health = self.wishes.overall_health();
        let trust = self.trust.overall_trust();
        let ethics = self.ethics.overall_ethics();

        debug!(
            lattice_id = %lattice_id,
            health = health,
            trust = trust,
            ethics = ethics,
            "Computed lattice scores"
        );

        Ok(LatticeAnalysis {
            health: AnalyticsResult::score("lattice_health", health, lattice_id, now),
            trust: AnalyticsResult::score("trust_score", trust, lattice_id, now),
            ethics: AnalyticsResult::score("ethics_score", ethics, lattice_id, now),
            bias: AnalyticsResult::score("bias_score", PLACEHOLDER_BIAS_SCORE, lattice_id, now),
            recommendations: self.recommendations(lattice, trust, ethics),
        })
    }

    /// Independent checks, appended in a fixed order.
    fn recommendations(&self, lattice: &ProcessLattice, trust: f32, ethics: f32) -> Vec<String> {
        let advisory = &self.config.advisory;
        let mut recommendations = Vec::new();

        let poor = self.wishes.poorly_aligned(advisory.poor_wish_threshold).len();
        if poor > 0 {
            recommendations.push(format!(
                "{} wishes need clarity or alignment improvements",
                poor
            ));
        }

        if trust < advisory.trust_floor {
            recommendations.push(
                "Trust levels are below recommended thresholds - review trust-building measures"
                    .to_string(),
            );
        }

        if ethics < advisory.ethics_floor {
            recommendations.push("Ethics evaluation indicates areas for improvement".to_string());
        }

        if self.config.human_oversight_required && lattice.nodes.len() > advisory.oversight_node_limit
        {
            recommendations.push(
                "Consider adding more human oversight points for complex processes".to_string(),
            );
        }

        recommendations
    }
}
