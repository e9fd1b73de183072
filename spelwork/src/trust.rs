//! Trust evaluation.
//!
//! Each component holds at most one current metric per dimension. A new
//! evaluation for a dimension replaces the previous one.

use chrono::Utc;
use std::collections::HashMap;
use tracing::debug;

use scoring::{trust_score, TrustDimension, TrustTrend};

use crate::ledger::KeyedSlots;
use crate::types::TrustMetric;

/// Overall trust when nothing has been assessed yet.
pub const DEFAULT_OVERALL_TRUST: f32 = 0.7;

/// Store of current trust metrics per component.
#[derive(Debug, Default)]
pub struct TrustManager {
    /// Current metric per dimension, by component ID
    metrics: HashMap<String, KeyedSlots<TrustDimension, TrustMetric>>,
}

impl TrustManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `dimension` for a component and replace any earlier metric for it.
    pub fn evaluate_trust(
        &mut self,
        component_id: &str,
        dimension: TrustDimension,
        evidence: Vec<String>,
    ) -> TrustMetric {
        self.evaluate_trust_with_trend(component_id, dimension, evidence, TrustTrend::Stable)
    }

    /// Like [`evaluate_trust`](Self::evaluate_trust) with an explicit trend.
    pub fn evaluate_trust_with_trend(
        &mut self,
        component_id: &str,
        dimension: TrustDimension,
        evidence: Vec<String>,
        trend: TrustTrend,
    ) -> TrustMetric {
        let metric = TrustMetric {
            dimension,
            score: trust_score(dimension, evidence.len()),
            evidence,
            last_assessed: Utc::now(),
            trend,
        };

        let replaced = self
            .metrics
            .entry(component_id.to_string())
            .or_default()
            .upsert(dimension, metric.clone());

        debug!(
            component_id = %component_id,
            dimension = %dimension,
            score = metric.score,
            replaced = replaced.is_some(),
            "Evaluated trust"
        );

        metric
    }

    /// Current metrics for a component, in dimension order.
    pub fn trust_metrics(&self, component_id: &str) -> Vec<&TrustMetric> {
        self.metrics
            .get(component_id)
            .map(|slots| slots.values().collect())
            .unwrap_or_default()
    }

    /// Current metrics for one dimension across all components.
    pub fn trust_by_dimension(&self, dimension: TrustDimension) -> Vec<&TrustMetric> {
        self.metrics
            .values()
            .filter_map(|slots| slots.get(&dimension))
            .collect()
    }

    /// Mean score of every stored metric, or [`DEFAULT_OVERALL_TRUST`] when
    /// there are none.
    pub fn overall_trust(&self) -> f32 {
        let scores: Vec<f32> = self
            .metrics
            .values()
            .flat_map(|slots| slots.values().map(|m| m.score))
            .collect();

        if scores.is_empty() {
            return DEFAULT_OVERALL_TRUST;
        }

        scores.iter().sum::<f32>() / scores.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evidence(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("evidence {i}")).collect()
    }

    #[test]
    fn test_empty_store_default() {
        let manager = TrustManager::new();
        assert_eq!(manager.overall_trust(), 0.7);
        assert!(manager.trust_metrics("nobody").is_empty());
    }

    #[test]
    fn test_evaluate_competence() {
        let mut manager = TrustManager::new();
        let metric = manager.evaluate_trust("component", TrustDimension::Competence, evidence(3));

        assert_eq!(metric.dimension, TrustDimension::Competence);
        assert_eq!(metric.score, 0.7);
        assert_eq!(metric.evidence.len(), 3);
        assert_eq!(metric.trend, TrustTrend::Stable);
    }

    #[test]
    fn test_same_dimension_replaces() {
        let mut manager = TrustManager::new();
        manager.evaluate_trust("component", TrustDimension::Procedural, evidence(1));
        manager.evaluate_trust("component", TrustDimension::Procedural, evidence(3));

        let metrics = manager.trust_metrics("component");
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].score, 0.8);
    }

    #[test]
    fn test_overall_is_mean_of_all_components() {
        let mut manager = TrustManager::new();
        // procedural 0.8, contractual 0.6
        manager.evaluate_trust("a", TrustDimension::Procedural, evidence(3));
        manager.evaluate_trust("b", TrustDimension::Contractual, evidence(0));

        assert!((manager.overall_trust() - 0.7).abs() < 1e-6);
        assert_eq!(manager.trust_by_dimension(TrustDimension::Procedural).len(), 1);
    }

    #[test]
    fn test_explicit_trend() {
        let mut manager = TrustManager::new();
        let metric = manager.evaluate_trust_with_trend(
            "component",
            TrustDimension::Communication,
            evidence(5),
            TrustTrend::Improving,
        );
        assert_eq!(metric.trend, TrustTrend::Improving);
        assert_eq!(metric.score, 0.7);
    }
}
