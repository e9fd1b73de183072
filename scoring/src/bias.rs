//! Bias mitigation strategies.

use crate::types::{BiasSeverity, BiasType};

/// Derive mitigation strategies for a bias of the given type and severity.
///
/// Every type has two baseline strategies. High and critical severities
/// append one escalation strategy after them.
pub fn mitigation_strategies(bias_type: BiasType, severity: BiasSeverity) -> Vec<String> {
    let (baseline, escalation): ([&str; 2], &str) = match bias_type {
        BiasType::Structural => (
            [
                "Review organizational structures for inherent biases",
                "Implement diverse decision-making processes",
            ],
            "Conduct comprehensive structural audit",
        ),
        BiasType::DataMeasurement => (
            [
                "Audit data collection and measurement processes",
                "Implement bias-aware data validation",
            ],
            "Redesign data collection methodology",
        ),
        BiasType::CognitiveBehavioral => (
            [
                "Provide bias awareness training",
                "Implement decision-making checkpoints",
            ],
            "Introduce external oversight and review",
        ),
    };

    let mut strategies: Vec<String> = baseline.iter().map(|s| s.to_string()).collect();
    if severity.is_escalated() {
        strategies.push(escalation.to_string());
    }
    strategies
}
