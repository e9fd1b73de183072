//! Ethics evaluation and bias detection.
//!
//! Both histories are append-only per component: new assessments and
//! detections are added, earlier ones are kept. Only a detection's status
//! changes after it is recorded.

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use scoring::{mitigation_strategies, BiasSeverity, BiasStatus};

use crate::ledger::AppendLog;
use crate::types::{
    BiasDetection, BiasReport, EthicsAssessment, EthicsEvaluation, RecordKind, Result,
    SpelworkError,
};

/// Overall ethics when nothing has been assessed yet.
pub const DEFAULT_OVERALL_ETHICS: f32 = 0.8;

/// Store of ethics evaluations and bias detections per component.
#[derive(Debug)]
pub struct EthicsManager {
    /// Evaluation history by component ID
    evaluations: HashMap<String, AppendLog<EthicsEvaluation>>,
    /// Detection history by component ID
    detections: HashMap<String, AppendLog<BiasDetection>>,
    /// Threshold applied to the latest evaluation's sub-scores
    subscore_floor: f32,
}

impl EthicsManager {
    /// Create an empty manager with the default 0.7 sub-score floor.
    pub fn new() -> Self {
        Self::with_subscore_floor(0.7)
    }

    /// Create with a custom sub-score floor for recommendations.
    pub fn with_subscore_floor(subscore_floor: f32) -> Self {
        Self {
            evaluations: HashMap::new(),
            detections: HashMap::new(),
            subscore_floor,
        }
    }

    /// Change the sub-score floor used by recommendations.
    pub fn set_subscore_floor(&mut self, subscore_floor: f32) {
        self.subscore_floor = subscore_floor;
    }

    /// Record an ethics assessment for a component.
    pub fn evaluate_ethics(
        &mut self,
        component_id: &str,
        assessment: EthicsAssessment,
    ) -> EthicsEvaluation {
        let evaluation = EthicsEvaluation {
            wish_ethics: assessment.wish_ethics,
            process_ethics: assessment.process_ethics,
            outcome_ethics: assessment.outcome_ethics,
            stakeholder_impact: assessment.stakeholder_impact,
            concerns: assessment.concerns,
            recommendations: assessment.recommendations,
            assessed_by: assessment.assessed_by,
            assessed_at: Utc::now(),
        };

        let history = self.evaluations.entry(component_id.to_string()).or_default();
        history.append(evaluation.clone());

        debug!(
            component_id = %component_id,
            assessed_by = %evaluation.assessed_by,
            triad = evaluation.triad_score(),
            history_len = history.len(),
            "Recorded ethics evaluation"
        );

        evaluation
    }

    /// Record a bias detection for a component with derived mitigations.
    pub fn detect_bias(&mut self, component_id: &str, report: BiasReport) -> BiasDetection {
        let detection = BiasDetection {
            id: uuid::Uuid::new_v4().to_string(),
            bias_type: report.bias_type,
            severity: report.severity,
            description: report.description,
            affected_components: report.affected_components,
            mitigation_strategies: mitigation_strategies(report.bias_type, report.severity),
            detected_at: Utc::now(),
            status: BiasStatus::Open,
        };

        info!(
            component_id = %component_id,
            detection_id = %detection.id,
            bias_type = %detection.bias_type,
            severity = %detection.severity.as_str(),
            "Bias detected"
        );

        self.detections
            .entry(component_id.to_string())
            .or_default()
            .append(detection.clone());

        detection
    }

    /// Evaluation history for a component, oldest first.
    pub fn ethics_evaluations(&self, component_id: &str) -> &[EthicsEvaluation] {
        self.evaluations
            .get(component_id)
            .map(AppendLog::as_slice)
            .unwrap_or_default()
    }

    /// Detection history for a component, oldest first.
    pub fn bias_detections(&self, component_id: &str) -> &[BiasDetection] {
        self.detections
            .get(component_id)
            .map(AppendLog::as_slice)
            .unwrap_or_default()
    }

    /// Mean triad score over every evaluation of every component, or
    /// [`DEFAULT_OVERALL_ETHICS`] when there are none.
    pub fn overall_ethics(&self) -> f32 {
        let scores: Vec<f32> = self
            .evaluations
            .values()
            .flat_map(|log| log.iter().map(EthicsEvaluation::triad_score))
            .collect();

        if scores.is_empty() {
            return DEFAULT_OVERALL_ETHICS;
        }

        scores.iter().sum::<f32>() / scores.len() as f32
    }

    /// Open or mitigating detections across all components.
    pub fn active_bias_detections(&self) -> Vec<&BiasDetection> {
        self.detections
            .values()
            .flat_map(|log| log.iter())
            .filter(|d| d.status.is_active())
            .collect()
    }

    /// Set the status of the detection at `position` in a component's history.
    pub fn update_bias_status(
        &mut self,
        component_id: &str,
        position: usize,
        status: BiasStatus,
    ) -> Result<()> {
        let Some(log) = self.detections.get_mut(component_id) else {
            warn!(component_id = %component_id, "Bias status update for unknown component");
            return Err(SpelworkError::not_found(RecordKind::Component, component_id));
        };

        let Some(detection) = log.get_mut(position) else {
            warn!(
                component_id = %component_id,
                position = position,
                "Bias status update out of range"
            );
            return Err(SpelworkError::not_found(
                RecordKind::BiasDetection,
                format!("{component_id}[{position}]"),
            ));
        };

        Self::transition(detection, status);
        Ok(())
    }

    /// Set the status of a detection by its stable ID.
    pub fn update_bias_status_by_id(&mut self, detection_id: &str, status: BiasStatus) -> Result<()> {
        let detection = self
            .detections
            .values_mut()
            .find_map(|log| log.find_mut(|d| d.id == detection_id));

        match detection {
            Some(detection) => {
                Self::transition(detection, status);
                Ok(())
            }
            None => {
                warn!(detection_id = %detection_id, "Bias status update for unknown detection");
                Err(SpelworkError::not_found(RecordKind::BiasDetection, detection_id))
            }
        }
    }

    fn transition(detection: &mut BiasDetection, status: BiasStatus) {
        info!(
            detection_id = %detection.id,
            from = ?detection.status,
            to = ?status,
            "Bias status changed"
        );
        detection.status = status;
    }

    /// Advisory text for a component.
    ///
    /// Looks only at the latest evaluation's sub-scores and at the open
    /// detections (and how many of those are critical).
    pub fn ethics_recommendations(&self, component_id: &str) -> Vec<String> {
        let mut recommendations = Vec::new();

        let latest = self
            .evaluations
            .get(component_id)
            .and_then(AppendLog::latest);
        if let Some(latest) = latest {
            if latest.wish_ethics < self.subscore_floor {
                recommendations.push("Improve ethical alignment of organizational wishes".to_string());
            }
            if latest.process_ethics < self.subscore_floor {
                recommendations.push("Review and enhance process ethical standards".to_string());
            }
            if latest.outcome_ethics < self.subscore_floor {
                recommendations.push("Evaluate and improve outcome ethical implications".to_string());
            }
        }

        let open: Vec<&BiasDetection> = self
            .bias_detections(component_id)
            .iter()
            .filter(|d| d.status == BiasStatus::Open)
            .collect();

        if !open.is_empty() {
            recommendations.push(format!("Address {} active bias detection(s)", open.len()));
        }

        let critical = open
            .iter()
            .filter(|d| d.severity == BiasSeverity::Critical)
            .count();
        if critical > 0 {
            recommendations.push(format!(
                "URGENT: Address {} critical bias detection(s)",
                critical
            ));
        }

        recommendations
    }
}

impl Default for EthicsManager {
    fn default() -> Self {
        Self::new()
    }
}
