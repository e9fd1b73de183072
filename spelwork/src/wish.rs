//! Wish definition, evaluation and analysis.
//!
//! A wish is scored the moment it is created and re-scored whenever its
//! description, stakeholders or metadata change, so callers never see stale
//! scores.

use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

use scoring::{wish_alignment, wish_clarity, wish_coherence};

use crate::types::{
    RecordKind, Result, SpelworkError, Wish, WishDependency, WishMetadata, WishRelationships,
};

/// Inputs for creating a wish.
#[derive(Debug, Clone, Default)]
pub struct NewWish {
    /// Free-text description
    pub description: String,
    /// Named stakeholders
    pub stakeholders: Vec<String>,
    /// Optional expert guidance
    pub expert_guidance: Option<String>,
    /// Optional context
    pub context: Option<HashMap<String, serde_json::Value>>,
}

impl NewWish {
    /// Create inputs with a description and stakeholders.
    pub fn new<S: Into<String>>(
        description: impl Into<String>,
        stakeholders: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            description: description.into(),
            stakeholders: stakeholders.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Attach expert guidance.
    pub fn with_expert_guidance(mut self, guidance: impl Into<String>) -> Self {
        self.expert_guidance = Some(guidance.into());
        self
    }

    /// Attach context.
    pub fn with_context(mut self, context: HashMap<String, serde_json::Value>) -> Self {
        self.context = Some(context);
        self
    }
}

/// Partial update applied by an expert review. Absent fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct Expertise {
    /// Replaces the description
    pub refined_description: Option<String>,
    /// Merged into the stakeholder list
    pub additional_stakeholders: Option<Vec<String>>,
    /// Replaces the domain knowledge metadata
    pub domain_knowledge: Option<HashMap<String, serde_json::Value>>,
}

/// Keyed store of wishes, preserving creation order.
#[derive(Debug, Default)]
pub struct WishManager {
    /// Wishes by ID
    wishes: HashMap<String, Wish>,
    /// IDs in creation order
    order: Vec<String>,
}

impl WishManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a wish and evaluate it before handing it back.
    pub fn create_wish(&mut self, params: NewWish) -> Wish {
        let now = Utc::now();
        let mut wish = Wish {
            id: uuid::Uuid::new_v4().to_string(),
            description: params.description,
            clarity: 0.0,
            coherence: 0.0,
            alignment: 0.0,
            stakeholders: params.stakeholders,
            created: now,
            updated: now,
            metadata: WishMetadata {
                expert_guidance: params.expert_guidance,
                domain_knowledge: None,
                context: params.context.unwrap_or_default(),
            },
        };

        Self::evaluate(&mut wish);

        info!(
            wish_id = %wish.id,
            clarity = wish.clarity,
            coherence = wish.coherence,
            alignment = wish.alignment,
            "Created wish"
        );

        self.order.push(wish.id.clone());
        self.wishes.insert(wish.id.clone(), wish.clone());
        wish
    }

    /// Recompute clarity, coherence and alignment in that order.
    pub fn evaluate(wish: &mut Wish) {
        wish.clarity = wish_clarity(&wish.description, wish.stakeholders.len());
        wish.coherence = wish_coherence(
            wish.metadata.context.len(),
            wish.metadata.expert_guidance.is_some(),
        );
        wish.alignment = wish_alignment();
        wish.updated = Utc::now();

        debug!(
            wish_id = %wish.id,
            clarity = wish.clarity,
            coherence = wish.coherence,
            alignment = wish.alignment,
            "Evaluated wish"
        );
    }

    /// Merge expert input into a wish and re-evaluate it.
    pub fn apply_expertise(&mut self, wish_id: &str, expertise: Expertise) -> Result<Wish> {
        let Some(wish) = self.wishes.get_mut(wish_id) else {
            warn!(wish_id = %wish_id, "Expertise for unknown wish");
            return Err(SpelworkError::not_found(RecordKind::Wish, wish_id));
        };

        if let Some(description) = expertise.refined_description.filter(|d| !d.is_empty()) {
            wish.description = description;
        }

        if let Some(additional) = expertise.additional_stakeholders {
            let mut merged = std::mem::take(&mut wish.stakeholders);
            merged.extend(additional);
            wish.stakeholders = dedup_preserving_order(merged);
        }

        if let Some(knowledge) = expertise.domain_knowledge {
            wish.metadata.domain_knowledge = Some(knowledge);
        }

        Self::evaluate(wish);
        Ok(wish.clone())
    }

    /// Get a wish by ID.
    pub fn get_wish(&self, id: &str) -> Option<&Wish> {
        self.wishes.get(id)
    }

    /// All wishes in creation order.
    pub fn all_wishes(&self) -> Vec<&Wish> {
        self.order
            .iter()
            .filter_map(|id| self.wishes.get(id))
            .collect()
    }

    /// Wishes naming `stakeholder`.
    pub fn wishes_by_stakeholder(&self, stakeholder: &str) -> Vec<&Wish> {
        self.all_wishes()
            .into_iter()
            .filter(|w| w.stakeholders.iter().any(|s| s == stakeholder))
            .collect()
    }

    /// Wishes where any score is below `threshold`.
    pub fn poorly_aligned(&self, threshold: f32) -> Vec<&Wish> {
        self.all_wishes()
            .into_iter()
            .filter(|w| w.falls_below(threshold))
            .collect()
    }

    /// Remove a wish. Returns whether it existed.
    pub fn remove_wish(&mut self, id: &str) -> bool {
        if self.wishes.remove(id).is_some() {
            self.order.retain(|i| i != id);
            true
        } else {
            false
        }
    }

    /// Owned copies of all wishes, for export.
    pub fn export_wishes(&self) -> Vec<Wish> {
        self.all_wishes().into_iter().cloned().collect()
    }

    /// Mean wish quality across the whole store.
    pub fn overall_health(&self) -> f32 {
        let wishes: Vec<Wish> = self.export_wishes();
        WishAnalytics::wish_health(&wishes)
    }

    pub fn len(&self) -> usize {
        self.wishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }
}

fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(&item) {
            unique.push(item);
        }
    }
    unique
}

/// Stateless analysis over sets of wishes.
pub struct WishAnalytics;

impl WishAnalytics {
    /// Mean of each wish's quality; 0.0 for no wishes.
    pub fn wish_health(wishes: &[Wish]) -> f32 {
        if wishes.is_empty() {
            return 0.0;
        }

        let total: f32 = wishes.iter().map(Wish::quality).sum();
        total / wishes.len() as f32
    }

    /// Dependencies between wishes that share stakeholders.
    ///
    /// For each unordered pair with at least one shared stakeholder, an edge
    /// from the earlier to the later wish is recorded when either description
    /// mentions "require" (case-insensitive). Conflicts are never detected;
    /// the list is always empty.
    pub fn analyze_relationships(wishes: &[Wish]) -> WishRelationships {
        let mut relationships = WishRelationships::default();

        for (i, wish_a) in wishes.iter().enumerate() {
            for wish_b in &wishes[i + 1..] {
                let shared: Vec<&str> = wish_a
                    .stakeholders
                    .iter()
                    .filter(|s| wish_b.stakeholders.contains(s))
                    .map(String::as_str)
                    .collect();

                if shared.is_empty() {
                    continue;
                }

                let requires = mentions_require(&wish_a.description)
                    || mentions_require(&wish_b.description);
                if requires {
                    relationships.dependencies.push(WishDependency {
                        from: wish_a.id.clone(),
                        to: wish_b.id.clone(),
                        reason: format!("Shared stakeholders: {}", shared.join(", ")),
                    });
                }
            }
        }

        relationships
    }

    /// Improvement suggestions for a single wish.
    pub fn recommendations(wish: &Wish, floor: f32) -> Vec<String> {
        let mut recommendations = Vec::new();

        if wish.clarity < floor {
            recommendations.push(
                "Improve wish description with more specific and measurable criteria".to_string(),
            );
        }
        if wish.coherence < floor {
            recommendations
                .push("Add more contextual information to help system understanding".to_string());
        }
        if wish.alignment < floor {
            recommendations
                .push("Review organizational capabilities and adjust wish scope".to_string());
        }
        if wish.stakeholders.len() < 2 {
            recommendations.push(
                "Identify additional stakeholders who may be affected by this wish".to_string(),
            );
        }

        recommendations
    }
}

fn mentions_require(description: &str) -> bool {
    description.to_lowercase().contains("require")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_of(size: usize) -> HashMap<String, serde_json::Value> {
        (0..size)
            .map(|i| (format!("key-{i}"), serde_json::json!(i)))
            .collect()
    }

    #[test]
    fn test_created_wish_is_scored() {
        let mut manager = WishManager::new();
        let wish = manager.create_wish(
            NewWish::new("A test wish for the framework", ["test-stakeholder"])
                .with_expert_guidance("Expert guidance for this wish"),
        );

        // > 20 chars and one stakeholder
        assert!((wish.clarity - 0.6).abs() < 1e-6);
        assert!((wish.coherence - 0.8).abs() < 1e-6);
        assert_eq!(wish.alignment, 0.7);
        assert_eq!(manager.get_wish(&wish.id), Some(&wish));
    }

    #[test]
    fn test_scores_bounded_after_creation() {
        let mut manager = WishManager::new();
        let wish = manager.create_wish(
            NewWish::new("specific measurable and much longer than twenty", ["a", "b"])
                .with_expert_guidance("yes")
                .with_context(context_of(5)),
        );

        for score in [wish.clarity, wish.coherence, wish.alignment] {
            assert!((0.0..=1.0).contains(&score));
        }
        assert_eq!(wish.clarity, 1.0);
        assert_eq!(wish.coherence, 1.0);
    }

    #[test]
    fn test_apply_expertise_merges_and_rescored() {
        let mut manager = WishManager::new();
        let wish = manager.create_wish(NewWish::new("short", ["alice"]));
        assert!((wish.clarity - 0.3).abs() < 1e-6);

        let knowledge = HashMap::from([("sector".to_string(), serde_json::json!("health"))]);
        let updated = manager
            .apply_expertise(
                &wish.id,
                Expertise {
                    refined_description: Some("A specific, measurable refinement".to_string()),
                    additional_stakeholders: Some(vec!["bob".to_string(), "alice".to_string()]),
                    domain_knowledge: Some(knowledge.clone()),
                },
            )
            .unwrap();

        assert_eq!(updated.stakeholders, vec!["alice", "bob"]);
        assert_eq!(updated.clarity, 1.0);
        assert_eq!(updated.metadata.domain_knowledge, Some(knowledge));
        assert!(updated.updated >= wish.updated);
    }

    #[test]
    fn test_apply_expertise_leaves_absent_fields() {
        let mut manager = WishManager::new();
        let wish = manager.create_wish(NewWish::new("keep this description", ["alice"]));

        let updated = manager.apply_expertise(&wish.id, Expertise::default()).unwrap();
        assert_eq!(updated.description, wish.description);
        assert_eq!(updated.stakeholders, wish.stakeholders);
        assert_eq!(updated.clarity, wish.clarity);
    }

    #[test]
    fn test_create_keeps_stakeholders_as_given() {
        let mut manager = WishManager::new();
        let wish = manager.create_wish(NewWish::new("short", ["ops", "ops"]));
        assert_eq!(wish.stakeholders, vec!["ops", "ops"]);

        let recommendations = WishAnalytics::recommendations(&wish, 0.7);
        assert!(!recommendations
            .iter()
            .any(|r| r.contains("additional stakeholders")));

        // duplicates collapse once an expert merges stakeholders
        let merged = manager
            .apply_expertise(
                &wish.id,
                Expertise {
                    additional_stakeholders: Some(vec!["qa".to_string()]),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(merged.stakeholders, vec!["ops", "qa"]);
    }

    #[test]
    fn test_empty_refined_description_is_ignored() {
        let mut manager = WishManager::new();
        let wish = manager.create_wish(NewWish::new("A test wish for the framework", ["ops"]));
        assert!((wish.clarity - 0.6).abs() < 1e-6);

        let updated = manager
            .apply_expertise(
                &wish.id,
                Expertise {
                    refined_description: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.description, wish.description);
        assert!((updated.clarity - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_apply_expertise_unknown_wish() {
        let mut manager = WishManager::new();
        let err = manager
            .apply_expertise("missing", Expertise::default())
            .unwrap_err();
        assert!(matches!(
            err,
            SpelworkError::NotFound {
                kind: RecordKind::Wish,
                ..
            }
        ));
    }

    #[test]
    fn test_poorly_aligned_uses_any_score() {
        let mut manager = WishManager::new();
        // clarity 0.5 (long + "specific", no stakeholders), coherence 0.8
        let weak = manager.create_wish(
            NewWish::new("be specific about the quarterly goals", Vec::<String>::new())
                .with_expert_guidance("guidance"),
        );
        let strong = manager.create_wish(
            NewWish::new("specific measurable onboarding target", ["ops"])
                .with_expert_guidance("guidance"),
        );

        assert!((weak.clarity - 0.5).abs() < 1e-6);
        let poor: Vec<&str> = manager
            .poorly_aligned(0.6)
            .into_iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(poor, vec![weak.id.as_str()]);
        assert!(!poor.contains(&strong.id.as_str()));
    }

    #[test]
    fn test_stakeholder_lookup_and_remove() {
        let mut manager = WishManager::new();
        let first = manager.create_wish(NewWish::new("first wish", ["alice"]));
        manager.create_wish(NewWish::new("second wish", ["bob"]));

        assert_eq!(manager.wishes_by_stakeholder("alice").len(), 1);
        assert!(manager.remove_wish(&first.id));
        assert!(!manager.remove_wish(&first.id));
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.all_wishes()[0].description, "second wish");
    }

    #[test]
    fn test_relationships_require_keyword() {
        let mut manager = WishManager::new();
        let a = manager.create_wish(NewWish::new("Billing REQUIRES audit logs", ["finance", "ops"]));
        let b = manager.create_wish(NewWish::new("Faster month-end close", ["finance"]));
        manager.create_wish(NewWish::new("Requires nothing shared", ["legal"]));

        let relationships = WishAnalytics::analyze_relationships(&manager.export_wishes());
        assert_eq!(relationships.dependencies.len(), 1);

        let dependency = &relationships.dependencies[0];
        assert_eq!(dependency.from, a.id);
        assert_eq!(dependency.to, b.id);
        assert_eq!(dependency.reason, "Shared stakeholders: finance");
        assert!(relationships.conflicts.is_empty());
    }

    #[test]
    fn test_relationships_without_keyword() {
        let mut manager = WishManager::new();
        manager.create_wish(NewWish::new("Improve hiring", ["hr"]));
        manager.create_wish(NewWish::new("Improve retention", ["hr"]));

        let relationships = WishAnalytics::analyze_relationships(&manager.export_wishes());
        assert!(relationships.dependencies.is_empty());
    }

    #[test]
    fn test_health_and_recommendations() {
        assert_eq!(WishAnalytics::wish_health(&[]), 0.0);

        let mut manager = WishManager::new();
        let wish = manager.create_wish(NewWish::new("short", ["solo"]));
        // clarity 0.3, coherence 0.5, alignment 0.7
        assert!((manager.overall_health() - 0.5).abs() < 1e-6);

        let recommendations = WishAnalytics::recommendations(&wish, 0.7);
        assert_eq!(recommendations.len(), 3);
        assert!(recommendations[0].contains("specific and measurable"));
        assert!(recommendations[2].contains("additional stakeholders"));
    }
}
