//! SpelworkFramework - the top-level facade.
//!
//! Owns one instance of every store plus the configuration snapshot, so two
//! frameworks never share state.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis::LatticeAnalyzer;
use crate::catalog::{DomainManager, FlowManager, ResourceManager};
use crate::config::FrameworkConfig;
use crate::ethics::EthicsManager;
use crate::lattice::LatticeManager;
use crate::trust::TrustManager;
use crate::types::{LatticeAnalysis, ProcessLattice, RecordKind, Result, SpelworkError};
use crate::wish::{NewWish, WishAnalytics, WishManager};

/// Framework version reported by [`SpelworkFramework::metadata`].
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Static description of the framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkMetadata {
    pub name: String,
    pub version: String,
    pub organization: String,
    pub capabilities: Vec<String>,
}

/// Entry point for creating, managing and analyzing process lattices.
#[derive(Debug, Default)]
pub struct SpelworkFramework {
    config: FrameworkConfig,
    wishes: WishManager,
    domains: DomainManager,
    resources: ResourceManager,
    flows: FlowManager,
    trust: TrustManager,
    ethics: EthicsManager,
    lattices: LatticeManager,
}

impl SpelworkFramework {
    /// Create a framework with the given configuration.
    pub fn new(config: FrameworkConfig) -> Self {
        let ethics = EthicsManager::with_subscore_floor(config.advisory.ethics_subscore_floor);
        Self {
            config,
            ethics,
            ..Default::default()
        }
    }

    /// Create a lattice, optionally seeded with an initial wish.
    pub fn create_lattice(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        initial_wish: Option<String>,
        stakeholders: Vec<String>,
    ) -> ProcessLattice {
        let mut lattice = self.lattices.create_lattice(name, description, None);

        if let Some(description) = initial_wish.filter(|d| !d.is_empty()) {
            let wish = self.wishes.create_wish(NewWish {
                description,
                stakeholders,
                ..Default::default()
            });

            lattice.wishes.push(wish);
            if let Some(stored) = self.lattices.get_lattice_mut(&lattice.id) {
                stored.wishes = lattice.wishes.clone();
            }
        }

        lattice
    }

    pub fn config(&self) -> &FrameworkConfig {
        &self.config
    }

    /// Replace the configuration snapshot.
    ///
    /// For a partial change, clone [`Self::config`], edit the fields and pass
    /// it back.
    pub fn update_config(&mut self, config: FrameworkConfig) {
        self.ethics.set_subscore_floor(config.advisory.ethics_subscore_floor);
        self.config = config;
    }

    pub fn wish_manager(&self) -> &WishManager {
        &self.wishes
    }

    pub fn wish_manager_mut(&mut self) -> &mut WishManager {
        &mut self.wishes
    }

    pub fn domain_manager(&self) -> &DomainManager {
        &self.domains
    }

    pub fn domain_manager_mut(&mut self) -> &mut DomainManager {
        &mut self.domains
    }

    pub fn resource_manager(&self) -> &ResourceManager {
        &self.resources
    }

    pub fn resource_manager_mut(&mut self) -> &mut ResourceManager {
        &mut self.resources
    }

    pub fn flow_manager(&self) -> &FlowManager {
        &self.flows
    }

    pub fn flow_manager_mut(&mut self) -> &mut FlowManager {
        &mut self.flows
    }

    pub fn trust_manager(&self) -> &TrustManager {
        &self.trust
    }

    pub fn trust_manager_mut(&mut self) -> &mut TrustManager {
        &mut self.trust
    }

    pub fn ethics_manager(&self) -> &EthicsManager {
        &self.ethics
    }

    pub fn ethics_manager_mut(&mut self) -> &mut EthicsManager {
        &mut self.ethics
    }

    pub fn lattice_manager(&self) -> &LatticeManager {
        &self.lattices
    }

    pub fn lattice_manager_mut(&mut self) -> &mut LatticeManager {
        &mut self.lattices
    }

    /// Analyzer borrowing this framework's stores.
    pub fn analyzer(&self) -> LatticeAnalyzer<'_> {
        LatticeAnalyzer::new(
            &self.lattices,
            &self.wishes,
            &self.trust,
            &self.ethics,
            &self.config,
        )
    }

    /// Comprehensive analysis of a lattice.
    pub fn analyze_lattice(&self, lattice_id: &str) -> Result<LatticeAnalysis> {
        let report = self.analyzer().analyze(lattice_id)?;

        if self.config.auditing_enabled {
            info!(
                lattice_id = %lattice_id,
                health = report.health.value,
                trust = report.trust.value,
                ethics = report.ethics.value,
                bias = report.bias.value,
                recommendations = report.recommendations.len(),
                "Lattice analysis audit"
            );
        }

        Ok(report)
    }

    /// Improvement suggestions for one wish, using the configured floor.
    pub fn wish_recommendations(&self, wish_id: &str) -> Result<Vec<String>> {
        let wish = self
            .wishes
            .get_wish(wish_id)
            .ok_or_else(|| SpelworkError::not_found(RecordKind::Wish, wish_id))?;

        Ok(WishAnalytics::recommendations(
            wish,
            self.config.advisory.wish_recommendation_floor,
        ))
    }

    /// Copy of a lattice for external analysis.
    pub fn export_lattice(&self, lattice_id: &str) -> Option<ProcessLattice> {
        self.lattices.get_lattice(lattice_id).cloned()
    }

    /// Import a lattice produced elsewhere.
    pub fn import_lattice(&mut self, lattice: ProcessLattice) -> Result<()> {
        self.lattices.import_lattice(lattice).inspect_err(|e| {
            warn!(error = %e, "Failed to import lattice");
        })
    }

    /// Name, version and capabilities.
    pub fn metadata(&self) -> FrameworkMetadata {
        FrameworkMetadata {
            name: "SPELWork".to_string(),
            version: VERSION.to_string(),
            organization: "Toilville".to_string(),
            capabilities: [
                "Wish Definition & Management",
                "Domain Expertise Integration",
                "Resource Alignment",
                "Flow Optimization",
                "Trust & Safety Systems",
                "Ethics & Bias Management",
                "Human Oversight Integration",
                "Process Analytics",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        let framework = SpelworkFramework::default();
        let metadata = framework.metadata();

        assert_eq!(metadata.name, "SPELWork");
        assert_eq!(metadata.organization, "Toilville");
        assert_eq!(metadata.version, "0.1.0");
        assert_eq!(metadata.capabilities.len(), 8);
    }

    #[test]
    fn test_create_lattice_with_initial_wish() {
        let mut framework = SpelworkFramework::default();
        let lattice = framework.create_lattice(
            "Analysis Test Lattice",
            "A lattice for testing analysis functionality",
            Some("Reduce onboarding time".to_string()),
            vec!["hr".to_string()],
        );

        assert_eq!(lattice.wishes.len(), 1);
        assert_eq!(framework.wish_manager().len(), 1);
        assert_eq!(
            framework.export_lattice(&lattice.id).unwrap().wishes,
            lattice.wishes
        );
    }

    #[test]
    fn test_empty_initial_wish_is_skipped() {
        let mut framework = SpelworkFramework::default();
        let lattice = framework.create_lattice("Empty", "desc", Some(String::new()), vec![]);

        assert!(lattice.wishes.is_empty());
        assert!(framework.wish_manager().is_empty());
    }

    #[test]
    fn test_wish_recommendations_follow_config() {
        let mut framework = SpelworkFramework::default();
        // clarity 0.6, coherence 0.5, alignment 0.7
        let wish = framework
            .wish_manager_mut()
            .create_wish(NewWish::new("A test wish for the framework", ["ops", "qa"]));

        assert_eq!(framework.wish_recommendations(&wish.id).unwrap().len(), 2);

        let mut config = framework.config().clone();
        config.advisory.wish_recommendation_floor = 0.5;
        framework.update_config(config);
        assert!(framework.wish_recommendations(&wish.id).unwrap().is_empty());

        let err = framework.wish_recommendations("missing").unwrap_err();
        assert!(matches!(
            err,
            SpelworkError::NotFound {
                kind: RecordKind::Wish,
                ..
            }
        ));
    }

    #[test]
    fn test_update_config() {
        let mut framework = SpelworkFramework::default();
        let mut config = framework.config().clone();
        config.auditing_enabled = false;

        framework.update_config(config);
        assert!(!framework.config().auditing_enabled);
    }
}
