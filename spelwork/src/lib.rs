//! SPELWork - Systemic Process Evaluation Lattice framework
//!
//! Models an organization's objectives ("wishes"), trust posture, ethics and
//! bias state, and derives scores and advisory recommendations from them:
//!
//! - **Wishes**: clarity, coherence and alignment scoring, expert refinement,
//!   relationship analysis
//! - **Trust**: one current metric per dimension per component
//! - **Ethics & bias**: append-only assessment and detection histories,
//!   mitigation strategies, status tracking
//! - **Lattice analysis**: one composite report per process lattice
//!
//! # Architecture
//!
//! ```text
//! evidence ──► WishManager ─────┐
//!          ──► TrustManager ────┼──► LatticeAnalyzer ──► LatticeAnalysis
//!          ──► EthicsManager ───┘          ▲
//!                                          │
//!                          LatticeManager ─┘ (existence, node count)
//! ```
//!
//! All operations are synchronous and run against in-memory stores owned by
//! [`SpelworkFramework`].
//!
//! # Example
//!
//! ```
//! use spelwork::{FrameworkConfig, NewWish, SpelworkFramework};
//!
//! let mut framework = SpelworkFramework::new(FrameworkConfig::default());
//! let lattice = framework.create_lattice("Onboarding", "New hire flow", None, vec![]);
//!
//! framework
//!     .wish_manager_mut()
//!     .create_wish(NewWish::new("Cut onboarding to a specific, measurable 5 days", ["hr"]));
//!
//! let report = framework.analyze_lattice(&lattice.id).unwrap();
//! assert_eq!(report.trust.value, 0.7);
//! ```

pub mod analysis;
pub mod catalog;
pub mod config;
pub mod ethics;
pub mod framework;
pub mod lattice;
pub mod ledger;
pub mod trust;
pub mod types;
pub mod wish;

// Re-export main types
pub use analysis::LatticeAnalyzer;
pub use catalog::{DomainManager, FlowManager, NewDomain, NewResource, ResourceManager};
pub use config::{AdvisoryThresholds, EthicsRequirements, FrameworkConfig};
pub use ethics::EthicsManager;
pub use framework::{FrameworkMetadata, SpelworkFramework};
pub use lattice::{LatticeManager, LatticeUpdate};
pub use trust::TrustManager;
pub use types::*;
pub use wish::{Expertise, NewWish, WishAnalytics, WishManager};

pub use scoring::{BiasSeverity, BiasStatus, BiasType, TrustDimension, TrustTrend};
