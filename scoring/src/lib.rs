//! Scoring primitives for SPELWork process lattices.
//!
//! Pure functions that map raw evidence onto bounded scores in `[0.0, 1.0]`:
//!
//! - **Wish quality**: clarity, coherence and alignment heuristics
//! - **Trust**: per-dimension step function over evidence counts
//! - **Bias**: mitigation strategies derived from type and severity
//!
//! None of these functions hold state or fail. Inputs are plain values and
//! results are only capped where a heuristic says so; callers that need
//! history or aggregation use the `spelwork` crate.
//!
//! # Example
//!
//! ```
//! use scoring::{trust_score, wish_clarity, TrustDimension};
//!
//! let clarity = wish_clarity("Ship a specific, measurable onboarding flow", 2);
//! assert_eq!(clarity, 1.0);
//!
//! let trust = trust_score(TrustDimension::Competence, 4);
//! assert_eq!(trust, 0.9);
//! ```

pub mod bias;
pub mod trust;
pub mod types;
pub mod wish;

// Re-export main items
pub use bias::mitigation_strategies;
pub use trust::trust_score;
pub use types::*;
pub use wish::{wish_alignment, wish_clarity, wish_coherence};
