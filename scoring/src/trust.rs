//! Trust scoring.

use crate::types::TrustDimension;

/// Score a trust dimension from the amount of supporting evidence.
///
/// Each dimension is a two-tier step: once the evidence count passes the
/// dimension's bar, the higher tier applies.
///
/// | dimension      | bar (>) | above | otherwise |
/// |----------------|---------|-------|-----------|
/// | procedural     | 2       | 0.8   | 0.6       |
/// | competence     | 3       | 0.9   | 0.7       |
/// | contractual    | 1       | 0.8   | 0.6       |
/// | communication  | 2       | 0.7   | 0.5       |
/// | identification | 1       | 0.6   | 0.4       |
pub fn trust_score(dimension: TrustDimension, evidence_count: usize) -> f32 {
    let (bar, above, otherwise) = match dimension {
        TrustDimension::Procedural => (2, 0.8, 0.6),
        TrustDimension::Competence => (3, 0.9, 0.7),
        TrustDimension::Contractual => (1, 0.8, 0.6),
        TrustDimension::Communication => (2, 0.7, 0.5),
        TrustDimension::Identification => (1, 0.6, 0.4),
    };

    let score: f32 = if evidence_count > bar { above } else { otherwise };
    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_competence_tiers() {
        assert_eq!(trust_score(TrustDimension::Competence, 3), 0.7);
        assert_eq!(trust_score(TrustDimension::Competence, 4), 0.9);
    }

    #[test]
    fn test_every_dimension_has_two_tiers() {
        let expected = [
            (TrustDimension::Procedural, 2, 0.6, 0.8),
            (TrustDimension::Contractual, 1, 0.6, 0.8),
            (TrustDimension::Communication, 2, 0.5, 0.7),
            (TrustDimension::Identification, 1, 0.4, 0.6),
        ];

        for (dimension, bar, low, high) in expected {
            assert_eq!(trust_score(dimension, bar), low, "{dimension} at bar");
            assert_eq!(trust_score(dimension, bar + 1), high, "{dimension} above bar");
        }
    }

    #[test]
    fn test_scores_are_bounded() {
        for dimension in TrustDimension::all() {
            for count in [0, 1, 5, 100] {
                let score = trust_score(dimension, count);
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}
