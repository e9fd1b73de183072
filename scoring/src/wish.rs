//! Wish quality heuristics.
//!
//! These are keyword and count heuristics, not language understanding. The
//! exact weights are part of the scoring contract and must not drift.

/// Minimum description length (exclusive) that earns the length bonus.
const DESCRIPTION_MIN_LEN: usize = 20;

/// Baseline alignment until organizational capability data is integrated.
const BASELINE_ALIGNMENT: f32 = 0.7;

/// How well a wish is articulated.
///
/// +0.3 for a description longer than 20 characters, +0.2 if it contains
/// `"specific"`, +0.2 if it contains `"measurable"` (both case-sensitive),
/// +0.3 when at least one stakeholder is named. Capped at 1.0.
pub fn wish_clarity(description: &str, stakeholder_count: usize) -> f32 {
    let mut score: f32 = 0.0;

    if description.chars().count() > DESCRIPTION_MIN_LEN {
        score += 0.3;
    }
    if description.contains("specific") {
        score += 0.2;
    }
    if description.contains("measurable") {
        score += 0.2;
    }
    if stakeholder_count > 0 {
        score += 0.3;
    }

    score.min(1.0)
}

/// How well the system can understand a wish from its context.
///
/// Base 0.5, +0.2 with more than two context entries, +0.3 with expert
/// guidance. Capped at 1.0.
pub fn wish_coherence(context_size: usize, has_expert_guidance: bool) -> f32 {
    let mut score: f32 = 0.5;

    if context_size > 2 {
        score += 0.2;
    }
    if has_expert_guidance {
        score += 0.3;
    }

    score.min(1.0)
}

/// Compatibility of a wish with organizational capabilities.
///
/// Always the 0.7 baseline; nothing feeds capability data in yet.
pub fn wish_alignment() -> f32 {
    BASELINE_ALIGNMENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clarity_full_marks() {
        // 25 chars, both keywords, one stakeholder
        let description = "specific measurable goal.";
        assert_eq!(description.len(), 25);
        assert_eq!(wish_clarity(description, 1), 1.0);
    }

    #[test]
    fn test_clarity_short_description() {
        assert_eq!(wish_clarity("do it", 0), 0.0);
        assert!((wish_clarity("do it", 3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_clarity_keywords_are_case_sensitive() {
        let lower = wish_clarity("be specific", 0);
        let upper = wish_clarity("be SPECIFIC", 0);
        assert!((lower - 0.2).abs() < 1e-6);
        assert_eq!(upper, 0.0);
    }

    #[test]
    fn test_clarity_monotonic_in_length_and_stakeholders() {
        let mut previous = 0.0;
        for len in 0..=30 {
            let description = "x".repeat(len);
            let score = wish_clarity(&description, 0);
            assert!(score >= previous);
            previous = score;

            assert!(wish_clarity(&description, 1) >= score);
        }
    }

    #[test]
    fn test_coherence() {
        assert_eq!(wish_coherence(0, false), 0.5);
        assert!((wish_coherence(3, false) - 0.7).abs() < 1e-6);
        assert!((wish_coherence(2, true) - 0.8).abs() < 1e-6);
        assert_eq!(wish_coherence(10, true), 1.0);
    }

    #[test]
    fn test_alignment_is_constant() {
        assert_eq!(wish_alignment(), 0.7);
    }
}
