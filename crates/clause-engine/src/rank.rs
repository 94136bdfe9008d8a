//! Risk ordering for the clause list.
//!
//! Severity order is fixed: high(1) < medium(2) < low(3) < unknown(4).
//! Clauses sharing a risk label keep their relative input order, which
//! normally reflects document position — the more useful secondary key
//! within a tier.

use shared_types::Clause;

/// Return a new sequence with the same clauses ordered by ascending
/// severity rank.
///
/// Pure: the input is neither reordered nor mutated, so callers may
/// re-rank the same source list repeatedly (after a translation pass, for
/// example) without corrupting a rendering pass still in flight. The sort
/// is stable.
pub fn rank(clauses: &[Clause]) -> Vec<Clause> {
    let mut ordered = clauses.to_vec();
    ordered.sort_by_key(|clause| clause.risk_level().order());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::RiskLevel;

    fn clause(id: u32, risk: Option<RiskLevel>) -> Clause {
        Clause {
            id,
            title: None,
            content: format!("Clause body {}", id),
            summary: None,
            risk,
            preview: None,
        }
    }

    fn ids(clauses: &[Clause]) -> Vec<u32> {
        clauses.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_rank_orders_by_severity_with_stable_ties() {
        let input = vec![
            clause(0, Some(RiskLevel::Low)),
            clause(1, Some(RiskLevel::High)),
            clause(2, None),
            clause(3, Some(RiskLevel::High)),
        ];

        let ranked = rank(&input);
        assert_eq!(ids(&ranked), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_rank_does_not_mutate_input() {
        let input = vec![
            clause(0, Some(RiskLevel::Low)),
            clause(1, Some(RiskLevel::High)),
        ];
        let before = input.clone();

        let _ = rank(&input);
        assert_eq!(input, before);
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(&[]).is_empty());
    }

    #[test]
    fn test_rank_treats_missing_risk_as_unknown() {
        let input = vec![clause(0, None), clause(1, Some(RiskLevel::Unknown))];
        let ranked = rank(&input);
        // Both rank as unknown, so input order is preserved.
        assert_eq!(ids(&ranked), vec![0, 1]);
    }
}
