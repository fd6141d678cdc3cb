//! Benefit coverage resolution
//!
//! Decides a claim's status and approved amount from the plan-benefit
//! terms that apply to the member's plan and the claimed procedure's
//! benefit category.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::claim::ClaimStatus;

/// The terms a plan attaches to a benefit
///
/// Mirrors one row of the plan-benefit link table. The per-plan
/// `annual_limit` is the one consulted here; a benefit's global limit
/// plays no part in coverage decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitTerms {
    pub annual_limit: Option<Decimal>,
    pub is_excluded: bool,
}

impl BenefitTerms {
    pub fn new(annual_limit: Option<Decimal>, is_excluded: bool) -> Self {
        Self {
            annual_limit,
            is_excluded,
        }
    }

    /// Terms that provide coverage up to the given limit
    pub fn covered(annual_limit: Decimal) -> Self {
        Self::new(Some(annual_limit), false)
    }
}

/// Result of coverage resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageDecision {
    pub status: ClaimStatus,
    pub approved_amount: Decimal,
}

impl CoverageDecision {
    /// A rejection: nothing approved
    pub fn rejected() -> Self {
        Self {
            status: ClaimStatus::Rejected,
            approved_amount: Decimal::ZERO,
        }
    }
}

/// Resolves coverage for a claimed amount against plan-benefit terms
///
/// Rejects when the plan never linked the benefit, linked it without an
/// annual limit, or excluded it. Otherwise the limit is compared to the
/// claimed amount:
///
/// - limit below the claim: `PARTIAL`, approving the portion of the claim
///   above the limit. This is the payout formula the business has always
///   run with; callers and reports depend on it as-is.
/// - limit at or above the claim: `APPROVED` in full. A limit exactly
///   equal to the claimed amount approves in full.
///
/// Pure computation; the caller supplies the (already fetched) terms.
pub fn resolve_coverage(terms: Option<&BenefitTerms>, claim_amount: Decimal) -> CoverageDecision {
    let Some(terms) = terms else {
        return CoverageDecision::rejected();
    };

    let Some(annual_limit) = terms.annual_limit else {
        return CoverageDecision::rejected();
    };

    if terms.is_excluded {
        return CoverageDecision::rejected();
    }

    if annual_limit < claim_amount {
        CoverageDecision {
            status: ClaimStatus::Partial,
            approved_amount: claim_amount - annual_limit,
        }
    } else {
        CoverageDecision {
            status: ClaimStatus::Approved,
            approved_amount: claim_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_link_rejects() {
        let decision = resolve_coverage(None, dec!(500));
        assert_eq!(decision.status, ClaimStatus::Rejected);
        assert_eq!(decision.approved_amount, Decimal::ZERO);
    }

    #[test]
    fn test_no_limit_rejects() {
        let terms = BenefitTerms::new(None, false);
        let decision = resolve_coverage(Some(&terms), dec!(500));
        assert_eq!(decision.status, ClaimStatus::Rejected);
        assert_eq!(decision.approved_amount, Decimal::ZERO);
    }

    #[test]
    fn test_excluded_rejects() {
        let terms = BenefitTerms::new(Some(dec!(1000)), true);
        let decision = resolve_coverage(Some(&terms), dec!(500));
        assert_eq!(decision.status, ClaimStatus::Rejected);
        assert_eq!(decision.approved_amount, Decimal::ZERO);
    }

    #[test]
    fn test_limit_above_claim_approves_in_full() {
        let terms = BenefitTerms::covered(dec!(1000));
        let decision = resolve_coverage(Some(&terms), dec!(800));
        assert_eq!(decision.status, ClaimStatus::Approved);
        assert_eq!(decision.approved_amount, dec!(800));
    }

    // Pins the historical PARTIAL payout: the approved amount is the
    // excess over the limit, not the capped portion. 1200 against a
    // 1000 limit approves 200.
    #[test]
    fn test_limit_below_claim_approves_excess_over_limit() {
        let terms = BenefitTerms::covered(dec!(1000));
        let decision = resolve_coverage(Some(&terms), dec!(1200));
        assert_eq!(decision.status, ClaimStatus::Partial);
        assert_eq!(decision.approved_amount, dec!(200));
    }

    #[test]
    fn test_limit_equal_to_claim_approves_in_full() {
        let terms = BenefitTerms::covered(dec!(800));
        let decision = resolve_coverage(Some(&terms), dec!(800));
        assert_eq!(decision.status, ClaimStatus::Approved);
        assert_eq!(decision.approved_amount, dec!(800));
    }
}
