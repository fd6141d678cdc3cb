//! Assertion helpers for adjudication decisions

use domain_claims::{AdjudicationOutcome, ClaimStatus, CoverageDecision};
use rust_decimal::Decimal;

/// Assertions shared by coverage decisions and full outcomes
pub trait DecisionAssertions {
    fn status(&self) -> ClaimStatus;
    fn approved_amount(&self) -> Decimal;

    /// Asserts a full approval of the expected amount
    fn assert_approved(&self, expected: Decimal) {
        assert_eq!(
            self.status(),
            ClaimStatus::Approved,
            "expected APPROVED, got {}",
            self.status()
        );
        assert_eq!(self.approved_amount(), expected);
    }

    /// Asserts a partial approval of the expected amount
    fn assert_partial(&self, expected: Decimal) {
        assert_eq!(
            self.status(),
            ClaimStatus::Partial,
            "expected PARTIAL, got {}",
            self.status()
        );
        assert_eq!(self.approved_amount(), expected);
    }

    /// Asserts a rejection with nothing approved
    fn assert_rejected(&self) {
        assert_eq!(
            self.status(),
            ClaimStatus::Rejected,
            "expected REJECTED, got {}",
            self.status()
        );
        assert_eq!(self.approved_amount(), Decimal::ZERO);
    }
}

impl DecisionAssertions for CoverageDecision {
    fn status(&self) -> ClaimStatus {
        self.status
    }

    fn approved_amount(&self) -> Decimal {
        self.approved_amount
    }
}

impl DecisionAssertions for AdjudicationOutcome {
    fn status(&self) -> ClaimStatus {
        self.status
    }

    fn approved_amount(&self) -> Decimal {
        self.approved_amount
    }
}
