//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults, so
//! tests specify only the fields they care about.

use core_kernel::MemberId;
use domain_claims::BenefitTerms;
use infra_db::NewClaimSubmission;
use rust_decimal::Decimal;

use crate::fixtures::{AmountFixtures, ProcedureFixtures};

/// Builder for plan-benefit terms
pub struct BenefitTermsBuilder {
    annual_limit: Option<Decimal>,
    is_excluded: bool,
}

impl Default for BenefitTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BenefitTermsBuilder {
    /// Creates a builder for covered terms at the standard limit
    pub fn new() -> Self {
        Self {
            annual_limit: Some(AmountFixtures::standard_limit()),
            is_excluded: false,
        }
    }

    /// Sets the annual limit
    pub fn with_annual_limit(mut self, limit: Decimal) -> Self {
        self.annual_limit = Some(limit);
        self
    }

    /// Clears the annual limit
    pub fn without_annual_limit(mut self) -> Self {
        self.annual_limit = None;
        self
    }

    /// Marks the benefit as excluded from the plan
    pub fn excluded(mut self) -> Self {
        self.is_excluded = true;
        self
    }

    pub fn build(self) -> BenefitTerms {
        BenefitTerms::new(self.annual_limit, self.is_excluded)
    }
}

/// Builder for claim submissions
pub struct ClaimSubmissionBuilder {
    member_id: MemberId,
    claim_amount: Decimal,
    procedure_code: String,
}

impl Default for ClaimSubmissionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimSubmissionBuilder {
    /// Creates a builder for a small claim against the fixture procedure
    pub fn new() -> Self {
        Self {
            member_id: MemberId::new(1),
            claim_amount: AmountFixtures::small_claim(),
            procedure_code: ProcedureFixtures::code().to_string(),
        }
    }

    /// Sets the member
    pub fn for_member(mut self, member_id: MemberId) -> Self {
        self.member_id = member_id;
        self
    }

    /// Sets the claimed amount
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claim_amount = amount;
        self
    }

    /// Sets the procedure code
    pub fn with_procedure_code(mut self, code: impl Into<String>) -> Self {
        self.procedure_code = code.into();
        self
    }

    pub fn build(self) -> NewClaimSubmission {
        NewClaimSubmission {
            member_id: self.member_id,
            claim_amount: self.claim_amount,
            procedure_code: self.procedure_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_terms_builder_defaults_to_covered() {
        let terms = BenefitTermsBuilder::new().build();
        assert_eq!(terms.annual_limit, Some(dec!(1000)));
        assert!(!terms.is_excluded);
    }

    #[test]
    fn test_terms_builder_excluded() {
        let terms = BenefitTermsBuilder::new().excluded().build();
        assert!(terms.is_excluded);
    }

    #[test]
    fn test_submission_builder_overrides() {
        let submission = ClaimSubmissionBuilder::new()
            .for_member(MemberId::new(9))
            .with_amount(dec!(1200))
            .with_procedure_code("PROC-X")
            .build();

        assert_eq!(submission.member_id, MemberId::new(9));
        assert_eq!(submission.claim_amount, dec!(1200));
        assert_eq!(submission.procedure_code, "PROC-X");
    }
}
