//! Combined adjudication outcome

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::claim::ClaimStatus;
use crate::coverage::{resolve_coverage, BenefitTerms};
use crate::fraud::is_fraudulent;

/// The decision recorded for a submitted claim
///
/// Coverage limits are authoritative for the status and approved amount;
/// the fraud flag rides alongside and never blocks persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjudicationOutcome {
    pub status: ClaimStatus,
    pub approved_amount: Decimal,
    pub fraud_flag: bool,
}

impl AdjudicationOutcome {
    /// Decides a claim from its coverage terms and the procedure's
    /// historical average cost
    pub fn decide(
        terms: Option<&BenefitTerms>,
        claim_amount: Decimal,
        average_cost: Decimal,
    ) -> Self {
        let coverage = resolve_coverage(terms, claim_amount);
        Self {
            status: coverage.status,
            approved_amount: coverage.approved_amount,
            fraud_flag: is_fraudulent(claim_amount, average_cost),
        }
    }
}
