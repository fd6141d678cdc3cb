//! Claims DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, MemberId};
use domain_claims::ClaimStatus;

#[derive(Debug, Deserialize)]
pub struct SubmitClaimRequest {
    pub member_id: MemberId,
    pub claim_amount: Decimal,
    pub procedure_code: String,
}

/// The decision returned from a submission
#[derive(Debug, Serialize)]
pub struct ClaimDecisionResponse {
    pub claim_id: ClaimId,
    pub status: ClaimStatus,
    pub fraud_flag: bool,
    pub approved_amount: Decimal,
}

/// The read view returned from a lookup
#[derive(Debug, Serialize)]
pub struct ClaimSummaryResponse {
    pub id: ClaimId,
    pub status: ClaimStatus,
}
