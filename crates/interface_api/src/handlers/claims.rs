//! Claims handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use core_kernel::ClaimId;
use infra_db::{ClaimsRepository, NewClaimSubmission};

use crate::auth::AuthenticatedUser;
use crate::dto::claims::{ClaimDecisionResponse, ClaimSummaryResponse, SubmitClaimRequest};
use crate::error::ApiError;
use crate::AppState;

/// Submits a claim for adjudication
///
/// The authenticated caller is threaded into the adjudicator explicitly;
/// the decision comes back in the response body once the transaction has
/// committed.
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<Json<ClaimDecisionResponse>, ApiError> {
    let repository = ClaimsRepository::new(state.pool.clone());

    let claim = repository
        .submit(
            NewClaimSubmission {
                member_id: request.member_id,
                claim_amount: request.claim_amount,
                procedure_code: request.procedure_code,
            },
            caller.user_id,
        )
        .await?;

    Ok(Json(ClaimDecisionResponse {
        claim_id: claim.claim_id,
        status: claim.status,
        fraud_flag: claim.fraud_flag,
        approved_amount: claim.approved_amount,
    }))
}

/// Gets a claim by its public identifier
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClaimSummaryResponse>, ApiError> {
    let repository = ClaimsRepository::new(state.pool.clone());

    let claim = repository
        .find_by_public_id(ClaimId::from(id))
        .await?
        .ok_or_else(|| ApiError::NotFound("Claim not found".to_string()))?;

    Ok(Json(ClaimSummaryResponse {
        id: ClaimId::from(claim.claim_id),
        status: claim.status.into(),
    }))
}
