//! Claims repository
//!
//! Owns the adjudication transaction: the member row lock, the
//! eligibility and catalog reads, the coverage/fraud decision, and the
//! claim insert all happen on one connection between `BEGIN` and
//! `COMMIT`. Two submissions for the same member serialize on the row
//! lock; submissions for different members proceed concurrently.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use core_kernel::{ClaimId, MemberId, UserId};
use domain_claims::{AdjudicationOutcome, BenefitTerms, ClaimStatus};

use crate::error::DatabaseError;

/// Errors surfaced by claim submission
///
/// The not-found class aborts the transaction before anything is written;
/// store failures roll back whatever the transaction had done so far.
#[derive(Debug, Error)]
pub enum AdjudicationError {
    #[error("Member {0} not found")]
    MemberNotFound(MemberId),

    #[error("Member {0} is not active")]
    MemberInactive(MemberId),

    #[error("Procedure with code '{0}' not found")]
    ProcedureNotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl From<sqlx::Error> for AdjudicationError {
    fn from(error: sqlx::Error) -> Self {
        AdjudicationError::Database(DatabaseError::from(error))
    }
}

/// A claim submission as accepted from the API layer
#[derive(Debug, Clone)]
pub struct NewClaimSubmission {
    pub member_id: MemberId,
    pub claim_amount: Decimal,
    pub procedure_code: String,
}

/// The decision returned to the caller after a successful submission
#[derive(Debug, Clone)]
pub struct AdjudicatedClaim {
    pub claim_id: ClaimId,
    pub status: ClaimStatus,
    pub fraud_flag: bool,
    pub approved_amount: Decimal,
}

/// Claim status as stored in the `claims_status` PostgreSQL enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claims_status")]
pub enum DbClaimStatus {
    #[sqlx(rename = "APPROVED")]
    Approved,
    #[sqlx(rename = "PARTIAL")]
    Partial,
    #[sqlx(rename = "REJECTED")]
    Rejected,
}

impl From<ClaimStatus> for DbClaimStatus {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Approved => DbClaimStatus::Approved,
            ClaimStatus::Partial => DbClaimStatus::Partial,
            ClaimStatus::Rejected => DbClaimStatus::Rejected,
        }
    }
}

impl From<DbClaimStatus> for ClaimStatus {
    fn from(status: DbClaimStatus) -> Self {
        match status {
            DbClaimStatus::Approved => ClaimStatus::Approved,
            DbClaimStatus::Partial => ClaimStatus::Partial,
            DbClaimStatus::Rejected => ClaimStatus::Rejected,
        }
    }
}

/// Database row for a persisted claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub id: i32,
    pub claim_id: Uuid,
    pub member_id: i32,
    pub procedure_id: i32,
    pub claim_amount: Decimal,
    pub fraud_flag: bool,
    pub approved_amount: Decimal,
    pub status: DbClaimStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct MemberRow {
    id: i32,
    active: bool,
    plan_id: i32,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ProcedureRow {
    id: i32,
    benefit_id: i32,
    average_cost: Decimal,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct PlanBenefitRow {
    annual_limit: Option<Decimal>,
    is_excluded: bool,
}

impl From<PlanBenefitRow> for BenefitTerms {
    fn from(row: PlanBenefitRow) -> Self {
        BenefitTerms::new(row.annual_limit, row.is_excluded)
    }
}

/// Repository for claim adjudication and lookup
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Adjudicates and persists a claim submission
    ///
    /// Runs as a single transaction. The member row is locked with
    /// `FOR UPDATE` for the transaction's lifetime, so concurrent claims
    /// against the same member observe each other's effects in order.
    /// Eligibility failures abort before the insert; no partial claim is
    /// ever persisted.
    ///
    /// `submitted_by` is the authenticated caller, threaded in from the
    /// authorization step upstream.
    pub async fn submit(
        &self,
        submission: NewClaimSubmission,
        submitted_by: UserId,
    ) -> Result<AdjudicatedClaim, AdjudicationError> {
        let mut tx = self.pool.begin().await?;

        let member = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, active, plan_id
            FROM members
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(submission.member_id.get())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(AdjudicationError::MemberNotFound(submission.member_id))?;

        if !member.active {
            return Err(AdjudicationError::MemberInactive(submission.member_id));
        }

        let procedure = sqlx::query_as::<_, ProcedureRow>(
            r#"
            SELECT id, benefit_id, average_cost
            FROM procedures
            WHERE code = $1
            "#,
        )
        .bind(&submission.procedure_code)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AdjudicationError::ProcedureNotFound(submission.procedure_code.clone()))?;

        let terms = sqlx::query_as::<_, PlanBenefitRow>(
            r#"
            SELECT annual_limit, is_excluded
            FROM plans_benefits
            WHERE plan_id = $1 AND benefit_id = $2
            "#,
        )
        .bind(member.plan_id)
        .bind(procedure.benefit_id)
        .fetch_optional(&mut *tx)
        .await?
        .map(BenefitTerms::from);

        let outcome = AdjudicationOutcome::decide(
            terms.as_ref(),
            submission.claim_amount,
            procedure.average_cost,
        );

        let claim_id = ClaimId::new();
        sqlx::query(
            r#"
            INSERT INTO claims (
                claim_id, member_id, procedure_id, claim_amount,
                fraud_flag, approved_amount, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(claim_id.as_uuid())
        .bind(member.id)
        .bind(procedure.id)
        .bind(submission.claim_amount)
        .bind(outcome.fraud_flag)
        .bind(outcome.approved_amount)
        .bind(DbClaimStatus::from(outcome.status))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            claim_id = %claim_id,
            member_id = %submission.member_id,
            procedure_code = %submission.procedure_code,
            status = %outcome.status,
            fraud_flag = outcome.fraud_flag,
            submitted_by = %submitted_by,
            "Claim adjudicated"
        );

        Ok(AdjudicatedClaim {
            claim_id,
            status: outcome.status,
            fraud_flag: outcome.fraud_flag,
            approved_amount: outcome.approved_amount,
        })
    }

    /// Retrieves a claim by its public identifier
    ///
    /// Read-only; no lock, no transaction.
    pub async fn find_by_public_id(
        &self,
        claim_id: ClaimId,
    ) -> Result<Option<ClaimRow>, DatabaseError> {
        let claim = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, claim_id, member_id, procedure_id, claim_amount,
                   fraud_flag, approved_amount, status, created_at
            FROM claims
            WHERE claim_id = $1
            "#,
        )
        .bind(claim_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(claim)
    }
}
