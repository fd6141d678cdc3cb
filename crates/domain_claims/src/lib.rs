//! Claims Adjudication Domain
//!
//! Pure decision logic for claim intake: benefit coverage resolution
//! against plan-benefit terms, the fraud heuristic, and the combined
//! adjudication outcome. No I/O lives here; callers fetch the inputs
//! (member, procedure, plan-benefit link) and persist the result.

pub mod adjudication;
pub mod claim;
pub mod coverage;
pub mod fraud;

pub use adjudication::AdjudicationOutcome;
pub use claim::ClaimStatus;
pub use coverage::{resolve_coverage, BenefitTerms, CoverageDecision};
pub use fraud::is_fraudulent;
