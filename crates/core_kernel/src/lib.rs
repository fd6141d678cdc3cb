//! Core Kernel - Foundational types for the claims intake system
//!
//! This crate provides the identifier types shared across all layers.
//! Catalog entities (plans, benefits, procedures), members, and users are
//! keyed by integer identity columns; claims additionally carry a public
//! UUID that is the only claim identifier ever exposed to API callers.

pub mod identifiers;

pub use identifiers::{BenefitId, ClaimId, MemberId, PlanId, ProcedureId, UserId};
