//! Infrastructure Database Layer
//!
//! PostgreSQL access for the claims intake core, built on SQLx.
//!
//! Repositories own a connection pool handle passed in at construction;
//! there is no ambient/global store handle anywhere in the system. The
//! claims repository is the only component that writes claim rows, and it
//! does so inside a single transaction that also holds the member row
//! lock and performs every read the decision depends on.

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use repositories::claims::{
    AdjudicatedClaim, AdjudicationError, ClaimsRepository, NewClaimSubmission,
};
pub use repositories::users::{NewUser, UsersRepository};
