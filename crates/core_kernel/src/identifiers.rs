//! Strongly-typed identifiers for domain entities
//!
//! Newtype wrappers prevent accidental mixing of identifier types, e.g.
//! passing a benefit id where a plan id is expected. Rows in the store are
//! keyed by integer identity columns; the claim's public identifier is a
//! UUID generated at adjudication time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_row_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            /// Returns the raw identity column value
            pub const fn get(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> i32 {
                id.0
            }
        }
    };
}

define_row_id!(UserId);
define_row_id!(PlanId);
define_row_id!(BenefitId);
define_row_id!(MemberId);
define_row_id!(ProcedureId);

/// Public claim identifier
///
/// Distinct from the claim row's internal primary key; this is the value
/// returned by the submission endpoint and accepted by the lookup endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(Uuid);

impl ClaimId {
    /// Generates a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClaimId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<Uuid> for ClaimId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<ClaimId> for Uuid {
    fn from(id: ClaimId) -> Uuid {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_id_round_trip() {
        let id = ClaimId::new();
        let parsed: ClaimId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_claim_id_uuid_conversion() {
        let uuid = Uuid::new_v4();
        let claim_id = ClaimId::from(uuid);
        let back: Uuid = claim_id.into();
        assert_eq!(uuid, back);
    }

    #[test]
    fn test_row_id_accessors() {
        let member = MemberId::new(42);
        assert_eq!(member.get(), 42);
        assert_eq!(i32::from(member), 42);
        assert_eq!(MemberId::from(42), member);
    }

    #[test]
    fn test_row_id_serde_transparent() {
        let plan = PlanId::new(7);
        assert_eq!(serde_json::to_string(&plan).unwrap(), "7");
        let back: PlanId = serde_json::from_str("7").unwrap();
        assert_eq!(back, plan);
    }

    #[test]
    fn test_claim_id_serde_transparent() {
        let id = ClaimId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }
}
