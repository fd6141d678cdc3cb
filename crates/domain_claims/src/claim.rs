//! Claim decision status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome status of an adjudicated claim
///
/// Serialized in SCREAMING case on the wire and in the store
/// (`APPROVED` / `PARTIAL` / `REJECTED`). A claim's status is decided
/// exactly once, at submission; there is no update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    /// Requested amount fully approved
    Approved,
    /// Requested amount exceeds the plan-benefit limit
    Partial,
    /// No coverage: missing link, no limit set, or benefit excluded
    Rejected,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Approved => "APPROVED",
            ClaimStatus::Partial => "PARTIAL",
            ClaimStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_string(&ClaimStatus::Approved).unwrap(), "\"APPROVED\"");
        assert_eq!(serde_json::to_string(&ClaimStatus::Partial).unwrap(), "\"PARTIAL\"");
        assert_eq!(serde_json::to_string(&ClaimStatus::Rejected).unwrap(), "\"REJECTED\"");
    }

    #[test]
    fn test_status_parse() {
        let status: ClaimStatus = serde_json::from_str("\"PARTIAL\"").unwrap();
        assert_eq!(status, ClaimStatus::Partial);
    }

    #[test]
    fn test_status_display_matches_as_str() {
        for status in [ClaimStatus::Approved, ClaimStatus::Partial, ClaimStatus::Rejected] {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}
