//! Fraud scoring heuristic

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Flags a claim whose amount is anomalously high for the procedure
///
/// True iff the claimed amount is strictly more than twice the
/// procedure's historical average cost. The flag is advisory: it is
/// recorded with the claim for downstream review and never changes the
/// coverage decision. `average_cost` is a NOT NULL column, so a missing
/// value cannot reach this function.
pub fn is_fraudulent(claim_amount: Decimal, average_cost: Decimal) -> bool {
    claim_amount > average_cost * dec!(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_above_twice_average_flags() {
        assert!(is_fraudulent(dec!(1001), dec!(500)));
    }

    #[test]
    fn test_amount_at_twice_average_does_not_flag() {
        assert!(!is_fraudulent(dec!(1000), dec!(500)));
    }

    #[test]
    fn test_amount_below_twice_average_does_not_flag() {
        assert!(!is_fraudulent(dec!(800), dec!(500)));
    }
}
