//! Property-Based Test Generators
//!
//! Proptest strategies for generating adjudication inputs that stay
//! inside the domain's invariants (positive money amounts with two
//! decimal places, as stored in the `numeric` columns).

use domain_claims::BenefitTerms;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for positive monetary amounts (0.01 to 10,000,000.00)
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for annual limits
pub fn limit_strategy() -> impl Strategy<Value = Decimal> {
    amount_strategy()
}

/// Strategy for optional annual limits, biased toward present
pub fn optional_limit_strategy() -> impl Strategy<Value = Option<Decimal>> {
    prop_oneof![
        4 => limit_strategy().prop_map(Some),
        1 => Just(None),
    ]
}

/// Strategy for arbitrary plan-benefit terms
pub fn benefit_terms_strategy() -> impl Strategy<Value = BenefitTerms> {
    (optional_limit_strategy(), any::<bool>())
        .prop_map(|(annual_limit, is_excluded)| BenefitTerms::new(annual_limit, is_excluded))
}

/// Strategy for terms that actually provide coverage
pub fn covered_terms_strategy() -> impl Strategy<Value = BenefitTerms> {
    limit_strategy().prop_map(BenefitTerms::covered)
}
