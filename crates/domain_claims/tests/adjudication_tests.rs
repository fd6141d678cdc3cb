//! Tests for the adjudication decision logic

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_claims::{is_fraudulent, resolve_coverage, AdjudicationOutcome, ClaimStatus};
use test_utils::assertions::DecisionAssertions;
use test_utils::builders::BenefitTermsBuilder;
use test_utils::fixtures::{AmountFixtures, TermsFixtures};
use test_utils::generators::{amount_strategy, benefit_terms_strategy, covered_terms_strategy};

// ============================================================================
// Coverage Resolution
// ============================================================================

mod coverage_tests {
    use super::*;

    #[test]
    fn test_worked_example_small_claim_approved() {
        let terms = TermsFixtures::covered();
        let decision = resolve_coverage(Some(&terms), AmountFixtures::small_claim());
        decision.assert_approved(dec!(800));
    }

    #[test]
    fn test_worked_example_large_claim_partial() {
        let terms = TermsFixtures::covered();
        let decision = resolve_coverage(Some(&terms), AmountFixtures::large_claim());
        // The long-standing payout formula: the excess over the limit.
        decision.assert_partial(dec!(200));
    }

    #[test]
    fn test_excluded_benefit_rejected() {
        let terms = TermsFixtures::excluded();
        resolve_coverage(Some(&terms), AmountFixtures::small_claim()).assert_rejected();
    }

    #[test]
    fn test_unpriced_link_rejected() {
        let terms = TermsFixtures::unpriced();
        resolve_coverage(Some(&terms), AmountFixtures::small_claim()).assert_rejected();
    }

    #[test]
    fn test_missing_link_rejected() {
        resolve_coverage(None, AmountFixtures::small_claim()).assert_rejected();
    }

    #[test]
    fn test_limit_exactly_matching_claim_approved_in_full() {
        let terms = BenefitTermsBuilder::new().with_annual_limit(dec!(800)).build();
        resolve_coverage(Some(&terms), dec!(800)).assert_approved(dec!(800));
    }

    proptest! {
        #[test]
        fn prop_limit_at_or_above_claim_approves_in_full(
            amount in amount_strategy(),
            headroom in amount_strategy(),
        ) {
            let terms = BenefitTermsBuilder::new()
                .with_annual_limit(amount + headroom)
                .build();

            let decision = resolve_coverage(Some(&terms), amount);
            prop_assert_eq!(decision.status, ClaimStatus::Approved);
            prop_assert_eq!(decision.approved_amount, amount);
        }

        #[test]
        fn prop_limit_below_claim_approves_the_excess(
            limit in amount_strategy(),
            excess in amount_strategy(),
        ) {
            let terms = BenefitTermsBuilder::new().with_annual_limit(limit).build();
            let amount = limit + excess;

            let decision = resolve_coverage(Some(&terms), amount);
            prop_assert_eq!(decision.status, ClaimStatus::Partial);
            prop_assert_eq!(decision.approved_amount, amount - limit);
        }

        #[test]
        fn prop_excluded_terms_always_reject(
            terms in benefit_terms_strategy(),
            amount in amount_strategy(),
        ) {
            prop_assume!(terms.is_excluded || terms.annual_limit.is_none());

            let decision = resolve_coverage(Some(&terms), amount);
            prop_assert_eq!(decision.status, ClaimStatus::Rejected);
            prop_assert_eq!(decision.approved_amount, Decimal::ZERO);
        }

        #[test]
        fn prop_approved_amount_is_never_negative(
            terms in benefit_terms_strategy(),
            amount in amount_strategy(),
        ) {
            let decision = resolve_coverage(Some(&terms), amount);
            prop_assert!(decision.approved_amount >= Decimal::ZERO);
        }
    }
}

// ============================================================================
// Fraud Heuristic
// ============================================================================

mod fraud_tests {
    use super::*;

    #[test]
    fn test_borderline_amount_flags() {
        // 1200 against an average cost of exactly 500: 1200 > 1000.
        assert!(is_fraudulent(
            AmountFixtures::large_claim(),
            AmountFixtures::average_cost()
        ));
    }

    #[test]
    fn test_small_claim_does_not_flag() {
        assert!(!is_fraudulent(
            AmountFixtures::small_claim(),
            AmountFixtures::average_cost()
        ));
    }

    proptest! {
        #[test]
        fn prop_flag_iff_more_than_twice_average(
            amount in amount_strategy(),
            average_cost in amount_strategy(),
        ) {
            let flagged = is_fraudulent(amount, average_cost);
            prop_assert_eq!(flagged, amount > average_cost * dec!(2));
        }
    }
}

// ============================================================================
// Combined Outcome
// ============================================================================

mod outcome_tests {
    use super::*;

    #[test]
    fn test_outcome_carries_both_signals() {
        let terms = TermsFixtures::covered();
        let outcome = AdjudicationOutcome::decide(
            Some(&terms),
            AmountFixtures::large_claim(),
            AmountFixtures::average_cost(),
        );

        outcome.assert_partial(dec!(200));
        assert!(outcome.fraud_flag);
    }

    proptest! {
        #[test]
        fn prop_fraud_flag_never_changes_the_status(
            terms in covered_terms_strategy(),
            amount in amount_strategy(),
            average_cost in amount_strategy(),
        ) {
            let outcome = AdjudicationOutcome::decide(Some(&terms), amount, average_cost);
            let coverage_only = resolve_coverage(Some(&terms), amount);

            prop_assert_eq!(outcome.status, coverage_only.status);
            prop_assert_eq!(outcome.approved_amount, coverage_only.approved_amount);
        }
    }
}
