//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the adjudication test suite. Amounts line
//! up so the standard plan (limit 1000, average cost 500) exercises every
//! decision branch.

use domain_claims::BenefitTerms;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture amounts for coverage and fraud scenarios
pub struct AmountFixtures;

impl AmountFixtures {
    /// The standard plan-benefit annual limit
    pub fn standard_limit() -> Decimal {
        dec!(1000)
    }

    /// A claim comfortably inside the standard limit
    pub fn small_claim() -> Decimal {
        dec!(800)
    }

    /// A claim above the standard limit (and above twice the average cost)
    pub fn large_claim() -> Decimal {
        dec!(1200)
    }

    /// The standard procedure average cost
    pub fn average_cost() -> Decimal {
        dec!(500)
    }
}

/// Fixture plan-benefit terms
pub struct TermsFixtures;

impl TermsFixtures {
    /// Covered terms at the standard limit
    pub fn covered() -> BenefitTerms {
        BenefitTerms::covered(AmountFixtures::standard_limit())
    }

    /// Terms the plan has excluded
    pub fn excluded() -> BenefitTerms {
        BenefitTerms::new(Some(AmountFixtures::standard_limit()), true)
    }

    /// Linked terms that never got a limit
    pub fn unpriced() -> BenefitTerms {
        BenefitTerms::new(None, false)
    }
}

/// Fixture account data for registration/login tests
pub struct AccountFixtures;

impl AccountFixtures {
    pub fn name() -> String {
        Name().fake()
    }

    pub fn email() -> String {
        SafeEmail().fake()
    }

    /// A local-format Kenyan mobile number as users actually type it
    pub fn phone_number() -> String {
        "0712 345 678".to_string()
    }
}

/// Fixture procedure catalog entries
pub struct ProcedureFixtures;

impl ProcedureFixtures {
    pub fn code() -> &'static str {
        "PROC-DENTAL-CLEAN"
    }

    pub fn unknown_code() -> &'static str {
        "PROC-DOES-NOT-EXIST"
    }
}
