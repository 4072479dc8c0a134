// 📊 Payment Schedule - Level-payment amortization across candidate terms

use serde::{Deserialize, Serialize};

/// Candidate loan terms in years, ascending
pub const LOAN_TERMS: [u32; 6] = [5, 10, 15, 20, 25, 30];

/// One candidate term's level payment and its share of take-home pay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRow {
    pub term_years: u32,
    pub monthly_payment: f64,
    pub percent_of_take_home: f64,
}

/// Standard level-payment amortization.
///
/// A zero-rate loan degenerates to `principal / n`. A zero-year term
/// resolves to zero payment periods and propagates a non-finite result;
/// inputs are trusted, matching the tool's advisory nature.
pub fn amortized_monthly_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let r = annual_rate / 12.0;
    let n = term_years as f64 * 12.0;

    if r == 0.0 {
        return principal / n;
    }

    principal * (r * (1.0 + r).powf(n)) / ((1.0 + r).powf(n) - 1.0)
}

/// One `PaymentRow` per candidate term, in ascending term order
pub fn build_payment_schedule(
    principal: f64,
    annual_rate: f64,
    monthly_take_home: f64,
) -> Vec<PaymentRow> {
    LOAN_TERMS
        .iter()
        .map(|&term_years| {
            let monthly_payment = amortized_monthly_payment(principal, annual_rate, term_years);

            PaymentRow {
                term_years,
                monthly_payment,
                percent_of_take_home: (monthly_payment / monthly_take_home) * 100.0,
            }
        })
        .collect()
}

// ============================================================================
// PAYMENT RISK BANDS
// ============================================================================

/// Payment-to-income classification shared by every view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentRisk {
    Low,
    Moderate,
    Elevated,
    High,
}

impl PaymentRisk {
    pub fn from_ratio(percent_of_take_home: f64) -> Self {
        if percent_of_take_home <= 15.0 {
            PaymentRisk::Low
        } else if percent_of_take_home <= 33.333 {
            PaymentRisk::Moderate
        } else if percent_of_take_home <= 50.0 {
            PaymentRisk::Elevated
        } else {
            PaymentRisk::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentRisk::Low => "Low",
            PaymentRisk::Moderate => "Moderate",
            PaymentRisk::Elevated => "Elevated",
            PaymentRisk::High => "High",
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_rate_divides_principal_evenly() {
        assert_eq!(amortized_monthly_payment(86202.5, 0.0, 10), 86202.5 / 120.0);
        assert_eq!(amortized_monthly_payment(12000.0, 0.0, 5), 200.0);
    }

    #[test]
    fn test_level_payment_formula() {
        // 86202.50 at 9% over 10 years
        let payment = amortized_monthly_payment(86202.5, 0.09, 10);

        assert!((payment - 1091.98).abs() < 0.01);
    }

    #[test]
    fn test_payment_decreases_with_longer_terms() {
        let mut previous = f64::INFINITY;

        for &term in LOAN_TERMS.iter() {
            let payment = amortized_monthly_payment(86202.5, 0.09, term);
            assert!(payment < previous, "payment should shrink at {} years", term);
            previous = payment;
        }
    }

    #[test]
    fn test_schedule_covers_all_terms_in_order() {
        let rows = build_payment_schedule(86202.5, 0.09, 3486.42);

        assert_eq!(rows.len(), 6);
        let terms: Vec<u32> = rows.iter().map(|row| row.term_years).collect();
        assert_eq!(terms, vec![5, 10, 15, 20, 25, 30]);
    }

    #[test]
    fn test_ratio_is_percent_of_take_home() {
        let rows = build_payment_schedule(86202.5, 0.09, 3486.42);

        for row in &rows {
            let expected = row.monthly_payment / 3486.42 * 100.0;
            assert!((row.percent_of_take_home - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_risk_band_boundaries() {
        assert_eq!(PaymentRisk::from_ratio(15.0), PaymentRisk::Low);
        assert_eq!(PaymentRisk::from_ratio(15.001), PaymentRisk::Moderate);
        assert_eq!(PaymentRisk::from_ratio(33.333), PaymentRisk::Moderate);
        assert_eq!(PaymentRisk::from_ratio(33.334), PaymentRisk::Elevated);
        assert_eq!(PaymentRisk::from_ratio(50.0), PaymentRisk::Elevated);
        assert_eq!(PaymentRisk::from_ratio(50.001), PaymentRisk::High);
    }
}
