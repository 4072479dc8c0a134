// 💵 Take-Home Estimator - 2024 federal bracket lookup + flat payroll tax
//
// Deliberately applies a single marginal rate to the whole taxable base
// instead of stacking brackets. The tool is an estimator; the bracket table
// is hardcoded for one tax year.

use serde::{Deserialize, Serialize};

/// 2024 single-filer standard deduction
pub const STANDARD_DEDUCTION: f64 = 13850.0;

/// FICA (Social Security + Medicare), employee share
pub const PAYROLL_TAX_RATE: f64 = 0.0765;

/// 2024 bracket upper bounds with their marginal rates
const TAX_BRACKETS: [(f64, f64); 4] = [
    (11600.0, 0.10),
    (47150.0, 0.12),
    (100525.0, 0.22),
    (191950.0, 0.24),
];

/// Marginal rate above the last bracket bound
const TOP_RATE: f64 = 0.32;

/// Marginal rate selected by gross salary (not by taxable income)
pub fn marginal_tax_rate(gross_salary: f64) -> f64 {
    for (bound, rate) in TAX_BRACKETS {
        if gross_salary <= bound {
            return rate;
        }
    }

    TOP_RATE
}

// ============================================================================
// TAKE-HOME ESTIMATE
// ============================================================================

/// Estimated take-home pay, derived solely from gross salary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeHomeEstimate {
    pub gross_salary: f64,
    pub federal_tax: f64,
    pub payroll_tax: f64,
    pub annual_net: f64,
    pub monthly_net: f64,
}

impl TakeHomeEstimate {
    pub fn from_gross(gross_salary: f64) -> Self {
        let taxable_income = (gross_salary - STANDARD_DEDUCTION).max(0.0);
        let federal_tax = taxable_income * marginal_tax_rate(gross_salary);
        let payroll_tax = gross_salary * PAYROLL_TAX_RATE;
        let annual_net = gross_salary - federal_tax - payroll_tax;

        TakeHomeEstimate {
            gross_salary,
            federal_tax,
            payroll_tax,
            annual_net,
            monthly_net: annual_net / 12.0,
        }
    }
}

/// Monthly net income after estimated federal and payroll taxes
pub fn estimate_monthly_take_home(gross_salary: f64) -> f64 {
    TakeHomeEstimate::from_gross(gross_salary).monthly_net
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_edges() {
        assert_eq!(marginal_tax_rate(11600.0), 0.10);
        assert_eq!(marginal_tax_rate(11601.0), 0.12);
        assert_eq!(marginal_tax_rate(47150.0), 0.12);
        assert_eq!(marginal_tax_rate(47151.0), 0.22);
        assert_eq!(marginal_tax_rate(100525.0), 0.22);
        assert_eq!(marginal_tax_rate(191950.0), 0.24);
        assert_eq!(marginal_tax_rate(191951.0), 0.32);
    }

    #[test]
    fn test_fifty_thousand_salary() {
        let estimate = TakeHomeEstimate::from_gross(50000.0);

        // taxable 36150 at the 12% bracket, payroll 7.65% of gross
        assert!((estimate.federal_tax - 4338.0).abs() < 1e-9);
        assert!((estimate.payroll_tax - 3825.0).abs() < 1e-9);
        assert!((estimate.annual_net - 41837.0).abs() < 1e-9);
        assert!((estimate.monthly_net - 3486.42).abs() < 0.01);
    }

    #[test]
    fn test_salary_below_deduction_pays_no_income_tax() {
        let estimate = TakeHomeEstimate::from_gross(11600.0);

        assert_eq!(estimate.federal_tax, 0.0);
        assert!((estimate.monthly_net - (11600.0 - 11600.0 * PAYROLL_TAX_RATE) / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_convenience_wrapper_matches_breakdown() {
        assert_eq!(
            estimate_monthly_take_home(85000.0),
            TakeHomeEstimate::from_gross(85000.0).monthly_net
        );
    }
}
