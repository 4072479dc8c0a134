// 📋 Loan Inputs - The form values every view collects
// Scenario files let the CLI load a saved set of inputs from JSON

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// BILLING PERIOD
// ============================================================================

/// How the tuition amount is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BillingPeriod {
    /// Amount is charged once per term (semester, quarter, trimester)
    PerTerm,

    /// Amount already covers a full academic year
    PerYear,
}

impl BillingPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingPeriod::PerTerm => "Per Term",
            BillingPeriod::PerYear => "Per Year",
        }
    }
}

// ============================================================================
// LOAN INPUTS
// ============================================================================

/// Everything the calculator needs for one pass.
///
/// Rates are fractions (0.05 = 5%), not percentages. Callers are expected
/// to supply sane values: `periods_per_year >= 1`, `program_years >= 1`,
/// rates >= 0. Out-of-domain numbers are not rejected; the math propagates
/// whatever they produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoanInputs {
    /// Tuition charged per billing period
    pub tuition_amount: f64,

    /// Whether `tuition_amount` is per term or per year
    pub billing_period: BillingPeriod,

    /// Billing periods in one academic year (ignored for per-year billing)
    pub periods_per_year: u32,

    /// Program length in years
    pub program_years: u32,

    /// Annual tuition escalation rate, as a fraction
    pub escalation_rate: f64,

    /// Annual loan interest rate, as a fraction
    pub interest_rate: f64,

    /// Expected gross annual starting salary
    pub gross_salary: f64,

    /// Expected monthly cost of living
    pub monthly_living_cost: f64,
}

impl Default for LoanInputs {
    fn default() -> Self {
        LoanInputs {
            tuition_amount: 10000.0,
            billing_period: BillingPeriod::PerTerm,
            periods_per_year: 2,
            program_years: 4,
            escalation_rate: 0.05,
            interest_rate: 0.09,
            gross_salary: 50000.0,
            monthly_living_cost: 2500.0,
        }
    }
}

impl LoanInputs {
    /// Load a saved scenario from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read scenario file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content).context("Failed to parse scenario JSON")
    }

    /// Billing periods that actually contribute to a year's tuition.
    /// Per-year billing collapses to a single period regardless of
    /// `periods_per_year`.
    pub fn effective_periods_per_year(&self) -> u32 {
        match self.billing_period {
            BillingPeriod::PerTerm => self.periods_per_year,
            BillingPeriod::PerYear => 1,
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
    fn test_per_year_billing_ignores_period_count() {
        let inputs = LoanInputs {
            billing_period: BillingPeriod::PerYear,
            periods_per_year: 3,
            ..LoanInputs::default()
        };

        assert_eq!(inputs.effective_periods_per_year(), 1);
    }

    #[test]
    fn test_per_term_billing_uses_period_count() {
        let inputs = LoanInputs::default();

        assert_eq!(inputs.effective_periods_per_year(), 2);
    }

    #[test]
    fn test_scenario_json_fills_missing_fields_from_defaults() {
        let inputs: LoanInputs =
            serde_json::from_str(r#"{"tuition_amount": 25000.0, "billing_period": "PerYear"}"#)
                .unwrap();

        assert_eq!(inputs.tuition_amount, 25000.0);
        assert_eq!(inputs.billing_period, BillingPeriod::PerYear);
        assert_eq!(inputs.program_years, 4);
        assert_eq!(inputs.gross_salary, 50000.0);
    }
}
