// 💰 Affordability Summary - Lowest payment and residual monthly cash

use crate::schedule::PaymentRow;
use serde::{Deserialize, Serialize};

/// The bottom line across all candidate terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffordabilitySummary {
    /// Smallest monthly payment across the schedule (the longest term)
    pub lowest_payment: f64,

    /// Take-home minus the lowest payment minus living costs
    pub remaining_monthly: f64,
}

/// Minimum payment over the schedule and what is left of a month's
/// take-home after that payment and living costs
pub fn summarize(
    rows: &[PaymentRow],
    monthly_take_home: f64,
    monthly_living_cost: f64,
) -> AffordabilitySummary {
    let lowest_payment = if rows.is_empty() {
        0.0
    } else {
        rows.iter()
            .map(|row| row.monthly_payment)
            .fold(f64::INFINITY, f64::min)
    };

    AffordabilitySummary {
        lowest_payment,
        remaining_monthly: monthly_take_home - lowest_payment - monthly_living_cost,
    }
}

// ============================================================================
// RESIDUAL BANDS
// ============================================================================

/// Residual-cash classification behind the summary advisories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidualBand {
    Deficit,
    VeryLow,
    Low,
    Sustainable,
}

impl ResidualBand {
    pub fn from_residual(remaining_monthly: f64) -> Self {
        if remaining_monthly < 0.0 {
            ResidualBand::Deficit
        } else if remaining_monthly < 400.0 {
            ResidualBand::VeryLow
        } else if remaining_monthly < 750.0 {
            ResidualBand::Low
        } else {
            ResidualBand::Sustainable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResidualBand::Deficit => "Deficit",
            ResidualBand::VeryLow => "Very Low",
            ResidualBand::Low => "Low",
            ResidualBand::Sustainable => "Sustainable",
        }
    }

    /// Advisory line shown under the financial summary
    pub fn advisory(&self) -> &'static str {
        match self {
            ResidualBand::Deficit => {
                "Warning: Your estimated expenses exceed your take-home pay!"
            }
            ResidualBand::VeryLow => {
                "Caution: Your remaining monthly income is very low! Less than $400/month."
            }
            ResidualBand::Low => {
                "Caution: Your remaining monthly income is low! Less than $750/month"
            }
            ResidualBand::Sustainable => {
                "Your financial plan appears sustainable! Minimum $750/month remaining."
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(term_years: u32, monthly_payment: f64) -> PaymentRow {
        PaymentRow {
            term_years,
            monthly_payment,
            percent_of_take_home: 0.0,
        }
    }

    #[test]
    fn test_summary_picks_lowest_payment() {
        let rows = vec![row(5, 1789.42), row(10, 1091.98), row(30, 693.60)];
        let summary = summarize(&rows, 3486.42, 2500.0);

        assert_eq!(summary.lowest_payment, 693.60);
        assert!((summary.remaining_monthly - (3486.42 - 693.60 - 2500.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_schedule_owes_nothing() {
        let summary = summarize(&[], 3000.0, 2000.0);

        assert_eq!(summary.lowest_payment, 0.0);
        assert_eq!(summary.remaining_monthly, 1000.0);
    }

    #[test]
    fn test_residual_band_boundaries() {
        assert_eq!(ResidualBand::from_residual(-0.01), ResidualBand::Deficit);
        assert_eq!(ResidualBand::from_residual(0.0), ResidualBand::VeryLow);
        assert_eq!(ResidualBand::from_residual(399.99), ResidualBand::VeryLow);
        assert_eq!(ResidualBand::from_residual(400.0), ResidualBand::Low);
        assert_eq!(ResidualBand::from_residual(749.99), ResidualBand::Low);
        assert_eq!(ResidualBand::from_residual(750.0), ResidualBand::Sustainable);
    }

    #[test]
    fn test_deficit_advisory_warns() {
        let band = ResidualBand::from_residual(-120.0);

        assert!(band.advisory().starts_with("Warning"));
    }
}
