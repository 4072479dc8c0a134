// 🧾 Feasibility Report - One calculation pass, consumed by every view

use crate::inputs::LoanInputs;
use crate::schedule::{build_payment_schedule, PaymentRow};
use crate::summary::{summarize, AffordabilitySummary};
use crate::tax::TakeHomeEstimate;
use crate::tuition::project_total_tuition;
use serde::{Deserialize, Serialize};

/// Everything a view needs to render one calculation.
///
/// Values stay numeric; currency and percent formatting belong to the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    pub total_tuition: f64,
    pub take_home: TakeHomeEstimate,
    pub payments: Vec<PaymentRow>,
    pub summary: AffordabilitySummary,
}

/// Pure transformation from form inputs to a report. Deterministic, no I/O.
pub fn calculate(inputs: &LoanInputs) -> FeasibilityReport {
    let total_tuition = project_total_tuition(
        inputs.tuition_amount,
        inputs.effective_periods_per_year(),
        inputs.escalation_rate,
        inputs.program_years,
    );

    let take_home = TakeHomeEstimate::from_gross(inputs.gross_salary);
    let payments =
        build_payment_schedule(total_tuition, inputs.interest_rate, take_home.monthly_net);
    let summary = summarize(&payments, take_home.monthly_net, inputs.monthly_living_cost);

    FeasibilityReport {
        total_tuition,
        take_home,
        payments,
        summary,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::BillingPeriod;

    #[test]
    fn test_default_inputs_end_to_end() {
        let report = calculate(&LoanInputs::default());

        // 10000 x 2 terms over 4 years at 5% escalation
        assert!((report.total_tuition - 86202.5).abs() < 1e-6);
        assert!((report.take_home.monthly_net - 3486.42).abs() < 0.01);

        assert_eq!(report.payments.len(), 6);
        let terms: Vec<u32> = report.payments.iter().map(|row| row.term_years).collect();
        assert_eq!(terms, vec![5, 10, 15, 20, 25, 30]);

        // 30-year term carries the smallest payment
        let last = report.payments.last().unwrap();
        assert_eq!(report.summary.lowest_payment, last.monthly_payment);

        let expected_remaining =
            report.take_home.monthly_net - report.summary.lowest_payment - 2500.0;
        assert!((report.summary.remaining_monthly - expected_remaining).abs() < 1e-9);
    }

    #[test]
    fn test_per_year_billing_shrinks_principal() {
        let per_term = calculate(&LoanInputs::default());
        let per_year = calculate(&LoanInputs {
            billing_period: BillingPeriod::PerYear,
            ..LoanInputs::default()
        });

        assert!((per_year.total_tuition - per_term.total_tuition / 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_report_is_deterministic() {
        let inputs = LoanInputs::default();

        assert_eq!(calculate(&inputs), calculate(&inputs));
    }
}
