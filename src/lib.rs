// Loan Feasibility - Core Library
// Exposes the calculation engine for use in CLI, API server, and tests

pub mod inputs;
pub mod report;
pub mod schedule;
pub mod summary;
pub mod tax;
pub mod tuition;

// Re-export commonly used types
pub use inputs::{BillingPeriod, LoanInputs};
pub use report::{calculate, FeasibilityReport};
pub use schedule::{
    amortized_monthly_payment, build_payment_schedule, PaymentRisk, PaymentRow, LOAN_TERMS,
};
pub use summary::{summarize, AffordabilitySummary, ResidualBand};
pub use tax::{
    estimate_monthly_take_home, marginal_tax_rate, TakeHomeEstimate, PAYROLL_TAX_RATE,
    STANDARD_DEDUCTION,
};
pub use tuition::project_total_tuition;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
