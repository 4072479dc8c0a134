// 🎓 Tuition Projection - Total principal across the program length

/// Total tuition for the whole program, compounding the yearly escalation.
///
/// Year one is charged at the current rate; the per-year amount grows by
/// `escalation_rate` after each year is accumulated, so escalation starts
/// compounding in year two. A `program_years` of zero yields 0.0. No upper
/// bound is enforced; very large inputs produce very large outputs.
pub fn project_total_tuition(
    per_period_amount: f64,
    periods_per_year: u32,
    escalation_rate: f64,
    program_years: u32,
) -> f64 {
    let mut total = 0.0;
    let mut yearly_tuition = per_period_amount * periods_per_year as f64;

    for _ in 0..program_years {
        total += yearly_tuition;
        yearly_tuition *= 1.0 + escalation_rate;
    }

    total
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_escalation_is_simple_product() {
        // No escalation: per-period x periods x years, exactly
        let total = project_total_tuition(10000.0, 2, 0.0, 4);

        assert_eq!(total, 10000.0 * 2.0 * 4.0);
    }

    #[test]
    fn test_escalation_compounds_from_year_two() {
        // 20000 + 21000 + 22050 + 23152.50
        let total = project_total_tuition(10000.0, 2, 0.05, 4);

        assert!((total - 86202.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_years_yields_zero() {
        assert_eq!(project_total_tuition(10000.0, 2, 0.05, 0), 0.0);
    }

    #[test]
    fn test_single_year_is_not_escalated() {
        let total = project_total_tuition(12000.0, 1, 0.10, 1);

        assert_eq!(total, 12000.0);
    }
}
