// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::env;

use loan_feasibility::{calculate, LoanInputs, PaymentRisk, ResidualBand};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "report" {
        // One-shot report mode
        run_report(args.get(2).map(String::as_str))?;
    } else {
        // UI mode (default)
        run_ui_mode()?;
    }

    Ok(())
}

fn run_report(scenario_path: Option<&str>) -> Result<()> {
    println!("🎓 Loan Feasibility - Repayment Report");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let inputs = match scenario_path {
        Some(path) => {
            println!("\n📂 Loading scenario from {}...", path);
            let inputs = LoanInputs::from_file(path)?;
            println!("✓ Scenario loaded");
            inputs
        }
        None => LoanInputs::default(),
    };

    let report = calculate(&inputs);

    println!(
        "\n💰 Total {}-year tuition cost: ${:.2}",
        inputs.program_years, report.total_tuition
    );
    println!(
        "💵 Monthly take-home pay (after taxes + payroll): ${:.2}",
        report.take_home.monthly_net
    );

    println!(
        "\n{:<11} {:>16} {:>15} {:>10}",
        "Term (Yrs)", "Monthly Payment", "% of Take-Home", "Risk"
    );
    for row in &report.payments {
        let risk = PaymentRisk::from_ratio(row.percent_of_take_home);
        println!(
            "{:<11} {:>16} {:>14.1}% {:>10}",
            row.term_years,
            format!("${:.2}", row.monthly_payment),
            row.percent_of_take_home,
            risk.as_str()
        );
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Lowest monthly payment:   ${:.2}", report.summary.lowest_payment);
    println!("Estimated cost of living: ${:.2}", inputs.monthly_living_cost);
    println!("Remaining monthly income: ${:.2}", report.summary.remaining_monthly);

    let band = ResidualBand::from_residual(report.summary.remaining_monthly);
    println!("\n{}", band.advisory());

    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode() -> Result<()> {
    println!("🖥️  Loading Loan Feasibility UI...\n");

    let mut app = ui::App::new(LoanInputs::default());
    ui::run_ui(&mut app)?;

    println!("\n✅ UI closed successfully");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode() -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use one-shot mode: cargo run report");
    std::process::exit(1);
}
