//! SIP Projector CLI
//!
//! Command-line interface for running SIP growth projections

use anyhow::Context;
use clap::Parser;
use sip_projector::{
    plan::RawPlanInput,
    projection::{year_of_month, ProjectionConfig, ProjectionEngine, ProjectionResult},
    report::{render_report, CurrencyFormat, ReportOptions},
    SipPlan,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sip_projector", version, about = "Project the growth of a monthly SIP")]
struct Args {
    /// Amount contributed each month
    #[arg(long)]
    monthly_investment: f64,

    /// Nominal annual return, in percent
    #[arg(long)]
    annual_return: f64,

    /// Investment horizon in years (fractional allowed)
    #[arg(long)]
    years: f64,

    /// Annual inflation, in percent (recorded in the report, not applied)
    #[arg(long)]
    inflation: f64,

    /// Currency symbol for formatted output
    #[arg(long, default_value = "₹")]
    currency_symbol: String,

    /// Write the month-by-month schedule to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the paginated report document to a file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Emit the full result as JSON instead of tables
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let raw = RawPlanInput {
        monthly_investment: Some(args.monthly_investment),
        annual_return_percent: Some(args.annual_return),
        years: Some(args.years),
        inflation_percent: Some(args.inflation),
    };
    let plan = raw.validate()?;

    let engine = ProjectionEngine::new(ProjectionConfig::default());
    let result = engine.project(&plan);
    let currency = CurrencyFormat::new(args.currency_symbol);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_tables(&plan, &result, &currency);
    }

    if let Some(path) = &args.csv {
        write_schedule_csv(path, &plan, &result)
            .with_context(|| format!("writing schedule to {}", path.display()))?;
        println!("\nSchedule written to: {}", path.display());
    }

    if let Some(path) = &args.report {
        let options = ReportOptions {
            currency: currency.clone(),
            ..Default::default()
        };
        fs::write(path, render_report(&plan, &result, &options))
            .with_context(|| format!("writing report to {}", path.display()))?;
        println!("Report written to: {}", path.display());
    }

    Ok(())
}

fn print_tables(plan: &SipPlan, result: &ProjectionResult, currency: &CurrencyFormat) {
    println!("SIP Projector v0.1.0");
    println!("====================\n");

    println!("Plan:");
    println!(
        "  Monthly Investment: {}",
        currency.format(plan.monthly_investment)
    );
    println!("  Annual Return: {:.2}%", plan.annual_return_percent);
    println!("  Horizon: {} years ({} months)", plan.years, result.months());
    println!("  Inflation (recorded): {:.2}%", plan.inflation_percent);
    println!();

    println!("Projection ({} months):", result.months());
    println!("{:>5} {:>4} {:>16} {:>16}", "Month", "Year", "Invested", "Value");
    println!("{}", "-".repeat(44));

    // Print first 24 months to console
    for (i, &value) in result.value_series.iter().take(24).enumerate() {
        let month = i as u32 + 1;
        println!(
            "{:>5} {:>4} {:>16.2} {:>16.2}",
            month,
            year_of_month(month),
            plan.monthly_investment * month as f64,
            value,
        );
    }

    if result.value_series.len() > 24 {
        println!("... ({} more months)", result.value_series.len() - 24);
    }

    println!("\nYearly Breakdown:");
    println!("{:>4} {:>18} {:>18}", "Year", "Total Invested", "Future Value");
    for row in &result.yearly_breakdown {
        println!(
            "{:>4} {:>18} {:>18}",
            row.year,
            currency.format(row.total_invested),
            currency.format(row.future_value),
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Total Months: {}", summary.months);
    println!("  Total Invested: {}", currency.format(summary.total_invested));
    println!("  Future Value: {}", currency.format(summary.future_value));
    println!("  Wealth Gain: {}", currency.format(summary.wealth_gain));
}

fn write_schedule_csv(
    path: &PathBuf,
    plan: &SipPlan,
    result: &ProjectionResult,
) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Month", "Year", "TotalInvested", "FutureValue"])?;

    for (i, &value) in result.value_series.iter().enumerate() {
        let month = i as u32 + 1;
        writer.write_record(&[
            month.to_string(),
            year_of_month(month).to_string(),
            format!("{:.8}", plan.monthly_investment * month as f64),
            format!("{:.8}", value),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
