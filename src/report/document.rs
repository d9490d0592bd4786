//! Paginated report document rendering
//!
//! Serializes the projection outcome and yearly breakdown into a plain-text
//! document held in memory. Callers decide where the bytes go; nothing here
//! touches the filesystem.

use chrono::{DateTime, Utc};

use crate::plan::SipPlan;
use crate::projection::ProjectionResult;

use super::currency::CurrencyFormat;

/// Lines of content rendered per page
pub const ROWS_PER_PAGE: usize = 40;

/// Form feed between pages
const PAGE_BREAK: char = '\u{0c}';

/// Options for report rendering
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Document title on the first page
    pub title: String,

    /// Currency used for all monetary values
    pub currency: CurrencyFormat,

    /// Content lines per page
    pub rows_per_page: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "SIP Investment Report".to_string(),
            currency: CurrencyFormat::default(),
            rows_per_page: ROWS_PER_PAGE,
        }
    }
}

/// Render the report into an in-memory buffer
pub fn render_report(plan: &SipPlan, result: &ProjectionResult, options: &ReportOptions) -> Vec<u8> {
    let generated = Utc::now();
    let currency = &options.currency;
    let summary = result.summary();

    let mut lines: Vec<String> = Vec::new();
    lines.push(options.title.clone());
    lines.push("=".repeat(options.title.chars().count()));
    lines.push(format!(
        "Generated: {}",
        generated.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(String::new());
    lines.push("Plan".to_string());
    lines.push(format!(
        "  Monthly Investment: {}",
        currency.format(plan.monthly_investment)
    ));
    lines.push(format!(
        "  Annual Return: {:.2}%",
        plan.annual_return_percent
    ));
    lines.push(format!(
        "  Horizon: {} years ({} months)",
        plan.years, summary.months
    ));
    lines.push(format!(
        "  Inflation (recorded, not applied): {:.2}%",
        plan.inflation_percent
    ));
    lines.push(String::new());
    lines.push(format!(
        "Future Value: {}",
        currency.format(result.future_value)
    ));
    lines.push(format!(
        "Total Invested: {}",
        currency.format(result.total_invested)
    ));
    lines.push(format!("Wealth Gain: {}", currency.format(summary.wealth_gain)));
    lines.push(String::new());
    lines.push("Yearly Breakdown:".to_string());

    for row in &result.yearly_breakdown {
        lines.push(format!(
            "Year {}: {} (Invested: {})",
            row.year,
            currency.format(row.future_value),
            currency.format(row.total_invested)
        ));
    }

    paginate(&lines, options.rows_per_page).into_bytes()
}

/// Attachment filename stamped with the generation time, unique per request
pub fn report_filename(generated: DateTime<Utc>) -> String {
    format!("sip_report_{}.txt", generated.format("%Y%m%dT%H%M%S%3fZ"))
}

fn paginate(lines: &[String], rows_per_page: usize) -> String {
    let rows_per_page = rows_per_page.max(1);
    let total_pages = lines.chunks(rows_per_page).count().max(1);

    let mut document = String::new();
    for (page_index, page) in lines.chunks(rows_per_page).enumerate() {
        if page_index > 0 {
            document.push(PAGE_BREAK);
        }
        for line in page {
            document.push_str(line);
            document.push('\n');
        }
        document.push_str(&format!(
            "\n-- Page {} of {} --\n",
            page_index + 1,
            total_pages
        ));
    }
    document
}
