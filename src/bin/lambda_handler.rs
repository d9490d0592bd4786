//! HTTP handler for running SIP projections
//!
//! Accepts plan input via JSON and returns the projection outcome with
//! formatted currency values and the chart series. POSTing the same body to
//! `/report` returns the downloadable report document instead.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};
use sip_projector::{
    plan::RawPlanInput,
    projection::{ProjectionConfig, ProjectionEngine, ProjectionResult},
    report::{render_report, report_filename, ChartSeries, CurrencyFormat, ReportOptions},
    SipPlan,
};

/// Input for a projection request
#[derive(Debug, Deserialize)]
struct ProjectionRequest {
    #[serde(flatten)]
    plan: RawPlanInput,

    /// Currency symbol used for formatted output
    #[serde(default = "default_currency_symbol")]
    currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

/// Output from a projection
#[derive(Debug, Serialize)]
struct ProjectionResponse {
    future_value: String,
    total_invested: String,
    wealth_gain: String,
    future_value_raw: f64,
    total_invested_raw: f64,
    months: u32,
    breakdown: Vec<BreakdownRow>,
    chart: ChartSeries,
    execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
struct BreakdownRow {
    year: u32,
    total_invested: String,
    future_value: String,
    total_invested_raw: f64,
    future_value_raw: f64,
}

fn build_response(
    result: &ProjectionResult,
    currency: &CurrencyFormat,
    execution_time_ms: u64,
) -> ProjectionResponse {
    let summary = result.summary();

    let breakdown = result
        .yearly_breakdown
        .iter()
        .map(|row| BreakdownRow {
            year: row.year,
            total_invested: currency.format(row.total_invested),
            future_value: currency.format(row.future_value),
            total_invested_raw: row.total_invested,
            future_value_raw: row.future_value,
        })
        .collect();

    ProjectionResponse {
        future_value: currency.format(result.future_value),
        total_invested: currency.format(result.total_invested),
        wealth_gain: currency.format(summary.wealth_gain),
        future_value_raw: result.future_value,
        total_invested_raw: result.total_invested,
        months: result.months(),
        breakdown,
        chart: ChartSeries::from_result(result),
        execution_time_ms,
    }
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))
        .unwrap()
}

fn json_response(body: &ProjectionResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn attachment_response(bytes: Vec<u8>, filename: &str) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", filename),
        )
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Binary(bytes))
        .unwrap()
}

/// Handler function for both endpoints
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: ProjectionRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let plan: SipPlan = match request.plan.validate() {
        Ok(p) => p,
        Err(e) => {
            return Ok(error_response(400, &e.to_string()));
        }
    };

    let engine = ProjectionEngine::new(ProjectionConfig::default());
    let result = engine.project(&plan);
    let currency = CurrencyFormat::new(request.currency_symbol);

    log::info!(
        "projected {} months for {} at {}%",
        result.months(),
        event.uri().path(),
        plan.annual_return_percent
    );

    if event.uri().path() == "/report" {
        let options = ReportOptions {
            currency,
            ..Default::default()
        };
        let bytes = render_report(&plan, &result, &options);
        let filename = report_filename(chrono::Utc::now());
        return Ok(attachment_response(bytes, &filename));
    }

    let execution_time_ms = start.elapsed().as_millis() as u64;
    Ok(json_response(&build_response(&result, &currency, execution_time_ms)))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
