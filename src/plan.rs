//! Investment plan inputs and boundary validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on the projection horizon, enforced at the boundary.
///
/// The engine itself runs whatever horizon it is handed; callers reject
/// anything longer before invoking it.
pub const MAX_HORIZON_YEARS: f64 = 100.0;

/// Errors raised while turning raw user input into a [`SipPlan`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A required input was absent
    #[error("missing field: {0} - please fill all inputs")]
    MissingField(&'static str),

    /// A field was present but unusable
    #[error("{field} {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

/// Validated SIP parameters, constructed once per request
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SipPlan {
    /// Amount contributed at the start of each month
    pub monthly_investment: f64,

    /// Nominal annual growth rate, in percent (12.0 = 12%)
    pub annual_return_percent: f64,

    /// Investment horizon in years; fractional years are truncated to whole months
    pub years: f64,

    /// Annual inflation rate, in percent.
    ///
    /// Accepted and recorded, but not consumed by the projection; reserved
    /// for a future real-return adjustment.
    pub inflation_percent: f64,
}

impl SipPlan {
    pub fn new(
        monthly_investment: f64,
        annual_return_percent: f64,
        years: f64,
        inflation_percent: f64,
    ) -> Self {
        Self {
            monthly_investment,
            annual_return_percent,
            years,
            inflation_percent,
        }
    }

    /// Number of whole months in the horizon.
    ///
    /// Truncated toward zero, never rounded: 1.99 years is 23 months, and a
    /// horizon under one month is 0 months.
    pub fn months(&self) -> u32 {
        (self.years * 12.0) as u32
    }

    /// Monthly growth rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_percent / 100.0 / 12.0
    }
}

/// Raw, possibly-incomplete plan input as it arrives from a form or CLI
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RawPlanInput {
    #[serde(default)]
    pub monthly_investment: Option<f64>,

    #[serde(default)]
    pub annual_return_percent: Option<f64>,

    #[serde(default)]
    pub years: Option<f64>,

    #[serde(default)]
    pub inflation_percent: Option<f64>,
}

impl RawPlanInput {
    /// Validate into a [`SipPlan`].
    ///
    /// All four fields must be present, finite, and strictly positive; the
    /// horizon must not exceed [`MAX_HORIZON_YEARS`].
    pub fn validate(&self) -> Result<SipPlan, PlanError> {
        let monthly_investment = require_positive("monthly_investment", self.monthly_investment)?;
        let annual_return_percent =
            require_positive("annual_return_percent", self.annual_return_percent)?;
        let years = require_positive("years", self.years)?;
        let inflation_percent = require_positive("inflation_percent", self.inflation_percent)?;

        if years > MAX_HORIZON_YEARS {
            return Err(PlanError::InvalidValue {
                field: "years",
                reason: "must be at most 100",
            });
        }

        Ok(SipPlan {
            monthly_investment,
            annual_return_percent,
            years,
            inflation_percent,
        })
    }
}

fn require_positive(field: &'static str, value: Option<f64>) -> Result<f64, PlanError> {
    let value = value.ok_or(PlanError::MissingField(field))?;

    if !value.is_finite() {
        return Err(PlanError::InvalidValue {
            field,
            reason: "must be a finite number",
        });
    }

    if value <= 0.0 {
        return Err(PlanError::InvalidValue {
            field,
            reason: "must be greater than zero",
        });
    }

    Ok(value)
}
