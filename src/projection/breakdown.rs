//! Output structures for SIP projections

use serde::{Deserialize, Serialize};

/// Yearly snapshot of cumulative invested amount and portfolio value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    /// Plan year (1-indexed); the final row may cover a partial year
    pub year: u32,

    /// Contributions made through the end of this row's last month
    pub total_invested: f64,

    /// Portfolio value at the end of this row's last month
    pub future_value: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Portfolio value after the final month
    pub future_value: f64,

    /// Sum of all monthly contributions
    pub total_invested: f64,

    /// One row per completed year, plus one for a trailing partial year
    pub yearly_breakdown: Vec<YearRow>,

    /// Portfolio value at the end of each month, in order
    pub value_series: Vec<f64>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self {
            future_value: 0.0,
            total_invested: 0.0,
            yearly_breakdown: Vec::new(),
            value_series: Vec::new(),
        }
    }

    /// Create an empty result sized for a known horizon
    pub fn with_capacity(months: u32) -> Self {
        Self {
            future_value: 0.0,
            total_invested: 0.0,
            yearly_breakdown: Vec::with_capacity((months as usize).div_ceil(12)),
            value_series: Vec::with_capacity(months as usize),
        }
    }

    /// Add a yearly breakdown row
    pub fn add_year_row(&mut self, row: YearRow) {
        self.yearly_breakdown.push(row);
    }

    /// Number of projected months
    pub fn months(&self) -> u32 {
        self.value_series.len() as u32
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        ProjectionSummary {
            months: self.months(),
            total_invested: self.total_invested,
            future_value: self.future_value,
            wealth_gain: self.future_value - self.total_invested,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub months: u32,
    pub total_invested: f64,
    pub future_value: f64,
    /// Growth over contributions (future value minus total invested)
    pub wealth_gain: f64,
}
