//! Chart series for portfolio growth rendering
//!
//! The core produces the points; whatever draws the line chart consumes them.

use serde::{Deserialize, Serialize};

use crate::projection::ProjectionResult;

/// Title rendered above the growth chart
pub const CHART_TITLE: &str = "Investment Growth Over Time";

/// Label for the elapsed-time axis
pub const X_AXIS_LABEL: &str = "Years";

/// Label for the value axis
pub const Y_AXIS_LABEL: &str = "Portfolio Value";

/// A single point on the growth chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Elapsed time in years (month / 12)
    pub years: f64,

    /// Portfolio value at the end of that month
    pub value: f64,
}

/// Line-chart data for the month-by-month value series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build the growth series from a projection result
    pub fn from_result(result: &ProjectionResult) -> Self {
        let points = result
            .value_series
            .iter()
            .enumerate()
            .map(|(i, &value)| ChartPoint {
                years: (i + 1) as f64 / 12.0,
                value,
            })
            .collect();

        Self {
            title: CHART_TITLE.to_string(),
            x_label: X_AXIS_LABEL.to_string(),
            y_label: Y_AXIS_LABEL.to_string(),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SipPlan;
    use crate::projection::ProjectionEngine;
    use approx::assert_relative_eq;

    #[test]
    fn test_points_follow_value_series() {
        let result = ProjectionEngine::default().project(&SipPlan::new(1000.0, 12.0, 1.5, 5.0));
        let series = ChartSeries::from_result(&result);

        assert_eq!(series.points.len(), 18);
        assert_relative_eq!(series.points[0].years, 1.0 / 12.0);
        assert_relative_eq!(series.points[17].years, 1.5);

        for (point, &value) in series.points.iter().zip(&result.value_series) {
            assert_eq!(point.value, value);
        }
    }

    #[test]
    fn test_empty_series() {
        let result = ProjectionEngine::default().project(&SipPlan::new(1000.0, 12.0, 0.04, 5.0));
        let series = ChartSeries::from_result(&result);

        assert!(series.points.is_empty());
        assert_eq!(series.title, CHART_TITLE);
    }
}
