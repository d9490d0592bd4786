//! Core projection engine for monthly SIP growth projections

use crate::plan::SipPlan;

use super::breakdown::{ProjectionResult, YearRow};
use super::state::ProjectionState;

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// When within the month contributions are credited
    pub timing: ContributionTiming,
}

/// When the monthly contribution joins the balance relative to that month's growth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionTiming {
    /// Contribution is added first, then the whole balance compounds for the
    /// month (annuity-due)
    Due,
    /// The balance compounds first, then the contribution is added
    /// (ordinary annuity)
    Ordinary,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            timing: ContributionTiming::Due,
        }
    }
}

/// Main projection engine
///
/// A pure function of its inputs: no I/O, no shared state, and identical
/// inputs produce bit-identical results. Preconditions (positive finite plan
/// fields, a bounded horizon) are the caller's responsibility; see
/// [`crate::plan::RawPlanInput::validate`].
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given config
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection for a single plan.
    ///
    /// Iterates `floor(years * 12)` months; each month the contribution is
    /// credited per the configured timing and the balance compounds at
    /// `annual_return_percent / 100 / 12`. Values are carried at full
    /// precision; formatting is a presentation concern.
    ///
    /// A horizon that truncates to zero months yields the empty result
    /// without error.
    pub fn project(&self, plan: &SipPlan) -> ProjectionResult {
        let monthly_rate = plan.monthly_rate();
        let months = plan.months();

        let mut result = ProjectionResult::with_capacity(months);
        let mut state = ProjectionState::new();

        for _ in 1..=months {
            state.advance_month();
            self.credit_month(plan, monthly_rate, &mut state);

            result.value_series.push(state.future_value);

            // Year boundary, or the final partial year. At an exact multiple
            // of 12 both conditions hold for the same month and exactly one
            // row is written.
            if state.at_year_boundary() || state.month == months {
                result.add_year_row(YearRow {
                    year: state.year,
                    total_invested: state.total_invested,
                    future_value: state.future_value,
                });
            }
        }

        result.future_value = state.future_value;
        result.total_invested = state.total_invested;
        result
    }

    /// Apply one month's contribution and growth to the state
    fn credit_month(&self, plan: &SipPlan, monthly_rate: f64, state: &mut ProjectionState) {
        state.future_value = match self.config.timing {
            ContributionTiming::Due => {
                (state.future_value + plan.monthly_investment) * (1.0 + monthly_rate)
            }
            ContributionTiming::Ordinary => {
                state.future_value * (1.0 + monthly_rate) + plan.monthly_investment
            }
        };
        state.total_invested += plan.monthly_investment;
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(ProjectionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_plan() -> SipPlan {
        SipPlan::new(1000.0, 12.0, 1.0, 5.0)
    }

    fn project(plan: &SipPlan) -> ProjectionResult {
        ProjectionEngine::default().project(plan)
    }

    #[test]
    fn test_one_year_projection() {
        let plan = test_plan();
        let result = project(&plan);

        assert_eq!(result.months(), 12);
        assert_eq!(result.total_invested, 12_000.0);
        assert_eq!(result.yearly_breakdown.len(), 1);
        assert_eq!(result.yearly_breakdown[0].year, 1);
    }

    #[test]
    fn test_future_value_matches_recurrence() {
        let plan = test_plan();
        let result = project(&plan);

        // Twelve annuity-due steps at the engine's own monthly rate
        let expected = (0..12).fold(0.0_f64, |value, _| {
            (value + plan.monthly_investment) * (1.0 + plan.monthly_rate())
        });

        assert_eq!(result.future_value, expected);
        assert_relative_eq!(result.future_value, 12_809.33, epsilon = 0.01);
    }

    #[test]
    fn test_total_invested_is_exact() {
        for (years, months) in [(1.0, 12u32), (1.99, 23), (2.5, 30), (10.0, 120)] {
            let plan = SipPlan::new(1000.0, 7.3, years, 2.0);
            let result = project(&plan);

            assert_eq!(result.months(), months);
            assert_eq!(result.total_invested, 1000.0 * months as f64);
        }
    }

    #[test]
    fn test_value_series_strictly_increasing() {
        let result = project(&SipPlan::new(500.0, 8.0, 5.0, 3.0));

        assert_eq!(result.value_series.len(), 60);
        for pair in result.value_series.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_breakdown_no_duplicate_on_exact_year() {
        // 24 months: the final month is both a year boundary and the last
        // month, and must produce a single row
        let result = project(&SipPlan::new(1000.0, 12.0, 2.0, 5.0));

        assert_eq!(result.yearly_breakdown.len(), 2);
        assert_eq!(result.yearly_breakdown[0].year, 1);
        assert_eq!(result.yearly_breakdown[1].year, 2);
    }

    #[test]
    fn test_breakdown_trailing_partial_year() {
        // 30 months: two full years plus a 6-month tail
        let result = project(&SipPlan::new(1000.0, 12.0, 2.5, 5.0));

        assert_eq!(result.yearly_breakdown.len(), 3);
        assert_eq!(result.yearly_breakdown[2].year, 3);

        let last = result.yearly_breakdown[2];
        assert_eq!(last.total_invested, 30_000.0);
        assert_eq!(last.future_value, *result.value_series.last().unwrap());
    }

    #[test]
    fn test_breakdown_rows_snapshot_year_end_values() {
        let plan = SipPlan::new(1000.0, 12.0, 2.0, 5.0);
        let result = project(&plan);

        for row in &result.yearly_breakdown {
            let month = row.year * 12;
            assert_eq!(row.total_invested, plan.monthly_investment * month as f64);
            assert_eq!(row.future_value, result.value_series[month as usize - 1]);
        }
    }

    #[test]
    fn test_zero_month_horizon() {
        // 0.04 years truncates to zero months: a valid, empty result
        let result = project(&SipPlan::new(1000.0, 12.0, 0.04, 5.0));

        assert_eq!(result.future_value, 0.0);
        assert_eq!(result.total_invested, 0.0);
        assert!(result.yearly_breakdown.is_empty());
        assert!(result.value_series.is_empty());
    }

    #[test]
    fn test_truncation_not_rounding() {
        let result = project(&SipPlan::new(1000.0, 12.0, 1.99, 5.0));

        assert_eq!(result.months(), 23);
        assert_eq!(result.total_invested, 23_000.0);
        assert_eq!(result.yearly_breakdown.len(), 2);
        assert_eq!(result.yearly_breakdown[1].year, 2);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let plan = SipPlan::new(2500.0, 11.4, 7.25, 6.0);
        let first = project(&plan);
        let second = project(&plan);

        assert_eq!(first.future_value.to_bits(), second.future_value.to_bits());
        assert_eq!(first, second);
    }

    #[test]
    fn test_ordinary_timing_trails_due() {
        let plan = test_plan();
        let due = project(&plan);
        let ordinary = ProjectionEngine::new(ProjectionConfig {
            timing: ContributionTiming::Ordinary,
        })
        .project(&plan);

        // Ordinary-annuity contributions miss one month of growth each
        assert!(ordinary.future_value < due.future_value);
        assert_eq!(ordinary.total_invested, due.total_invested);
        assert_relative_eq!(
            ordinary.future_value * (1.0 + plan.monthly_rate()),
            due.future_value,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_inflation_input_does_not_affect_projection() {
        let low = project(&SipPlan::new(1000.0, 12.0, 3.0, 1.0));
        let high = project(&SipPlan::new(1000.0, 12.0, 3.0, 9.0));

        assert_eq!(low, high);
    }
}
