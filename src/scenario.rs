//! Scenario runner for batch projections
//!
//! Projects one plan under several return-rate scenarios, or many plans under
//! one configuration, without rebuilding the engine setup per call.

use rayon::prelude::*;

use crate::plan::SipPlan;
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-configured runner for batch projections
///
/// # Example
/// ```
/// use sip_projector::{ScenarioRunner, SipPlan};
///
/// let runner = ScenarioRunner::new();
/// let plan = SipPlan::new(1000.0, 12.0, 10.0, 5.0);
///
/// let results = runner.run_return_scenarios(&plan, &[8.0, 10.0, 12.0]);
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    config: ProjectionConfig,
}

impl ScenarioRunner {
    /// Create a runner with the default projection config
    pub fn new() -> Self {
        Self {
            config: ProjectionConfig::default(),
        }
    }

    /// Create a runner with a specific projection config
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a single projection
    pub fn run(&self, plan: &SipPlan) -> ProjectionResult {
        ProjectionEngine::new(self.config.clone()).project(plan)
    }

    /// Project one plan across several annual return rates (in percent).
    ///
    /// Results are returned in the order the rates were given.
    pub fn run_return_scenarios(
        &self,
        plan: &SipPlan,
        annual_return_percents: &[f64],
    ) -> Vec<ProjectionResult> {
        annual_return_percents
            .par_iter()
            .map(|&annual_return_percent| {
                let scenario = SipPlan {
                    annual_return_percent,
                    ..*plan
                };
                ProjectionEngine::new(self.config.clone()).project(&scenario)
            })
            .collect()
    }

    /// Run projections for multiple plans with the same config
    pub fn run_batch(&self, plans: &[SipPlan]) -> Vec<ProjectionResult> {
        plans
            .par_iter()
            .map(|plan| ProjectionEngine::new(self.config.clone()).project(plan))
            .collect()
    }
}
