use serde::Serialize;

use crate::domain::pool::Pool;

/// Saturation statistics of a single pool over all trials.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PoolSummary {
    /// Fraction of trials whose required hours exceed capacity.
    pub saturation_probability: f64,
    /// Mean of `required / capacity` over all trials.
    pub mean_utilization: f64,
    /// 95th percentile of required hours expressed in FTE.
    pub p95_fte: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub analyst: PoolSummary,
    pub adjuster: PoolSummary,
    pub registration: PoolSummary,
}

impl SummaryStats {
    pub fn pool(&self, pool: Pool) -> &PoolSummary {
        match pool {
            Pool::Analyst => &self.analyst,
            Pool::Adjuster => &self.adjuster,
            Pool::Registration => &self.registration,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct PoolReport {
    pub pool: Pool,
    pub fte: f64,
    pub capacity_hours: f64,
    pub saturation_probability: f64,
    pub mean_utilization: f64,
    pub p95_fte: f64,
    pub mean_required_hours: f64,
    pub p95_required_hours: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct CapacityReport {
    pub generated_at: String,
    pub seed: Option<u64>,
    pub iterations: usize,
    pub hours_per_fte: f64,
    pub pools: Vec<PoolReport>,
}
