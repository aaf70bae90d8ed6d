use crate::domain::config::{CapacityConfig, DemandConfig, PoolConfig};
use crate::services::normal_sampler::NormalDraw;

// A NormalDraw that replays a fixed list of values, ignoring the parameters
pub struct FixedSampler {
    values: std::vec::IntoIter<f64>,
}

impl FixedSampler {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into_iter(),
        }
    }
}

impl NormalDraw for FixedSampler {
    fn draw(&mut self, _mean: f64, _std_dev: f64) -> f64 {
        self.values.next().expect("fixed sampler ran out of values")
    }
}

/// Demand 7500 and analyst time 0.30 with no spread, 176 hours per FTE.
pub fn deterministic_config(analyst_fte: f64, iterations: usize) -> CapacityConfig {
    CapacityConfig {
        demand: DemandConfig {
            mean: 7500.0,
            std_dev: 0.0,
        },
        hours_per_fte: 176.0,
        analyst: PoolConfig {
            fte: analyst_fte,
            time_mean: 0.30,
            time_std_dev: 0.0,
        },
        adjuster: PoolConfig {
            fte: 3.0,
            time_mean: 0.20,
            time_std_dev: 0.0,
        },
        registration: PoolConfig {
            fte: 3.0,
            time_mean: 0.08,
            time_std_dev: 0.0,
        },
        iterations,
    }
}
