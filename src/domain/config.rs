use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::pool::Pool;

/// Iteration range offered by the interactive front end. Runs outside of it are
/// allowed but reported as a warning.
pub const RECOMMENDED_ITERATIONS: std::ops::RangeInclusive<usize> = 500..=10_000;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DemandConfig {
    pub mean: f64,
    pub std_dev: f64,
}

/// Staffing and per-claim processing time of one pool.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PoolConfig {
    pub fte: f64,
    pub time_mean: f64,
    pub time_std_dev: f64,
}

/// Immutable parameter set for one simulation run.
///
/// `hours_per_fte` is shared by all pools; capacity of a pool is
/// `fte * hours_per_fte`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CapacityConfig {
    pub demand: DemandConfig,
    pub hours_per_fte: f64,
    pub analyst: PoolConfig,
    pub adjuster: PoolConfig,
    pub registration: PoolConfig,
    pub iterations: usize,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            demand: DemandConfig {
                mean: 7500.0,
                std_dev: 800.0,
            },
            hours_per_fte: 176.0,
            analyst: PoolConfig {
                fte: 15.0,
                time_mean: 0.30,
                time_std_dev: 0.05,
            },
            adjuster: PoolConfig {
                fte: 3.0,
                time_mean: 0.20,
                time_std_dev: 0.04,
            },
            registration: PoolConfig {
                fte: 3.0,
                time_mean: 0.08,
                time_std_dev: 0.02,
            },
            iterations: 2000,
        }
    }
}

impl CapacityConfig {
    pub fn pool(&self, pool: Pool) -> &PoolConfig {
        match pool {
            Pool::Analyst => &self.analyst,
            Pool::Adjuster => &self.adjuster,
            Pool::Registration => &self.registration,
        }
    }

    pub fn pool_mut(&mut self, pool: Pool) -> &mut PoolConfig {
        match pool {
            Pool::Analyst => &mut self.analyst,
            Pool::Adjuster => &mut self.adjuster,
            Pool::Registration => &mut self.registration,
        }
    }

    /// Monthly hours available to `pool`.
    pub fn capacity(&self, pool: Pool) -> f64 {
        self.pool(pool).fte * self.hours_per_fte
    }

    /// Advisory checks. None of these stop a run: degenerate inputs simply
    /// produce non-finite statistics.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.demand.std_dev < 0.0 {
            warnings.push(ConfigWarning::NegativeDemandStdDev(self.demand.std_dev));
        }
        if !(self.hours_per_fte > 0.0) {
            warnings.push(ConfigWarning::NonPositiveHoursPerFte(self.hours_per_fte));
        }
        for pool in Pool::ALL {
            let settings = self.pool(pool);
            if settings.time_std_dev < 0.0 {
                warnings.push(ConfigWarning::NegativeTimeStdDev {
                    pool,
                    value: settings.time_std_dev,
                });
            }
            if !(settings.fte > 0.0) {
                warnings.push(ConfigWarning::NonPositiveFte {
                    pool,
                    value: settings.fte,
                });
            }
        }
        if self.iterations == 0 {
            warnings.push(ConfigWarning::NoIterations);
        } else if !RECOMMENDED_ITERATIONS.contains(&self.iterations) {
            warnings.push(ConfigWarning::IterationsOutsideRecommendedRange(
                self.iterations,
            ));
        }
        warnings
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DemandOverlay {
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PoolOverlay {
    pub fte: Option<f64>,
    pub time_mean: Option<f64>,
    pub time_std_dev: Option<f64>,
}

/// Partial configuration. Every field that is set replaces the matching
/// field of the configuration it is applied to; the rest is left alone.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverlay {
    pub demand: DemandOverlay,
    pub hours_per_fte: Option<f64>,
    pub analyst: PoolOverlay,
    pub adjuster: PoolOverlay,
    pub registration: PoolOverlay,
    pub iterations: Option<usize>,
}

impl ConfigOverlay {
    pub fn pool(&self, pool: Pool) -> &PoolOverlay {
        match pool {
            Pool::Analyst => &self.analyst,
            Pool::Adjuster => &self.adjuster,
            Pool::Registration => &self.registration,
        }
    }

    pub fn apply(&self, config: &mut CapacityConfig) {
        set_if_some(&mut config.demand.mean, self.demand.mean);
        set_if_some(&mut config.demand.std_dev, self.demand.std_dev);
        set_if_some(&mut config.hours_per_fte, self.hours_per_fte);
        set_if_some(&mut config.iterations, self.iterations);
        for pool in Pool::ALL {
            let overlay = self.pool(pool);
            let settings = config.pool_mut(pool);
            set_if_some(&mut settings.fte, overlay.fte);
            set_if_some(&mut settings.time_mean, overlay.time_mean);
            set_if_some(&mut settings.time_std_dev, overlay.time_std_dev);
        }
    }
}

fn set_if_some<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    NegativeDemandStdDev(f64),
    NegativeTimeStdDev { pool: Pool, value: f64 },
    NonPositiveFte { pool: Pool, value: f64 },
    NonPositiveHoursPerFte(f64),
    NoIterations,
    IterationsOutsideRecommendedRange(usize),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::NegativeDemandStdDev(value) => {
                write!(f, "demand std_dev is negative ({value})")
            }
            ConfigWarning::NegativeTimeStdDev { pool, value } => write!(
                f,
                "{} time_std_dev is negative ({value})",
                pool.label().to_lowercase()
            ),
            ConfigWarning::NonPositiveFte { pool, value } => write!(
                f,
                "{} fte is not positive ({value}); its statistics will not be finite",
                pool.label().to_lowercase()
            ),
            ConfigWarning::NonPositiveHoursPerFte(value) => write!(
                f,
                "hours_per_fte is not positive ({value}); statistics will not be finite"
            ),
            ConfigWarning::NoIterations => {
                write!(f, "iterations is zero; every statistic will be NaN")
            }
            ConfigWarning::IterationsOutsideRecommendedRange(value) => write!(
                f,
                "iterations {value} is outside the recommended range {}..={}",
                RECOMMENDED_ITERATIONS.start(),
                RECOMMENDED_ITERATIONS.end()
            ),
        }
    }
}
