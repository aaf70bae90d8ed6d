use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::config::CapacityConfig;
use crate::domain::pool::Pool;
use crate::services::normal_sampler::{NormalDraw, NormalSampler};
use crate::services::percentiles::{mean, percentile};
use crate::services::simulation_types::{
    CapacityReport, PoolReport, PoolSummary, SummaryStats,
};

/// Raw draws of one run. Index `i` of every sequence belongs to trial `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    pub demand: Vec<f64>,
    pub analyst_time: Vec<f64>,
    pub adjuster_time: Vec<f64>,
    pub registration_time: Vec<f64>,
}

impl SampleSet {
    pub fn len(&self) -> usize {
        self.demand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demand.is_empty()
    }

    pub fn time(&self, pool: Pool) -> &[f64] {
        match pool {
            Pool::Analyst => &self.analyst_time,
            Pool::Adjuster => &self.adjuster_time,
            Pool::Registration => &self.registration_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolMetrics {
    pub required_hours: Vec<f64>,
    pub capacity: f64,
    pub gap: Vec<f64>,
}

impl PoolMetrics {
    fn derive(demand: &[f64], time: &[f64], capacity: f64) -> Self {
        let required_hours: Vec<f64> = demand
            .iter()
            .zip(time)
            .map(|(demand, time)| demand * time)
            .collect();
        let gap = required_hours
            .iter()
            .map(|required| required - capacity)
            .collect();
        Self {
            required_hours,
            capacity,
            gap,
        }
    }

    pub fn saturated_trials(&self) -> usize {
        self.gap.iter().filter(|gap| **gap > 0.0).count()
    }

    fn summarize(&self, hours_per_fte: f64) -> PoolSummary {
        let trials = self.gap.len() as f64;
        let utilization: Vec<f64> = self
            .required_hours
            .iter()
            .map(|required| required / self.capacity)
            .collect();
        PoolSummary {
            saturation_probability: self.saturated_trials() as f64 / trials,
            mean_utilization: mean(&utilization),
            p95_fte: percentile(&self.required_hours, 95.0) / hours_per_fte,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub analyst: PoolMetrics,
    pub adjuster: PoolMetrics,
    pub registration: PoolMetrics,
}

impl DerivedMetrics {
    pub fn pool(&self, pool: Pool) -> &PoolMetrics {
        match pool {
            Pool::Analyst => &self.analyst,
            Pool::Adjuster => &self.adjuster,
            Pool::Registration => &self.registration,
        }
    }
}

/// One row of the exported sample table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRow {
    pub demand: f64,
    pub analyst_hours: f64,
    pub adjuster_hours: f64,
    pub registration_hours: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapacityRun {
    pub samples: SampleSet,
    pub metrics: DerivedMetrics,
    pub summary: SummaryStats,
}

impl CapacityRun {
    /// Rows in trial order.
    pub fn rows(&self) -> impl Iterator<Item = SampleRow> + '_ {
        (0..self.samples.len()).map(move |i| SampleRow {
            demand: self.samples.demand[i],
            analyst_hours: self.metrics.analyst.required_hours[i],
            adjuster_hours: self.metrics.adjuster.required_hours[i],
            registration_hours: self.metrics.registration.required_hours[i],
        })
    }

    pub fn report(&self, config: &CapacityConfig, seed: Option<u64>) -> CapacityReport {
        let pools = Pool::ALL
            .iter()
            .map(|&pool| {
                let metrics = self.metrics.pool(pool);
                let summary = self.summary.pool(pool);
                PoolReport {
                    pool,
                    fte: config.pool(pool).fte,
                    capacity_hours: metrics.capacity,
                    saturation_probability: summary.saturation_probability,
                    mean_utilization: summary.mean_utilization,
                    p95_fte: summary.p95_fte,
                    mean_required_hours: mean(&metrics.required_hours),
                    p95_required_hours: percentile(&metrics.required_hours, 95.0),
                }
            })
            .collect();

        CapacityReport {
            generated_at: chrono::Local::now().to_rfc3339(),
            seed,
            iterations: self.samples.len(),
            hours_per_fte: config.hours_per_fte,
            pools,
        }
    }
}

/// Runs the simulation with an entropy-seeded generator.
pub fn run(config: &CapacityConfig) -> CapacityRun {
    let mut rng = rand::thread_rng();
    run_with_rng(config, &mut rng)
}

pub fn run_seeded(config: &CapacityConfig, seed: u64) -> CapacityRun {
    let mut rng = StdRng::seed_from_u64(seed);
    run_with_rng(config, &mut rng)
}

pub fn run_with_rng<R: Rng + ?Sized>(config: &CapacityConfig, rng: &mut R) -> CapacityRun {
    let mut sampler = NormalSampler::new(rng);
    run_with_sampler(config, &mut sampler)
}

/// Draws every sequence from `sampler` and derives the pool statistics.
///
/// Demand is floored at zero; processing times are used as drawn. Invalid
/// capacities are not rejected and surface as non-finite statistics.
pub fn run_with_sampler<S: NormalDraw + ?Sized>(
    config: &CapacityConfig,
    sampler: &mut S,
) -> CapacityRun {
    let span = tracing::debug_span!("capacity_run", iterations = config.iterations);
    let _guard = span.enter();

    let samples = draw_samples(config, sampler);
    let metrics = derive_metrics(config, &samples);
    let summary = summarize(config, &metrics);

    tracing::debug!(
        analyst_saturation = summary.analyst.saturation_probability,
        adjuster_saturation = summary.adjuster.saturation_probability,
        registration_saturation = summary.registration.saturation_probability,
        "simulation finished"
    );

    CapacityRun {
        samples,
        metrics,
        summary,
    }
}

fn draw_samples<S: NormalDraw + ?Sized>(config: &CapacityConfig, sampler: &mut S) -> SampleSet {
    let iterations = config.iterations;
    let demand = sampler
        .draw_n(iterations, config.demand.mean, config.demand.std_dev)
        .into_iter()
        .map(|value| value.max(0.0))
        .collect();
    let mut draw_times = |pool: Pool| {
        let settings = config.pool(pool);
        sampler.draw_n(iterations, settings.time_mean, settings.time_std_dev)
    };
    let analyst_time = draw_times(Pool::Analyst);
    let adjuster_time = draw_times(Pool::Adjuster);
    let registration_time = draw_times(Pool::Registration);

    SampleSet {
        demand,
        analyst_time,
        adjuster_time,
        registration_time,
    }
}

fn derive_metrics(config: &CapacityConfig, samples: &SampleSet) -> DerivedMetrics {
    let derive = |pool: Pool| {
        PoolMetrics::derive(&samples.demand, samples.time(pool), config.capacity(pool))
    };
    DerivedMetrics {
        analyst: derive(Pool::Analyst),
        adjuster: derive(Pool::Adjuster),
        registration: derive(Pool::Registration),
    }
}

fn summarize(config: &CapacityConfig, metrics: &DerivedMetrics) -> SummaryStats {
    SummaryStats {
        analyst: metrics.analyst.summarize(config.hours_per_fte),
        adjuster: metrics.adjuster.summarize(config.hours_per_fte),
        registration: metrics.registration.summarize(config.hours_per_fte),
    }
}
