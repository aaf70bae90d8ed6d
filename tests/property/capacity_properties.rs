use capacity::domain::config::{CapacityConfig, DemandConfig, PoolConfig};
use capacity::services::capacity_simulation::run_seeded;
use proptest::prelude::*;

fn pool_strategy() -> impl Strategy<Value = PoolConfig> {
    (0.5f64..40.0, 0.01f64..1.0, 0.0f64..0.3).prop_map(|(fte, time_mean, time_std_dev)| {
        PoolConfig {
            fte,
            time_mean,
            time_std_dev,
        }
    })
}

fn config_strategy() -> impl Strategy<Value = CapacityConfig> {
    (
        0.0f64..20_000.0,
        0.0f64..5_000.0,
        1.0f64..250.0,
        pool_strategy(),
        pool_strategy(),
        pool_strategy(),
        1usize..300,
    )
        .prop_map(
            |(mean, std_dev, hours_per_fte, analyst, adjuster, registration, iterations)| {
                CapacityConfig {
                    demand: DemandConfig { mean, std_dev },
                    hours_per_fte,
                    analyst,
                    adjuster,
                    registration,
                    iterations,
                }
            },
        )
}

proptest! {
    #[test]
    fn every_sequence_has_one_entry_per_trial(config in config_strategy(), seed in any::<u64>()) {
        let run = run_seeded(&config, seed);
        prop_assert_eq!(run.samples.demand.len(), config.iterations);
        prop_assert_eq!(run.samples.analyst_time.len(), config.iterations);
        prop_assert_eq!(run.metrics.analyst.required_hours.len(), config.iterations);
        prop_assert_eq!(run.metrics.adjuster.gap.len(), config.iterations);
        prop_assert_eq!(run.metrics.registration.required_hours.len(), config.iterations);
        prop_assert_eq!(run.rows().count(), config.iterations);
    }

    #[test]
    fn demand_is_never_negative(config in config_strategy(), seed in any::<u64>()) {
        let run = run_seeded(&config, seed);
        prop_assert!(run.samples.demand.iter().all(|demand| *demand >= 0.0));
    }

    #[test]
    fn saturation_probability_is_a_fraction(config in config_strategy(), seed in any::<u64>()) {
        let run = run_seeded(&config, seed);
        for summary in [run.summary.analyst, run.summary.adjuster, run.summary.registration] {
            prop_assert!((0.0..=1.0).contains(&summary.saturation_probability));
        }
    }

    #[test]
    fn capacity_above_peak_never_saturates(config in config_strategy(), seed in any::<u64>()) {
        let run = run_seeded(&config, seed);
        let peak = run
            .metrics
            .analyst
            .required_hours
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        let mut roomy = config.clone();
        roomy.analyst.fte = (peak.max(0.0) + 1.0) / config.hours_per_fte;
        let rerun = run_seeded(&roomy, seed);

        prop_assert_eq!(rerun.summary.analyst.saturation_probability, 0.0);
    }

    #[test]
    fn seeded_runs_are_reproducible(config in config_strategy(), seed in any::<u64>()) {
        prop_assert_eq!(run_seeded(&config, seed), run_seeded(&config, seed));
    }
}
