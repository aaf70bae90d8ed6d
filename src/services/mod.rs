pub mod capacity_simulation;
pub mod config_yaml;
pub mod histogram;
pub mod logging;
pub mod normal_sampler;
pub mod percentiles;
pub mod samples_csv;
pub mod simulation_types;
