use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::domain::config::{CapacityConfig, ConfigOverlay, DemandOverlay, PoolOverlay};
use crate::services::samples_csv::DEFAULT_CSV_FILE_NAME;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    /// Increase log verbosity (-v info, -vv debug). CAPACITY_LOG overrides it.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Monte Carlo capacity simulation
    Simulate {
        /// Configuration YAML file (defaults are used when omitted)
        #[arg(short, long)]
        config: Option<String>,
        #[command(flatten)]
        overrides: ParameterOverrides,
        /// Number of simulated months
        #[arg(short = 'n', long)]
        iterations: Option<usize>,
        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
        /// Write the summary report as YAML to this file
        #[arg(short, long)]
        output: Option<String>,
        /// Format of the report printed to stdout
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Export the per-trial sample table as CSV
        #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_CSV_FILE_NAME)]
        csv: Option<String>,
        /// Directory for the demand and required-hours histograms
        #[arg(long)]
        plots: Option<String>,
    },
    /// Write the default configuration to a YAML file
    InitConfig {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Yaml,
    Json,
}

/// Per-parameter overrides applied on top of the loaded configuration.
#[derive(Args, Debug, Default, Clone)]
pub struct ParameterOverrides {
    /// Mean monthly demand (claims)
    #[arg(long)]
    pub avg_demand: Option<f64>,
    /// Standard deviation of monthly demand
    #[arg(long)]
    pub std_demand: Option<f64>,
    /// Available hours per FTE per month, shared by all pools
    #[arg(long)]
    pub hours_per_fte: Option<f64>,
    #[arg(long)]
    pub analyst_fte: Option<f64>,
    #[arg(long)]
    pub adjuster_fte: Option<f64>,
    #[arg(long)]
    pub registration_fte: Option<f64>,
    /// Mean analyst hours per claim
    #[arg(long)]
    pub analyst_time_mean: Option<f64>,
    #[arg(long)]
    pub analyst_time_std: Option<f64>,
    /// Mean adjuster hours per claim
    #[arg(long)]
    pub adjuster_time_mean: Option<f64>,
    #[arg(long)]
    pub adjuster_time_std: Option<f64>,
    /// Mean registration hours per claim
    #[arg(long)]
    pub registration_time_mean: Option<f64>,
    #[arg(long)]
    pub registration_time_std: Option<f64>,
}

impl ParameterOverrides {
    pub fn to_overlay(&self) -> ConfigOverlay {
        ConfigOverlay {
            demand: DemandOverlay {
                mean: self.avg_demand,
                std_dev: self.std_demand,
            },
            hours_per_fte: self.hours_per_fte,
            analyst: PoolOverlay {
                fte: self.analyst_fte,
                time_mean: self.analyst_time_mean,
                time_std_dev: self.analyst_time_std,
            },
            adjuster: PoolOverlay {
                fte: self.adjuster_fte,
                time_mean: self.adjuster_time_mean,
                time_std_dev: self.adjuster_time_std,
            },
            registration: PoolOverlay {
                fte: self.registration_fte,
                time_mean: self.registration_time_mean,
                time_std_dev: self.registration_time_std,
            },
            iterations: None,
        }
    }

    pub fn apply(&self, config: &mut CapacityConfig) {
        self.to_overlay().apply(config);
    }
}
