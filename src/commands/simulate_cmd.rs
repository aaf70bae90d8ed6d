use std::process::ExitCode;

use crate::commands::base_commands::{Commands, ReportFormat};
use crate::commands::report_format::format_capacity_report;
use crate::domain::config::CapacityConfig;
use crate::services::capacity_simulation::{run, run_seeded};
use crate::services::config_yaml::load_config_from_yaml_file;
use crate::services::histogram::write_run_histograms;
use crate::services::samples_csv::write_samples_csv_file;
use crate::services::simulation_types::CapacityReport;

pub fn simulate_command(cmd: Commands) -> ExitCode {
    let Commands::Simulate {
        config,
        overrides,
        iterations,
        seed,
        output,
        format,
        csv,
        plots,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let mut capacity_config = match config {
        Some(path) => match load_config_from_yaml_file(&path) {
            Ok(loaded) => loaded,
            Err(e) => {
                eprintln!("Failed to load configuration: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => CapacityConfig::default(),
    };
    overrides.apply(&mut capacity_config);
    if let Some(iterations) = iterations {
        capacity_config.iterations = iterations;
    }
    for warning in capacity_config.warnings() {
        tracing::warn!("{warning}");
    }

    tracing::info!(iterations = capacity_config.iterations, seed, "running simulation");
    let simulation = match seed {
        Some(seed) => run_seeded(&capacity_config, seed),
        None => run(&capacity_config),
    };
    let report = simulation.report(&capacity_config, seed);

    match render_report(&report, format) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => {
            eprintln!("Failed to serialize simulation report: {e}");
            return ExitCode::FAILURE;
        }
    }

    let mut status = ExitCode::SUCCESS;

    if let Some(output) = output {
        let written = serde_yaml::to_string(&report)
            .map_err(|e| e.to_string())
            .and_then(|yaml| std::fs::write(&output, yaml).map_err(|e| e.to_string()));
        match written {
            Ok(()) => notify(format, &format!("Simulation report written to {output}")),
            Err(e) => {
                eprintln!("Failed to write simulation report: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }

    if let Some(csv) = csv {
        match write_samples_csv_file(&csv, &simulation) {
            Ok(()) => notify(format, &format!("Sample table written to {csv}")),
            Err(e) => {
                eprintln!("Failed to write sample table: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }

    if let Some(plots) = plots {
        match write_run_histograms(&plots, &simulation) {
            Ok(_) => notify(format, &format!("Histograms written to {plots}")),
            Err(e) => {
                eprintln!("Failed to write histograms: {e}");
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

fn render_report(report: &CapacityReport, format: ReportFormat) -> Result<String, String> {
    match format {
        ReportFormat::Text => Ok(format_capacity_report(report)),
        ReportFormat::Yaml => serde_yaml::to_string(report).map_err(|e| e.to_string()),
        ReportFormat::Json => serde_json::to_string_pretty(report).map_err(|e| e.to_string()),
    }
}

// Keeps stdout parseable for the machine-readable formats.
fn notify(format: ReportFormat, message: &str) {
    match format {
        ReportFormat::Text => println!("{message}"),
        ReportFormat::Yaml | ReportFormat::Json => eprintln!("{message}"),
    }
}
