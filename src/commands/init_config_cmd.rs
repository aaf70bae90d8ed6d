use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::domain::config::CapacityConfig;
use crate::services::config_yaml::serialize_config_to_yaml;

pub fn init_config_command(cmd: Commands) -> ExitCode {
    let Commands::InitConfig { output } = cmd else {
        return ExitCode::FAILURE;
    };

    let mut buffer = Vec::new();
    if let Err(e) = serialize_config_to_yaml(&mut buffer, &CapacityConfig::default()) {
        eprintln!("Failed to serialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = std::fs::write(&output, buffer) {
        eprintln!("Failed to write output file: {e}");
        return ExitCode::FAILURE;
    }
    println!("Default configuration written to {output}");
    ExitCode::SUCCESS
}
