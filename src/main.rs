use std::process::ExitCode;

use capacity::commands::base_commands::{CliArgs, Commands};
use capacity::commands::init_config_cmd::init_config_command;
use capacity::commands::simulate_cmd::simulate_command;
use capacity::services::logging::init_logging;
use clap::{CommandFactory, Parser};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::InitConfig { .. } => init_config_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            clap_complete::generate(shell, &mut command, "capacity", &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
