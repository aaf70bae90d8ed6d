pub mod base_commands;
pub mod init_config_cmd;
pub mod report_format;
pub mod simulate_cmd;
