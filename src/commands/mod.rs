//! CLI command handlers.

mod config;
mod fans;

pub(crate) use config::run_config_show_command;
pub(crate) use fans::run_fans_command;
