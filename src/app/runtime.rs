//! Process runtime: load config, resolve settings, install tracing, dispatch.

use anyhow::Result;
use luster_core::Delimiter;
use tracing::debug;

use crate::app::config::load_default_file_config;
use crate::app::settings::resolve_settings;
use crate::app::terminal;
use crate::cli::{Cli, Command, ConfigCommand};
use crate::commands;

pub(crate) async fn run(cli: Cli) -> Result<()> {
    let loaded_config = load_default_file_config()?;

    let format = match &cli.command {
        Command::Fans(args) => args.format.map(Delimiter::from),
        Command::Config { .. } => None,
    };
    let settings = resolve_settings(&cli, format, loaded_config.config.as_ref())?;

    terminal::init_tracing(
        settings.verbosity.log_level(),
        terminal::is_no_color_requested(cli.no_color),
    );
    debug!(
        config_path = ?loaded_config.path,
        loaded = loaded_config.loaded_from_file(),
        "Configuration resolved"
    );

    match &cli.command {
        Command::Fans(args) => {
            commands::run_fans_command(args, cli.password.clone(), &settings).await
        }
        Command::Config {
            command: ConfigCommand::Show,
        } => {
            commands::run_config_show_command(&loaded_config, &settings);
            Ok(())
        }
    }
}
