//! Config command handlers: show effective configuration.

use crate::app::config::LoadedConfig;
use crate::app::settings::Settings;

pub(crate) fn run_config_show_command(loaded_config: &LoadedConfig, settings: &Settings) {
    print!("{}", render_effective_config(loaded_config, settings));
}

fn render_effective_config(loaded_config: &LoadedConfig, settings: &Settings) -> String {
    let resolved_path = loaded_config.path.as_ref().map_or_else(
        || "<unresolved>".to_string(),
        |path| path.display().to_string(),
    );
    let config_file = if loaded_config.loaded_from_file() {
        "loaded"
    } else {
        "not found (using defaults)"
    };

    let lines = [
        format!("config_path = {resolved_path}"),
        format!("config_file = {config_file}"),
        format!(
            "email = {}",
            settings.email.as_deref().unwrap_or("<prompt>")
        ),
        format!("format = {}", settings.format),
        format!("verbosity = {}", settings.verbosity.as_str()),
        format!("connect_timeout_secs = {}", settings.timeouts.connect_secs),
        format!("read_timeout_secs = {}", settings.timeouts.read_secs),
        format!("max_offset = {}", settings.fetch.max_offset()),
        format!("mobile_base_url = {}", settings.endpoints.mobile()),
        format!("www_base_url = {}", settings.endpoints.www()),
    ];
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
