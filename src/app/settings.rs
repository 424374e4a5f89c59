//! Effective settings: command-line values over config file values over defaults.

use anyhow::{Context, Result};
use luster_core::fans::DEFAULT_PAGE_SIZE;
use luster_core::transport::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_READ_TIMEOUT_SECS};
use luster_core::{
    DEFAULT_MOBILE_BASE_URL, DEFAULT_WWW_BASE_URL, Delimiter, Endpoints, FetchOptions,
    HttpTimeouts,
};

use crate::app::config::{FileConfig, VerbositySetting};
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) email: Option<String>,
    pub(crate) format: Delimiter,
    pub(crate) verbosity: VerbositySetting,
    pub(crate) timeouts: HttpTimeouts,
    pub(crate) fetch: FetchOptions,
    pub(crate) endpoints: Endpoints,
}

/// Verbosity requested on the command line, if any.
pub(crate) fn cli_verbosity(cli: &Cli) -> Option<VerbositySetting> {
    if cli.quiet {
        return Some(VerbositySetting::Quiet);
    }
    match cli.verbose {
        0 => None,
        1 => Some(VerbositySetting::Verbose),
        _ => Some(VerbositySetting::Debug),
    }
}

pub(crate) fn resolve_settings(
    cli: &Cli,
    format: Option<Delimiter>,
    file_config: Option<&FileConfig>,
) -> Result<Settings> {
    let file = file_config.cloned().unwrap_or_default();

    let verbosity = cli_verbosity(cli)
        .or(file.verbosity)
        .unwrap_or(VerbositySetting::Default);

    let timeouts = HttpTimeouts {
        connect_secs: file
            .connect_timeout_secs
            .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        read_secs: file.read_timeout_secs.unwrap_or(DEFAULT_READ_TIMEOUT_SECS),
    };

    let fetch = match file.max_offset {
        Some(max_offset) => {
            let max_offset = usize::try_from(max_offset)
                .context("max_offset does not fit this platform")?;
            FetchOptions::new(DEFAULT_PAGE_SIZE, max_offset)?
        }
        None => FetchOptions::default(),
    };

    let endpoints = Endpoints::with_base_urls(
        file.mobile_base_url
            .as_deref()
            .unwrap_or(DEFAULT_MOBILE_BASE_URL),
        file.www_base_url.as_deref().unwrap_or(DEFAULT_WWW_BASE_URL),
    )?;

    Ok(Settings {
        email: cli.user.clone().or(file.email),
        format: format.or(file.format).unwrap_or_default(),
        verbosity,
        timeouts,
        fetch,
        endpoints,
    })
}
