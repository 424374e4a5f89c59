//! `fans` command: log in, resolve the page, fetch both listings, render.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

use anyhow::{Context, Result};
use luster_core::{Authenticator, FanClient, FanKind, HttpTransport, render_delimited};
use tracing::info;

use crate::app::config::VerbositySetting;
use crate::app::progress::FetchProgress;
use crate::app::prompt::resolve_credentials;
use crate::app::settings::Settings;
use crate::app::terminal;
use crate::cli::FansArgs;

pub(crate) async fn run_fans_command(
    args: &FansArgs,
    password: Option<String>,
    settings: &Settings,
) -> Result<()> {
    let credentials = resolve_credentials(settings.email.clone(), password)?;

    let progress = FetchProgress::new(terminal::should_use_spinner(
        io::stderr().is_terminal(),
        settings.verbosity == VerbositySetting::Default,
        terminal::is_dumb_terminal(),
    ));

    progress.stage("Logging in...");
    let authenticator = Authenticator::new(settings.endpoints.clone(), settings.timeouts)?;
    let session = authenticator.login(&credentials).await?;
    info!(user_id = session.user_id(), "Logged in");

    let transport = HttpTransport::new(settings.endpoints.clone(), settings.timeouts)?;
    let client = FanClient::new(transport, session).with_options(settings.fetch);

    progress.stage(format!("Opening page {}...", args.page_name));
    let page = client
        .open_page(&args.page_name)
        .await
        .with_context(|| format!("Cannot open page '{}'", args.page_name))?;

    let fans = client
        .fetch_fans_with_progress(&page, |kind, fetched| progress.batch(kind, fetched))
        .await
        .with_context(|| format!("Cannot fetch fans of page '{}'", page.name))?;
    progress.finish();

    info!(
        likers = fans.count_of(FanKind::Like),
        followers = fans.count_of(FanKind::Follow),
        "Fetch complete"
    );

    let document = render_delimited(&fans, settings.format);
    write_document(args.output.as_deref(), &document)
}

/// Writes the rendered document to `output`, or to stdout when `None`.
fn write_document(output: Option<&Path>, document: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, document)
                .with_context(|| format!("Failed to write output file '{}'", path.display()))?;
            info!(path = %path.display(), "Wrote document");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(document.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write document to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_document_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fans.csv");

        write_document(Some(&path), "TIME,KIND,ID,NAME,LINK\n").expect("write succeeds");

        assert_eq!(
            fs::read_to_string(&path).expect("file readable"),
            "TIME,KIND,ID,NAME,LINK\n"
        );
    }

    #[test]
    fn test_write_document_reports_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("fans.csv");

        let err = write_document(Some(&path), "x").expect_err("missing dir fails");
        assert!(err.to_string().contains("Failed to write output file"));
    }
}
