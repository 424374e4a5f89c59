//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use luster_core::Delimiter;

/// Export the likers and followers of a page as CSV.
///
/// Luster logs in with your account, resolves the page id and pages through
/// both fan listings. The document goes to stdout; prompts, progress and logs
/// go to stderr.
#[derive(Parser, Debug)]
#[command(name = "luster")]
#[command(author, version, about)]
pub struct Cli {
    /// Login email (prompted on stderr when omitted)
    #[arg(short = 'u', long = "user", global = true, value_name = "EMAIL")]
    pub user: Option<String>,

    /// Login password (prompted with hidden input when omitted)
    #[arg(short = 'p', long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored log output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch every liker and follower of a page
    Fans(FansArgs),

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct FansArgs {
    /// Page name as it appears in the page URL
    #[arg(value_name = "PAGE_NAME")]
    pub page_name: String,

    /// Output format (defaults to the config file value, then csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the document to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}

/// Output document format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Comma separated values
    Csv,
    /// Tab separated values
    Tsv,
}

impl From<OutputFormat> for Delimiter {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Delimiter::Comma,
            OutputFormat::Tsv => Delimiter::Tab,
        }
    }
}
