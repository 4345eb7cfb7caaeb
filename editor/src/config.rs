//! Command-line arguments and the settings derived from them.

use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use post_core::{PostId, DEFAULT_BASE_URL};
use tracing::level_filters::LevelFilter;

use crate::editor::DEFAULT_FETCH_TIMEOUT;

/// Command-line arguments for the `post-editor` binary.
#[derive(Debug, Parser)]
#[command(name = "post-editor", version, about = "Edit posts on a remote posts resource")]
pub struct CliArgs {
    /// Base URL of the remote resource; posts live under `<base>/posts`.
    #[arg(long, env = "POST_EDITOR_BASE_URL", default_value = DEFAULT_BASE_URL, value_name = "URL")]
    pub base_url: String,

    /// Time bound for the initial fetch, in milliseconds.
    #[arg(
        long,
        env = "POST_EDITOR_FETCH_TIMEOUT_MS",
        default_value_t = DEFAULT_FETCH_TIMEOUT.as_millis() as u64,
        value_name = "MS"
    )]
    pub fetch_timeout_ms: u64,

    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Args, Clone)]
pub struct LoggingArgs {
    /// Default log level; `RUST_LOG` takes precedence.
    #[arg(long = "log-level", env = "POST_EDITOR_LOG", default_value = "warn", value_name = "LEVEL")]
    pub level: LevelFilter,

    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Compact)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Subcommand, Clone, PartialEq, Eq)]
pub enum Command {
    /// Load the posts and print them.
    List,
    /// Create a post from a title and body.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    /// Select an existing post, change its fields and save it.
    Update {
        #[arg(long)]
        id: PostId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
    },
    /// Delete a post by id.
    Delete {
        #[arg(long)]
        id: PostId,
    },
    /// Line-oriented editing session on stdin/stdout.
    Interactive,
}

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub fetch_timeout: Duration,
    pub logging: LoggingArgs,
    pub command: Command,
}

impl From<CliArgs> for Settings {
    fn from(args: CliArgs) -> Self {
        Self {
            base_url: args.base_url,
            fetch_timeout: Duration::from_millis(args.fetch_timeout_ms),
            logging: args.logging,
            command: args.command.unwrap_or(Command::Interactive),
        }
    }
}
