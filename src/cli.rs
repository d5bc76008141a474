//! Command-line front end

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use sd_app::usecases::{ResolveNick, ResolveNickError};
use sd_core::EntryKind;

use crate::bootstrap::{build_directory, load_app_config};

#[derive(Debug, Parser)]
#[command(
    name = "slackdir",
    version,
    about = "Resolve Slack user and bot ids to display-ready nicks"
)]
pub struct Cli {
    /// Path to config.toml (defaults to $SLACKDIR_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// When to color nicks
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve human account ids
    User {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Resolve bot ids
    Bot {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Per https://no-color.org/, `NO_COLOR` disables `auto`.
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
            }
        }
    }
}

impl Command {
    fn kind_and_ids(&self) -> (EntryKind, &[String]) {
        match self {
            Command::User { ids } => (EntryKind::Human, ids.as_slice()),
            Command::Bot { ids } => (EntryKind::Bot, ids.as_slice()),
        }
    }
}

/// One output line per id.
pub fn render_line(id: &str, result: &Result<String, ResolveNickError>) -> String {
    match result {
        Ok(nick) => format!("{id}\t{nick}"),
        Err(err) => format!("{id}\terror: {err}"),
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_app_config(cli.config.as_deref())?;
    let colorize = cli.color.enabled();
    let directory = build_directory(&config, colorize).await?;
    let resolve = ResolveNick::new(directory);

    let (kind, ids) = cli.command.kind_and_ids();
    let results =
        futures::future::join_all(ids.iter().map(|id| resolve.execute(id, kind, colorize))).await;

    let mut failed = false;
    for (id, result) in ids.iter().zip(&results) {
        failed |= result.is_err();
        println!("{}", render_line(id, result));
    }

    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
