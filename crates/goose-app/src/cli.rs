use std::path::PathBuf;

use clap::Parser;

/// Mr. Goose: a honking companion that relays feature requests to the
/// assistant service and types the answer back.
#[derive(Parser, Debug)]
#[command(name = "goose", version, about)]
pub struct Args {
    /// Feature request to send. Prompts on stdin when omitted.
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// File whose contents are sent along as code context.
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Append received code snippets to this file instead of printing them.
    #[arg(long)]
    pub insert_into: Option<PathBuf>,

    /// Assistant server URL override (ws:// or wss://).
    #[arg(long)]
    pub server: Option<String>,

    /// Skip the greeting dialog.
    #[arg(long)]
    pub no_greeting: bool,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
