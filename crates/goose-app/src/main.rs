mod cli;
mod dialog;
mod presenter;
mod protocol;
mod setup;
mod snippets;
mod sounds;
mod transport;

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use std::time::Duration;

use goose_common::{GooseError, Result};
use goose_config::GooseConfig;
use goose_dialog::{spawn_typewriter, TypewriterHandle};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::dialog::DialogRouter;
use crate::presenter::{run_presenter, TerminalPresenter};
use crate::protocol::HelpRequest;
use crate::snippets::{FileSnippetSink, PrintSnippetSink, SnippetSink};
use crate::sounds::SoundCues;

const FEATURE_PROMPT: &str =
    "🪿 Honk! What shiny idea are we hatching today? What should it do when it flaps to life?";

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config first so its log level can seed the filter.
    let loaded = match args.config.as_deref() {
        Some(path) => goose_config::load_config_from(path),
        None => goose_config::load_config(),
    };

    let log_directive = setup::log_directive(args.log_level.as_deref(), loaded.as_ref().ok());
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(setup::env_filter(&log_directive))
        .init();

    tracing::info!("Mr. Goose v{} waddling in", env!("CARGO_PKG_VERSION"));

    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GooseConfig::default()
    });
    if let Some(url) = args.server.clone() {
        tracing::info!(url = %url, "Using server override");
        config.server.url = url;
    }

    if args.print_config {
        println!("{}", goose_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("goose: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: cli::Args, config: GooseConfig) -> Result<()> {
    let (typewriter, events) = spawn_typewriter(
        setup::typewriter_config(&config.typewriter),
        setup::cue_strategy(&config.typewriter),
    );
    let presenter = tokio::spawn(run_presenter(
        events,
        TerminalPresenter::new(io::stdout(), io::stdout().is_terminal()),
        SoundCues::new(config.sounds.clone()),
    ));
    let sounds = SoundCues::new(config.sounds.clone());
    sounds.squawk();

    if config.greeting.enabled && !args.no_greeting {
        tokio::time::sleep(Duration::from_millis(u64::from(config.greeting.delay_ms))).await;
        typewriter.restart(config.greeting.text.clone(), None);
        typewriter.idle().await;
    }

    let message = match args.message.clone() {
        Some(message) => message,
        None => prompt_for_feature(&typewriter, &sounds).await?,
    };
    if message.trim().is_empty() {
        tracing::info!("No feature request, nothing to send");
        return close(typewriter, presenter).await;
    }

    let code = match args.file.as_deref() {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => String::new(),
    };

    let snippets: Box<dyn SnippetSink> = match args.insert_into.clone() {
        Some(path) => Box::new(FileSnippetSink::new(path)),
        None => Box::new(PrintSnippetSink::new(io::stdout())),
    };
    let mut router = DialogRouter::new(typewriter.clone(), snippets);

    sounds.honk();
    router.begin_submission();
    let request = HelpRequest::new(message, code);
    let sent =
        transport::request_help(&config.server, &request, |chunk| router.on_chunk(&chunk)).await;

    // A connection that drops mid-response still shows what arrived.
    router.close();
    router.finish().await;
    close(typewriter, presenter).await?;

    sent
}

/// Type the feature prompt and read one line from stdin.
async fn prompt_for_feature(typewriter: &TypewriterHandle, sounds: &SoundCues) -> Result<String> {
    typewriter.restart(FEATURE_PROMPT, None);
    sounds.honk();
    typewriter.idle().await;

    {
        let mut out = io::stdout().lock();
        write!(out, "\n> ")?;
        out.flush()?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    Ok(lines.next_line().await?.unwrap_or_default())
}

/// Stop the typewriter and wait for the presenter to drain.
async fn close(
    typewriter: TypewriterHandle,
    presenter: tokio::task::JoinHandle<TerminalPresenter<io::Stdout>>,
) -> Result<()> {
    typewriter.shutdown();
    presenter
        .await
        .map(|_| ())
        .map_err(|e| GooseError::Other(format!("presenter task failed: {e}")))
}
