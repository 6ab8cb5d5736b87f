use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use lexa_client::DictApiClient;
use lexa_config::Config;
use lexa_core::Lexicon;
use lexa_io::AudioPlayer;
use lexa_store::{FileStore, Store};

mod controller;
mod events;
mod io;
mod render;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use controller::{Applied, COPY_MARKER_TTL, SearchController};
use events::{ChannelSet, EventCtx, event_loop};
use render::Style;

#[derive(Parser)]
#[command(name = "lexa", version, about = "Dictionary lookups from the terminal")]
struct Cli {
    /// Word to look up once; omit for an interactive session
    word: Option<String>,
    /// Dictionary language code (overrides config)
    #[arg(long)]
    language: Option<String>,
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::new(),
    };
    if let Some(language) = cli.language.clone() {
        config.api.language = language;
    }

    let data_dir = config.storage.resolve_dir();
    let store: Arc<dyn Store> = Arc::new(
        FileStore::open(&data_dir)
            .with_context(|| format!("cannot open data directory {}", data_dir.display()))?,
    );
    let ctl = SearchController::bootstrap(store);

    let lexicon: Arc<dyn Lexicon> = Arc::new(DictApiClient::new(
        config.api.endpoint.clone(),
        config.api.language.clone(),
    ));

    match cli.word.clone() {
        Some(word) => one_shot(ctl, lexicon, &cli, &word).await,
        None => interactive(ctl, lexicon, &config, &cli).await,
    }
}

/// Load a config file (JSON, same shape as the defaults). An explicit file
/// is authoritative; environment overrides apply only to the default path.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    let file =
        File::open(path).with_context(|| format!("cannot open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)?;
    Ok(config)
}

/// Resolve one word, print it, record history, exit. Failure prints the
/// same message the session would show and exits non-zero.
async fn one_shot(
    mut ctl: SearchController,
    lexicon: Arc<dyn Lexicon>,
    cli: &Cli,
    word: &str,
) -> anyhow::Result<()> {
    let style = Style::detect(cli.no_color, ctl.dark_mode());

    let Some(ticket) = ctl.begin_search(word) else {
        anyhow::bail!("nothing to look up");
    };

    let outcome = lexicon.lookup(&ticket.term).await;
    match ctl.apply_lookup(ticket.seq, &ticket.term, outcome) {
        Applied::Loaded { .. } => {
            if let Some(entry) = ctl.state().primary() {
                let favorite = ctl.favorites().iter().any(|r| r.word == entry.word);
                print!("{}", render::entry(entry, 0, favorite, &style));
            }
            Ok(())
        }
        Applied::Failed { message } => {
            eprintln!("{}", render::error(&message, &style));
            std::process::exit(1);
        }
        // Single request, nothing to supersede it.
        Applied::Stale => Ok(()),
    }
}

async fn interactive(
    ctl: SearchController,
    lexicon: Arc<dyn Lexicon>,
    config: &Config,
    cli: &Cli,
) -> anyhow::Result<()> {
    let style = Style::detect(cli.no_color, ctl.dark_mode());
    let player = Arc::new(AudioPlayer::new(
        config.audio.player.clone(),
        config.audio.player_args.clone(),
    ));

    let channels = ChannelSet::new();
    let cancel = CancellationToken::new();

    let ctx = EventCtx {
        lexicon,
        player,
        events_tx: channels.events.0.clone(),
        updates_tx: channels.updates.0.clone(),
        autoplay_delay: Duration::from_millis(config.audio.autoplay_delay_ms),
        copy_ttl: COPY_MARKER_TTL,
        copy_timer: None,
        autoplay_timer: None,
    };

    println!(
        "{}",
        render::note("type a word to look it up; /help lists commands", &style)
    );

    let events = tokio::spawn(event_loop(
        ctl,
        ctx,
        channels.events.1.clone(),
        cancel.child_token(),
    ));
    let view = tokio::spawn(ui::ui_loop(
        channels.updates.1.clone(),
        style,
        cancel.child_token(),
    ));
    let _input = tokio::spawn(io::stdin_loop(
        channels.events.0.clone(),
        cancel.child_token(),
    ));

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            cancel.cancel();
        }
        result = events => report("event loop", result),
        result = view => report("view loop", result),
    }

    Ok(())
}

fn report(name: &str, result: Result<anyhow::Result<()>, tokio::task::JoinError>) {
    match result {
        Ok(Ok(())) => tracing::info!("{name} exited"),
        Ok(Err(e)) => tracing::error!("{name} failed: {e}"),
        Err(e) => tracing::error!("{name} panicked: {e}"),
    }
}
