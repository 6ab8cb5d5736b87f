use kanal::AsyncSender;
use lexa_core::{AppEvent, Intent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

const USAGE: &str = "\
commands:
  <word>        look up a word
  /pos N        select the Nth part of speech
  /syn N        look up the Nth listed synonym
  /fav          toggle favorite for the current word
  /unfav WORD   remove a saved word
  /saved        show saved words and recent searches
  /clear        clear search history
  /play         play pronunciation audio
  /copy [TEXT]  copy the current word, or TEXT
  /dark         toggle dark mode
  /autoplay     toggle pronunciation autoplay
  /help         this list
  /quit         exit";

/// Reads stdin lines and feeds intents into the app. Closing stdin ends
/// the session like `/quit`.
pub async fn stdin_loop(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            let _ = event_tx.send(AppEvent::Intent(Intent::Quit)).await;
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Some(intent) => {
                let quitting = matches!(intent, Intent::Quit);
                let _ = event_tx.send(AppEvent::Intent(intent)).await;
                if quitting {
                    break;
                }
            }
            None => eprintln!("{USAGE}"),
        }
    }

    Ok(())
}

/// Maps one input line to an intent. Plain text is a search; slash
/// commands cover the rest. `None` asks the caller to show usage.
/// Numeric arguments are 1-based, matching the rendered indexes.
pub fn parse_command(line: &str) -> Option<Intent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if !line.starts_with('/') {
        return Some(Intent::Search(line.to_string()));
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "/pos" => parse_index(rest).map(Intent::SelectMeaning),
        "/syn" => parse_index(rest).map(Intent::SearchSynonym),
        "/fav" => Some(Intent::ToggleFavorite),
        "/unfav" if !rest.is_empty() => Some(Intent::RemoveFavorite(rest.to_string())),
        "/saved" => Some(Intent::ShowSaved),
        "/clear" => Some(Intent::ClearHistory),
        "/play" => Some(Intent::PlayAudio),
        "/copy" if rest.is_empty() => Some(Intent::CopyWord),
        "/copy" => Some(Intent::CopyText(rest.to_string())),
        "/dark" => Some(Intent::ToggleDarkMode),
        "/autoplay" => Some(Intent::ToggleAutoplay),
        "/quit" | "/exit" => Some(Intent::Quit),
        // "/help" and anything unrecognized fall through to usage.
        _ => None,
    }
}

fn parse_index(rest: &str) -> Option<usize> {
    rest.parse::<usize>().ok().and_then(|n| n.checked_sub(1))
}
