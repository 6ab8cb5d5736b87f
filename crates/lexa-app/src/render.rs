use lexa_core::{Entry, FavoriteRecord, HistoryRecord, all_synonyms};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BLUE: &str = "\x1b[34m";
const BRIGHT_CYAN: &str = "\x1b[96m";
const BRIGHT_YELLOW: &str = "\x1b[93m";

/// Rendering knobs: whether to emit ANSI codes at all, and which accent
/// palette (the dark-mode flag picks brighter accents).
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
    pub dark: bool,
}

impl Style {
    /// Colors only when stdout is a terminal and `--no-color` was not
    /// given.
    pub fn detect(no_color: bool, dark: bool) -> Self {
        Self {
            color: !no_color && atty::is(atty::Stream::Stdout),
            dark,
        }
    }

    pub fn plain() -> Self {
        Self {
            color: false,
            dark: false,
        }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn accent(&self) -> &'static str {
        if self.dark { BRIGHT_CYAN } else { BLUE }
    }

    fn star(&self) -> &'static str {
        if self.dark { BRIGHT_YELLOW } else { YELLOW }
    }
}

/// Full rendering of one entry: headword line, numbered part-of-speech
/// groups with their definitions and examples, the indexed synonym list
/// (`/syn N` indexes into it), and source URLs.
pub fn entry(entry: &Entry, selected: usize, favorite: bool, style: &Style) -> String {
    let mut out = String::new();

    out.push_str(&style.paint(BOLD, &entry.word));
    if let Some(phonetic) = entry.phonetic_text() {
        out.push_str("  ");
        out.push_str(&style.paint(style.accent(), phonetic));
    }
    if favorite {
        out.push_str("  ");
        out.push_str(&style.paint(style.star(), "★"));
    }
    out.push('\n');

    for (index, meaning) in entry.meanings.iter().enumerate() {
        let marker = if index == selected { '*' } else { ' ' };
        out.push_str(&format!(
            "{marker}{}. {}\n",
            index + 1,
            style.paint(style.accent(), &meaning.part_of_speech)
        ));

        for (d_index, definition) in meaning.definitions.iter().enumerate() {
            out.push_str(&format!("   {}) {}\n", d_index + 1, definition.definition));
            if let Some(example) = &definition.example {
                out.push_str("      ");
                out.push_str(&style.paint(DIM, &format!("\"{example}\"")));
                out.push('\n');
            }
        }
    }

    let synonyms = all_synonyms(entry);
    if !synonyms.is_empty() {
        let listed: Vec<String> = synonyms
            .iter()
            .enumerate()
            .map(|(i, s)| format!("[{}] {s}", i + 1))
            .collect();
        out.push_str("synonyms: ");
        out.push_str(&style.paint(GREEN, &listed.join("  ")));
        out.push('\n');
    }

    if !entry.source_urls.is_empty() {
        out.push_str(&style.paint(DIM, &format!("sources: {}", entry.source_urls.join(", "))));
        out.push('\n');
    }

    out
}

pub fn searching(term: &str, style: &Style) -> String {
    style.paint(DIM, &format!("looking up \"{term}\"..."))
}

pub fn error(message: &str, style: &Style) -> String {
    style.paint(RED, message)
}

pub fn copied(text: &str, style: &Style) -> String {
    style.paint(GREEN, &format!("copied \"{text}\""))
}

pub fn playing(url: &str, style: &Style) -> String {
    style.paint(DIM, &format!("playing {url}"))
}

pub fn note(text: &str, style: &Style) -> String {
    style.paint(DIM, text)
}

pub fn prefs(dark_mode: bool, autoplay: bool, style: &Style) -> String {
    style.paint(
        DIM,
        &format!(
            "dark mode {}, autoplay {}",
            on_off(dark_mode),
            on_off(autoplay)
        ),
    )
}

/// The saved panel: favorites with their snapshotted definitions, then the
/// recent-search words, newest first.
pub fn saved(history: &[HistoryRecord], favorites: &[FavoriteRecord], style: &Style) -> String {
    let mut out = String::new();

    out.push_str(&style.paint(BOLD, "saved words"));
    out.push('\n');
    if favorites.is_empty() {
        out.push_str("  (none)\n");
    }
    for (index, record) in favorites.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {}",
            index + 1,
            style.paint(style.star(), &record.word)
        ));
        if !record.definition.is_empty() {
            out.push_str(&format!(": {}", record.definition));
        }
        out.push('\n');
    }

    out.push_str(&style.paint(BOLD, "recent searches"));
    out.push('\n');
    if history.is_empty() {
        out.push_str("  (none)\n");
    } else {
        let words: Vec<&str> = history.iter().map(|r| r.word.as_str()).collect();
        out.push_str(&format!("  {}\n", words.join(", ")));
    }

    out
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
