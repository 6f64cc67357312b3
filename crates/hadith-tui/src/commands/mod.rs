//! `:` commands: parsing and execution against the app state.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `book [name]` | Filter by book; no name clears the filter |
//! | `size <n>` | Page size; anything not offered falls back to 10 |
//! | `page <n>` | Jump to page `n` |
//! | `next`, `prev` | Change page |
//! | `full`, `short` | Show full item text / truncate it |
//! | `width <n>` | Truncation width in characters |

use crate::{app::AppState, theme::Theme};
use hadith_client::SearchApi;
use hadith_core::PageSize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    Book(Option<String>),
    Size(PageSize),
    Page(u32),
    Next,
    Prev,
    Full,
    Short,
    Width(usize),
}

impl Command {
    /// Parse the text after the `:` prefix.
    ///
    /// An empty string returns `Err("")`, meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "full" => Ok(Command::Full),
            "short" => Ok(Command::Short),
            "theme" if rest.is_empty() => Err("usage: theme <default|gruvbox>".to_string()),
            "theme" => Ok(Command::Theme(rest.to_string())),
            "book" => Ok(Command::Book((!rest.is_empty()).then(|| rest.to_string()))),
            "size" => Ok(Command::Size(PageSize::parse(rest))),
            "page" => match rest.parse::<u32>() {
                Ok(n) if n >= 1 => Ok(Command::Page(n)),
                _ => Err("usage: page <n>, n ≥ 1".to_string()),
            },
            "width" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(Command::Width(n)),
                _ => Err("usage: width <n>, n ≥ 1".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`]. An `Err` is shown in the command bar.
pub fn execute_command<A: SearchApi>(s: &mut AppState<A>, cmd: Command) -> Result<(), String> {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name).ok_or_else(|| format!("unknown theme: {name}"))?;
        }
        Command::Book(Some(name)) => {
            let catalog = s.session.controller().catalog();
            if catalog.books.is_some() && !catalog.books().contains(&name) {
                return Err(format!("unknown book: {name}"));
            }
            s.session.filter_changed(Some(name));
        }
        Command::Book(None) => s.session.filter_changed(None),
        Command::Size(size) => s.session.page_size_changed(size),
        Command::Page(n) => s.session.goto_page(n),
        Command::Next => s.session.next_page(),
        Command::Prev => s.session.prev_page(),
        Command::Full => s.truncation.full = true,
        Command::Short => s.truncation.full = false,
        Command::Width(n) => {
            s.truncation.width = n;
            s.truncation.full = false;
        }
    }
    Ok(())
}
