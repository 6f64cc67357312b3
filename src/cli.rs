//! Command-line surface: argument types and the one-shot subcommands.
//!
//! The one-shot commands print plain text to any [`Write`] so the harnesses
//! can capture it. Unlike the TUI, they surface API failures as errors (and a
//! nonzero exit status) instead of degrading to an empty result.

use clap::{Args, Parser, Subcommand};
use hadith_client::{ClientError, SearchApi};
use hadith_core::{Dispatch, PageSize, SearchController};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "hadith", about = "Search a hadith collection from the terminal")]
pub struct Cli {
    /// Write debug logs to /tmp/hadith-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Search API base URL, overriding the config file.
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Config file to use instead of ~/.config/hadith/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Interactive search (the default).
    Tui,
    /// Run one search and print the page.
    Search(SearchArgs),
    /// List the books that can be used as a filter.
    Books,
    /// Print the total number of hadiths.
    Count,
    /// Print one hadith as JSON.
    Get {
        book: String,
        number: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct SearchArgs {
    /// Search text; words are joined with spaces.
    pub query: Vec<String>,

    /// Restrict results to one book.
    #[arg(long, short)]
    pub book: Option<String>,

    #[arg(long, short, default_value_t = 1)]
    pub page: u32,

    /// 10, 20, 50 or 100; anything else falls back to 10.
    #[arg(long, value_name = "N")]
    pub page_size: Option<String>,
}

/// Run a one-shot command against `api`, writing its output to `out`.
///
/// `page_size` is used when the command does not name one.
pub async fn run<A: SearchApi>(
    api: &A,
    command: &Commands,
    page_size: PageSize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Tui => anyhow::bail!("the tui command is interactive"),
        Commands::Search(args) => search(api, args, page_size, out).await,
        Commands::Books => {
            for book in api.books().await? {
                writeln!(out, "{book}")?;
            }
            Ok(())
        }
        Commands::Count => {
            writeln!(out, "{}", api.count().await?)?;
            Ok(())
        }
        Commands::Get { book, number } => {
            let hadith = api.hadith(book, *number).await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&hadith)?)?;
            Ok(())
        }
    }
}

async fn search<A: SearchApi>(
    api: &A,
    args: &SearchArgs,
    default_size: PageSize,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let size = args
        .page_size
        .as_deref()
        .map_or(default_size, PageSize::parse);

    let mut controller = SearchController::new(size);
    controller.on_query_changed(args.query.join(" "));
    controller.on_filter_changed(args.book.clone());
    controller.on_goto_page(args.page);

    if let Dispatch::Issue { ticket, request } = controller.begin_fetch() {
        tracing::debug!(?request, "cli: search");
        let page = api.search(&request).await?;
        controller.apply::<ClientError>(ticket, Ok(page));
    }

    let view = controller.view();
    writeln!(out, "{}", view.summary)?;
    for item in &view.items {
        writeln!(out)?;
        match &item.score {
            Some(score) => writeln!(out, "{} {}  {score}", item.book, item.number)?,
            None => writeln!(out, "{} {}", item.book, item.number)?,
        }
        writeln!(out, "{}", item.id)?;
        writeln!(out, "{}", item.arab)?;
    }
    Ok(())
}
