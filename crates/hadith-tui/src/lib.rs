//! hadith TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use hadith_client::{HttpApi, Session};
use hadith_core::config::Config;

/// Run the interactive interface against the configured server.
///
/// Builds a multi-threaded tokio runtime for the network and timer tasks and
/// runs the synchronous terminal loop inside it.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let api = HttpApi::new(&config.server.base_url)?
        .with_timeout(config.server.request_timeout());
    let session = Session::new(api, config.search.debounce(), config.search.page_size());
    session.start();

    let theme = theme::Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.ui.theme, "unknown theme, using default");
        theme::Theme::load_default()
    });

    App::new(session, &config.ui, theme).run()
}
