use clap::Parser;
use hadith::cli::{self, Cli, Commands};
use hadith_client::HttpApi;
use hadith_core::config::Config;

const DEBUG_LOG: &str = "/tmp/hadith-debug.log";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(DEBUG_LOG)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!("hadith debug log started, tail -f {DEBUG_LOG}");
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "config unreadable, using defaults");
            Config::defaults()
        }),
    };
    if let Some(url) = cli.base_url {
        config.server.base_url = url;
    }

    match cli.command {
        None | Some(Commands::Tui) => hadith_tui::run(config),
        Some(command) => {
            let api = HttpApi::new(&config.server.base_url)?
                .with_timeout(config.server.request_timeout());
            let runtime = tokio::runtime::Runtime::new()?;
            let mut stdout = std::io::stdout().lock();
            runtime.block_on(cli::run(&api, &command, config.search.page_size(), &mut stdout))
        }
    }
}
