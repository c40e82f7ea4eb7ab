use clap::Parser as _;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = subreddit_feed::CliArgs::parse();
    let stdout = std::io::stdout();
    if let Err(err) = subreddit_feed::run(args, &mut stdout.lock()) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
