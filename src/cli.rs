use clap::Parser;
use url::Url;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Subreddit to list, without the `r/` prefix.
    #[arg(short, long, default_value = "golang")]
    pub query: String,

    /// Host serving the subreddit listings.
    #[arg(long, default_value = crate::fetcher::DEFAULT_BASE_URL, hide = true)]
    pub base_url: Url,
}
