mod cli;
mod fetcher;
mod listing;
mod post;

use std::io::Write;

use anyhow::Context as _;

pub use cli::Args as CliArgs;
pub use fetcher::{DEFAULT_BASE_URL, FetchError, Fetcher, fetch};
pub use listing::{DecodeError, PostFields};
pub use post::{Post, comment_suffix};

/// Fetches the listing named by `args` and writes one rendering per post to `out`.
pub fn run(args: CliArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let fetcher = Fetcher::new()?.with_base_url(&args.base_url);
    let posts = fetcher
        .fetch(&args.query)
        .with_context(|| format!("fetch r/{}", args.query))?;

    for post in &posts {
        writeln!(out, "{post}").context("write post")?;
    }
    out.flush().context("flush output")?;
    Ok(())
}
