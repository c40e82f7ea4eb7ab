use reqwest::StatusCode;
use url::Url;

use crate::listing::{DecodeError, PostFields};
use crate::post::Post;

pub const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("build http client")]
    Client(#[source] reqwest::Error),

    #[error("GET {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{0}")]
    Status(StatusCode),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::blocking::Client,
    base_url: String,
    fields: PostFields,
}

impl Fetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            fields: PostFields::default(),
        })
    }

    /// Points the fetcher at another listing host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: &Url) -> Self {
        self.base_url = base_url.as_str().trim_end_matches('/').to_string();
        self
    }

    pub fn with_fields(mut self, fields: PostFields) -> Self {
        self.fields = fields;
        self
    }

    /// The subreddit name goes into the path as-is, without escaping.
    pub fn listing_url(&self, subreddit: &str) -> String {
        format!("{}/r/{}.json", self.base_url, subreddit)
    }

    /// Fetches the current listing of `subreddit` with a single GET.
    pub fn fetch(&self, subreddit: &str) -> Result<Vec<Post>, FetchError> {
        let url = self.listing_url(subreddit);
        tracing::debug!(%url, "fetching listing");

        let network = |source| FetchError::Network {
            url: url.clone(),
            source,
        };

        // Dropping `resp` on any return below releases the connection.
        let resp = self.client.get(url.as_str()).send().map_err(network)?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::warn!(%status, %url, "listing request failed");
            return Err(FetchError::Status(status));
        }

        let body = resp.bytes().map_err(network)?;
        let posts = self.fields.decode_listing(&body)?;
        tracing::debug!(count = posts.len(), "decoded listing");
        Ok(posts)
    }
}

/// Fetches `subreddit` from the public endpoint with default settings.
pub fn fetch(subreddit: &str) -> Result<Vec<Post>, FetchError> {
    Fetcher::new()?.fetch(subreddit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_listing_url() {
        assert_eq!(
            Fetcher::new().unwrap().listing_url("golang"),
            "https://www.reddit.com/r/golang.json"
        );
    }

    #[test]
    fn trims_trailing_slash_of_custom_base() {
        let base = Url::parse("http://127.0.0.1:8080/").unwrap();
        assert_eq!(
            Fetcher::new().unwrap().with_base_url(&base).listing_url("rust"),
            "http://127.0.0.1:8080/r/rust.json"
        );
    }

    #[test]
    fn subreddit_is_interpolated_verbatim() {
        assert_eq!(
            Fetcher::new().unwrap().listing_url("a b/c"),
            "https://www.reddit.com/r/a b/c.json"
        );
    }

    #[test]
    fn status_error_displays_status_line() {
        let err = FetchError::Status(StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found");
    }
}
