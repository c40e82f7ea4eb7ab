use serde::Deserialize;
use serde_json::{Map, Value};

use crate::post::Post;

#[derive(Debug, Deserialize)]
pub(crate) struct ListingResponse {
    pub data: ListingData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListingData {
    pub children: Vec<Child>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Child {
    pub data: Map<String, Value>,
}

/// Wire key for each [`Post`] field, looked up in every listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFields {
    pub title: String,
    pub url: String,
    pub comment_count: String,
}

impl Default for PostFields {
    fn default() -> Self {
        Self {
            title: "title".to_string(),
            url: "url".to_string(),
            comment_count: "num_comments".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid listing json")]
    Json(#[from] serde_json::Error),

    #[error("listing entry {index}: missing field `{key}`")]
    MissingField { index: usize, key: String },

    #[error("listing entry {index}: field `{key}` is not {expected}")]
    InvalidField {
        index: usize,
        key: String,
        expected: &'static str,
    },
}

impl PostFields {
    /// Decodes a listing body into posts, in listing order.
    ///
    /// Any entry that does not fit the table fails the whole listing.
    pub fn decode_listing(&self, body: &[u8]) -> Result<Vec<Post>, DecodeError> {
        let listing: ListingResponse = serde_json::from_slice(body)?;
        listing
            .data
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| self.extract(index, &child.data))
            .collect()
    }

    fn extract(&self, index: usize, entry: &Map<String, Value>) -> Result<Post, DecodeError> {
        let title = string_field(index, entry, &self.title)?;
        let url = string_field(index, entry, &self.url)?;
        let comment_count = field(index, entry, &self.comment_count)?
            .as_u64()
            .ok_or_else(|| DecodeError::InvalidField {
                index,
                key: self.comment_count.clone(),
                expected: "a non-negative integer",
            })?;
        Ok(Post::new(title, url, comment_count))
    }
}

fn field<'a>(
    index: usize,
    entry: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, DecodeError> {
    entry.get(key).ok_or_else(|| DecodeError::MissingField {
        index,
        key: key.to_string(),
    })
}

fn string_field(index: usize, entry: &Map<String, Value>, key: &str) -> Result<String, DecodeError> {
    field(index, entry, key)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DecodeError::InvalidField {
            index,
            key: key.to_string(),
            expected: "a string",
        })
}
