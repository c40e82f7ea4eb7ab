use std::borrow::Cow;
use std::fmt;

/// One entry of a subreddit listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    title: String,
    url: String,
    comment_count: u64,
}

impl Post {
    pub fn new(title: impl Into<String>, url: impl Into<String>, comment_count: u64) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            comment_count,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }
}

/// Parenthetical appended to the title: nothing for zero, singular for one.
pub fn comment_suffix(count: u64) -> Cow<'static, str> {
    match count {
        0 => Cow::Borrowed(""),
        1 => Cow::Borrowed(" (1 comment)"),
        n => Cow::Owned(format!(" ({n} comments)")),
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\n{}\n",
            self.title,
            comment_suffix(self.comment_count),
            self.url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_empty_without_comments() {
        assert_eq!(comment_suffix(0), "");
    }

    #[test]
    fn suffix_is_singular_at_one() {
        assert_eq!(comment_suffix(1), " (1 comment)");
    }

    #[test]
    fn suffix_is_plural_from_two() {
        assert_eq!(comment_suffix(2), " (2 comments)");
        assert_eq!(comment_suffix(5), " (5 comments)");
    }

    #[test]
    fn renders_title_suffix_and_url() {
        let post = Post::new("Hello", "http://x/1", 0);
        assert_eq!(post.to_string(), "Hello \nhttp://x/1\n");

        let post = Post::new("World", "http://x/2", 1);
        assert_eq!(post.to_string(), "World  (1 comment)\nhttp://x/2\n");

        let post = Post::new("Busy", "http://x/3", 42);
        assert_eq!(post.to_string(), "Busy  (42 comments)\nhttp://x/3\n");
    }
}
