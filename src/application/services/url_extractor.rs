use regex::Regex;
use std::sync::LazyLock;

/// Pulls http(s) links out of free-form text.
pub struct UrlExtractor;

impl UrlExtractor {
    /// Returns every link in `content` in order of first appearance.
    ///
    /// Trailing sentence punctuation is not part of the link.
    #[must_use]
    pub fn extract_urls(content: &str) -> Vec<String> {
        static LINK_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'`()\[\]{}]+"#).unwrap());

        if !content.contains("http") {
            return Vec::new();
        }

        let mut urls: Vec<String> = Vec::new();

        for m in LINK_RE.find_iter(content) {
            let url = m
                .as_str()
                .trim_end_matches(['.', ',', ';', ':', '!', '?']);
            if url.ends_with("://") {
                continue;
            }
            let url = url.to_owned();
            if !urls.contains(&url) {
                urls.push(url);
            }
        }

        urls
    }
}
