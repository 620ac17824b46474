//! `Link` header parsing
//!
//! GitHub advertises pagination through an RFC 5988 style header:
//! `<https://api.github.com/...&page=2>; rel="next", <...&page=5>; rel="last"`.

use reqwest::Url;
use reqwest::header::{HeaderMap, LINK};
use std::collections::HashMap;

/// Link relations of a response, keyed by `rel` name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    rels: HashMap<String, String>,
}

impl Links {
    /// Parse the value of a `Link` header
    ///
    /// Entries without a `<url>` part or without a `rel` parameter are ignored.
    /// A `rel` holding several space-separated names registers the URL under each.
    pub fn parse(header: &str) -> Self {
        let mut rels = HashMap::new();

        for entry in header.split(',') {
            let mut params = entry.split(';');
            let Some(target) = params.next().map(str::trim) else {
                continue;
            };
            let Some(url) = target
                .strip_prefix('<')
                .and_then(|rest| rest.strip_suffix('>'))
            else {
                continue;
            };

            for param in params {
                let Some((key, value)) = param.split_once('=') else {
                    continue;
                };
                if !key.trim().eq_ignore_ascii_case("rel") {
                    continue;
                }
                for rel in value.trim().trim_matches('"').split_whitespace() {
                    rels.insert(rel.to_ascii_lowercase(), url.to_string());
                }
            }
        }

        Self { rels }
    }

    /// Collect the link relations from response headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .map(Self::parse)
            .unwrap_or_default()
    }

    /// Register a relation, replacing any previous URL for it
    pub fn with(mut self, rel: &str, url: impl Into<String>) -> Self {
        self.rels.insert(rel.to_ascii_lowercase(), url.into());
        self
    }

    /// URL advertised for the given relation
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.rels.get(rel).map(String::as_str)
    }

    pub fn next(&self) -> Option<&str> {
        self.get("next")
    }

    pub fn last(&self) -> Option<&str> {
        self.get("last")
    }

    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }
}

/// Extract the `page` query parameter from a pagination URL
pub fn page_number(url: &str) -> Option<u32> {
    let url = Url::parse(url).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}
