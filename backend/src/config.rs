//! Backend configuration read from the environment.

use anyhow::Context;
use common::search_const::DEFAULT_API_URL;
use reqwest::Url;

pub const API_URL_ENV: &str = "MENU_API_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct MenuApiConfig {
    /// Base URL of the search/upload service, without a trailing slash.
    pub base_url: String,
}

impl MenuApiConfig {
    pub fn new(base_url: impl AsRef<str>) -> anyhow::Result<Self> {
        let base_url = base_url.as_ref().trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url).with_context(|| format!("invalid menu API url: {base_url:?}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("menu API url must be http or https, got {:?}", parsed.scheme());
        }
        Ok(Self { base_url })
    }

    /// Reads `MENU_API_URL`, falling back to `http://localhost:5000`.
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url = std::env::var(API_URL_ENV).unwrap_or(DEFAULT_API_URL.to_string());
        Self::new(base_url).with_context(|| format!("{API_URL_ENV} is misconfigured"))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = MenuApiConfig::new("http://api.example:5000//").unwrap();
        assert_eq!(config.base_url, "http://api.example:5000");
        assert_eq!(config.endpoint("/search"), "http://api.example:5000/search");
        assert_eq!(config.endpoint("upload"), "http://api.example:5000/upload");
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(MenuApiConfig::new("ftp://api.example").is_err());
        assert!(MenuApiConfig::new("not a url").is_err());
    }

    #[test]
    fn default_url_is_valid() {
        assert_eq!(MenuApiConfig::new(DEFAULT_API_URL).unwrap().base_url, "http://localhost:5000");
    }
}
