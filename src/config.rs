//! Environment configuration, read exactly once at process start.
//!
//! Missing or malformed values are fatal: there is nothing useful to run
//! without a token and a docs base URL, so `main` propagates the error and
//! exits non-zero before any connection is attempted.

use std::env;

use anyhow::{bail, Context as _, Result};

use crate::constants::DEFAULT_HEALTH_PORT;

/// Immutable process configuration. Built once in `main`, then read-only.
#[derive(Clone, Debug)]
pub struct Config {
    /// Discord bot token.
    pub token: String,
    /// GitBook base URL, normalized to end with exactly one `/`.
    pub doc_base_url: String,
    /// Port the health listener binds on.
    pub health_port: u16,
    /// Optional full-FAQ link appended to the `/faq` response.
    pub faq_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source. `from_env` wraps this with the real
    /// environment; tests feed in maps.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token = lookup("DISCORD_TOKEN").context("Missing DISCORD_TOKEN in the environment")?;

        let doc_base_url = normalize_base_url(&lookup("GITBOOK_BASE").unwrap_or_default())?;

        let health_port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got `{raw}`"))?,
            None => DEFAULT_HEALTH_PORT,
        };

        let faq_url = lookup("FAQ_URL").filter(|url| !url.is_empty());

        Ok(Self { token, doc_base_url, health_port, faq_url })
    }
}

/// Require an absolute http(s) URL and pin it to a single trailing slash so
/// path fragments can be concatenated directly.
fn normalize_base_url(raw: &str) -> Result<String> {
    if !raw.starts_with("http") {
        bail!("Missing/invalid GITBOOK_BASE (must start with http:// or https://)");
    }
    Ok(format!("{}/", raw.trim_end_matches('/')))
}

#[cfg(test)]
mod tests {
    use super::{normalize_base_url, Config};

    fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn minimal_config_fills_defaults() {
        let config = Config::from_lookup(vars(&[
            ("DISCORD_TOKEN", "token-123"),
            ("GITBOOK_BASE", "https://docs.example.com"),
        ]))
        .unwrap();

        assert_eq!(config.token, "token-123");
        assert_eq!(config.doc_base_url, "https://docs.example.com/");
        assert_eq!(config.health_port, 10000);
        assert_eq!(config.faq_url, None);
    }

    #[test]
    fn missing_token_is_fatal() {
        let result = Config::from_lookup(vars(&[("GITBOOK_BASE", "https://docs.example.com")]));
        assert!(result.is_err());
    }

    #[test]
    fn missing_or_relative_base_url_is_fatal() {
        assert!(Config::from_lookup(vars(&[("DISCORD_TOKEN", "token-123")])).is_err());
        assert!(Config::from_lookup(vars(&[
            ("DISCORD_TOKEN", "token-123"),
            ("GITBOOK_BASE", "docs.example.com"),
        ]))
        .is_err());
    }

    #[test]
    fn non_numeric_port_is_fatal() {
        let result = Config::from_lookup(vars(&[
            ("DISCORD_TOKEN", "token-123"),
            ("GITBOOK_BASE", "https://docs.example.com"),
            ("PORT", "abc"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_port_and_faq_url_are_honored() {
        let config = Config::from_lookup(vars(&[
            ("DISCORD_TOKEN", "token-123"),
            ("GITBOOK_BASE", "https://docs.example.com/"),
            ("PORT", "8080"),
            ("FAQ_URL", "https://docs.example.com/faq"),
        ]))
        .unwrap();

        assert_eq!(config.health_port, 8080);
        assert_eq!(config.faq_url.as_deref(), Some("https://docs.example.com/faq"));
    }

    #[test]
    fn empty_faq_url_counts_as_unset() {
        let config = Config::from_lookup(vars(&[
            ("DISCORD_TOKEN", "token-123"),
            ("GITBOOK_BASE", "https://docs.example.com"),
            ("FAQ_URL", ""),
        ]))
        .unwrap();

        assert_eq!(config.faq_url, None);
    }

    #[test]
    fn base_url_gains_exactly_one_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://docs.example.com").unwrap(),
            "https://docs.example.com/"
        );
        assert_eq!(
            normalize_base_url("https://docs.example.com/").unwrap(),
            "https://docs.example.com/"
        );
        assert_eq!(
            normalize_base_url("https://docs.example.com///").unwrap(),
            "https://docs.example.com/"
        );
    }

    #[test]
    fn base_url_must_be_absolute_http() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("docs.example.com").is_err());
        assert!(normalize_base_url("ftp://docs.example.com").is_err());
    }
}
