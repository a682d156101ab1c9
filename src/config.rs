use std::env;

use anyhow::{Context, Result};

/// Default number of comments moderated in parallel during a sweep.
pub const DEFAULT_SWEEP_CONCURRENCY: usize = 8;

/// Which profanity filter implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterBackend {
    /// Bundled English word list, whole-word matching (default)
    WordList,
    /// rustrict, which also catches obfuscated spellings
    Rustrict,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. The two
/// checks themselves are fixed; only the profanity filter implementation
/// can be swapped.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite comment store path (MODERATOR_DB_PATH, default ./comments.db)
    pub db_path: String,
    /// Parallelism for `sweep` when --concurrency isn't given
    pub sweep_concurrency: usize,
    /// Profanity filter implementation (MODERATOR_FILTER, default wordlist)
    pub filter_backend: FilterBackend,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let sweep_concurrency = match env::var("MODERATOR_SWEEP_CONCURRENCY") {
            Ok(raw) => parse_concurrency(&raw)?,
            Err(_) => DEFAULT_SWEEP_CONCURRENCY,
        };

        let filter_backend = match env::var("MODERATOR_FILTER") {
            Ok(raw) => parse_filter_backend(&raw)?,
            Err(_) => FilterBackend::WordList,
        };

        Ok(Self {
            db_path: env::var("MODERATOR_DB_PATH").unwrap_or_else(|_| "./comments.db".to_string()),
            sweep_concurrency,
            filter_backend,
        })
    }
}

fn parse_filter_backend(raw: &str) -> Result<FilterBackend> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "wordlist" => Ok(FilterBackend::WordList),
        "rustrict" => Ok(FilterBackend::Rustrict),
        other => anyhow::bail!("MODERATOR_FILTER must be `wordlist` or `rustrict`, got {other:?}"),
    }
}

fn parse_concurrency(raw: &str) -> Result<usize> {
    let value: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("MODERATOR_SWEEP_CONCURRENCY must be a number, got {raw:?}"))?;
    if value == 0 {
        anyhow::bail!("MODERATOR_SWEEP_CONCURRENCY must be at least 1");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_concurrency() {
        assert_eq!(parse_concurrency("4").unwrap(), 4);
        assert_eq!(parse_concurrency(" 16 ").unwrap(), 16);
        assert!(parse_concurrency("0").is_err());
        assert!(parse_concurrency("lots").is_err());
    }

    #[test]
    fn test_parse_filter_backend() {
        assert_eq!(parse_filter_backend("wordlist").unwrap(), FilterBackend::WordList);
        assert_eq!(parse_filter_backend("").unwrap(), FilterBackend::WordList);
        assert_eq!(parse_filter_backend(" RUSTRICT ").unwrap(), FilterBackend::Rustrict);
        assert!(parse_filter_backend("regex").is_err());
    }
}
