use anyhow::{Context, Result};
use std::path::PathBuf;
use wordsearch_core::GeneratorConfig;

/// Settings loaded from the environment (and `.env` if present).
/// Command line flags take precedence over these.
#[derive(Debug, Clone)]
pub struct Config {
    pub grid_size: usize,
    pub max_attempts: usize,
    pub output_dir: PathBuf,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            grid_size: generator.grid_size,
            max_attempts: generator.max_attempts,
            output_dir: PathBuf::from("."),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Config {
            grid_size: parse_or("WORDSEARCH_GRID_SIZE", &lookup, defaults.grid_size)?,
            max_attempts: parse_or("WORDSEARCH_MAX_ATTEMPTS", &lookup, defaults.max_attempts)?,
            output_dir: lookup("WORDSEARCH_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }

    /// Generator settings, with optional overrides from the command line
    pub fn generator(&self, size: Option<usize>, attempts: Option<usize>) -> GeneratorConfig {
        GeneratorConfig::new(
            size.unwrap_or(self.grid_size),
            attempts.unwrap_or(self.max_attempts),
        )
    }
}

fn parse_or(
    key: &str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: usize,
) -> Result<usize> {
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<usize>()
            .with_context(|| format!("{key} must be a positive integer, got '{value}'")),
        None => Ok(default),
    }
}
