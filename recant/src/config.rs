use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::error::{RecantError, Result};

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_MIN_STATEMENT_WORDS: usize = 3;

fn parse_env_or<T: std::str::FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub detector: DetectorConfig,
    pub output: OutputConfig,
}

/// Settings consumed by every stage of the detection pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectorConfig {
    /// Language code selecting stop words, negation markers and sentence rules
    pub language: String,
    /// Minimum score (inclusive) for two statements to count as a match
    pub similarity_threshold: f64,
    /// Sentences with fewer whitespace-delimited tokens are discarded
    pub min_statement_words: usize,
    /// Optional newline-separated stop-word list replacing the built-in one
    pub stop_words_path: Option<PathBuf>,
    /// Run (speaker, interview pair) tasks on the rayon pool
    pub parallel: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_statement_words: DEFAULT_MIN_STATEMENT_WORDS,
            stop_words_path: None,
            parallel: true,
        }
    }
}

impl DetectorConfig {
    pub fn from_env() -> Self {
        Self {
            language: env::var("RECANT_LANGUAGE").unwrap_or_else(|_| DEFAULT_LANGUAGE.to_string()),
            similarity_threshold: parse_env_or(
                "RECANT_SIMILARITY_THRESHOLD",
                DEFAULT_SIMILARITY_THRESHOLD,
            ),
            min_statement_words: parse_env_or(
                "RECANT_MIN_STATEMENT_WORDS",
                DEFAULT_MIN_STATEMENT_WORDS,
            ),
            stop_words_path: env::var("RECANT_STOP_WORDS_PATH").ok().map(PathBuf::from),
            parallel: parse_env_or("RECANT_PARALLEL", true),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(RecantError::Validation(format!(
                "similarity_threshold must be within [0, 1], got {}",
                self.similarity_threshold
            )));
        }
        if self.min_statement_words == 0 {
            return Err(RecantError::Validation(
                "min_statement_words must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::from_env(),
            output: OutputConfig {
                dir: env::var("RECANT_OUTPUT_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("./output")),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
