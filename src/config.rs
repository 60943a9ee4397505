use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::scoring::{Score, ScoreParams};
use crate::{AlignerError, Result};

pub const DEFAULT_INPUT: &str = "./sequences.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct AlignerConfig {
    pub score: ScoreParams,
    pub workers: usize,
    pub input: PathBuf,
    pub pretty: bool,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            score: ScoreParams::default(),
            workers: 1,
            input: PathBuf::from(DEFAULT_INPUT),
            pretty: false,
        }
    }
}

/// On-disk layout; every key is optional and falls back to the defaults.
///
/// ```toml
/// input = "pairs.csv"
/// workers = 4
///
/// [score]
/// match = 1
/// mismatch = -1
/// gap = -2
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    workers: Option<usize>,
    pretty: Option<bool>,
    #[serde(default)]
    score: ScoreSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScoreSection {
    #[serde(rename = "match")]
    match_score: Option<Score>,
    mismatch: Option<Score>,
    gap: Option<Score>,
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(text).map_err(|e| AlignerError::Config(e.to_string()))?;
        let defaults = Self::default();

        let config = Self {
            score: ScoreParams {
                match_score: file.score.match_score.unwrap_or(defaults.score.match_score),
                mismatch: file.score.mismatch.unwrap_or(defaults.score.mismatch),
                gap: file.score.gap.unwrap_or(defaults.score.gap),
            },
            workers: file.workers.unwrap_or(defaults.workers),
            input: file.input.unwrap_or(defaults.input),
            pretty: file.pretty.unwrap_or(defaults.pretty),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_score(mut self, score: ScoreParams) -> Self {
        self.score = score;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(AlignerError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        self.workers = workers;
        Ok(self)
    }

    pub fn with_input<P: Into<PathBuf>>(mut self, input: P) -> Self {
        self.input = input.into();
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(AlignerError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
