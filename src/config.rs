use std::path::PathBuf;

use crate::error::{QuizError, Result};

pub const DEFAULT_INPUT_PATH: &str = "US-Industries-Market Sizes.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "questions.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Fixed seed for reproducible question banks; OS entropy when unset.
    pub seed: Option<u64>,
    pub legacy_true_false: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            seed: None,
            legacy_true_false: false,
        }
    }
}

impl Config {
    /// Reads `QUIZ_*` variables from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed = match lookup("QUIZ_SEED") {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                QuizError::Config(format!("QUIZ_SEED={:?}: {}", raw, e))
            })?),
            None => None,
        };

        let legacy_true_false = match lookup("QUIZ_LEGACY_TRUE_FALSE") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                QuizError::Config(format!(
                    "QUIZ_LEGACY_TRUE_FALSE={:?}: expected true or false",
                    raw
                ))
            })?,
            None => defaults.legacy_true_false,
        };

        return Ok(Self {
            input_path: lookup("QUIZ_INPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.input_path),
            output_path: lookup("QUIZ_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            seed,
            legacy_true_false,
        });
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
