//! Runtime configuration
//!
//! Read from environment variables at startup:
//! - `FOOTPRINT_FORMAT`: `markdown` (default), `json` or `summary`
//! - `FOOTPRINT_SEED`: optional u64; fixes tip selection for reproducible output
//! - `PORT`: API server port (default 3000)

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
    /// One-line JSON with only the headline figures
    Summary,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "summary" => Ok(OutputFormat::Summary),
            other => anyhow::bail!(
                "Unknown output format '{}' (expected markdown, json or summary)",
                other
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub format: OutputFormat,
    pub seed: Option<u64>,
    pub port: u16,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            seed: None,
            port: DEFAULT_PORT,
        }
    }
}

impl EstimatorConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup. Unset or empty variables
    /// fall back to defaults; set but malformed values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get("FOOTPRINT_FORMAT") {
            config.format = raw.parse().context("Invalid FOOTPRINT_FORMAT")?;
        }
        if let Some(raw) = get("FOOTPRINT_SEED") {
            config.seed = Some(
                raw.trim()
                    .parse()
                    .with_context(|| format!("Invalid FOOTPRINT_SEED '{}'", raw))?,
            );
        }
        if let Some(raw) = get("PORT") {
            config.port = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT '{}'", raw))?;
        }

        Ok(config)
    }

    /// RNG for tip selection: seeded when a seed is configured, entropy otherwise
    pub fn rng(&self) -> Box<dyn RngCore> {
        match self.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_entropy()),
        }
    }
}
