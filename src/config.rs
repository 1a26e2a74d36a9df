//! Runtime configuration for the entity resolver.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for a single resolver run: which files to read, how many
/// workers to fan comparisons out to, and the score threshold a match must
/// clear to be written to the sink.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Path to the first source's CSV file.
    pub source_a_path: String,

    /// Path to the second source's CSV file.
    pub source_b_path: String,

    /// Path the matched pairs are appended to as CSV.
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// Maximum number of pair comparisons running concurrently.
    #[serde(default = "default_worker_amount")]
    pub worker_amount: usize,

    /// Per-pair comparison timeout in milliseconds. `0` disables the
    /// timeout.
    #[serde(default = "default_pair_timeout_ms")]
    pub pair_timeout_ms: u64,

    /// Minimum score (inclusive) a match must reach to be persisted.
    #[serde(default = "default_score_threshold")]
    pub score_threshold: f64,

    /// Whether undetermined criteria count toward the scoring denominator.
    #[serde(default = "default_strict")]
    pub strict: bool,

    /// `tracing_subscriber::EnvFilter` directive, e.g. `"info"` or
    /// `"entity_resolver=debug,pairing=info"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ResolverConfig {
    /// Load configuration layered from (lowest to highest precedence) a
    /// `resolver.toml` file in the current directory, a `.env` file, and
    /// `RESOLVER__`-prefixed environment variables.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("resolver").required(false))
            .add_source(config::Environment::with_prefix("RESOLVER").separator("__"));

        let config: ResolverConfig = builder.build()?.try_deserialize()?;
        Ok(config)
    }

    /// `pair_timeout_ms` as a `Duration`, or `None` when disabled.
    pub fn pair_timeout(&self) -> Option<Duration> {
        if self.pair_timeout_ms == 0 {
            None
        } else {
            Some(Duration::from_millis(self.pair_timeout_ms))
        }
    }
}

fn default_output_path() -> String {
    "matches.csv".to_string()
}

fn default_worker_amount() -> usize {
    20
}

fn default_pair_timeout_ms() -> u64 {
    60_000
}

fn default_score_threshold() -> f64 {
    0.7
}

fn default_strict() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}
