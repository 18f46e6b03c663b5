use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// How a scan step remembers values it has already counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupStrategy {
    /// Growable vector checked element by element.
    #[default]
    Linear,
    /// Hash set keyed by the scalar's dedup key.
    Hashed,
}

/// Tuning knobs for a counting run. None of them change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(default)]
pub struct CountOptions {
    #[builder(default)]
    pub dedup: DedupStrategy,
    /// Return immediately when no descriptor in the range set can match.
    #[builder(default = "true")]
    pub short_circuit_empty_ranges: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            dedup: DedupStrategy::Linear,
            short_circuit_empty_ranges: true,
        }
    }
}
