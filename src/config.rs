use crate::error::SniffResult;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Immutable detection configuration: scoring weights plus candidate
/// generator knobs. Passed by reference into the generator and scorer so
/// scoring stays reproducible under concurrent use.
#[derive(Args, Debug, Clone, Default)]
pub struct DetectorConfig {
    #[command(flatten)]
    pub weights: ScoreWeights,
    #[command(flatten)]
    pub generator: GeneratorParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Reward for rows agreeing on the modal column count.
    #[arg(long = "weight-length", default_value_t = 0.625)]
    pub weight_length: f64,

    /// Reward for rows of the modal length sharing one type pattern.
    #[arg(long = "weight-pattern", default_value_t = 0.625)]
    pub weight_pattern: f64,

    /// Penalty for leaked quote characters and unsplit rows.
    #[arg(long = "weight-malformed", default_value_t = 0.25)]
    pub weight_malformed: f64,
}

// weight_length + weight_pattern exceed 1.0: a uniform body with one
// differing header row still lands strictly above 1 before clamping, so
// saturated files report an exact 1.0. The rewards stay dominant over the
// malformed penalty.
impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            weight_length: 0.625,
            weight_pattern: 0.625,
            weight_malformed: 0.25,
        }
    }
}

impl ScoreWeights {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SniffResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    /// Occurrences required before a punctuation character outside the floor
    /// set is offered as a delimiter candidate.
    #[arg(long, default_value_t = 2)]
    pub min_delim_frequency: usize,

    /// Hard cap on enumerated dialect hypotheses.
    #[arg(long, default_value_t = 128)]
    pub max_candidates: usize,

    /// Delimiters always offered regardless of frequency, in priority order.
    #[arg(long, default_value = ",;\t|: ")]
    pub floor_delimiters: String,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            min_delim_frequency: 2,
            max_candidates: 128,
            floor_delimiters: ",;\t|: ".to_string(),
        }
    }
}
