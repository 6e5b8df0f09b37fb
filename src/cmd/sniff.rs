use crate::reports;
use clap::Args;
use rayon::prelude::*;
use serde_json::json;
use sniffcsv::api::{detect_ranked, detect_with_config, DetectionResult};
use sniffcsv::config::{DetectorConfig, ScoreWeights};
use sniffcsv::error::SniffResult;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct SniffArgs {
    #[command(flatten)]
    pub config: DetectorConfig,

    /// Files to inspect.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Print every scored hypothesis per file, not only the winner.
    #[arg(long, default_value_t = false)]
    pub rank: bool,

    /// Emit results as a JSON array on stdout.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// JSON file of scoring weights, overriding the CLI weight flags.
    #[arg(long)]
    pub weights: Option<PathBuf>,
}

pub fn run(args: SniffArgs) -> SniffResult<()> {
    let mut config = args.config.clone();
    if let Some(path) = &args.weights {
        config.weights = ScoreWeights::load_from_file(path)?;
    }
    let config = &config;

    if args.rank {
        for path in &args.files {
            let text = read_text(path)?;
            let ranked = detect_ranked(&text, config);
            reports::print_rank_table(path, &ranked);
        }
        return Ok(());
    }

    // Files are independent; detect them in parallel.
    let detections: SniffResult<Vec<(PathBuf, DetectionResult)>> = args
        .files
        .par_iter()
        .map(|path| sniff_one(path, config).map(|r| (path.clone(), r)))
        .collect();
    let detections = detections?;

    if args.json {
        let items: Vec<_> = detections
            .iter()
            .map(|(path, result)| json!({ "file": path, "result": result }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        reports::print_summary(&detections);
    }
    Ok(())
}

fn sniff_one(path: &Path, config: &DetectorConfig) -> SniffResult<DetectionResult> {
    let text = read_text(path)?;
    Ok(detect_with_config(&text, config))
}

// Decode explicitly so invalid UTF-8 surfaces as a Decode error, not a
// generic IO failure.
fn read_text(path: &Path) -> SniffResult<String> {
    let bytes = fs::read(path)?;
    Ok(std::str::from_utf8(&bytes)?.to_string())
}
