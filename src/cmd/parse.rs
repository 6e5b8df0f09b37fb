use clap::Args;
use sniffcsv::api::{detect_with_config, parse};
use sniffcsv::config::{DetectorConfig, ScoreWeights};
use sniffcsv::dialect::Dialect;
use sniffcsv::error::SniffResult;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    #[command(flatten)]
    pub config: DetectorConfig,

    pub file: PathBuf,

    /// Skip detection and parse with this delimiter.
    #[arg(long)]
    pub delimiter: Option<char>,

    /// Quote character to use with --delimiter.
    #[arg(long)]
    pub quote: Option<char>,

    /// Escape character to use with --delimiter.
    #[arg(long)]
    pub escape: Option<char>,

    /// JSON file of scoring weights, overriding the CLI weight flags.
    #[arg(long)]
    pub weights: Option<PathBuf>,
}

pub fn run(args: ParseArgs) -> SniffResult<()> {
    let mut config = args.config.clone();
    if let Some(path) = &args.weights {
        config.weights = ScoreWeights::load_from_file(path)?;
    }

    let bytes = fs::read(&args.file)?;
    let text = std::str::from_utf8(&bytes)?;

    let dialect = match args.delimiter {
        Some(d) => {
            let dialect = Dialect::new(d, args.quote, args.escape);
            dialect.validate()?;
            dialect
        }
        None => {
            let result = detect_with_config(text, &config);
            if result.low_confidence {
                warn!(
                    file = %args.file.display(),
                    "no dialect scored above zero; parsing with the fallback dialect"
                );
            }
            result.dialect
        }
    };

    let rows = parse(text, &dialect);
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in &rows {
        writer.write_record(
            row.iter()
                .map(|cell| cell.content(text, &dialect).into_owned()),
        )?;
    }
    writer.flush()?;
    Ok(())
}
