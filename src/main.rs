use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::info;

use nw_aligner::pairs::read_pairs;
use nw_aligner::{AlignerConfig, AlignerParameters, BatchAligner, ScoreParams};

#[derive(Parser)]
#[command(name = "nw-align")]
#[command(about = "Global (Needleman-Wunsch) alignment of sequence pairs read from a CSV file", long_about = None)]
#[command(version)]
struct Cli {
    /// CSV file with two sequences per row [default: ./sequences.csv]
    #[arg(value_name = "PAIRS.CSV")]
    input: Option<PathBuf>,

    /// TOML file with scoring and worker settings
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Score for identical symbols
    #[arg(short = 'A', long = "match", value_name = "INT", allow_negative_numbers = true)]
    match_score: Option<i64>,

    /// Score for differing symbols
    #[arg(short = 'B', long, value_name = "INT", allow_negative_numbers = true)]
    mismatch: Option<i64>,

    /// Score for each gap column
    #[arg(short = 'G', long, value_name = "INT", allow_negative_numbers = true)]
    gap: Option<i64>,

    /// Number of worker threads
    #[arg(short = 't', long, value_name = "INT")]
    workers: Option<usize>,

    /// Print a three-line view of each alignment
    #[arg(short = 'p', long)]
    pretty: bool,
}

fn build_config(cli: &Cli) -> nw_aligner::Result<AlignerConfig> {
    let mut config = match &cli.config {
        Some(path) => AlignerConfig::from_toml_file(path)?,
        None => AlignerConfig::default(),
    };

    let score = ScoreParams::new(
        cli.match_score.unwrap_or(config.score.match_score),
        cli.mismatch.unwrap_or(config.score.mismatch),
        cli.gap.unwrap_or(config.score.gap),
    );
    config = config.with_score(score);

    if let Some(workers) = cli.workers {
        config = config.with_workers(workers)?;
    }
    if let Some(input) = &cli.input {
        config = config.with_input(input);
    }
    if cli.pretty {
        config = config.with_pretty(true);
    }
    Ok(config)
}

fn run(cli: Cli) -> nw_aligner::Result<()> {
    let config = build_config(&cli)?;
    info!(
        "aligning pairs from {} (match {}, mismatch {}, gap {})",
        config.input.display(),
        config.score.match_score,
        config.score.mismatch,
        config.score.gap
    );

    let pairs = read_pairs(&config.input)?;
    let batch = BatchAligner::new(
        config.workers,
        AlignerParameters::new().with_score_params(config.score),
    )?;

    for result in batch.align_all(pairs)? {
        if config.pretty {
            println!("{}\nscore: {}\n", result.pretty(), result.score);
        } else {
            println!("{}", result);
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("nw-align: {}", e);
        process::exit(1);
    }
}
