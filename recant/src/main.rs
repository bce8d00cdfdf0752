use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recant::config::Config;
use recant::services::{load_transcripts, InconsistencyAggregator, ReportFormatter};

#[derive(Parser)]
#[command(name = "recant")]
#[command(about = "Find repeated and contradicted statements across interview transcripts")]
struct Args {
    /// Transcript JSON files: a segment array per interview, or an object keyed by interview id
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Language code for stop words, negation markers and sentence rules (en, es)
    #[arg(long)]
    language: Option<String>,

    /// Minimum similarity (inclusive) for two statements to match
    #[arg(long)]
    threshold: Option<f64>,

    /// Minimum words for a sentence to count as a statement
    #[arg(long)]
    min_words: Option<usize>,

    /// Directory for inconsistency_analysis.json and inconsistency_analysis.md
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Compare speakers on the current thread only
    #[arg(long)]
    sequential: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "recant=info".into());
    if std::env::var("RECANT_LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    let mut config = Config::from_env();
    if let Some(language) = args.language {
        config.detector.language = language;
    }
    if let Some(threshold) = args.threshold {
        config.detector.similarity_threshold = threshold;
    }
    if let Some(min_words) = args.min_words {
        config.detector.min_statement_words = min_words;
    }
    if let Some(output_dir) = args.output_dir {
        config.output.dir = output_dir;
    }
    if args.sequential {
        config.detector.parallel = false;
    }
    config.detector.validate()?;

    tracing::info!("Loading {} transcript file(s)...", args.inputs.len());
    let transcripts = load_transcripts(&args.inputs)?;

    let aggregator = InconsistencyAggregator::new(config.detector.clone());
    let report = aggregator.aggregate(&transcripts);

    let paths = ReportFormatter::write(&report, &config.output.dir)?;
    tracing::info!(
        status = %report.status,
        contradictions = report.contradictions.len(),
        similar_statements = report.similar_statements.len(),
        "Report written to {}",
        paths.markdown.display()
    );

    Ok(())
}
