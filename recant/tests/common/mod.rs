#![allow(dead_code)]

use std::sync::Once;

use recant::config::DetectorConfig;
use recant::models::{Segment, Transcript, TranscriptSet};
use recant::services::InconsistencyAggregator;

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Build one interview from `(speaker, text)` lines, five seconds apart.
pub fn interview(lines: &[(&str, &str)]) -> Transcript {
    lines
        .iter()
        .enumerate()
        .map(|(i, (speaker, text))| {
            let start = i as f64 * 5.0;
            Segment::new(*text, start, start + 4.0).with_speaker(*speaker)
        })
        .collect()
}

/// Key interviews by id.
pub fn transcripts(interviews: Vec<(&str, Transcript)>) -> TranscriptSet {
    interviews
        .into_iter()
        .map(|(id, transcript)| (id.to_string(), transcript))
        .collect()
}

pub fn english_aggregator() -> InconsistencyAggregator {
    InconsistencyAggregator::new(DetectorConfig::default())
}

pub fn spanish_aggregator() -> InconsistencyAggregator {
    InconsistencyAggregator::new(DetectorConfig::default().with_language("es"))
}
