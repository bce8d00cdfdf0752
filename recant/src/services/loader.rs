use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{RecantError, Result};
use crate::models::{Transcript, TranscriptSet};

/// Accepted shapes of a transcript file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptDocument {
    /// `[segment, ...]`: a single interview
    Single(Transcript),
    /// `{"interview id": [segment, ...], ...}`
    Keyed(BTreeMap<String, Transcript>),
}

/// Parse one JSON document. A bare segment array is keyed by `default_id`.
pub fn parse_transcripts(json: &str, default_id: &str) -> Result<TranscriptSet> {
    let document: TranscriptDocument = serde_json::from_str(json)?;
    Ok(match document {
        TranscriptDocument::Single(transcript) => {
            let mut set = TranscriptSet::new();
            set.insert(default_id.to_string(), transcript);
            set
        }
        TranscriptDocument::Keyed(set) => set,
    })
}

/// Load and merge transcript files. Single-interview files are keyed by
/// their file stem. The same interview id appearing twice is an error.
pub fn load_transcripts<P: AsRef<Path>>(paths: &[P]) -> Result<TranscriptSet> {
    let mut merged = TranscriptSet::new();

    for path in paths {
        let path = path.as_ref();
        let default_id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| {
                RecantError::Input(format!("Cannot derive interview id from {}", path.display()))
            })?;

        let contents = fs::read_to_string(path)?;
        let transcripts = parse_transcripts(&contents, default_id)?;
        debug!(path = %path.display(), interviews = transcripts.len(), "Loaded transcript file");

        for (interview_id, transcript) in transcripts {
            if merged.contains_key(&interview_id) {
                return Err(RecantError::Input(format!(
                    "Duplicate interview id '{}' in {}",
                    interview_id,
                    path.display()
                )));
            }
            merged.insert(interview_id, transcript);
        }
    }

    info!(files = paths.len(), interviews = merged.len(), "Transcripts loaded");
    Ok(merged)
}
