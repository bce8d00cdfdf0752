use std::collections::BTreeMap;

use tracing::debug;

use crate::config::DEFAULT_MIN_STATEMENT_WORDS;
use crate::models::{Segment, Statement};
use crate::processing::{split_sentences, LanguageResources};

/// Turns one interview's segments into per-speaker sentence statements.
#[derive(Debug, Clone, Copy)]
pub struct StatementExtractor<'a> {
    resources: &'a LanguageResources,
    min_words: usize,
}

impl<'a> StatementExtractor<'a> {
    pub fn new(resources: &'a LanguageResources, min_words: usize) -> Self {
        Self {
            resources,
            min_words,
        }
    }

    pub fn with_default_min_words(resources: &'a LanguageResources) -> Self {
        Self::new(resources, DEFAULT_MIN_STATEMENT_WORDS)
    }

    /// Group the transcript's sentences by speaker, preserving transcript order
    /// within each speaker. Segments without text are skipped, sentences
    /// shorter than the minimum word count are dropped, and speakers left
    /// with no statements are omitted.
    pub fn extract(&self, transcript: &[Segment]) -> BTreeMap<String, Vec<Statement>> {
        let mut by_speaker: BTreeMap<String, Vec<Statement>> = BTreeMap::new();
        let mut skipped_segments = 0usize;

        for segment in transcript {
            let Some(text) = segment.content() else {
                skipped_segments += 1;
                continue;
            };

            let statements = split_sentences(text, self.resources.abbreviations())
                .into_iter()
                .filter(|sentence| sentence.split_whitespace().count() >= self.min_words)
                .map(|sentence| Statement::from_segment(sentence, segment));

            let mut statements = statements.peekable();
            if statements.peek().is_none() {
                continue;
            }

            by_speaker
                .entry(segment.speaker_or_unknown().to_string())
                .or_default()
                .extend(statements);
        }

        debug!(
            segments = transcript.len(),
            skipped_segments,
            speakers = by_speaker.len(),
            "Extracted statements"
        );
        by_speaker
    }
}
