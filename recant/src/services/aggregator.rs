use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::DetectorConfig;
use crate::intelligence::{ContradictionClassifier, SimilarityMatcher, StatementExtractor};
use crate::models::{InconsistencyRecord, Report, SpeakerStatementIndex, Statement, TranscriptSet};
use crate::processing::LanguageResources;

pub const INSUFFICIENT_INTERVIEWS_MESSAGE: &str =
    "Need at least 2 interviews to detect inconsistencies";

/// One speaker compared across one pair of interviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ComparisonTask<'a> {
    speaker: &'a str,
    interview_1: &'a str,
    interview_2: &'a str,
}

/// Runs the full detection pipeline over a set of interviews.
///
/// Configuration and language tables are resolved once in [`new`](Self::new)
/// and shared read-only by every stage and every comparison task.
#[derive(Debug, Clone)]
pub struct InconsistencyAggregator {
    config: DetectorConfig,
    resources: LanguageResources,
}

impl InconsistencyAggregator {
    pub fn new(config: DetectorConfig) -> Self {
        let resources = LanguageResources::load(&config);
        Self { config, resources }
    }

    pub fn with_resources(config: DetectorConfig, resources: LanguageResources) -> Self {
        Self { config, resources }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn resources(&self) -> &LanguageResources {
        &self.resources
    }

    /// Detect similar and contradictory statements per speaker across
    /// interviews. Fewer than two interviews yields an empty report with an
    /// insufficient-input status.
    pub fn aggregate(&self, transcripts: &TranscriptSet) -> Report {
        info!(
            interviews = transcripts.len(),
            language = %self.resources.language,
            threshold = self.config.similarity_threshold,
            "Detecting inconsistencies across interviews"
        );

        if transcripts.len() < 2 {
            warn!("{}", INSUFFICIENT_INTERVIEWS_MESSAGE);
            return Report::insufficient_input(INSUFFICIENT_INTERVIEWS_MESSAGE);
        }

        let index = self.build_index(transcripts);
        let tasks = comparison_tasks(&index);
        debug!(
            speakers = index.speaker_count(),
            tasks = tasks.len(),
            "Planned speaker comparisons"
        );

        let records: Vec<InconsistencyRecord> = if self.config.parallel {
            tasks
                .par_iter()
                .map(|task| self.compare(&index, task))
                .collect::<Vec<_>>()
                .into_iter()
                .flatten()
                .collect()
        } else {
            tasks
                .iter()
                .flat_map(|task| self.compare(&index, task))
                .collect()
        };

        let report = Report::from_records(records);
        info!(
            total = report.total_inconsistencies,
            contradictions = report.contradictions.len(),
            similar_statements = report.similar_statements.len(),
            "Found {} potential inconsistencies",
            report.total_inconsistencies
        );
        report
    }

    /// Extract every transcript and merge the results by speaker.
    pub fn build_index(&self, transcripts: &TranscriptSet) -> SpeakerStatementIndex {
        let extractor = StatementExtractor::new(&self.resources, self.config.min_statement_words);
        let mut index = SpeakerStatementIndex::new();

        for (interview_id, transcript) in transcripts {
            for (speaker, statements) in extractor.extract(transcript) {
                index.insert(&speaker, interview_id, statements);
            }
        }
        index
    }

    /// Compare one speaker's statements between two interviews.
    pub fn compare_interviews(
        &self,
        index: &SpeakerStatementIndex,
        speaker: &str,
        interview_1: &str,
        interview_2: &str,
    ) -> Vec<InconsistencyRecord> {
        self.compare(
            index,
            &ComparisonTask {
                speaker,
                interview_1,
                interview_2,
            },
        )
    }

    fn compare(
        &self,
        index: &SpeakerStatementIndex,
        task: &ComparisonTask<'_>,
    ) -> Vec<InconsistencyRecord> {
        let combined: Vec<&Statement> = index
            .statements(task.speaker, task.interview_1)
            .iter()
            .chain(index.statements(task.speaker, task.interview_2))
            .collect();

        let matcher = SimilarityMatcher::new(&self.resources, self.config.similarity_threshold);
        let classifier = ContradictionClassifier::new(&self.resources);

        let records: Vec<InconsistencyRecord> = matcher
            .matched_pairs(&combined)
            .into_iter()
            .filter(|pair| pair.spans_interviews())
            .map(|pair| pair.oriented_towards(task.interview_1))
            .map(|pair| InconsistencyRecord {
                speaker: task.speaker.to_string(),
                interview_id_1: task.interview_1.to_string(),
                interview_id_2: task.interview_2.to_string(),
                statement_1: pair.statement_a.clone(),
                statement_2: pair.statement_b.clone(),
                similarity_score: pair.similarity_score,
                kind: classifier.kind_of(&pair),
            })
            .collect();

        debug!(
            speaker = task.speaker,
            interview_1 = task.interview_1,
            interview_2 = task.interview_2,
            statements = combined.len(),
            records = records.len(),
            "Compared interviews"
        );
        records
    }
}

impl Default for InconsistencyAggregator {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

fn comparison_tasks(index: &SpeakerStatementIndex) -> Vec<ComparisonTask<'_>> {
    index
        .recurring_speakers()
        .flat_map(|speaker| {
            index
                .interview_pairs(speaker)
                .into_iter()
                .map(move |(interview_1, interview_2)| ComparisonTask {
                    speaker,
                    interview_1,
                    interview_2,
                })
        })
        .collect()
}
