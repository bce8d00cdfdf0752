use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Segment;

/// A single sentence spoken by one speaker, with its parent segment's timing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
    pub start_timestamp: String,
    pub end_timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interview_id: Option<String>,
}

impl Statement {
    /// Build a statement from one sentence of `segment`. Timing is copied
    /// from the segment as-is; sentences never get their own offsets.
    pub fn from_segment(text: impl Into<String>, segment: &Segment) -> Self {
        Self {
            text: text.into(),
            start_time: segment.start_time,
            end_time: segment.end_time,
            start_timestamp: segment.start_label().into_owned(),
            end_timestamp: segment.end_label().into_owned(),
            interview_id: None,
        }
    }

    pub fn attributed_to(mut self, interview_id: impl Into<String>) -> Self {
        self.interview_id = Some(interview_id.into());
        self
    }

    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    pub fn is_from(&self, interview_id: &str) -> bool {
        self.interview_id.as_deref() == Some(interview_id)
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Two statements whose similarity met the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedPair<'a> {
    pub statement_a: &'a Statement,
    pub statement_b: &'a Statement,
    pub similarity_score: f64,
}

impl<'a> MatchedPair<'a> {
    pub fn new(statement_a: &'a Statement, statement_b: &'a Statement, similarity_score: f64) -> Self {
        Self {
            statement_a,
            statement_b,
            similarity_score,
        }
    }

    /// True when the two sides are attributed to different interviews.
    pub fn spans_interviews(&self) -> bool {
        match (&self.statement_a.interview_id, &self.statement_b.interview_id) {
            (Some(a), Some(b)) => a != b,
            _ => false,
        }
    }

    /// Swap sides so that `statement_a` belongs to `interview_id`, if either does.
    pub fn oriented_towards(self, interview_id: &str) -> Self {
        if self.statement_b.is_from(interview_id) && !self.statement_a.is_from(interview_id) {
            Self {
                statement_a: self.statement_b,
                statement_b: self.statement_a,
                similarity_score: self.similarity_score,
            }
        } else {
            self
        }
    }
}

/// Speaker -> interview id -> that speaker's statements in that interview.
///
/// Both levels are ordered maps so every traversal is reproducible for a
/// given input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeakerStatementIndex {
    speakers: BTreeMap<String, BTreeMap<String, Vec<Statement>>>,
}

impl SpeakerStatementIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one interview's statements for one speaker, stamping each with
    /// the interview id.
    pub fn insert(&mut self, speaker: &str, interview_id: &str, statements: Vec<Statement>) {
        let stamped = statements
            .into_iter()
            .map(|s| s.attributed_to(interview_id))
            .collect::<Vec<_>>();

        self.speakers
            .entry(speaker.to_string())
            .or_default()
            .entry(interview_id.to_string())
            .or_default()
            .extend(stamped);
    }

    pub fn speaker_count(&self) -> usize {
        self.speakers.len()
    }

    pub fn interviews_for(&self, speaker: &str) -> Option<&BTreeMap<String, Vec<Statement>>> {
        self.speakers.get(speaker)
    }

    pub fn statements(&self, speaker: &str, interview_id: &str) -> &[Statement] {
        self.speakers
            .get(speaker)
            .and_then(|interviews| interviews.get(interview_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Speakers that appear in at least two interviews.
    pub fn recurring_speakers(&self) -> impl Iterator<Item = &str> {
        self.speakers
            .iter()
            .filter(|(_, interviews)| interviews.len() >= 2)
            .map(|(speaker, _)| speaker.as_str())
    }

    /// Every unordered pair of interviews the speaker appears in, as
    /// `(id1, id2)` with `id1 < id2`.
    pub fn interview_pairs(&self, speaker: &str) -> Vec<(&str, &str)> {
        let Some(interviews) = self.speakers.get(speaker) else {
            return Vec::new();
        };
        let ids: Vec<&str> = interviews.keys().map(String::as_str).collect();

        let mut pairs = Vec::new();
        for (i, first) in ids.iter().enumerate() {
            for second in &ids[i + 1..] {
                pairs.push((*first, *second));
            }
        }
        pairs
    }
}
