use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Speaker label used when diarization left a segment unattributed.
pub const UNKNOWN_SPEAKER: &str = "Unknown";

/// One diarized, transcribed span of an interview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub start_time: f64,
    #[serde(default)]
    pub end_time: f64,
    #[serde(default)]
    pub start_timestamp: String,
    #[serde(default)]
    pub end_timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl Segment {
    pub fn new(text: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            text: Some(text.into()),
            start_time,
            end_time,
            start_timestamp: format_timestamp(start_time),
            end_timestamp: format_timestamp(end_time),
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Segment text, or `None` when missing or blank.
    pub fn content(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    pub fn speaker_or_unknown(&self) -> &str {
        match self.speaker.as_deref() {
            Some(speaker) if !speaker.trim().is_empty() => speaker,
            _ => UNKNOWN_SPEAKER,
        }
    }

    pub fn start_label(&self) -> Cow<'_, str> {
        timestamp_or_derived(&self.start_timestamp, self.start_time)
    }

    pub fn end_label(&self) -> Cow<'_, str> {
        timestamp_or_derived(&self.end_timestamp, self.end_time)
    }
}

/// Ordered segments of a single interview.
pub type Transcript = Vec<Segment>;

/// Interview identifier to transcript, iterated in sorted id order.
pub type TranscriptSet = BTreeMap<String, Transcript>;

/// Format seconds as `MM:SS`. Minutes are not wrapped at the hour.
pub fn format_timestamp(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

fn timestamp_or_derived(label: &str, seconds: f64) -> Cow<'_, str> {
    if label.trim().is_empty() {
        Cow::Owned(format_timestamp(seconds))
    } else {
        Cow::Borrowed(label)
    }
}
