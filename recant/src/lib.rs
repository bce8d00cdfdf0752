//! Cross-interview inconsistency detection.
//!
//! Given several transcribed interviews, `recant` finds statements a speaker
//! repeated across interviews and flags the pairs where exactly one side is
//! negated as potential contradictions.

pub mod config;
pub mod error;
pub mod intelligence;
pub mod models;
pub mod processing;
pub mod services;

pub use config::{Config, DetectorConfig};
pub use error::{RecantError, Result};
pub use models::{InconsistencyKind, InconsistencyRecord, Report, Segment, Statement, TranscriptSet};
pub use services::InconsistencyAggregator;
