use serde::{Deserialize, Serialize};

use super::Statement;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyKind {
    /// Exactly one side of the pair carries a negation marker
    #[serde(alias = "negation")]
    Contradiction,
    /// Matched pair without a negation mismatch
    SimilarStatement,
}

impl std::fmt::Display for InconsistencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contradiction => write!(f, "contradiction"),
            Self::SimilarStatement => write!(f, "similar_statement"),
        }
    }
}

impl std::str::FromStr for InconsistencyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contradiction" | "negation" => Ok(Self::Contradiction),
            "similar_statement" => Ok(Self::SimilarStatement),
            _ => Err(format!("Unknown inconsistency kind: {s}")),
        }
    }
}

/// One cross-interview finding for a speaker. `statement_1` always comes
/// from `interview_id_1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InconsistencyRecord {
    pub speaker: String,
    #[serde(alias = "interview1")]
    pub interview_id_1: String,
    #[serde(alias = "interview2")]
    pub interview_id_2: String,
    #[serde(alias = "statement1")]
    pub statement_1: Statement,
    #[serde(alias = "statement2")]
    pub statement_2: Statement,
    #[serde(alias = "similarity")]
    pub similarity_score: f64,
    #[serde(alias = "contradiction_type")]
    pub kind: InconsistencyKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Completed,
    /// Fewer than two interviews were supplied
    InsufficientInput,
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::InsufficientInput => write!(f, "insufficient_input"),
        }
    }
}

/// All findings of one aggregation run, partitioned by kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub total_inconsistencies: usize,
    pub contradictions: Vec<InconsistencyRecord>,
    pub similar_statements: Vec<InconsistencyRecord>,
}

impl Report {
    pub fn from_records(records: Vec<InconsistencyRecord>) -> Self {
        let total_inconsistencies = records.len();
        let (contradictions, similar_statements): (Vec<_>, Vec<_>) = records
            .into_iter()
            .partition(|r| r.kind == InconsistencyKind::Contradiction);

        Self {
            status: ReportStatus::Completed,
            message: None,
            total_inconsistencies,
            contradictions,
            similar_statements,
        }
    }

    pub fn insufficient_input(message: impl Into<String>) -> Self {
        Self {
            status: ReportStatus::InsufficientInput,
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_inconsistencies == 0
    }

    /// Contradictions followed by similar statements.
    pub fn records(&self) -> impl Iterator<Item = &InconsistencyRecord> {
        self.contradictions.iter().chain(self.similar_statements.iter())
    }
}
