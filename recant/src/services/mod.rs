mod aggregator;
mod formatter;
mod loader;

pub use aggregator::{InconsistencyAggregator, INSUFFICIENT_INTERVIEWS_MESSAGE};
pub use formatter::{ReportFormatter, ReportPaths, REPORT_JSON_FILE, REPORT_MARKDOWN_FILE};
pub use loader::{load_transcripts, parse_transcripts};
