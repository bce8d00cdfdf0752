mod report;
mod segment;
mod statement;

pub use report::*;
pub use segment::*;
pub use statement::*;
