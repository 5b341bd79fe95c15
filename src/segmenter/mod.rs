mod boundary;
mod error;
mod lines;
mod splitter;

#[cfg(test)]
mod tests;

pub use boundary::Boundary;
pub use error::SegmentError;
pub use lines::{SourceLines, split_lines};
pub use splitter::{SegmentReport, segment, segment_file};

/// Fragments with more than this many lines advance the sequence number
pub const MERGE_THRESHOLD: usize = 1;
