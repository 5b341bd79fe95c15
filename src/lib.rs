// Public API exports
pub mod assembler;
pub mod config;
pub mod corpus;
pub mod pipeline;
pub mod segmenter;
pub mod store;

// Re-export main types for convenience
pub use assembler::{
    AssembleReport, ChatMessage, Role, TrainingExample, assemble, collect_fragments,
};
pub use config::Config;
pub use corpus::{CorpusJob, run_corpus};
pub use pipeline::{run_pipeline, split_corpus};
pub use segmenter::{
    Boundary, MERGE_THRESHOLD, SegmentError, SegmentReport, SourceLines, segment, segment_file,
    split_lines,
};
pub use store::{FragmentStore, PrefixValidator};
