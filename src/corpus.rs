use crate::segmenter::{Boundary, SegmentError, SegmentReport, segment_file};
use crate::store::FragmentStore;
use std::path::{Path, PathBuf};

/// One source file to split, with its output prefix and boundary style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusJob {
    /// Source file name, relative to the input directory
    pub source: PathBuf,
    pub prefix: String,
    pub boundary: Boundary,
}

impl CorpusJob {
    pub fn new(source: impl Into<PathBuf>, prefix: impl Into<String>, boundary: Boundary) -> Self {
        Self {
            source: source.into(),
            prefix: prefix.into(),
            boundary,
        }
    }

    /// The three Shakespeare sources: sonnets by numeral, plays by scene,
    /// other verse by stanza
    pub fn shakespeare() -> Vec<CorpusJob> {
        vec![
            CorpusJob::new("sonnets.txt", "s", Boundary::Numeral),
            CorpusJob::new("plays.txt", "p", Boundary::Scene),
            CorpusJob::new("verse.txt", "v", Boundary::BlankLine),
        ]
    }
}

/// Run every job against one store, in order. The first failure aborts the run.
pub fn run_corpus(
    input_dir: &Path,
    store: &FragmentStore,
    jobs: &[CorpusJob],
) -> Result<Vec<SegmentReport>, SegmentError> {
    let mut reports = Vec::with_capacity(jobs.len());

    for job in jobs {
        let source = input_dir.join(&job.source);
        tracing::info!(
            "Splitting {} by {} into {}{{n}}",
            source.display(),
            job.boundary,
            job.prefix
        );
        let boundary = job.boundary;
        let report = segment_file(&source, |l| boundary.matches(l), &job.prefix, store)?;
        reports.push(report);
    }

    Ok(reports)
}
