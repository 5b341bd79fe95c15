use crate::assembler::{AssembleReport, assemble};
use crate::config::Config;
use crate::corpus::{CorpusJob, run_corpus};
use crate::segmenter::SegmentReport;
use crate::store::FragmentStore;
use anyhow::{Context, Result};

/// Recreate the fragment store and split the Shakespeare sources into it
pub fn split_corpus(config: &Config) -> Result<Vec<SegmentReport>> {
    let store = FragmentStore::reset(&config.fragment_dir)
        .context("Failed to prepare fragment store")?;

    run_corpus(&config.input_dir, &store, &CorpusJob::shakespeare())
        .context(format!("Failed to split corpus in {}", config.input_dir.display()))
}

/// Split the corpus, then assemble every fragment into the JSONL file
pub fn run_pipeline(config: &Config) -> Result<(Vec<SegmentReport>, AssembleReport)> {
    let reports = split_corpus(config)?;
    let assembled = assemble(&config.fragment_dir, &config.jsonl_path)?;
    Ok((reports, assembled))
}
