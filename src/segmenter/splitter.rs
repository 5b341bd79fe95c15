use super::{MERGE_THRESHOLD, SegmentError, split_lines};
use crate::store::{FragmentStore, PrefixValidator};
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Summary of one segmentation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentReport {
    /// Prefix the fragments were written under
    pub prefix: String,
    /// Number of fragment files left in the store (`<prefix>0..<prefix>{n-1}`)
    pub fragments: usize,
    /// Non-blank lines written across all fragments
    pub lines_written: usize,
    /// Blank lines skipped
    pub blank_lines: usize,
    /// Lines that matched the boundary matcher
    pub boundaries: usize,
    /// Boundaries that reused the current number because the fragment had <= 1 line
    pub merges: usize,
}

/// The single open fragment file
struct FragmentWriter {
    path: PathBuf,
    out: BufWriter<File>,
    lines: usize,
}

impl FragmentWriter {
    /// Create (or truncate) the fragment file
    fn create(path: PathBuf) -> Result<Self, SegmentError> {
        match File::create(&path) {
            Ok(file) => Ok(Self::wrap(path, file)),
            Err(source) => Err(SegmentError::CreateFragment { path, source }),
        }
    }

    /// Reopen a degenerate fragment so the next lines extend it
    fn append(path: PathBuf) -> Result<Self, SegmentError> {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Ok(Self::wrap(path, file)),
            Err(source) => Err(SegmentError::CreateFragment { path, source }),
        }
    }

    fn wrap(path: PathBuf, file: File) -> Self {
        Self {
            path,
            out: BufWriter::new(file),
            lines: 0,
        }
    }

    fn write_line(&mut self, line: &str) -> Result<(), SegmentError> {
        writeln!(self.out, "{}", line).map_err(|source| SegmentError::WriteFragment {
            path: self.path.clone(),
            source,
        })?;
        self.lines += 1;
        Ok(())
    }

    /// Flush and close, surfacing write errors instead of losing them on drop
    fn close(mut self) -> Result<PathBuf, SegmentError> {
        if let Err(source) = self.out.flush() {
            return Err(SegmentError::WriteFragment {
                path: self.path,
                source,
            });
        }
        tracing::trace!("Closed {} (+{} lines)", self.path.display(), self.lines);
        Ok(self.path)
    }
}

/// Split `lines` into numbered fragment files in `store`.
///
/// A line for which `is_boundary` returns true closes the current fragment
/// and opens the next one; the boundary line itself belongs to the new
/// fragment. Blank lines are never written or counted. A fragment holding
/// at most one line when its boundary arrives keeps its number, and the
/// following lines are appended to the same file.
///
/// If the last fragment ends up empty (a trailing boundary with nothing
/// after it) and it is not fragment 0, its file is removed.
pub fn segment<I, F>(
    lines: I,
    is_boundary: F,
    prefix: &str,
    store: &FragmentStore,
) -> Result<SegmentReport, SegmentError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str) -> bool,
{
    let prefix = PrefixValidator::validate(prefix)?;

    let mut report = SegmentReport {
        prefix: prefix.to_string(),
        ..SegmentReport::default()
    };
    let mut index = 0;
    let mut lines_in_fragment = 0;
    let mut writer = FragmentWriter::create(store.fragment_path(prefix, index))?;

    for line in lines {
        let line = line.as_ref();

        if is_boundary(line) {
            report.boundaries += 1;
            let closed = writer.close()?;

            writer = if lines_in_fragment > MERGE_THRESHOLD {
                tracing::debug!(
                    "Fragment {} complete ({} lines)",
                    closed.display(),
                    lines_in_fragment
                );
                index += 1;
                lines_in_fragment = 0;
                FragmentWriter::create(store.fragment_path(prefix, index))?
            } else {
                report.merges += 1;
                FragmentWriter::append(closed)?
            };
        }

        if line.is_empty() {
            report.blank_lines += 1;
            continue;
        }

        writer.write_line(line)?;
        lines_in_fragment += 1;
        report.lines_written += 1;
    }

    let last = writer.close()?;

    if lines_in_fragment == 0 && index > 0 {
        tracing::debug!("Removing empty trailing fragment {}", last.display());
        fs::remove_file(&last).map_err(|source| SegmentError::WriteFragment {
            path: last.clone(),
            source,
        })?;
        report.fragments = index;
    } else {
        report.fragments = index + 1;
    }

    Ok(report)
}

/// Read `source` whole and segment its lines into `store`.
/// Lines break on `\n`, `\r\n`, a lone `\r` and the other Unicode line breaks.
pub fn segment_file<F>(
    source: &Path,
    is_boundary: F,
    prefix: &str,
    store: &FragmentStore,
) -> Result<SegmentReport, SegmentError>
where
    F: Fn(&str) -> bool,
{
    let text = fs::read_to_string(source).map_err(|e| SegmentError::ReadSource {
        path: source.to_path_buf(),
        source: e,
    })?;

    let report = segment(split_lines(&text), is_boundary, prefix, store)?;

    tracing::info!(
        "Split {} into {} fragments ({} lines, {} blank skipped, {} merges)",
        source.display(),
        report.fragments,
        report.lines_written,
        report.blank_lines,
        report.merges
    );

    Ok(report)
}
