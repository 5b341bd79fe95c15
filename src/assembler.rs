use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Speaker of a chat turn; fragments are always assistant turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// One JSONL line: `{"messages": [{"role": "assistant", "content": ...}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub messages: Vec<ChatMessage>,
}

impl TrainingExample {
    /// Wrap a fragment's text as a single assistant turn
    pub fn from_fragment(text: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: Role::Assistant,
                content: text.into(),
            }],
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssembleReport {
    /// Lines written to the JSONL file, one per fragment
    pub examples: usize,
    /// Total bytes of fragment text read
    pub bytes: usize,
}

/// Sort key for `<prefix><n>`: prefix, then numbered before unnumbered, then n
fn fragment_key(name: &str) -> (String, bool, u64, String) {
    let digits = name
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_digit())
        .count();
    let (prefix, number) = name.split_at(name.len() - digits);

    match number.parse::<u64>() {
        Ok(n) => (prefix.to_string(), false, n, String::new()),
        Err(_) => (prefix.to_string(), true, 0, name.to_string()),
    }
}

/// List the fragment files directly inside `dir`, in fragment order.
/// Hidden files and subdirectories are skipped.
pub fn collect_fragments(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut fragments = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.context(format!("Failed to list fragment directory: {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }

        fragments.push(entry.into_path());
    }

    fragments.sort_by_cached_key(|path| {
        fragment_key(&path.file_name().unwrap_or_default().to_string_lossy())
    });

    Ok(fragments)
}

/// Write one training example per fragment file in `fragment_dir` to `output`
pub fn assemble(fragment_dir: &Path, output: &Path) -> Result<AssembleReport> {
    let fragments = collect_fragments(fragment_dir)?;

    let file = File::create(output)
        .context(format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let mut report = AssembleReport::default();

    for path in &fragments {
        tracing::debug!("Reading {}", path.display());

        let text = fs::read_to_string(path)
            .context(format!("Failed to read fragment: {}", path.display()))?;
        report.bytes += text.len();

        serde_json::to_writer(&mut writer, &TrainingExample::from_fragment(text))
            .context(format!("Failed to serialize fragment: {}", path.display()))?;
        writer
            .write_all(b"\n")
            .context(format!("Failed to write to {}", output.display()))?;
        report.examples += 1;
    }

    writer
        .flush()
        .context(format!("Failed to flush {}", output.display()))?;

    tracing::info!(
        "Wrote {} examples ({} bytes of text) to {}",
        report.examples,
        report.bytes,
        output.display()
    );

    Ok(report)
}
