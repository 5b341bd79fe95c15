use std::path::PathBuf;

/// Fragment store the split writes to and the assembler reads from
pub const DEFAULT_FRAGMENT_DIR: &str = "shakespeare_split";

/// JSONL file written by the assembler
pub const DEFAULT_JSONL_FILE: &str = "output.jsonl";

/// Directory holding sonnets.txt, plays.txt and verse.txt
pub const DEFAULT_INPUT_DIR: &str = ".";

/// Log filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Paths for a full split-then-assemble run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub fragment_dir: PathBuf,
    pub jsonl_path: PathBuf,
}

impl Config {
    pub fn new() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            fragment_dir: PathBuf::from(DEFAULT_FRAGMENT_DIR),
            jsonl_path: PathBuf::from(DEFAULT_JSONL_FILE),
        }
    }

    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.input_dir = dir.into();
        self
    }

    pub fn fragment_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.fragment_dir = dir.into();
        self
    }

    pub fn jsonl_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.jsonl_path = path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
