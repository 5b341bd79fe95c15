use crate::segmenter::SegmentError;
use std::path::{Component, Path};

pub struct PrefixValidator;

impl PrefixValidator {
    /// Check that a fragment prefix names a plain file inside the store:
    /// - not empty
    /// - exactly one normal path component (no separators, `.` or `..`)
    /// - not hidden (no leading `.`)
    /// - no trailing digit, so `<prefix><n>` parses back unambiguously
    pub fn validate(prefix: &str) -> Result<&str, SegmentError> {
        if prefix.is_empty() {
            return Err(SegmentError::InvalidPrefix("Empty prefix".to_string()));
        }

        if prefix.contains('/') || prefix.contains('\\') {
            return Err(SegmentError::InvalidPrefix(format!(
                "Path separators not allowed: {}",
                prefix
            )));
        }

        let mut components = Path::new(prefix).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(SegmentError::InvalidPrefix(format!(
                    "Not a plain file name: {}",
                    prefix
                )));
            }
        }

        // The assembler skips hidden files
        if prefix.starts_with('.') {
            return Err(SegmentError::InvalidPrefix(format!(
                "Hidden prefix not allowed: {}",
                prefix
            )));
        }

        if prefix.ends_with(|c: char| c.is_ascii_digit()) {
            return Err(SegmentError::InvalidPrefix(format!(
                "Prefix must not end in a digit: {}",
                prefix
            )));
        }

        Ok(prefix)
    }
}
