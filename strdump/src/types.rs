//! Core types for strdump.
//! The scanner produces these; the renderer serializes them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// One extracted value and the zero-based index of the line it came from.
///
/// Never constructed with empty `text` by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub line: usize,
    pub text: String,
}

impl Record {
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Record {
            line,
            text: text.into(),
        }
    }
}

/// Renders as `<line><two spaces><text>`.
impl Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  {}", self.line, self.text)
    }
}

/// Result of scanning one source document.
///
/// Records keep the order of the source lines. Every scanned line is accounted for
/// exactly once: as a record, as an empty extraction, or as a line missing a marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Extraction {
    pub records: Vec<Record>,
    pub lines_scanned: usize,
    pub skipped_empty: usize,
    pub skipped_missing_marker: usize,
}

impl Extraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over all records.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }
}
