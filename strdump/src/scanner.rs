//! Line-by-line extraction of the text between the open and close markers.
//!
//! This is a substring scan, not an XML parser: each line is looked at on its own,
//! entities are left as they are and entries spanning several lines are not joined.

use std::io::{BufRead, Write};

use log::{debug, trace};

use crate::{
    error::Error,
    options::{MissingMarkerPolicy, RenderOptions, ScanOptions},
    render,
    source::read_source,
    traits::Parser,
    types::{Extraction, Record},
};

/// Which marker a line is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Open,
    Close,
}

/// What a single line yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome<'a> {
    /// Non-empty text between the markers.
    Text(&'a str),
    /// Both markers present (or substituted) but nothing between them.
    Empty,
    /// A marker is absent and the policy does not substitute it.
    Missing(Marker),
}

/// Extracts the text of one line.
///
/// Only the first occurrence of each marker counts. When the open marker ends after
/// the close marker starts the line is [`LineOutcome::Empty`]. Under
/// [`MissingMarkerPolicy::Legacy`] an absent open marker is the start of the line and
/// an absent close marker is its end, so lines never come back as `Missing`. The end
/// of the line excludes the line break; an unterminated last line therefore keeps its
/// final character, where slicing the raw line up to its last character would drop it.
pub fn extract_line<'a>(line: &'a str, options: &ScanOptions) -> LineOutcome<'a> {
    let open = line
        .find(options.open_marker.as_str())
        .map(|pos| pos + options.open_marker.len());
    let close = line.find(options.close_marker.as_str());

    let (start, end) = match (open, close) {
        (Some(start), Some(end)) => (start, end),
        (open, close) if options.on_missing_marker == MissingMarkerPolicy::Legacy => {
            (open.unwrap_or(0), close.unwrap_or(line.len()))
        }
        (None, _) => return LineOutcome::Missing(Marker::Open),
        (Some(_), None) => return LineOutcome::Missing(Marker::Close),
    };

    if start >= end {
        LineOutcome::Empty
    } else {
        LineOutcome::Text(&line[start..end])
    }
}

/// Scans lines in order, emitting a record for every non-empty extraction.
///
/// Line indices are zero-based positions in `lines`.
pub fn scan_lines<I, S>(lines: I, options: &ScanOptions) -> Result<Extraction, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    options.validate()?;

    let mut extraction = Extraction::new();
    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        extraction.lines_scanned += 1;

        match extract_line(line, options) {
            LineOutcome::Text(text) => extraction.push(Record::new(index, text)),
            LineOutcome::Empty => extraction.skipped_empty += 1,
            LineOutcome::Missing(marker) => {
                let marker = match marker {
                    Marker::Open => &options.open_marker,
                    Marker::Close => &options.close_marker,
                };
                if options.on_missing_marker == MissingMarkerPolicy::Fail {
                    return Err(Error::MissingMarker {
                        line: index,
                        marker: marker.clone(),
                    });
                }
                trace!("line {}: no `{}`, skipped", index, marker);
                extraction.skipped_missing_marker += 1;
            }
        }
    }

    debug!(
        "scanned {} lines: {} records, {} empty, {} without markers",
        extraction.lines_scanned,
        extraction.records.len(),
        extraction.skipped_empty,
        extraction.skipped_missing_marker
    );
    Ok(extraction)
}

/// Splits a document into lines. `\r\n`, `\n` and a lone `\r` each end a line, and a
/// break at the very end does not start another one.
pub fn split_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = source;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(pos) => {
                let line = &rest[..pos];
                let width = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[pos + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Scans a whole in-memory document, split with [`split_lines`].
pub fn scan_str(source: &str, options: &ScanOptions) -> Result<Extraction, Error> {
    scan_lines(split_lines(source), options)
}

impl Parser for Extraction {
    /// Reads the reader to its end first, then scans.
    fn from_reader<R: BufRead>(reader: R, options: &ScanOptions) -> Result<Self, Error> {
        let source = read_source(reader, options.encoding.as_deref())?;
        scan_str(&source, options)
    }

    fn to_writer<W: Write>(&self, mut writer: W, options: &RenderOptions) -> Result<(), Error> {
        let content = render::render(self, options)?;
        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }
}
