#![forbid(unsafe_code)]
//! Line-oriented extraction of values from Android `strings.xml` files.
//!
//! Every line is scanned for the text between the first `>` and the first
//! `</string>`; non-empty values become records tagged with their zero-based line
//! index, rendered as `\r\n<index>  <text>` and written to a destination file.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use strdump::{DumpConfig, dump};
//!
//! let result = dump(&DumpConfig::new("app/src/main/res/values/strings.xml", "strings.txt"))?;
//! println!("{}", result.content);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Scanning in memory
//!
//! ```rust
//! use strdump::{ScanOptions, scanner::scan_str};
//!
//! let extraction = scan_str("<string name=\"x\">Hello</string>", &ScanOptions::new())?;
//! assert_eq!(extraction.records[0].to_string(), "0  Hello");
//! # Ok::<(), strdump::Error>(())
//! ```
//!
//! This is a substring scan, not an XML parser: entities stay escaped and entries spanning
//! several lines are not joined. Lines lacking a marker follow [`MissingMarkerPolicy`].

pub mod error;
pub mod options;
pub mod pipeline;
pub mod render;
pub mod scanner;
pub mod source;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    options::{MissingMarkerPolicy, OutputFormat, RenderOptions, ScanOptions},
    pipeline::{Dump, DumpConfig, dump},
    render::render,
    scanner::{LineOutcome, extract_line, scan_lines},
    types::{Extraction, Record},
};
