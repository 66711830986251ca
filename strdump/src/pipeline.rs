//! The read → scan → render → write run over one source file.
//!
//! The source is read fully and closed before scanning starts, and the destination is
//! only created once the scan succeeded, so a failed scan never truncates it.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    options::{RenderOptions, ScanOptions},
    render::render,
    traits::Parser,
    types::Extraction,
};

/// Everything one run needs. Both paths are required.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DumpConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default)]
    pub scan: ScanOptions,
    #[serde(default)]
    pub render: RenderOptions,
}

impl DumpConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            scan: ScanOptions::default(),
            render: RenderOptions::default(),
        }
    }

    pub fn with_scan(mut self, scan: ScanOptions) -> Self {
        self.scan = scan;
        self
    }

    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }
}

/// Outcome of a successful run: the records and exactly what was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dump {
    pub extraction: Extraction,
    pub content: String,
}

/// Runs one extraction and writes the destination file.
///
/// # Example
///
/// ```rust,no_run
/// use strdump::{DumpConfig, dump};
///
/// let result = dump(&DumpConfig::new("res/values-zh/strings.xml", "zh.txt"))?;
/// println!("{}", result.content);
/// # Ok::<(), strdump::Error>(())
/// ```
pub fn dump(config: &DumpConfig) -> Result<Dump, Error> {
    config.scan.validate()?;
    if same_file(&config.input_path, &config.output_path) {
        return Err(Error::invalid_options(format!(
            "input and output both point to {}",
            config.input_path.display()
        )));
    }

    info!("reading {}", config.input_path.display());
    let extraction = Extraction::read_from(&config.input_path, &config.scan)?;
    let content = render(&extraction, &config.render)?;
    extraction.write_to(&config.output_path, &config.render)?;
    info!(
        "wrote {} records to {}",
        extraction.len(),
        config.output_path.display()
    );

    Ok(Dump {
        extraction,
        content,
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
