//! Traits for reading a source document into records and writing them back out.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::{
    error::Error,
    options::{RenderOptions, ScanOptions},
};

/// A trait for scanning a source document and writing the result to one file.
///
/// # Example
///
/// ```rust,no_run
/// use strdump::{Extraction, RenderOptions, ScanOptions, traits::Parser};
/// let extraction = Extraction::read_from("values/strings.xml", &ScanOptions::new())?;
/// extraction.write_to("strings.txt", &RenderOptions::new())?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R, options: &ScanOptions) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path. The file is closed before this returns.
    fn read_from<P: AsRef<Path>>(path: P, options: &ScanOptions) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, options)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W, options: &RenderOptions) -> Result<(), Error>;

    /// Write to file path, replacing whatever the file held before.
    fn write_to<P: AsRef<Path>>(&self, path: P, options: &RenderOptions) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer, options)?;
        writer.flush().map_err(Error::Io)
    }

    /// Parse from a string.
    fn from_str(s: &str, options: &ScanOptions) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s), options)
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8], options: &ScanOptions) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(bytes), options)
    }
}
