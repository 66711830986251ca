//! Decoding of source documents into UTF-8 text.

use std::io::Read;

use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;

use crate::error::Error;

/// Looks up a WHATWG encoding label such as `utf-8`, `utf-16le` or `gbk`.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, Error> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
}

/// Reads the whole source into memory.
///
/// A byte order mark always wins over `encoding` and is stripped. Without a BOM and
/// without an explicit encoding the bytes must be valid UTF-8.
pub fn read_source<R: Read>(reader: R, encoding: Option<&str>) -> Result<String, Error> {
    let encoding = encoding.map(resolve_encoding).transpose()?;

    let mut decoder = DecodeReaderBytesBuilder::new()
        .encoding(encoding)
        .bom_override(true)
        .strip_bom(true)
        .build(reader);

    let mut decoded = String::new();
    decoder.read_to_string(&mut decoded)?;
    Ok(decoded)
}
