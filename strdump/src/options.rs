//! Options controlling how lines are scanned and how records are rendered.

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Marker that opens the text of interest on a line.
pub const DEFAULT_OPEN_MARKER: &str = ">";
/// Marker that closes the text of interest on a line.
pub const DEFAULT_CLOSE_MARKER: &str = "</string>";
/// Separator placed in front of every rendered record.
pub const DEFAULT_SEPARATOR: &str = "\r\n";

/// What to do with a line that lacks the open or the close marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingMarkerPolicy {
    /// Emit nothing for the line.
    #[default]
    Skip,
    /// Abort the scan with [`Error::MissingMarker`].
    Fail,
    /// A missing open marker means the start of the line and a missing close
    /// marker means the end of the line.
    Legacy,
}

impl Display for MissingMarkerPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingMarkerPolicy::Skip => write!(f, "skip"),
            MissingMarkerPolicy::Fail => write!(f, "fail"),
            MissingMarkerPolicy::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for MissingMarkerPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(MissingMarkerPolicy::Skip),
            "fail" | "error" => Ok(MissingMarkerPolicy::Fail),
            "legacy" => Ok(MissingMarkerPolicy::Legacy),
            _ => Err(Error::unknown_value("missing-marker policy", s)),
        }
    }
}

/// Scan behavior for [`crate::scanner`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanOptions {
    pub open_marker: String,
    pub close_marker: String,
    pub on_missing_marker: MissingMarkerPolicy,
    /// Encoding label (WHATWG names, e.g. `utf-16le`, `gbk`). `None` sniffs the BOM
    /// and falls back to UTF-8.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            open_marker: DEFAULT_OPEN_MARKER.to_string(),
            close_marker: DEFAULT_CLOSE_MARKER.to_string(),
            on_missing_marker: MissingMarkerPolicy::default(),
            encoding: None,
        }
    }
}

impl ScanOptions {
    /// Creates default scan options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the open marker.
    pub fn with_open_marker(mut self, marker: impl Into<String>) -> Self {
        self.open_marker = marker.into();
        self
    }

    /// Sets the close marker.
    pub fn with_close_marker(mut self, marker: impl Into<String>) -> Self {
        self.close_marker = marker.into();
        self
    }

    /// Sets the missing-marker policy.
    pub fn with_policy(mut self, policy: MissingMarkerPolicy) -> Self {
        self.on_missing_marker = policy;
        self
    }

    /// Sets the source encoding label.
    pub fn with_encoding(mut self, encoding: Option<String>) -> Self {
        self.encoding = encoding;
        self
    }

    /// Rejects options the scanner cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        if self.open_marker.is_empty() {
            return Err(Error::invalid_options("open marker must not be empty"));
        }
        if self.close_marker.is_empty() {
            return Err(Error::invalid_options("close marker must not be empty"));
        }
        Ok(())
    }
}

/// Serialization of the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<index>  <text>` records joined by the separator.
    #[default]
    Text,
    /// Pretty-printed JSON array of records.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::unknown_value("output format", s)),
        }
    }
}

/// Render behavior for [`crate::render`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub separator: String,
    /// Prefix the first record with the separator too, so non-empty text output
    /// always starts with it.
    pub leading_separator: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
            leading_separator: true,
        }
    }
}

impl RenderOptions {
    /// Creates default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets the record separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Enables/disables the separator in front of the first record.
    pub fn with_leading_separator(mut self, leading: bool) -> Self {
        self.leading_separator = leading;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults() {
        let options = ScanOptions::new();
        assert_eq!(options.open_marker, ">");
        assert_eq!(options.close_marker, "</string>");
        assert_eq!(options.on_missing_marker, MissingMarkerPolicy::Skip);
        assert!(options.encoding.is_none());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_empty_markers_rejected() {
        let err = ScanOptions::new().with_open_marker("").validate().unwrap_err();
        assert!(err.to_string().contains("open marker"));

        let err = ScanOptions::new().with_close_marker("").validate().unwrap_err();
        assert!(err.to_string().contains("close marker"));
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "SKIP".parse::<MissingMarkerPolicy>().unwrap(),
            MissingMarkerPolicy::Skip
        );
        assert_eq!(
            "error".parse::<MissingMarkerPolicy>().unwrap(),
            MissingMarkerPolicy::Fail
        );
        assert_eq!(
            " legacy ".parse::<MissingMarkerPolicy>().unwrap(),
            MissingMarkerPolicy::Legacy
        );
        assert!("ignore".parse::<MissingMarkerPolicy>().is_err());
    }

    #[test]
    fn test_format_display_matches_from_str() {
        for format in [OutputFormat::Text, OutputFormat::Json] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_defaults() {
        let options = RenderOptions::new();
        assert_eq!(options.format, OutputFormat::Text);
        assert_eq!(options.separator, "\r\n");
        assert!(options.leading_separator);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: ScanOptions =
            serde_json::from_str(r#"{ "on_missing_marker": "legacy" }"#).unwrap();
        assert_eq!(options.on_missing_marker, MissingMarkerPolicy::Legacy);
        assert_eq!(options.close_marker, "</string>");
    }
}
