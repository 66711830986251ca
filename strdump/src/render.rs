//! Serialization of extracted records.

use crate::{
    error::Error,
    options::{OutputFormat, RenderOptions},
    types::Extraction,
};

/// Renders the records of `extraction` according to `options`.
///
/// Text output with `leading_separator` puts the separator in front of every record,
/// the first one included; without it the separator only goes between records. No
/// records give an empty string either way.
pub fn render(extraction: &Extraction, options: &RenderOptions) -> Result<String, Error> {
    match options.format {
        OutputFormat::Text => Ok(render_text(extraction, options)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&extraction.records)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_text(extraction: &Extraction, options: &RenderOptions) -> String {
    let mut content = String::new();
    for (i, record) in extraction.iter().enumerate() {
        if i > 0 || options.leading_separator {
            content.push_str(&options.separator);
        }
        content.push_str(&record.to_string());
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    fn sample() -> Extraction {
        Extraction {
            records: vec![Record::new(2, "Demo"), Record::new(4, "Hello")],
            lines_scanned: 5,
            skipped_empty: 1,
            skipped_missing_marker: 2,
        }
    }

    #[test]
    fn test_text_with_leading_separator() {
        let content = render(&sample(), &RenderOptions::new()).unwrap();
        assert_eq!(content, "\r\n2  Demo\r\n4  Hello");
    }

    #[test]
    fn test_text_without_leading_separator() {
        let options = RenderOptions::new().with_leading_separator(false);
        let content = render(&sample(), &options).unwrap();
        assert_eq!(content, "2  Demo\r\n4  Hello");
    }

    #[test]
    fn test_custom_separator() {
        let options = RenderOptions::new().with_separator("\n");
        let content = render(&sample(), &options).unwrap();
        assert_eq!(content, "\n2  Demo\n4  Hello");
    }

    #[test]
    fn test_empty_extraction_renders_nothing() {
        let empty = Extraction::new();
        assert_eq!(render(&empty, &RenderOptions::new()).unwrap(), "");
        let options = RenderOptions::new().with_leading_separator(false);
        assert_eq!(render(&empty, &options).unwrap(), "");
    }

    #[test]
    fn test_json_output() {
        let options = RenderOptions::new().with_format(OutputFormat::Json);
        let content = render(&sample(), &options).unwrap();
        let parsed: Vec<Record> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, sample().records);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_json_empty_is_empty_array() {
        let options = RenderOptions::new().with_format(OutputFormat::Json);
        let content = render(&Extraction::new(), &options).unwrap();
        assert_eq!(content, "[]\n");
    }
}
