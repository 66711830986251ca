use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use strdump::{RenderOptions, ScanOptions};

/// Contents of a `strdump.toml` file. Every field is optional; flags win over it.
///
/// ```toml
/// input_path = "app/src/main/res/values-zh/strings.xml"
/// output_path = "zh.txt"
///
/// [scan]
/// on_missing_marker = "legacy"
///
/// [render]
/// leading_separator = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub scan: ScanOptions,
    pub render: RenderOptions,
}

impl FileConfig {
    /// Parses a config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Invalid config: {}", e))
    }

    /// Loads a config file. Relative paths inside it are taken relative to the file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config {}: {}", path.display(), e))?;
        let mut config = Self::from_toml(&content)
            .map_err(|e| format!("{} ({})", e, path.display()))?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        config.input_path = config.input_path.map(|p| base.join(p));
        config.output_path = config.output_path.map(|p| base.join(p));
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strdump::{MissingMarkerPolicy, OutputFormat};
    use tempfile::TempDir;

    #[test]
    fn test_full_config() {
        let config = FileConfig::from_toml(
            r#"
            input_path = "strings.xml"
            output_path = "zh.txt"

            [scan]
            close_marker = "</item>"
            on_missing_marker = "fail"
            encoding = "utf-16le"

            [render]
            format = "json"
            separator = "\n"
            leading_separator = false
            "#,
        )
        .unwrap();

        assert_eq!(config.input_path, Some(PathBuf::from("strings.xml")));
        assert_eq!(config.scan.open_marker, ">");
        assert_eq!(config.scan.close_marker, "</item>");
        assert_eq!(config.scan.on_missing_marker, MissingMarkerPolicy::Fail);
        assert_eq!(config.scan.encoding.as_deref(), Some("utf-16le"));
        assert_eq!(config.render.format, OutputFormat::Json);
        assert_eq!(config.render.separator, "\n");
        assert!(!config.render.leading_separator);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(FileConfig::from_toml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = FileConfig::from_toml("input = \"x.xml\"").unwrap_err();
        assert!(err.contains("Invalid config"));
    }

    #[test]
    fn test_bad_policy_rejected() {
        let err = FileConfig::from_toml("[scan]\non_missing_marker = \"maybe\"").unwrap_err();
        assert!(err.contains("Invalid config"));
    }

    #[test]
    fn test_load_resolves_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("strdump.toml");
        fs::write(
            &path,
            "input_path = \"res/strings.xml\"\noutput_path = \"/tmp/out.txt\"\n",
        )
        .unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(
            config.input_path,
            Some(temp_dir.path().join("res").join("strings.xml"))
        );
        assert_eq!(config.output_path, Some(PathBuf::from("/tmp/out.txt")));
    }

    #[test]
    fn test_load_missing_file() {
        let err = FileConfig::load(Path::new("/nonexistent/strdump.toml")).unwrap_err();
        assert!(err.starts_with("Cannot read config"));
    }
}
