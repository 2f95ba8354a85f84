use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ViewError;

/// Keys of the descriptive columns in front of the testcases
pub const FIXED_COLUMN_KEYS: [&str; 5] = ["c1", "c2", "c3", "c4", "c5"];

/// Config key shared by all testcase columns
pub const TESTCASE_CONFIG_KEY: &str = "tc";

/// Static captions written into section header rows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionCaptions {
    /// Follow the name of a field section
    pub field: Vec<String>,
    /// Follow the name of a multi row section
    pub multi_row: Vec<String>,
    /// Replace the name of a summary section
    pub summary: Vec<String>,
}

impl Default for SectionCaptions {
    fn default() -> Self {
        Self {
            field: to_strings(&["Equivalence Class", "Generator Function", "Comment"]),
            multi_row: to_strings(&["Key", "Other", "Comment"]),
            summary: to_strings(&["Summary"]),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Display name per column key; for `tc` this is the testcase name prefix
    pub name: HashMap<String, String>,
    pub width: HashMap<String, u32>,
    /// Prepended to the 1-based position to form testcase column keys
    pub testcase_key_prefix: String,
    pub captions: SectionCaptions,
}

impl Default for ViewConfig {
    fn default() -> Self {
        let name = HashMap::from([
            ("c1".to_string(), "Name/Testcase".to_string()),
            ("c2".to_string(), "Field Name".to_string()),
            ("c3".to_string(), "Equivalenz Class".to_string()),
            ("c4".to_string(), "Generator Function".to_string()),
            ("c5".to_string(), "Comment".to_string()),
            (TESTCASE_CONFIG_KEY.to_string(), String::new()),
        ]);

        let mut width: HashMap<String, u32> = FIXED_COLUMN_KEYS
            .iter()
            .map(|k| (k.to_string(), 300))
            .collect();
        width.insert(TESTCASE_CONFIG_KEY.to_string(), 40);

        Self {
            name,
            width,
            testcase_key_prefix: String::new(),
            captions: SectionCaptions::default(),
        }
    }
}

impl ViewConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from a TOML file. Omitted entries keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ViewError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ViewError::Config(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ViewError> {
        let partial: ViewConfig = toml::from_str(content)
            .map_err(|e| ViewError::Config(format!("Failed to parse config file: {}", e)))?;

        // maps replace wholesale under serde(default), so merge them key by key
        let mut config = Self::default();
        config.name.extend(partial.name);
        config.width.extend(partial.width);
        config.testcase_key_prefix = partial.testcase_key_prefix;
        config.captions = partial.captions;
        Ok(config)
    }

    pub fn width_for(&self, key: &str) -> Option<u32> {
        self.width.get(key).copied()
    }

    pub fn name_for(&self, key: &str) -> Option<&str> {
        self.name.get(key).map(String::as_str)
    }

    pub fn testcase_key(&self, position: usize) -> String {
        format!("{}{}", self.testcase_key_prefix, position)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_cover_every_fixed_column() {
        let config = ViewConfig::default();
        for key in FIXED_COLUMN_KEYS {
            assert!(config.name_for(key).is_some(), "missing name for {}", key);
            assert_eq!(config.width_for(key), Some(300));
        }
        assert_eq!(config.width_for(TESTCASE_CONFIG_KEY), Some(40));
        assert_eq!(config.name_for(TESTCASE_CONFIG_KEY), Some(""));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = ViewConfig::from_toml_str(
            r#"
            testcase_key_prefix = "tc_"

            [name]
            tc = "gum_"

            [width]
            c2 = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.name_for("tc"), Some("gum_"));
        assert_eq!(config.name_for("c1"), Some("Name/Testcase"));
        assert_eq!(config.width_for("c2"), Some(120));
        assert_eq!(config.width_for("c3"), Some(300));
        assert_eq!(config.testcase_key(3), "tc_3");
        assert_eq!(config.captions, SectionCaptions::default());
    }

    #[test]
    fn captions_can_be_overridden() {
        let config = ViewConfig::from_toml_str(
            r#"
            [captions]
            summary = ["Summary", "Total", "Done", "Percent"]
            "#,
        )
        .unwrap();

        assert_eq!(config.captions.summary.len(), 4);
        assert_eq!(config.captions.multi_row, SectionCaptions::default().multi_row);
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "[name]").unwrap();
        writeln!(file, "c5 = \"Notes\"").unwrap();

        let config = ViewConfig::from_file(file.path()).unwrap();
        assert_eq!(config.name_for("c5"), Some("Notes"));
    }

    #[test]
    fn from_file_reports_missing_file() {
        let err = ViewConfig::from_file(Path::new("/nonexistent/view.toml")).unwrap_err();
        assert!(matches!(err, ViewError::Config(msg) if msg.contains("Failed to read")));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = ViewConfig::from_toml_str("[width]\nc1 = \"wide\"").unwrap_err();
        assert!(matches!(err, ViewError::Config(msg) if msg.contains("Failed to parse")));
    }
}
