use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileGridConfig {
    pub step: Option<f64>,
    pub radius: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub grid: Option<FileGridConfig>,
    pub output: Option<FileOutputConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = FileConfig::from_toml_str(
            r#"
            [grid]
            step = 0.5
            radius = 2.0

            [output]
            path = "maps/area.dat"
            "#,
        )
        .unwrap();
        let grid = config.grid.unwrap();
        assert_eq!(grid.step, Some(0.5));
        assert_eq!(grid.radius, Some(2.0));
        assert_eq!(config.output.unwrap().path, Some(PathBuf::from("maps/area.dat")));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert!(config.grid.is_none());
        assert!(config.output.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("[grid]\nresolution = 1.0\n").is_err());
        assert!(FileConfig::from_toml_str("threads = 4\n").is_err());
    }

    #[test]
    fn from_file_wraps_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[grid]\nstep = \"fine\"\n").unwrap();
        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }
}
