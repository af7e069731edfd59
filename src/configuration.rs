use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParseSettings {
    /// Axis holding the `(lo, hi)` pair of raw arrays; inferred when absent.
    pub pair_axis: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubdivisionSettings {
    /// Split count per axis of the box being refined.
    pub splits: Vec<usize>,
}

impl Default for SubdivisionSettings {
    fn default() -> Self {
        SubdivisionSettings { splits: vec![4] }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Configuration {
    parse: ParseSettings,
    subdivision: SubdivisionSettings,
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn parse(&self) -> &ParseSettings {
        &self.parse
    }

    pub fn subdivision(&self) -> &SubdivisionSettings {
        &self.subdivision
    }

    pub fn from_reader<P: AsRef<Path>>(file_path: P) -> Result<Configuration, ConfigurationError> {
        let file = File::open(file_path.as_ref())?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        info!(
            path = %file_path.as_ref().display(),
            pair_axis = ?configuration.parse.pair_axis,
            splits = ?configuration.subdivision.splits,
            "configuration loaded"
        );
        Ok(configuration)
    }
}
