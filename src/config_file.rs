use crate::FanoutLogError;
use serde_derive::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub(crate) file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) stderr: bool,
    #[serde(default)]
    pub(crate) debugger: bool,
}

impl ConfigFile {
    pub(crate) fn read(path: &Path) -> Result<Self, FanoutLogError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self, FanoutLogError> {
        Ok(toml::from_str(content)?)
    }
}
