//! Run configuration loaded from `doxdoc.toml`.

use crate::doxyfile::DoxConfig;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "doxdoc.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Project name written as PROJECT_NAME
    pub package: String,
    /// Source tree handed to doxygen as INPUT
    pub sourcedir: PathBuf,
    /// OUTPUT_DIRECTORY; XML lands in `<builddir>/xml`
    pub builddir: PathBuf,
    /// Where the generated Doxyfile is written
    pub doxyfile_name: PathBuf,
    /// Doxygen executable
    pub doxygen: String,
    /// List method briefs next to names in class docstrings
    pub describe_methods: bool,
    /// User overrides for the default Doxyfile table
    pub doxygen_config: DoxConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            package: "project".to_string(),
            sourcedir: PathBuf::from("src"),
            builddir: PathBuf::from("build"),
            doxyfile_name: PathBuf::from("doxyfile"),
            doxygen: "doxygen".to_string(),
            describe_methods: false,
            doxygen_config: DoxConfig::new(),
        }
    }
}

impl RunConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml(&text).map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_toml(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.message().to_string())
    }

    /// Directory doxygen writes its XML into.
    pub fn xml_dir(&self) -> PathBuf {
        self.builddir.join("xml")
    }
}
