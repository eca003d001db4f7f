use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};
use version_detector::{fl, VersionFactory};

/// Optional settings for the command line tool
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Grammar replacing the built-in one
    #[serde(alias = "PATTERN")]
    pub pattern: Option<String>,
    /// Named, ordered marker lists
    #[serde(alias = "MARKERS", default)]
    pub markers: HashMap<String, Vec<String>>,
}

impl Config {
    /// Read the configuration file, or fall back to defaults when none is given
    pub fn read(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = fs::read_to_string(path).with_context(|| {
                    fl!("err_read_conf", conf_path = path.display().to_string())
                })?;

                Ok(toml::from_str(&content)?)
            }
            None => Ok(Config::default()),
        }
    }

    /// Build a factory, preferring `regex` over the configured pattern
    pub fn factory(&self, regex: Option<&str>) -> Result<VersionFactory> {
        match regex.or_else(|| self.pattern.as_deref()) {
            Some(pattern) => Ok(VersionFactory::with_regex(pattern)?),
            None => Ok(VersionFactory::new()),
        }
    }

    /// Explicit markers first, then those of the profile
    pub fn markers_for(&self, explicit: &[String], profile: Option<&str>) -> Result<Vec<String>> {
        let mut markers = explicit.to_vec();

        if let Some(profile) = profile {
            match self.markers.get(profile) {
                Some(m) => markers.extend(m.iter().cloned()),
                None => bail!(fl!("err_unknown_profile", profile = profile.to_string())),
            }
        }

        Ok(markers)
    }
}
