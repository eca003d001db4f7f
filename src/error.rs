use thiserror::Error;

use crate::fl;

pub type Result<T> = std::result::Result<T, Error>;

/// Why version data was rejected by `VersionFactory::from_array`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureReason {
    #[error("{}", fl!("reason_missing"))]
    Missing,
    #[error("{}", fl!("reason_not_digits", value = .0.to_string()))]
    NotDigits(String),
    #[error("{}", fl!("reason_stability", value = .0.to_string()))]
    UnknownStability(String),
}

#[derive(Error, Debug)]
pub enum Error {
    /// The grammar pattern does not compile
    #[error("{}", fl!("err_pattern", pattern = .pattern.to_string(), reason = .source.to_string()))]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The grammar pattern compiles but lacks a mandatory named group
    #[error("{}", fl!("err_missing_group", pattern = .pattern.to_string(), group = .group.to_string()))]
    MissingGroup {
        pattern: String,
        group: &'static str,
    },

    /// Version data has the wrong shape
    #[error("{}", fl!("err_structure", key = .key.to_string(), reason = .reason.to_string()))]
    Structure {
        key: &'static str,
        reason: StructureReason,
    },

    /// Serialized version data could not be decoded
    #[error("{}", fl!("err_json", reason = .0.to_string()))]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Configuration errors come from building or replacing a grammar
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Pattern { .. } | Error::MissingGroup { .. })
    }
}
