use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    error::{Error, Result, StructureReason},
    locator::{self, Marker},
    parser::{Grammar, DEFAULT_PATTERN},
    version::{Stability, Version, VersionData, VersionFields},
};

/// Entry point for turning text or structured data into a `Version`.
///
/// A factory owns one grammar. Parsing never mutates it, so a factory that
/// is configured once can be shared freely; replacing the grammar needs
/// `&mut self`.
#[derive(Debug, Clone, Default)]
pub struct VersionFactory {
    grammar: Grammar,
}

impl VersionFactory {
    /// A factory using the built-in grammar
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory using a custom grammar, validated up front
    pub fn with_regex(pattern: &str) -> Result<Self> {
        Ok(Self {
            grammar: Grammar::new(pattern)?,
        })
    }

    /// Replace the grammar for subsequent calls.
    ///
    /// On error the current grammar is left untouched.
    pub fn set_regex(&mut self, pattern: &str) -> Result<()> {
        self.grammar = Grammar::new(pattern)?;
        debug!(pattern, "grammar replaced");

        Ok(())
    }

    pub fn pattern(&self) -> &str {
        self.grammar.pattern()
    }

    /// Whether the built-in grammar is in use
    pub fn is_default(&self) -> bool {
        self.grammar.pattern() == DEFAULT_PATTERN
    }

    /// Parse `text` directly, without searching for a marker
    pub fn set(&self, text: &str) -> Version {
        self.grammar.parse(text)
    }

    /// Locate the first present marker in `text` and parse what follows it
    pub fn detect_version<I>(&self, text: &str, markers: I) -> Version
    where
        I: IntoIterator,
        I::Item: Marker,
    {
        match locator::locate(text, markers) {
            Some(offset) => self.grammar.parse(&text[offset..]),
            None => {
                debug!(text, "no marker found");
                Version::NotFound
            }
        }
    }

    /// Build a version from pre-structured data, bypassing extraction.
    ///
    /// `major` must be present; `minor` and `micro` default to `"0"` and
    /// `stability` to `stable`. Every numeric field and `build` must be a
    /// run of decimal digits, and empty strings count as absent.
    pub fn from_array(data: &VersionData) -> Result<Version> {
        let major = digits("major", &data.major)?.ok_or(Error::Structure {
            key: "major",
            reason: StructureReason::Missing,
        })?;

        let stability = match present(&data.stability) {
            Some(s) => s.parse::<Stability>().map_err(|value| Error::Structure {
                key: "stability",
                reason: StructureReason::UnknownStability(value),
            })?,
            None => Stability::Stable,
        };

        Ok(VersionFields::new(
            major,
            digits("minor", &data.minor)?.unwrap_or_else(|| "0".to_owned()),
            digits("micro", &data.micro)?.unwrap_or_else(|| "0".to_owned()),
            digits("patch", &data.patch)?,
            digits("micropatch", &data.micropatch)?,
            stability,
            digits("build", &data.build)?,
        )
        .into())
    }

    /// Decode a JSON object and build a version from it with `from_array`
    pub fn from_json(text: &str) -> Result<Version> {
        let object: Map<String, Value> = serde_json::from_str(text)?;
        let data: VersionData = serde_json::from_value(Value::Object(object))?;

        Self::from_array(&data)
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Read an optional field that must hold decimal digits only
fn digits(key: &'static str, value: &Option<String>) -> Result<Option<String>> {
    match present(value) {
        Some(s) if s.bytes().all(|b| b.is_ascii_digit()) => Ok(Some(s.to_owned())),
        Some(s) => Err(Error::Structure {
            key,
            reason: StructureReason::NotDigits(s.to_owned()),
        }),
        None => Ok(None),
    }
}
