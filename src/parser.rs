use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::{
    error::{Error, Result},
    version::{Stability, Version, VersionFields},
};

/// Named group every grammar must provide
pub const MAJOR_GROUP: &str = "major";

/// Built-in grammar for real-world version tokens.
///
/// Accepts an optional run of separators and a `v` before the first digit,
/// up to five numeric components joined by `.` or `_`, then an optional
/// stability token with an optional build number. Anything after that is
/// ignored.
pub const DEFAULT_PATTERN: &str = concat!(
    r"[\s/(:;=-]*v?",
    r"(?P<major>[0-9]+)",
    r"(?:[._](?P<minor>[0-9]+))?",
    r"(?:[._](?P<micro>[0-9]+))?",
    r"(?:[._](?P<patch>[0-9]+))?",
    r"(?:[._](?P<micropatch>[0-9]+))?",
    r"(?:[-_.+ ]?(?P<stability>rc|alpha|beta|dev|patch|pl|a|b|d|p)",
    r"(?:[-_.+ ]?(?P<build>[0-9]+)|\b))?",
);

lazy_static! {
    pub static ref DEFAULT_GRAMMAR: Grammar =
        Grammar::new(DEFAULT_PATTERN).expect("Built-in version pattern must compile.");
}

/// A compiled, validated extraction pattern.
///
/// The pattern is always anchored at the start of the input and matched
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct Grammar {
    pattern: String,
    regex: Regex,
}

/// Raw optional captures of one successful match
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Components<'t> {
    pub major: Option<&'t str>,
    pub minor: Option<&'t str>,
    pub micro: Option<&'t str>,
    pub patch: Option<&'t str>,
    pub micropatch: Option<&'t str>,
    pub stability: Option<&'t str>,
    pub build: Option<&'t str>,
}

impl Grammar {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&format!("^(?:{})", pattern))
            .case_insensitive(true)
            .build()
            .map_err(|source| Error::Pattern {
                pattern: pattern.to_owned(),
                source,
            })?;

        if !regex.capture_names().flatten().any(|n| n == MAJOR_GROUP) {
            return Err(Error::MissingGroup {
                pattern: pattern.to_owned(),
                group: MAJOR_GROUP,
            });
        }

        Ok(Self {
            pattern: pattern.to_owned(),
            regex,
        })
    }

    /// The pattern as supplied, without the anchoring wrapper
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Apply the grammar to the start of `input`
    pub fn extract<'t>(&self, input: &'t str) -> Option<Components<'t>> {
        let caps = self.regex.captures(input)?;
        // Groups that matched nothing count as absent
        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
        };

        let components = Components {
            major: group(MAJOR_GROUP),
            minor: group("minor"),
            micro: group("micro"),
            patch: group("patch"),
            micropatch: group("micropatch"),
            stability: group("stability"),
            build: group("build"),
        };
        trace!(?components, "grammar matched");

        Some(components)
    }

    /// Extract and normalize in one step
    pub fn parse(&self, input: &str) -> Version {
        self.extract(input)
            .map_or(Version::NotFound, normalize)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        DEFAULT_GRAMMAR.clone()
    }
}

impl Components<'_> {
    /// Whether the match captured nothing at all
    pub fn is_empty(&self) -> bool {
        [
            self.major,
            self.minor,
            self.micro,
            self.patch,
            self.micropatch,
            self.stability,
            self.build,
        ]
        .iter()
        .all(Option::is_none)
    }
}

/// Turn raw captures into canonical fields.
///
/// A match that captured nothing is no version at all. Otherwise `major`,
/// `minor` and `micro` default to `"0"`, `patch` and `micropatch` are never
/// filled in, and an unknown stability token degrades to `stable`.
pub fn normalize(components: Components<'_>) -> Version {
    if components.is_empty() {
        return Version::NotFound;
    }

    VersionFields::new(
        components.major.unwrap_or("0").to_owned(),
        components.minor.unwrap_or("0").to_owned(),
        components.micro.unwrap_or("0").to_owned(),
        components.patch.map(str::to_owned),
        components.micropatch.map(str::to_owned),
        Stability::classify(components.stability),
        components.build.map(str::to_owned),
    )
    .into()
}
