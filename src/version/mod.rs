use serde::{Deserialize, Serialize};
use std::fmt;

pub use stability::Stability;

mod stability;

/// Pre-structured version data, as accepted by `VersionFactory::from_array`.
///
/// Missing keys and `null` both deserialize to `None`; unknown keys are
/// ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionData {
    pub major: Option<String>,
    pub minor: Option<String>,
    pub micro: Option<String>,
    pub patch: Option<String>,
    pub micropatch: Option<String>,
    pub stability: Option<String>,
    pub build: Option<String>,
}

/// The fields of a located version, kept verbatim as captured
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionFields {
    major: String,
    minor: String,
    micro: String,
    patch: Option<String>,
    micropatch: Option<String>,
    stability: Stability,
    build: Option<String>,
}

impl VersionFields {
    pub(crate) fn new(
        major: String,
        minor: String,
        micro: String,
        patch: Option<String>,
        micropatch: Option<String>,
        stability: Stability,
        build: Option<String>,
    ) -> Self {
        Self {
            major,
            minor,
            micro,
            patch,
            micropatch,
            stability,
            build,
        }
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn micro(&self) -> &str {
        &self.micro
    }

    pub fn patch(&self) -> Option<&str> {
        self.patch.as_deref()
    }

    pub fn micropatch(&self) -> Option<&str> {
        self.micropatch.as_deref()
    }

    pub fn stability(&self) -> Stability {
        self.stability
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }
}

/// Canonical rendering: `major.minor.micro[.patch][.micropatch][-stability][+build]`
impl fmt::Display for VersionFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(patch) = &self.patch {
            write!(f, ".{}", patch)?;
        }
        if let Some(micropatch) = &self.micropatch {
            write!(f, ".{}", micropatch)?;
        }
        if self.stability != Stability::Stable {
            write!(f, "-{}", self.stability)?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build)?;
        }

        Ok(())
    }
}

/// Result of a detection: either a genuine version or nothing at all
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Version {
    Found(VersionFields),
    NotFound,
}

impl Default for Version {
    fn default() -> Self {
        Version::NotFound
    }
}

impl From<VersionFields> for Version {
    fn from(fields: VersionFields) -> Self {
        Version::Found(fields)
    }
}

impl Version {
    pub fn is_found(&self) -> bool {
        matches!(self, Version::Found(_))
    }

    pub fn fields(&self) -> Option<&VersionFields> {
        match self {
            Version::Found(fields) => Some(fields),
            Version::NotFound => None,
        }
    }

    pub fn major(&self) -> Option<&str> {
        self.fields().map(VersionFields::major)
    }

    pub fn minor(&self) -> Option<&str> {
        self.fields().map(VersionFields::minor)
    }

    pub fn micro(&self) -> Option<&str> {
        self.fields().map(VersionFields::micro)
    }

    pub fn patch(&self) -> Option<&str> {
        self.fields().and_then(VersionFields::patch)
    }

    pub fn micropatch(&self) -> Option<&str> {
        self.fields().and_then(VersionFields::micropatch)
    }

    pub fn stability(&self) -> Option<Stability> {
        self.fields().map(VersionFields::stability)
    }

    pub fn build(&self) -> Option<&str> {
        self.fields().and_then(VersionFields::build)
    }

    /// The canonical string, absent for `NotFound`
    pub fn version(&self) -> Option<String> {
        self.fields().map(ToString::to_string)
    }

    pub fn is_beta(&self) -> Option<bool> {
        self.stability().map(|s| s == Stability::Beta)
    }

    pub fn is_alpha(&self) -> Option<bool> {
        self.stability().map(|s| s == Stability::Alpha)
    }

    /// Export the fields as the data `VersionFactory::from_array` accepts.
    /// `NotFound` yields data with every field absent.
    pub fn to_array(&self) -> VersionData {
        let owned = |s: Option<&str>| s.map(str::to_owned);

        VersionData {
            major: owned(self.major()),
            minor: owned(self.minor()),
            micro: owned(self.micro()),
            patch: owned(self.patch()),
            micropatch: owned(self.micropatch()),
            stability: self.stability().map(|s| s.as_str().to_owned()),
            build: owned(self.build()),
        }
    }
}
