use std::{fmt, str::FromStr};

/// Coarse release maturity of a version, independent of its numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Beta,
    Alpha,
    Dev,
    Patch,
    Rc,
}

impl Default for Stability {
    fn default() -> Self {
        Stability::Stable
    }
}

impl Stability {
    /// Classify a raw token captured next to a version number.
    ///
    /// Short aliases are accepted (`a`, `b`, `d`, `p`, `pl`) and anything
    /// unrecognized falls back to `Stable` instead of failing.
    pub fn classify(token: Option<&str>) -> Self {
        match token.map(str::to_ascii_lowercase).as_deref() {
            Some("rc") => Stability::Rc,
            Some("alpha") | Some("a") => Stability::Alpha,
            Some("beta") | Some("b") => Stability::Beta,
            Some("dev") | Some("d") => Stability::Dev,
            Some("patch") | Some("pl") | Some("p") => Stability::Patch,
            _ => Stability::Stable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Stable => "stable",
            Stability::Beta => "beta",
            Stability::Alpha => "alpha",
            Stability::Dev => "dev",
            Stability::Patch => "patch",
            Stability::Rc => "RC",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parsing of the display labels, used for pre-structured data
impl FromStr for Stability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stable" => Ok(Stability::Stable),
            "beta" => Ok(Stability::Beta),
            "alpha" => Ok(Stability::Alpha),
            "dev" => Ok(Stability::Dev),
            "patch" => Ok(Stability::Patch),
            "rc" => Ok(Stability::Rc),
            _ => Err(s.to_owned()),
        }
    }
}
