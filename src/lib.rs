//! Locate a version token inside free-form text (a user-agent string, a
//! product banner), extract its components with a replaceable grammar and
//! normalize them into a canonical `Version`.
//!
//! ```
//! use version_detector::VersionFactory;
//!
//! let factory = VersionFactory::new();
//! let version = factory.detect_version("Firefox/4.0b8", &["Firefox"]);
//! assert_eq!(version.version().as_deref(), Some("4.0.0-beta+8"));
//! ```

pub mod error;
pub mod factory;
mod i18n;
pub mod locator;
mod macros;
pub mod parser;
pub mod version;

pub use error::{Error, Result, StructureReason};
pub use factory::VersionFactory;
pub use i18n::I18N_LOADER;
pub use locator::Marker;
pub use parser::{Grammar, DEFAULT_PATTERN};
pub use version::{Stability, Version, VersionData, VersionFields};
