//! Build version strings such as `10.2.5.53040`
//!
//! The `VersionsName` column of a versions table holds the client version and
//! build number joined with dots. Components are kept as text so leading
//! zeros survive; only the interface version needs them as numbers.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch.build` version
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildVersion {
    /// Major version (expansion number)
    pub major: String,
    /// Minor version
    pub minor: String,
    /// Patch version
    pub patch: String,
    /// Build number
    pub build: String,
}

impl BuildVersion {
    /// Parse a dotted version string with exactly four components
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let mut parts = s.split('.');
        match (
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
            parts.next(),
        ) {
            (Some(major), Some(minor), Some(patch), Some(build), None) => Ok(Self {
                major: major.to_string(),
                minor: minor.to_string(),
                patch: patch.to_string(),
                build: build.to_string(),
            }),
            _ => Err(FormatError::InvalidBuildVersion(s.to_string())),
        }
    }

    /// Display version, `major.minor.patch`
    #[must_use]
    pub fn version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Build number
    #[must_use]
    pub fn build(&self) -> &str {
        &self.build
    }

    /// Numeric interface version used by addon TOC files
    ///
    /// `major` as-is followed by `minor` and `patch` zero-padded to two
    /// digits: `10.2.5` becomes `100205`, `1.0.0` becomes `10000`.
    pub fn interface_version(&self) -> Result<String, FormatError> {
        let minor = parse_component("minor", &self.minor)?;
        let patch = parse_component("patch", &self.patch)?;
        Ok(format!("{}{minor:02}{patch:02}", self.major))
    }
}

fn parse_component(component: &'static str, value: &str) -> Result<u64, FormatError> {
    value
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidVersionComponent {
            component,
            value: value.to_string(),
        })
}

impl FromStr for BuildVersion {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.patch, self.build
        )
    }
}
