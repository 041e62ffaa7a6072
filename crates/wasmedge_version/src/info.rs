use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// A release triple together with the plugin API version it ships.
///
/// There is no stored version string: it is always rendered from the triple,
/// either through [`Display`](fmt::Display) or [`VersionInfo::version_string`].
///
/// Serializes as a struct with the fields `major`, `minor`, `patch`,
/// `version` and `plugin_api`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VersionInfo {
    major: u32,
    minor: u32,
    patch: u32,
    plugin_api: u32,
}

impl VersionInfo {
    /// Bundle a release triple and a plugin API version.
    pub const fn new(major: u32, minor: u32, patch: u32, plugin_api: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            plugin_api,
        }
    }

    /// The version this crate was built as.
    pub const fn current() -> Self {
        crate::VERSION_INFO
    }

    /// Major release number.
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Minor release number.
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch release number.
    pub const fn patch(&self) -> u32 {
        self.patch
    }

    /// Plugin API version.
    pub const fn plugin_api(&self) -> u32 {
        self.plugin_api
    }

    /// The release triple as `(major, minor, patch)`.
    pub const fn release(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }

    /// `"{major}.{minor}.{patch}"`
    pub fn version_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Serialize for VersionInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("VersionInfo", 5)?;
        state.serialize_field("major", &self.major)?;
        state.serialize_field("minor", &self.minor)?;
        state.serialize_field("patch", &self.patch)?;
        state.serialize_field("version", &self.version_string())?;
        state.serialize_field("plugin_api", &self.plugin_api)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 11, 2 => "0.11.2")]
    #[test_case(0, 0, 0 => "0.0.0")]
    #[test_case(1, 2, 3 => "1.2.3")]
    #[test_case(u32::MAX, 0, 10 => "4294967295.0.10")]
    fn display_joins_triple_with_dots(major: u32, minor: u32, patch: u32) -> String {
        VersionInfo::new(major, minor, patch, 2).to_string()
    }

    #[test]
    fn version_string_matches_display() {
        let info = VersionInfo::new(3, 14, 15, 9);
        pretty_assertions::assert_eq!(info.version_string(), format!("{info}"));
    }

    #[test]
    fn current_is_the_crate_version() {
        let info = VersionInfo::current();
        pretty_assertions::assert_eq!(info.release(), (0, 11, 2));
        pretty_assertions::assert_eq!(info.plugin_api(), 2);
    }

    #[test]
    fn serializes_derived_version_field() {
        let json = serde_json::to_value(VersionInfo::current()).unwrap();
        pretty_assertions::assert_eq!(
            json,
            serde_json::json!({
                "major": 0,
                "minor": 11,
                "patch": 2,
                "version": "0.11.2",
                "plugin_api": 2,
            })
        );
    }
}
