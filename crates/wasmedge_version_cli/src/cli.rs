use std::fmt::Display;
use std::io::Write;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use wasmedge_version::{VersionInfo, VERSION_STRING};

use crate::error::CliResult;
use crate::trace::Output;

/// Report the WasmEdge C API version this build was made against.
#[derive(Debug, Parser)]
#[command(author, version = VERSION_STRING, about, long_about = None)]
pub struct WasmEdgeVersion {
    /// Which part of the version to print.
    #[arg(value_enum, default_value_t = Field::Version)]
    pub field: Field,

    /// How to print it.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Structured logging to stderr: Log, Compact, Json or None.
    #[arg(long, env = "WASMEDGE_VERSION_LOG", default_value = "None")]
    pub structured: Output,
}

/// A piece of the version information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Field {
    /// Release triple, version string and plugin API version together.
    Full,
    /// `"{major}.{minor}.{patch}"`
    Version,
    /// Major release number.
    Major,
    /// Minor release number.
    Minor,
    /// Patch release number.
    Patch,
    /// Plugin API version.
    PluginApi,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human readable, one line.
    Text,
    /// A single JSON document on one line.
    Json,
    /// A YAML document.
    Yaml,
}

impl WasmEdgeVersion {
    /// Write the requested field to `out` in the requested format.
    pub fn run(&self, out: &mut impl Write) -> CliResult<()> {
        let info = VersionInfo::current();
        tracing::info!(field = ?self.field, format = ?self.format, version = %info, "reporting version");

        match self.field {
            Field::Full => self.format.emit(
                out,
                &info,
                format!("WasmEdge {} (plugin API {})", info, info.plugin_api()),
            ),
            Field::Version => self.format.emit(out, VERSION_STRING, VERSION_STRING),
            Field::Major => self.format.emit(out, &info.major(), info.major()),
            Field::Minor => self.format.emit(out, &info.minor(), info.minor()),
            Field::Patch => self.format.emit(out, &info.patch(), info.patch()),
            Field::PluginApi => self.format.emit(out, &info.plugin_api(), info.plugin_api()),
        }
    }
}

impl Format {
    fn emit<T>(self, out: &mut impl Write, value: &T, text: impl Display) -> CliResult<()>
    where
        T: Serialize + ?Sized,
    {
        match self {
            Format::Text => writeln!(out, "{text}")?,
            Format::Json => {
                serde_json::to_writer(&mut *out, value)?;
                writeln!(out)?;
            }
            Format::Yaml => serde_yaml::to_writer(&mut *out, value)?,
        }
        tracing::trace!(format = ?self, "written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(args: &[&str]) -> String {
        let cmd = WasmEdgeVersion::try_parse_from(
            std::iter::once("wasmedge-version").chain(args.iter().copied()),
        )
        .unwrap();
        let mut out = Vec::new();
        cmd.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn defaults_to_version_string_as_text() {
        let cmd = WasmEdgeVersion::try_parse_from(["wasmedge-version"]).unwrap();
        assert_eq!(cmd.field, Field::Version);
        assert_eq!(cmd.format, Format::Text);
        assert_eq!(run(&[]), "0.11.2\n");
    }

    #[test]
    fn text_fields() {
        assert_eq!(run(&["major"]), "0\n");
        assert_eq!(run(&["minor"]), "11\n");
        assert_eq!(run(&["patch"]), "2\n");
        assert_eq!(run(&["plugin-api"]), "2\n");
        assert_eq!(run(&["full"]), "WasmEdge 0.11.2 (plugin API 2)\n");
    }

    #[test]
    fn json_full() {
        let out = run(&["full", "--format", "json"]);
        assert!(out.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "major": 0,
                "minor": 11,
                "patch": 2,
                "version": "0.11.2",
                "plugin_api": 2,
            })
        );
    }

    #[test]
    fn json_scalars() {
        assert_eq!(run(&["-f", "json"]), "\"0.11.2\"\n");
        assert_eq!(run(&["plugin-api", "-f", "json"]), "2\n");
    }

    #[test]
    fn yaml_full() {
        let out = run(&["full", "--format", "yaml"]);
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value["version"].as_str(), Some("0.11.2"));
        assert_eq!(value["minor"].as_u64(), Some(11));
        assert_eq!(value["plugin_api"].as_u64(), Some(2));
    }

    #[test]
    fn rejects_unknown_field() {
        assert!(WasmEdgeVersion::try_parse_from(["wasmedge-version", "build"]).is_err());
    }

    #[test]
    fn structured_output_flag() {
        let cmd =
            WasmEdgeVersion::try_parse_from(["wasmedge-version", "--structured", "Json"]).unwrap();
        assert_eq!(cmd.structured, Output::Json);
    }
}
