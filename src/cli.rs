use crate::command::{json_config::JsonConfigArgs, manifest::ManifestArgs};
use clap::Parser;

/// The command-line tools shipped with this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// `update-manifest-version`
    ManifestVersion,
    /// `update-manifest-version-unconditional`
    UnconditionalManifestVersion,
    /// `update-json-config-version`
    JsonConfigVersion,
}

/// Set the version in a manifest's [package] section.
///
/// Fails without writing if the manifest already has the requested version.
#[derive(Parser)]
#[command(name = "update-manifest-version", version)]
pub struct ManifestCli {
    #[command(flatten)]
    pub args: ManifestArgs,
}

/// Set the version in a manifest's [package] section, even if unchanged.
#[derive(Parser)]
#[command(name = "update-manifest-version-unconditional", version)]
pub struct UnconditionalManifestCli {
    #[command(flatten)]
    pub args: ManifestArgs,
}

/// Set the top-level "version" of a JSON application config.
///
/// Fails without writing if the config already has the requested version.
#[derive(Parser)]
#[command(name = "update-json-config-version", version)]
pub struct JsonConfigCli {
    #[command(flatten)]
    pub args: JsonConfigArgs,
}
