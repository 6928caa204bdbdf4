/// Layered configuration loading
///
/// Sources, lowest priority first:
/// 1. built-in defaults (`WipeConfig::default`)
/// 2. the per-user file `<config dir>/sayonara-shred/config.toml`, if present
/// 3. an explicit file passed on the command line (must exist)
/// 4. `SAYONARA_SHRED_*` environment variables
use crate::WipeConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "SAYONARA_SHRED";

/// Location of the per-user config file, if the platform has a config dir
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sayonara-shred").map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn load_config(explicit: Option<&Path>) -> Result<WipeConfig> {
    load_layered(user_config_path(), explicit, ENV_PREFIX)
}

pub(crate) fn load_layered(
    user_file: Option<PathBuf>,
    explicit: Option<&Path>,
    env_prefix: &str,
) -> Result<WipeConfig> {
    let mut builder = Config::builder();

    if let Some(path) = user_file {
        tracing::debug!(path = %path.display(), "Looking for user config");
        builder = builder.add_source(File::from(path).required(false));
    }

    if let Some(path) = explicit {
        builder = builder.add_source(File::from(path.to_path_buf()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(env_prefix));

    let config = builder
        .build()
        .context("Failed to read configuration")?
        .try_deserialize::<WipeConfig>()
        .context("Invalid configuration")?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
