//! Configuration loader for menutray.
//!
//! `defaults/menutray.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. [`Loader`] collects the places a tray takes its settings from and
//! layers them in a fixed order, lowest first:
//!
//! 1. the embedded defaults
//! 2. the user file, `$XDG_CONFIG_HOME/menutray/config.toml` (skipped when absent)
//! 3. an explicit file (`--config`), which must exist
//! 4. the tray title and icon given on the command line
//!
//! The order does not depend on the order of the builder calls.

use ::config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../defaults/menutray.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TrayConfig {
    pub tray: TraySettings,
    pub render: RenderConfig,
    pub shell: ShellConfig,
    pub icons: IconsConfig,
}

/// What the tray itself shows.
#[derive(Debug, Clone, Deserialize)]
pub struct TraySettings {
    /// Tooltip and root menu title.
    pub title: String,
    /// Icon name or path of the tray icon.
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Output format used by `menutray show`.
    pub format: String,
    /// Treeviz label width.
    pub truncate: usize,
}

/// How entry commands are run: `program args... <command>`.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellConfig {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IconsConfig {
    /// Data directories searched for icons; empty means derive from the environment.
    pub data_dirs: Vec<PathBuf>,
    pub theme: String,
}

/// The configuration sources of one run.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    user_file: Option<PathBuf>,
    file: Option<PathBuf>,
    title: Option<String>,
    icon: Option<String>,
}

impl Loader {
    /// Only the embedded defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// The defaults plus the user file found through the environment, if any.
    pub fn from_env() -> Self {
        Self {
            user_file: user_config_path(),
            ..Self::default()
        }
    }

    /// Use `path` as the user file. It may be missing.
    pub fn user_file(mut self, path: impl AsRef<Path>) -> Self {
        self.user_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Layer an explicit file over the user file. A missing file is an error.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn build(&self) -> Result<TrayConfig, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        if let Some(path) = &self.user_file {
            debug!(path = %path.display(), "layering user configuration");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        if let Some(path) = &self.file {
            debug!(path = %path.display(), "layering configuration file");
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        if let Some(title) = &self.title {
            builder = builder.set_override("tray.title", title.as_str())?;
        }
        if let Some(icon) = &self.icon {
            builder = builder.set_override("tray.icon", icon.as_str())?;
        }
        builder.build()?.try_deserialize()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<TrayConfig, ConfigError> {
    Loader::new().build()
}

/// `$XDG_CONFIG_HOME/menutray/config.toml`, falling back to `~/.config`.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(base.join("menutray").join("config.toml"))
}
