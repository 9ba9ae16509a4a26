//! Icon lookup
//!
//! Menu descriptions name icons either by path or by theme name. Names are looked up in the
//! XDG data directories: first `icons/<theme>/<size>/<category>/`, then the `hicolor`
//! fallback theme, then `pixmaps/`.

use crate::config::IconsConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

const FALLBACK_THEME: &str = "hicolor";
const EXTENSIONS: &[&str] = &["svg", "png", "xpm"];
const DEFAULT_DATA_DIRS: &str = "/usr/local/share:/usr/share";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResolver {
    data_dirs: Vec<PathBuf>,
    theme: String,
}

impl IconResolver {
    pub fn with_dirs(data_dirs: Vec<PathBuf>, theme: impl Into<String>) -> Self {
        Self {
            data_dirs,
            theme: theme.into(),
        }
    }

    /// Search `$XDG_DATA_HOME` and `$XDG_DATA_DIRS`.
    pub fn from_env(theme: impl Into<String>) -> Self {
        let mut data_dirs = Vec::new();
        let data_home = std::env::var_os("XDG_DATA_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share"))
            });
        data_dirs.extend(data_home);

        let system = std::env::var("XDG_DATA_DIRS")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIRS.to_string());
        data_dirs.extend(
            system
                .split(':')
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        );
        Self::with_dirs(data_dirs, theme)
    }

    /// Configured directories, or the environment's when none are configured.
    pub fn from_config(config: &IconsConfig) -> Self {
        if config.data_dirs.is_empty() {
            Self::from_env(config.theme.clone())
        } else {
            Self::with_dirs(config.data_dirs.clone(), config.theme.clone())
        }
    }

    pub fn data_dirs(&self) -> &[PathBuf] {
        &self.data_dirs
    }

    /// Path of the icon file for `name`, if one exists.
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_absolute() || name.contains('/') {
            return direct.is_file().then(|| direct.to_path_buf());
        }

        let mut themes = vec![self.theme.as_str()];
        if self.theme != FALLBACK_THEME {
            themes.push(FALLBACK_THEME);
        }
        for theme in themes {
            for dir in &self.data_dirs {
                if let Some(found) = find_in_theme(&dir.join("icons").join(theme), name) {
                    return Some(found);
                }
            }
        }
        self.data_dirs
            .iter()
            .find_map(|dir| find_with_extension(&dir.join("pixmaps"), name))
    }
}

/// Look through `<theme>/<size>/<category>/` in name order.
fn find_in_theme(theme_dir: &Path, name: &str) -> Option<PathBuf> {
    for size in sorted_subdirs(theme_dir) {
        for category in sorted_subdirs(&size) {
            if let Some(found) = find_with_extension(&category, name) {
                return Some(found);
            }
        }
    }
    None
}

fn find_with_extension(dir: &Path, name: &str) -> Option<PathBuf> {
    EXTENSIONS.iter().find_map(|ext| {
        let candidate = dir.join(format!("{}.{}", name, ext));
        trace!(path = %candidate.display(), "icon candidate");
        candidate.is_file().then_some(candidate)
    })
}

fn sorted_subdirs(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
