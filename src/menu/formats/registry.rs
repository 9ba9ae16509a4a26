//! Format registry
//!
//! A format renders the [`MenuSnapshot`] of a tree, never the arena itself: the registry takes
//! the snapshot once per call and hands it to the named formatter together with the
//! [`RenderOptions`] of the run (`render.*` in the configuration).
//!
//! Formats are listed in registration order, built-ins first, so `menutray formats` shows the
//! default format on top.

use crate::config::RenderConfig;
use crate::menu::ast::{snapshot_from_tree, MenuSnapshot, MenuTree};
use thiserror::Error;

/// Label width used when nothing is configured
pub const DEFAULT_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("unknown format '{name}' (available: {available})")]
    UnknownFormat { name: String, available: String },

    #[error("cannot render {format}: {message}")]
    Render {
        format: &'static str,
        message: String,
    },
}

/// Per-run settings shared by every format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Labels longer than this many characters are cut, in formats meant for reading.
    pub width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            width: config.truncate,
        }
    }
}

/// One output format of a menu.
pub trait Formatter: Send + Sync {
    fn name(&self) -> &'static str;

    /// One-line summary shown by `menutray formats`.
    fn description(&self) -> &'static str;

    fn render(&self, menu: &MenuSnapshot, options: &RenderOptions) -> Result<String, FormatError>;
}

pub struct FormatRegistry {
    formatters: Vec<Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// A registry without any format.
    pub fn empty() -> Self {
        Self {
            formatters: Vec::new(),
        }
    }

    /// treeviz, json and yaml.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(super::TreevizFormatter);
        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry
    }

    /// Add a format. A format with the same name is replaced in place.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        match self
            .formatters
            .iter_mut()
            .find(|existing| existing.name() == formatter.name())
        {
            Some(slot) => *slot = Box::new(formatter),
            None => self.formatters.push(Box::new(formatter)),
        }
    }

    pub fn formatters(&self) -> impl Iterator<Item = &dyn Formatter> {
        self.formatters.iter().map(|f| f.as_ref())
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.formatters().map(Formatter::name).collect()
    }

    /// Look a format up; the error lists what is available.
    pub fn get(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters()
            .find(|f| f.name() == name)
            .ok_or_else(|| FormatError::UnknownFormat {
                name: name.to_string(),
                available: self.names().join(", "),
            })
    }

    /// Render a whole tree in the named format.
    pub fn render(
        &self,
        tree: &MenuTree,
        format: &str,
        options: &RenderOptions,
    ) -> Result<String, FormatError> {
        self.get(format)?
            .render(&snapshot_from_tree(tree), options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
