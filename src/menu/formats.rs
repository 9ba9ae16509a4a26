//! Output formats for menu trees
//!
//! Every format renders the [`MenuSnapshot`] of a tree, so none of them walks the arena
//! itself.

pub mod registry;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter, RenderOptions, DEFAULT_WIDTH};
pub use treeviz::{to_treeviz_str, TreevizFormatter};

use crate::menu::ast::MenuSnapshot;

/// Pretty-printed JSON of the tree snapshot
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn description(&self) -> &'static str {
        "Tree snapshot as pretty-printed JSON"
    }

    fn render(&self, menu: &MenuSnapshot, _options: &RenderOptions) -> Result<String, FormatError> {
        serde_json::to_string_pretty(menu)
            .map(|mut out| {
                out.push('\n');
                out
            })
            .map_err(|e| FormatError::Render {
                format: "json",
                message: e.to_string(),
            })
    }
}

/// YAML of the tree snapshot
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn description(&self) -> &'static str {
        "Tree snapshot as YAML"
    }

    fn render(&self, menu: &MenuSnapshot, _options: &RenderOptions) -> Result<String, FormatError> {
        serde_yaml::to_string(menu).map_err(|e| FormatError::Render {
            format: "yaml",
            message: e.to_string(),
        })
    }
}
