//! The shared template pair and the Liquid engine that renders it.

use std::path::Path;

use crate::error::{Error, Result};
use crate::files;

pub(crate) const DEFAULT_LAYOUT: &str = include_str!("templates/index.liquid");
pub(crate) const DEFAULT_STYLE: &str = include_str!("templates/style.css");

const TEMPLATE_DIR: &str = "templates";
const TEMPLATE_SET: &str = "base";

/// The HTML skeleton plus the stylesheet, both Liquid sources.
pub(crate) struct Templates {
    pub(crate) layout: String,
    pub(crate) style: String,
}

impl Templates {
    /// Load the shared templates from `templates/base/` under the project
    /// root; files that are absent fall back to the built-in defaults.
    pub(crate) fn load(root: &Path) -> Result<Self> {
        let dir = root.join(TEMPLATE_DIR).join(TEMPLATE_SET);
        let layout = Self::load_one(&dir.join("index.liquid"), DEFAULT_LAYOUT)?;
        let style = Self::load_one(&dir.join("style.css"), DEFAULT_STYLE)?;
        Ok(Self { layout, style })
    }

    fn load_one(path: &Path, default: &str) -> Result<String> {
        if path.is_file() {
            log::debug!("Using template {}", path.display());
            files::read_file(path)
        } else {
            Ok(default.to_owned())
        }
    }
}

pub(crate) struct Engine {
    parser: liquid::Parser,
}

impl Engine {
    pub(crate) fn new() -> Result<Self> {
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .map_err(|e| Error::Render {
                name: "parser".to_owned(),
                source: e,
            })?;
        Ok(Self { parser })
    }

    pub(crate) fn render(
        &self,
        name: &str,
        text: &str,
        globals: &liquid::Object,
    ) -> Result<String> {
        let template = self.parser.parse(text).map_err(|e| Error::Render {
            name: name.to_owned(),
            source: e,
        })?;
        template.render(globals).map_err(|e| Error::Render {
            name: name.to_owned(),
            source: e,
        })
    }
}
