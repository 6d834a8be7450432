use crate::render::error::RenderError;
use crate::unit::models::{Unit, UnitLiteral};
use handlebars::{no_escape, Handlebars};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER_TEMPLATE: &str = "header";
pub const SOURCE_TEMPLATE: &str = "source";

/// Substitution context shared by the header and source templates.
#[derive(Debug, Serialize)]
struct RenderContext<'a> {
    unit_namespace: &'a str,
    unit_name: &'a str,
    unit_id: i64,
    literals: &'a [UnitLiteral],
    create_literals: bool,
    export_macro: &'a str,
}

/// Renders the header/source pair for a unit from the two template files.
pub struct UnitRenderer {
    handlebars: Handlebars<'static>,
}

impl UnitRenderer {
    /// Load `header.template` and `source.template` from the given directory
    /// and register them. Both files are read once; a missing file or bad
    /// template syntax is fatal.
    pub fn from_directory<P: AsRef<Path>>(template_dir: P) -> Result<Self, RenderError> {
        let dir = template_dir.as_ref();
        let mut handlebars = Handlebars::new();

        // Output is C++ source, not HTML
        handlebars.register_escape_fn(no_escape);

        for name in [HEADER_TEMPLATE, SOURCE_TEMPLATE] {
            let path = dir.join(format!("{}.template", name));
            let raw = fs::read_to_string(&path)
                .map_err(|e| RenderError::TemplateLoad(format!("{}: {}", path.display(), e)))?;
            handlebars
                .register_template_string(name, raw)
                .map_err(|e| RenderError::TemplateSyntax(e.to_string()))?;
        }

        Ok(Self { handlebars })
    }

    pub fn render_header(&self, unit: &Unit) -> Result<String, RenderError> {
        self.render(HEADER_TEMPLATE, unit)
    }

    pub fn render_source(&self, unit: &Unit) -> Result<String, RenderError> {
        self.render(SOURCE_TEMPLATE, unit)
    }

    fn render(&self, template: &str, unit: &Unit) -> Result<String, RenderError> {
        let context = RenderContext {
            unit_namespace: &unit.namespace,
            unit_name: &unit.name,
            unit_id: unit.unit_id,
            literals: &unit.literals,
            create_literals: unit.has_literals(),
            export_macro: &unit.export_macro,
        };

        self.handlebars
            .render(template, &context)
            .map_err(|e| RenderError::TemplateRender(e.to_string()))
    }
}

/// Template directory shipped with the tool: `templates/` next to the
/// executable, with the crate manifest directory as fallback so development
/// runs and tests find the bundled templates.
pub fn default_template_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let installed = dir.join("templates");
            if installed.exists() {
                return installed;
            }
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}
