//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the built-in Astro,
//! declaration and module templates pre-registered. HTML escaping is
//! disabled: templates emit TypeScript, JavaScript and raw SVG markup,
//! never HTML text.
//!
//! # Examples
//!
//! ```
//! use ph_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let line = engine
//!     .render("js/export", &json!({"output_name": "PhAcorn", "extension": "astro"}))
//!     .unwrap();
//! assert_eq!(
//!     line,
//!     "export { default as PhAcorn } from \"./components/PhAcorn.astro\";\n"
//! );
//! ```

use handlebars::Handlebars;
use ph_core::{Error, Result};
use serde::Serialize;

/// Built-in templates as `(name, source)` pairs.
const BUILTIN_TEMPLATES: [(&str, &str); 5] = [
    (
        "astro/component",
        include_str!("../templates/astro/component.astro.hbs"),
    ),
    ("dts/props", include_str!("../templates/dts/props.d.ts.hbs")),
    (
        "dts/preamble",
        include_str!("../templates/dts/preamble.d.ts.hbs"),
    ),
    (
        "dts/declaration",
        include_str!("../templates/dts/declaration.d.ts.hbs"),
    ),
    ("js/export", include_str!("../templates/js/export.js.hbs")),
];

/// Template engine for code generation.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl TemplateEngine<'_> {
    /// Creates a new template engine with registered templates.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        for (name, source) in BUILTIN_TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::RenderError {
                    message: format!("Failed to register {name} template: {e}"),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - Template rendering fails (including missing fields in strict mode)
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::RenderError {
                message: format!("Template rendering failed: {e}"),
            })
    }

    /// Registers a custom template.
    ///
    /// Registering under an existing name replaces that template.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use ph_codegen::template_engine::TemplateEngine;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("custom", "// {{name}}").unwrap();
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::RenderError {
                message: format!("Failed to register template '{name}': {e}"),
            })
    }

    /// Returns `true` if a template is registered under `name`.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
