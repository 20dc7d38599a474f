//! Renderers for every generated artifact.
//!
//! All functions are pure: they take catalog data and return text. The
//! props type is rendered once and then inlined, verbatim, into the
//! preamble and every per-icon declaration, so each declaration carries
//! its full parameter type without an import hop.

use crate::template_engine::TemplateEngine;
use crate::types::{
    ComponentContext, DeclarationContext, ExportContext, PreambleContext, PropsContext,
    WeightMarkup,
};
use ph_core::{IconEntry, Result, Weight, WeightMap};

/// File extension of generated components.
pub const COMPONENT_EXTENSION: &str = "astro";

/// Directory (relative to the output root) holding the components.
pub const COMPONENTS_DIR: &str = "components";

/// Relative path of the component generated for `entry`.
///
/// # Examples
///
/// ```
/// use ph_codegen::render::component_path;
/// use ph_core::IconEntry;
///
/// let entry = IconEntry::new("test-icon", "TestIcon", vec![], "1.0");
/// assert_eq!(component_path(&entry), "components/PhTestIcon.astro");
/// ```
#[must_use]
pub fn component_path(entry: &IconEntry) -> String {
    format!(
        "{COMPONENTS_DIR}/{}.{COMPONENT_EXTENSION}",
        entry.output_name()
    )
}

/// Escapes markup for a single-quoted JavaScript string literal.
///
/// # Examples
///
/// ```
/// use ph_codegen::render::escape_single_quoted;
///
/// assert_eq!(escape_single_quoted("<path d=\"M0 0\"/>"), "<path d=\"M0 0\"/>");
/// assert_eq!(escape_single_quoted("it's"), "it\\'s");
/// assert_eq!(escape_single_quoted("a\nb"), "a\\nb");
/// ```
#[must_use]
pub fn escape_single_quoted(markup: &str) -> String {
    let mut escaped = String::with_capacity(markup.len());
    for c in markup.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\'' => escaped.push_str("\\'"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{2028}' => escaped.push_str("\\u2028"),
            '\u{2029}' => escaped.push_str("\\u2029"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Renders components, declarations and module exports.
///
/// # Examples
///
/// ```
/// use ph_codegen::Renderer;
/// use ph_core::IconEntry;
///
/// let renderer = Renderer::new().unwrap();
/// let entry = IconEntry::new("acorn", "Acorn", vec!["nature".into()], "2.0");
///
/// let declaration = renderer.declaration(&entry).unwrap();
/// assert!(declaration.contains("export declare function PhAcorn("));
/// assert!(declaration.contains(renderer.props_type()));
/// ```
#[derive(Debug)]
pub struct Renderer<'a> {
    engine: TemplateEngine<'a>,
    props_type: String,
}

impl Renderer<'_> {
    /// Creates a renderer and renders the shared props type.
    ///
    /// # Errors
    ///
    /// Returns error if the template engine cannot be created or the props
    /// type fails to render.
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;

        let props_type = engine.render(
            "dts/props",
            &PropsContext {
                weights: Weight::ALL.iter().map(Weight::as_str).collect(),
            },
        )?;

        Ok(Self {
            engine,
            props_type: props_type.trim_end().to_string(),
        })
    }

    /// The props type shared by the preamble and every declaration.
    #[must_use]
    pub fn props_type(&self) -> &str {
        &self.props_type
    }

    /// Header of `index.d.ts`: type import plus the exported props alias.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails.
    pub fn preamble(&self) -> Result<String> {
        self.engine.render(
            "dts/preamble",
            &PreambleContext {
                props_type: &self.props_type,
            },
        )
    }

    /// Documented declaration stub for one icon.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails.
    pub fn declaration(&self, entry: &IconEntry) -> Result<String> {
        self.engine.render(
            "dts/declaration",
            &DeclarationContext {
                name: &entry.name,
                output_name: entry.output_name(),
                categories: entry.categories.join(", "),
                published_in: &entry.published_in,
                props_type: &self.props_type,
            },
        )
    }

    /// Full source of one Astro component embedding every weight.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails.
    pub fn component(&self, weights: &WeightMap) -> Result<String> {
        let context = ComponentContext {
            weights: weights
                .iter()
                .map(|(weight, markup)| WeightMarkup {
                    name: weight.as_str(),
                    markup: escape_single_quoted(markup),
                })
                .collect(),
        };

        self.engine.render("astro/component", &context)
    }

    /// Re-export line for `index.js`, including the trailing newline.
    ///
    /// # Errors
    ///
    /// Returns error if rendering fails.
    pub fn export_line(&self, entry: &IconEntry) -> Result<String> {
        self.engine.render(
            "js/export",
            &ExportContext {
                output_name: entry.output_name(),
                extension: COMPONENT_EXTENSION,
            },
        )
    }
}
