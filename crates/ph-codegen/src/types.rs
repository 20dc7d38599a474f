//! Template contexts.
//!
//! One struct per template; field names match the placeholders in
//! `templates/`.

use serde::Serialize;

/// Context for `dts/props`.
#[derive(Debug, Clone, Serialize)]
pub struct PropsContext {
    /// Weight names forming the `weight` union, in enumeration order
    pub weights: Vec<&'static str>,
}

/// Context for `dts/preamble`.
#[derive(Debug, Clone, Serialize)]
pub struct PreambleContext<'a> {
    /// Rendered props type
    pub props_type: &'a str,
}

/// Context for `dts/declaration`.
///
/// # Examples
///
/// ```
/// use ph_codegen::types::DeclarationContext;
///
/// let context = DeclarationContext {
///     name: "acorn",
///     output_name: "PhAcorn".to_string(),
///     categories: "nature, food".to_string(),
///     published_in: "2.0",
///     props_type: "Partial<{}>",
/// };
/// assert_eq!(context.output_name, "PhAcorn");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct DeclarationContext<'a> {
    /// Catalog identifier
    pub name: &'a str,
    /// Generated component name
    pub output_name: String,
    /// Categories joined with `", "`
    pub categories: String,
    /// Version that introduced the icon
    pub published_in: &'a str,
    /// Rendered props type, inlined into the signature
    pub props_type: &'a str,
}

/// Context for `astro/component`.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentContext {
    /// One entry per weight, in enumeration order
    pub weights: Vec<WeightMarkup>,
}

/// Markup of one weight, ready to sit inside a single-quoted JS string.
#[derive(Debug, Clone, Serialize)]
pub struct WeightMarkup {
    /// Weight name
    pub name: &'static str,
    /// Escaped inner markup
    pub markup: String,
}

/// Context for `js/export`.
#[derive(Debug, Clone, Serialize)]
pub struct ExportContext {
    /// Generated component name
    pub output_name: String,
    /// Component file extension, without the dot
    pub extension: &'static str,
}
