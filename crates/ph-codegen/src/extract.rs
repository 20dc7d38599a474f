//! SVG inner-markup extraction.
//!
//! The generated components supply their own `<svg>` wrapper, so only
//! the markup between the asset's opening and closing `svg` tags is kept,
//! byte for byte.

use ph_core::{Error, Result, Weight};
use regex::Regex;
use std::sync::LazyLock;

// First <svg ...> element, lazily up to the first closing tag
static SVG_INNER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg[^>]*>([\s\S]*?)</svg>").expect("valid regex"));

/// Returns the markup strictly inside the first `<svg>` element.
///
/// Returns `None` when there is no element or it has no content.
///
/// # Examples
///
/// ```
/// use ph_codegen::extract_inner_svg;
///
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><rect width="256" height="256" fill="none"/></svg>"#;
/// assert_eq!(
///     extract_inner_svg(svg),
///     Some(r#"<rect width="256" height="256" fill="none"/>"#)
/// );
///
/// assert_eq!(extract_inner_svg("<svg></svg>"), None);
/// assert_eq!(extract_inner_svg("<path/>"), None);
/// ```
#[must_use]
pub fn extract_inner_svg(svg: &str) -> Option<&str> {
    SVG_INNER_REGEX
        .captures(svg)
        .and_then(|captures| captures.get(1))
        .map(|inner| inner.as_str())
        .filter(|inner| !inner.is_empty())
}

/// Extracts the inner markup of `icon`'s asset in `weight`.
///
/// # Errors
///
/// Returns [`Error::ExtractionFailure`] naming the icon and weight when
/// the asset has no extractable content.
pub fn extract_weight(icon: &str, weight: Weight, svg: &str) -> Result<String> {
    extract_inner_svg(svg)
        .map(str::to_string)
        .ok_or_else(|| Error::ExtractionFailure {
            icon: icon.to_string(),
            weight,
        })
}
