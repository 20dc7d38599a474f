//! Aggregate outputs and the build summary.
//!
//! The two index files are assembled in memory during the icon loop and
//! handed to the emitter once, at the end, so a failed run never leaves
//! an index that lists missing components.

use serde::{Deserialize, Serialize};

/// Relative path of the aggregate declaration file.
pub const DECLARATIONS_PATH: &str = "index.d.ts";

/// Relative path of the aggregate module file.
pub const MODULE_INDEX_PATH: &str = "index.js";

/// Accumulator for `index.d.ts` and `index.js`.
///
/// Owned by the driver for the duration of one build. Fragments are only
/// ever appended, in catalog order.
///
/// # Examples
///
/// ```
/// use ph_codegen::BuildOutputs;
///
/// let mut outputs = BuildOutputs::new("// preamble\n");
/// outputs.push_icon("PhAcorn", "declare function PhAcorn(): any;\n", "export {};\n");
///
/// assert_eq!(outputs.icon_count(), 1);
/// assert!(outputs.declarations().starts_with("// preamble\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuildOutputs {
    declarations: String,
    modules: String,
    icons: Vec<String>,
}

impl BuildOutputs {
    /// Starts the declaration file with `preamble`.
    #[must_use]
    pub fn new(preamble: impl Into<String>) -> Self {
        Self {
            declarations: preamble.into(),
            modules: String::new(),
            icons: Vec::new(),
        }
    }

    /// Appends one icon's declaration block and export line.
    pub fn push_icon(&mut self, output_name: impl Into<String>, declaration: &str, export: &str) {
        self.declarations.push_str(declaration);
        self.modules.push_str(export);
        self.icons.push(output_name.into());
    }

    /// Content of `index.d.ts` so far.
    #[inline]
    #[must_use]
    pub fn declarations(&self) -> &str {
        &self.declarations
    }

    /// Content of `index.js` so far.
    #[inline]
    #[must_use]
    pub fn modules(&self) -> &str {
        &self.modules
    }

    /// Number of icons appended.
    #[inline]
    #[must_use]
    pub fn icon_count(&self) -> usize {
        self.icons.len()
    }

    /// Output names of the appended icons, in order.
    #[must_use]
    pub fn icons(&self) -> &[String] {
        &self.icons
    }
}

/// Summary of a successful build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Number of generated components
    pub icon_count: usize,
    /// Relative paths written, in write order
    pub files: Vec<String>,
}

impl BuildReport {
    /// Returns the number of files written.
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragments_keep_insertion_order() {
        let mut outputs = BuildOutputs::new("P\n");
        outputs.push_icon("PhB", "B\n", "b\n");
        outputs.push_icon("PhA", "A\n", "a\n");

        assert_eq!(outputs.declarations(), "P\nB\nA\n");
        assert_eq!(outputs.modules(), "b\na\n");
        assert_eq!(outputs.icons(), ["PhB", "PhA"]);
    }

    #[test]
    fn test_empty_outputs_hold_only_preamble() {
        let outputs = BuildOutputs::new("P\n");
        assert_eq!(outputs.declarations(), "P\n");
        assert!(outputs.modules().is_empty());
        assert_eq!(outputs.icon_count(), 0);
    }

    #[test]
    fn test_report_serializes() {
        let report = BuildReport {
            icon_count: 1,
            files: vec!["components/PhA.astro".to_string(), "index.js".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["icon_count"], 1);
        assert_eq!(report.file_count(), 2);
    }
}
