//! Strong domain types for the icon generator.
//!
//! The weight set is closed, so it is modeled as an enum and every
//! per-weight lookup is an exhaustive `match`: forgetting a weight is a
//! compile error rather than a runtime miss.
//!
//! # Examples
//!
//! ```
//! use ph_core::{IconEntry, Weight};
//!
//! let entry = IconEntry::new("acorn", "Acorn", vec!["nature".into()], "2.0");
//! assert_eq!(entry.output_name(), "PhAcorn");
//! assert_eq!(Weight::ALL.len(), 6);
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual weight (style) of an icon.
///
/// Enumeration order is the order used in every generated file, so output
/// stays deterministic.
///
/// # Examples
///
/// ```
/// use ph_core::Weight;
///
/// let weight: Weight = "duotone".parse().unwrap();
/// assert_eq!(weight, Weight::Duotone);
/// assert_eq!(weight.as_str(), "duotone");
/// assert!("heavy".parse::<Weight>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Thin strokes
    Thin,
    /// Light strokes
    Light,
    /// Default weight
    Regular,
    /// Bold strokes
    Bold,
    /// Solid fill
    Fill,
    /// Two-tone
    Duotone,
}

impl Weight {
    /// All weights in output order.
    pub const ALL: [Self; 6] = [
        Self::Thin,
        Self::Light,
        Self::Regular,
        Self::Bold,
        Self::Fill,
        Self::Duotone,
    ];

    /// Returns the lowercase name used in asset paths and generated code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Thin => "thin",
            Self::Light => "light",
            Self::Regular => "regular",
            Self::Bold => "bold",
            Self::Fill => "fill",
            Self::Duotone => "duotone",
        }
    }

    /// Position of the weight in [`Weight::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Thin => 0,
            Self::Light => 1,
            Self::Regular => 2,
            Self::Bold => 3,
            Self::Fill => 4,
            Self::Duotone => 5,
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weight {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|weight| weight.as_str() == s)
            .ok_or_else(|| Error::ConfigError {
                message: format!("unknown weight '{s}'"),
            })
    }
}

/// Inner SVG markup for every weight of one icon.
///
/// Only [`WeightMapBuilder::build`] creates values, and it refuses to do
/// so unless all six weights have non-empty content.
///
/// # Examples
///
/// ```
/// use ph_core::{Weight, WeightMapBuilder};
///
/// let mut builder = WeightMapBuilder::new("acorn");
/// for weight in Weight::ALL {
///     builder.insert(weight, format!("<path d=\"{weight}\"/>"));
/// }
/// let map = builder.build().unwrap();
///
/// assert_eq!(map.get(Weight::Bold), "<path d=\"bold\"/>");
/// assert_eq!(map.iter().count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightMap {
    thin: String,
    light: String,
    regular: String,
    bold: String,
    fill: String,
    duotone: String,
}

impl WeightMap {
    /// Returns the markup for `weight`.
    #[must_use]
    pub fn get(&self, weight: Weight) -> &str {
        match weight {
            Weight::Thin => &self.thin,
            Weight::Light => &self.light,
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
            Weight::Fill => &self.fill,
            Weight::Duotone => &self.duotone,
        }
    }

    /// Iterates `(weight, markup)` pairs in [`Weight::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Weight, &str)> {
        Weight::ALL.into_iter().map(|weight| (weight, self.get(weight)))
    }
}

/// Collects per-weight markup for one icon.
///
/// Inserting the same weight twice keeps the last value.
#[derive(Debug, Clone)]
pub struct WeightMapBuilder {
    icon: String,
    slots: [Option<String>; 6],
}

impl WeightMapBuilder {
    /// Creates an empty builder for `icon`.
    #[must_use]
    pub fn new(icon: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            slots: Default::default(),
        }
    }

    /// Stores the markup for `weight`.
    pub fn insert(&mut self, weight: Weight, markup: impl Into<String>) -> &mut Self {
        self.slots[weight.index()] = Some(markup.into());
        self
    }

    /// Returns `true` once every weight has non-empty markup.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| slot.as_deref().is_some_and(|markup| !markup.is_empty()))
    }

    /// Finishes the map.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompleteWeightMap`] naming the first weight (in
    /// enumeration order) that is missing or empty.
    pub fn build(self) -> Result<WeightMap> {
        let icon = self.icon;
        let [thin, light, regular, bold, fill, duotone] = self.slots;

        let take = |slot: Option<String>, weight: Weight| -> Result<String> {
            match slot {
                Some(markup) if !markup.is_empty() => Ok(markup),
                _ => Err(Error::IncompleteWeightMap {
                    icon: icon.clone(),
                    weight,
                }),
            }
        };

        Ok(WeightMap {
            thin: take(thin, Weight::Thin)?,
            light: take(light, Weight::Light)?,
            regular: take(regular, Weight::Regular)?,
            bold: take(bold, Weight::Bold)?,
            fill: take(fill, Weight::Fill)?,
            duotone: take(duotone, Weight::Duotone)?,
        })
    }
}

/// One icon of the upstream catalog.
///
/// Mirrors the catalog's JSON records; fields the generator does not use
/// (tags, codepoints, aliases) are ignored on deserialization.
///
/// # Examples
///
/// ```
/// use ph_core::IconEntry;
///
/// let entry: IconEntry = serde_json::from_str(r#"{
///     "name": "address-book",
///     "pascal_name": "AddressBook",
///     "categories": ["communication", "people"],
///     "published_in": "1.0",
///     "codepoint": 57344
/// }"#).unwrap();
///
/// assert_eq!(entry.output_name(), "PhAddressBook");
/// assert_eq!(entry.categories.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconEntry {
    /// Canonical kebab-case identifier, also the asset file stem
    pub name: String,
    /// PascalCase variant used for generated symbol names
    pub pascal_name: String,
    /// Category tags in catalog order
    #[serde(default)]
    pub categories: Vec<String>,
    /// Catalog version that introduced the icon
    pub published_in: String,
}

impl IconEntry {
    /// Prefix of every generated component name.
    pub const OUTPUT_PREFIX: &'static str = "Ph";

    /// Creates a catalog entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        pascal_name: impl Into<String>,
        categories: Vec<String>,
        published_in: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pascal_name: pascal_name.into(),
            categories,
            published_in: published_in.into(),
        }
    }

    /// Name of the generated component, e.g. `PhAddressBook`.
    #[must_use]
    pub fn output_name(&self) -> String {
        format!("{}{}", Self::OUTPUT_PREFIX, self.pascal_name)
    }
}
