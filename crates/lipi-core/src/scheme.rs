//! Keymap data model: schemes, sections, mappings, and validation.
//!
//! The persisted form is JSON with categories flattened to arrays of mapping
//! objects (see `SchemeStore`); unknown top-level fields are accepted and
//! carried through re-serialization.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::virama::{self, ViramaError};

pub const CAT_CONSONANTS: &str = "consonants";
pub const CAT_MATRAS: &str = "matras";
pub const CAT_VOWELS: &str = "vowels";
pub const CAT_DIGITS: &str = "digits";
pub const CAT_VEDIC: &str = "vedic";
pub const CAT_OTHERS: &str = "others";
pub const CAT_CONJUNCTS: &str = "conjuncts";

/// Category reported for unmatched characters and synthetic emissions.
pub const CAT_OTHER: &str = "other";
/// Category tag for separator-conditioned alternates; exempt from virama
/// insertion.
pub const CAT_WORD_BOUNDARY: &str = "word_boundary";

/// Scheme kind selecting inverse (script → Latin) semantics.
pub const SCHEME_UNICODE: &str = "Unicode";

/// Lookup precedence for categories with engine significance; every other
/// category name sorts after these, lexicographically.
const CATEGORY_PRECEDENCE: [&str; 6] = [
    CAT_CONSONANTS,
    CAT_MATRAS,
    CAT_VOWELS,
    CAT_DIGITS,
    CAT_VEDIC,
    CAT_OTHERS,
];

/// A single transliteration rule: any of the `lhs` tokens produces one of
/// the `rhs` forms (slot selection is category-dependent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    pub lhs: Vec<String>,
    pub rhs: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Mapping {
    pub fn new(lhs: &[&str], rhs: &[&str]) -> Self {
        Mapping {
            lhs: lhs.iter().map(|s| s.to_string()).collect(),
            rhs: rhs.iter().map(|s| s.to_string()).collect(),
            comment: String::new(),
        }
    }
}

/// A named bucket of mappings. Comments exist only in memory (and in the
/// legacy textual format); the persisted JSON form is a bare array of
/// mappings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Mapping>", into = "Vec<Mapping>")]
pub struct Section {
    pub comments: Vec<String>,
    pub mappings: Vec<Mapping>,
}

impl From<Vec<Mapping>> for Section {
    fn from(mappings: Vec<Mapping>) -> Self {
        Section {
            comments: Vec::new(),
            mappings,
        }
    }
}

impl From<Section> for Vec<Mapping> {
    fn from(section: Section) -> Self {
        section.mappings
    }
}

impl Section {
    pub fn add_mapping(&mut self, lhs: Vec<String>, rhs: Vec<String>, comment: String) {
        self.mappings.push(Mapping { lhs, rhs, comment });
    }

    /// Append an alternate token to the most recently added mapping.
    pub fn append_lhs_to_last(&mut self, lhs: String) {
        if let Some(last) = self.mappings.last_mut() {
            last.lhs.push(lhs);
        }
    }
}

/// Cosmetic and engine configuration carried by a scheme. Only `virama` is
/// consumed by the engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub virama: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub font_name: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub font_size: u32,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_enabled: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub icon_disabled: String,
}

fn is_zero(n: &u32) -> bool {
    *n == 0
}

/// A complete keymap: identity metadata, virama configuration, and the
/// category → section table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransliterationScheme {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub license: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub categories: HashMap<String, Section>,
    /// Unknown top-level fields, preserved across a read/write round trip.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("mandatory fields missing: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("scheme has no categories")]
    NoCategories,
    #[error("category {category:?} has a mapping with an empty lhs")]
    EmptyLhs { category: String },
    #[error("category {category:?} has a mapping with an empty rhs")]
    EmptyRhs { category: String },
    #[error(transparent)]
    Virama(#[from] ViramaError),
}

impl TransliterationScheme {
    /// Does this scheme use inverse (script → Latin) semantics?
    pub fn is_inverse(&self) -> bool {
        self.scheme == SCHEME_UNICODE
    }

    /// Category names in lookup order: the fixed precedence list first, then
    /// any remaining names lexicographically. Built once per engine; lookup
    /// must never depend on map iteration order.
    pub fn ordered_categories(&self) -> Vec<&str> {
        let rank = |name: &str| {
            CATEGORY_PRECEDENCE
                .iter()
                .position(|&p| p == name)
                .unwrap_or(CATEGORY_PRECEDENCE.len())
        };
        let mut names: Vec<&str> = self.categories.keys().map(String::as_str).collect();
        names.sort_by(|a, b| rank(a).cmp(&rank(b)).then_with(|| a.cmp(b)));
        names
    }

    /// Check the structural invariants, fail-closed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mandatory = [
            ("id", &self.id),
            ("name", &self.name),
            ("language", &self.language),
            ("scheme", &self.scheme),
        ];
        let missing: Vec<String> = mandatory
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if self.categories.is_empty() {
            return Err(ValidationError::NoCategories);
        }

        for (name, section) in &self.categories {
            for mapping in &section.mappings {
                if mapping.lhs.is_empty() {
                    return Err(ValidationError::EmptyLhs {
                        category: name.clone(),
                    });
                }
                if mapping.rhs.is_empty() {
                    return Err(ValidationError::EmptyRhs {
                        category: name.clone(),
                    });
                }
            }
        }

        virama::parse_virama(&self.metadata.virama)?;
        Ok(())
    }
}
