//! Sprite metadata consumed by the feature matcher.
//!
//! The document is keyed by asset folder, then by sprite filename. Each entry
//! carries the descriptive vocabulary an entry can be matched against, plus a
//! gender-fit tag. The canonical `(index, variant)` pair is encoded in the
//! filename itself; entries whose filename does not parse are excluded from
//! matching.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{CrewgenError, CrewgenResult};

/// Metadata for one sprite file.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteMetadataEntry {
    /// Descriptive tags.
    pub tags: Vec<String>,
    /// Comma-separated free-text characteristics.
    pub characteristics: Option<String>,
    /// `"male"`, `"female"`, or `"both"`.
    pub gender_fit: Option<String>,
    /// Style term.
    pub style: Option<String>,
    /// Shape term.
    pub shape: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
}

impl SpriteMetadataEntry {
    /// All lowercase terms a detected term can score against.
    pub fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = self.tags.iter().map(|t| t.to_lowercase()).collect();
        if let Some(characteristics) = &self.characteristics {
            terms.extend(
                characteristics
                    .split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty()),
            );
        }
        for field in [&self.style, &self.shape, &self.description] {
            if let Some(value) = field {
                terms.push(value.to_lowercase());
            }
        }
        terms.retain(|t| !t.is_empty());
        terms
    }

    /// Whether this entry fits `gender` (a missing or `"both"` tag fits all).
    pub fn fits_gender(&self, gender: &str) -> bool {
        match self.gender_fit.as_deref() {
            None | Some("both") => true,
            Some(fit) => fit.eq_ignore_ascii_case(gender),
        }
    }
}

/// The full sprite metadata document.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpriteMetadata {
    /// Asset folder -> filename -> entry.
    pub categories: BTreeMap<String, BTreeMap<String, SpriteMetadataEntry>>,
}

impl SpriteMetadata {
    /// Parse a metadata document from JSON text.
    pub fn from_json_str(json: &str) -> CrewgenResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| CrewgenError::serde(format!("sprite metadata: {e}")))
    }

    /// Load a metadata document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> CrewgenResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read sprite metadata '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Entries for one asset folder, in filename order.
    pub fn category(&self, folder: &str) -> Option<&BTreeMap<String, SpriteMetadataEntry>> {
        self.categories.get(folder)
    }
}

/// Extract `(index, variant)` from a sprite filename shaped
/// `{prefix}_{II}_{VV}[suffix].ext`.
///
/// Returns `None` when two decimal groups cannot be found, which excludes the
/// entry from matching.
pub fn parse_sprite_filename(filename: &str) -> Option<(u32, u32)> {
    let stem = filename.split('.').next().unwrap_or(filename);
    let numbers: Vec<u32> = stem
        .split('_')
        .filter_map(|part| part.parse::<u32>().ok())
        .collect();
    match numbers.as_slice() {
        [index, variant, ..] => Some((*index, *variant)),
        _ => None,
    }
}
