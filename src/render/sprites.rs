//! Sprite loading.
//!
//! [`SpriteSource`] abstracts where sprite pixels come from so the compositor
//! can be exercised without a sprite tree on disk. [`SpriteLibrary`] is the
//! disk-backed implementation, resolving catalog coordinates to files under
//! `<root>/PortraitSprites/<folder>/<prefix>_II_VV[suffix].png`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbaImage;

use crate::catalog::Gender;
use crate::catalog::layer::LayerId;
use crate::catalog::variants::{female_suffix, is_female_only_index, is_gender_specific};
use crate::foundation::error::CrewgenResult;

/// Where sprite pixels come from.
pub trait SpriteSource {
    /// The sprite for a catalog coordinate, or `None` when it does not exist.
    ///
    /// Absence is not an error: the compositor skips the layer. Only a sprite
    /// that exists but cannot be read or decoded fails.
    fn sprite(
        &self,
        layer: LayerId,
        index: u32,
        variant: u32,
        gender: Gender,
    ) -> CrewgenResult<Option<RgbaImage>>;
}

/// Disk-backed sprite tree.
#[derive(Clone, Debug)]
pub struct SpriteLibrary {
    root: PathBuf,
}

impl SpriteLibrary {
    /// Open a library rooted at the directory containing `PortraitSprites/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Library root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for a catalog coordinate, in lookup order. Empty when
    /// the coordinate has no sprite for this gender.
    pub fn sprite_paths(
        &self,
        layer: LayerId,
        index: u32,
        variant: u32,
        gender: Gender,
    ) -> Vec<PathBuf> {
        let folder = self
            .root
            .join("PortraitSprites")
            .join(sprite_folder(layer, index));
        sprite_filename_candidates(layer, index, variant, gender)
            .into_iter()
            .map(|filename| folder.join(filename))
            .collect()
    }
}

impl SpriteSource for SpriteLibrary {
    fn sprite(
        &self,
        layer: LayerId,
        index: u32,
        variant: u32,
        gender: Gender,
    ) -> CrewgenResult<Option<RgbaImage>> {
        let candidates = self.sprite_paths(layer, index, variant, gender);
        if candidates.is_empty() {
            tracing::warn!(layer = %layer, index, variant, "no sprite file for coordinate");
            return Ok(None);
        }
        for path in &candidates {
            if !path.exists() {
                continue;
            }
            let image = image::open(path)
                .with_context(|| format!("decode sprite '{}'", path.display()))?
                .into_rgba8();
            return Ok(Some(image));
        }
        tracing::warn!(
            layer = %layer, index, variant,
            path = %candidates[0].display(),
            "sprite missing"
        );
        Ok(None)
    }
}

/// Asset folder for a layer, honoring the shared-directory exceptions.
///
/// The three accessory layers share one sprite pool, and the two detail
/// layers split one numbering space across two folders by index.
pub fn sprite_folder(layer: LayerId, index: u32) -> &'static str {
    match layer {
        LayerId::AccessoryFront | LayerId::AccessoryHead => "3_Accessory_Accessory",
        LayerId::DetailUpper | LayerId::DetailLower if index <= 9 => "11_Detail_Skin",
        LayerId::DetailUpper | LayerId::DetailLower => "12_Detail_Skin",
        _ => layer.def().folder,
    }
}

/// Sprite filenames for a catalog coordinate, in lookup order.
///
/// Female-only indices only exist as the suffixed female file, so a male
/// character asking for one gets nothing. Gender-specific indices try the
/// suffixed file first for female characters and fall back to the canonical
/// name.
pub fn sprite_filename_candidates(
    layer: LayerId,
    index: u32,
    variant: u32,
    gender: Gender,
) -> Vec<String> {
    let base = format!("{}_{index:02}_{variant:02}", layer.def().prefix);

    if is_female_only_index(layer, index) {
        if gender != Gender::Female {
            return Vec::new();
        }
        return vec![format!("{base}{}.png", female_suffix(layer))];
    }

    if gender == Gender::Female && is_gender_specific(layer, index) {
        return vec![
            format!("{base}{}.png", female_suffix(layer)),
            format!("{base}.png"),
        ];
    }

    vec![format!("{base}.png")]
}
