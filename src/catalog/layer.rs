/// One named slot in the fixed back-to-front sprite stack.
///
/// Higher stack values sit further back; the compositor iterates
/// [`LayerId::ALL`] (descending stack order) so `AccessoryFront` is drawn
/// last. The set of layers is closed, which turns stringly-typed lookups in
/// the selection algorithms into exhaustive matches.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum LayerId {
    /// Scene backdrop behind the character.
    Background,
    /// Clothing pieces drawn behind the body (collars, capes).
    ClothesBack,
    /// Hair drawn behind the head.
    HairBack,
    /// Torso silhouette.
    Body,
    /// Clothing drawn over the body.
    Clothes,
    /// Ears.
    Ears,
    /// Head-worn accessory (caps, headsets).
    AccessoryHead,
    /// Head silhouette.
    Headshape,
    /// Upper-face skin detail (forehead lines).
    DetailUpper,
    /// Lower-face skin detail (smile lines).
    DetailLower,
    /// Front hair.
    Hair,
    /// Mouth; suppressed whenever a moustache is present.
    Mouth,
    /// Beard.
    Beard,
    /// Moustache.
    Moustache,
    /// Eyes.
    Eyes,
    /// Eyebrows.
    Eyebrows,
    /// Face-worn accessory (glasses, monocles).
    AccessoryFace,
    /// Nose.
    Nose,
    /// Skin blemish (scars, beauty marks).
    Blemish,
    /// Foremost accessory layer.
    AccessoryFront,
}

/// Which palette tints a layer's sprite before compositing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ColorRole {
    /// Sprite is composited with its authored colors.
    #[default]
    None,
    /// Tinted with the selected skin color.
    Skin,
    /// Tinted with the selected hair color.
    Hair,
    /// Tinted with the selected eye color.
    Eye,
    /// Tinted with the selected accessory color.
    Accessory,
}

/// Static definition of one layer.
#[derive(Clone, Copy, Debug)]
pub struct LayerDef {
    /// Stack order; higher values render further back. Unique per layer.
    pub stack: u32,
    /// Asset folder name; also the sprite-metadata category key.
    pub folder: &'static str,
    /// Sprite filename prefix inside the folder.
    pub prefix: &'static str,
    /// Whether the layer may be absent from a selection.
    pub optional: bool,
    /// Palette role used to tint this layer.
    pub color_role: ColorRole,
}

impl LayerId {
    /// Every layer, ordered back-to-front (descending stack order).
    pub const ALL: [LayerId; 20] = [
        LayerId::Background,
        LayerId::ClothesBack,
        LayerId::HairBack,
        LayerId::Body,
        LayerId::Clothes,
        LayerId::Ears,
        LayerId::AccessoryHead,
        LayerId::Headshape,
        LayerId::DetailUpper,
        LayerId::DetailLower,
        LayerId::Hair,
        LayerId::Mouth,
        LayerId::Beard,
        LayerId::Moustache,
        LayerId::Eyes,
        LayerId::Eyebrows,
        LayerId::AccessoryFace,
        LayerId::Nose,
        LayerId::Blemish,
        LayerId::AccessoryFront,
    ];

    /// Static definition for this layer.
    pub const fn def(self) -> &'static LayerDef {
        match self {
            LayerId::Background => &LayerDef {
                stack: 20,
                folder: "20_Background_Background",
                prefix: "bg",
                optional: true,
                color_role: ColorRole::None,
            },
            LayerId::ClothesBack => &LayerDef {
                stack: 19,
                folder: "19_ClothesBack_Clothes",
                prefix: "clothesback",
                optional: false,
                color_role: ColorRole::None,
            },
            LayerId::HairBack => &LayerDef {
                stack: 18,
                folder: "18_HairBack_Hair",
                prefix: "hairback",
                optional: true,
                color_role: ColorRole::Hair,
            },
            LayerId::Body => &LayerDef {
                stack: 17,
                folder: "17_Body_Skin",
                prefix: "body",
                optional: false,
                color_role: ColorRole::Skin,
            },
            LayerId::Clothes => &LayerDef {
                stack: 16,
                folder: "16_Clothes_Clothes",
                prefix: "clothes",
                optional: false,
                color_role: ColorRole::None,
            },
            LayerId::Ears => &LayerDef {
                stack: 15,
                folder: "15_Ears_Skin",
                prefix: "ears",
                optional: false,
                color_role: ColorRole::Skin,
            },
            LayerId::AccessoryHead => &LayerDef {
                stack: 14,
                folder: "14_Accessory_Accessory",
                prefix: "accessory",
                optional: true,
                color_role: ColorRole::Accessory,
            },
            LayerId::Headshape => &LayerDef {
                stack: 13,
                folder: "13_Headshape_Skin",
                prefix: "headshape",
                optional: false,
                color_role: ColorRole::Skin,
            },
            LayerId::DetailUpper => &LayerDef {
                stack: 12,
                folder: "12_Detail_Skin",
                prefix: "detail",
                optional: true,
                color_role: ColorRole::Skin,
            },
            LayerId::DetailLower => &LayerDef {
                stack: 11,
                folder: "11_Detail_Skin",
                prefix: "detail",
                optional: true,
                color_role: ColorRole::Skin,
            },
            LayerId::Hair => &LayerDef {
                stack: 10,
                folder: "10_Hair_Hair",
                prefix: "hair",
                optional: false,
                color_role: ColorRole::Hair,
            },
            LayerId::Mouth => &LayerDef {
                stack: 9,
                folder: "9_Mouth_Lip",
                prefix: "mouth",
                optional: true,
                color_role: ColorRole::None,
            },
            LayerId::Beard => &LayerDef {
                stack: 8,
                folder: "8_Beard_Hair",
                prefix: "beard",
                optional: true,
                color_role: ColorRole::Hair,
            },
            LayerId::Moustache => &LayerDef {
                stack: 7,
                folder: "7_Moustache_Hair",
                prefix: "moustache",
                optional: true,
                color_role: ColorRole::Hair,
            },
            LayerId::Eyes => &LayerDef {
                stack: 5,
                folder: "5_Eyes_Eye",
                prefix: "eyes",
                optional: false,
                color_role: ColorRole::Eye,
            },
            LayerId::Eyebrows => &LayerDef {
                stack: 4,
                folder: "4_Eyebrows_Hair",
                prefix: "eyebrows",
                optional: false,
                color_role: ColorRole::Hair,
            },
            LayerId::AccessoryFace => &LayerDef {
                stack: 3,
                folder: "3_Accessory_Accessory",
                prefix: "accessory",
                optional: true,
                color_role: ColorRole::Accessory,
            },
            LayerId::Nose => &LayerDef {
                stack: 2,
                folder: "2_Nose_Skin",
                prefix: "nose",
                optional: false,
                color_role: ColorRole::Skin,
            },
            LayerId::Blemish => &LayerDef {
                stack: 1,
                folder: "1_Blemish_Skin",
                prefix: "blemish",
                optional: true,
                color_role: ColorRole::Skin,
            },
            LayerId::AccessoryFront => &LayerDef {
                stack: 0,
                folder: "0_Accessory_Accessory",
                prefix: "accessory",
                optional: true,
                color_role: ColorRole::Accessory,
            },
        }
    }

    /// Stable layer name, identical to the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            LayerId::Background => "Background",
            LayerId::ClothesBack => "ClothesBack",
            LayerId::HairBack => "HairBack",
            LayerId::Body => "Body",
            LayerId::Clothes => "Clothes",
            LayerId::Ears => "Ears",
            LayerId::AccessoryHead => "AccessoryHead",
            LayerId::Headshape => "Headshape",
            LayerId::DetailUpper => "DetailUpper",
            LayerId::DetailLower => "DetailLower",
            LayerId::Hair => "Hair",
            LayerId::Mouth => "Mouth",
            LayerId::Beard => "Beard",
            LayerId::Moustache => "Moustache",
            LayerId::Eyes => "Eyes",
            LayerId::Eyebrows => "Eyebrows",
            LayerId::AccessoryFace => "AccessoryFace",
            LayerId::Nose => "Nose",
            LayerId::Blemish => "Blemish",
            LayerId::AccessoryFront => "AccessoryFront",
        }
    }
}

impl std::fmt::Display for LayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
