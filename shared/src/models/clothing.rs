//! Clothing recommendation models

use serde::{Deserialize, Serialize};

use crate::types::{Labelled, Language, LocalizedText};

/// Head covering
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Headwear {
    InsulatingCap,
    BrimmedCap,
    None,
}

/// Top worn over the base layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TorsoLayer {
    Sleeveless,
    ShortSleeve,
    LongSleeve,
}

/// Legwear
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Legwear {
    Shorts,
    /// Full-length mid-weight tights
    MidweightTights,
    /// Full-length heavy tights
    WinterTights,
}

/// Gloves or mittens
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HandProtection {
    Mittens,
    ThinGloves,
    None,
}

/// Jacket against wind and rain
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OuterShell {
    None,
    LightShell,
    RainShell,
    /// Part of the shell range; no current rule selects it
    HeavyShell,
}

impl OuterShell {
    pub fn is_worn(&self) -> bool {
        !matches!(self, OuterShell::None)
    }
}

/// Advice for an accessory slot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessoryAdvice {
    Recommended,
    NotNeeded,
}

impl AccessoryAdvice {
    pub fn is_recommended(&self) -> bool {
        matches!(self, AccessoryAdvice::Recommended)
    }
}

/// Fixed garment categories, in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GarmentSlot {
    Head,
    ThermalBaseLayer,
    Torso,
    Legs,
    HandProtection,
    OuterShell,
}

impl GarmentSlot {
    pub const ALL: [GarmentSlot; 6] = [
        GarmentSlot::Head,
        GarmentSlot::ThermalBaseLayer,
        GarmentSlot::Torso,
        GarmentSlot::Legs,
        GarmentSlot::OuterShell,
        GarmentSlot::HandProtection,
    ];
}

/// Fixed accessory categories, in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AccessorySlot {
    VisibilityAid,
    EyeProtection,
    SunProtection,
}

impl AccessorySlot {
    pub const ALL: [AccessorySlot; 3] = [
        AccessorySlot::VisibilityAid,
        AccessorySlot::EyeProtection,
        AccessorySlot::SunProtection,
    ];
}

/// Decision for one slot with the reason behind it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotAdvice<T> {
    pub choice: T,
    pub rationale: LocalizedText,
}

/// Complete outfit for one run. Every slot is a field, so none can be
/// missing or appear twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClothingRecommendation {
    pub head: SlotAdvice<Headwear>,
    pub thermal_base_layer: SlotAdvice<bool>,
    pub torso: SlotAdvice<TorsoLayer>,
    pub legs: SlotAdvice<Legwear>,
    pub hands: SlotAdvice<HandProtection>,
    pub outer_shell: SlotAdvice<OuterShell>,
    pub visibility_aid: SlotAdvice<AccessoryAdvice>,
    pub eye_protection: SlotAdvice<AccessoryAdvice>,
    pub sun_protection: SlotAdvice<AccessoryAdvice>,
}

/// One line of a rendered recommendation
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedSlot<'a> {
    pub slot: &'static str,
    pub choice: &'static str,
    pub rationale: &'a str,
}

impl ClothingRecommendation {
    pub fn garment_slots() -> [GarmentSlot; 6] {
        GarmentSlot::ALL
    }

    pub fn accessory_slots() -> [AccessorySlot; 3] {
        AccessorySlot::ALL
    }

    /// Display label of the item chosen for a garment slot
    pub fn garment_label(&self, slot: GarmentSlot, language: Language) -> &'static str {
        match slot {
            GarmentSlot::Head => self.head.choice.label_in(language),
            GarmentSlot::ThermalBaseLayer => yes_no(self.thermal_base_layer.choice, language),
            GarmentSlot::Torso => self.torso.choice.label_in(language),
            GarmentSlot::Legs => self.legs.choice.label_in(language),
            GarmentSlot::HandProtection => self.hands.choice.label_in(language),
            GarmentSlot::OuterShell => self.outer_shell.choice.label_in(language),
        }
    }

    pub fn garment_rationale(&self, slot: GarmentSlot) -> &LocalizedText {
        match slot {
            GarmentSlot::Head => &self.head.rationale,
            GarmentSlot::ThermalBaseLayer => &self.thermal_base_layer.rationale,
            GarmentSlot::Torso => &self.torso.rationale,
            GarmentSlot::Legs => &self.legs.rationale,
            GarmentSlot::HandProtection => &self.hands.rationale,
            GarmentSlot::OuterShell => &self.outer_shell.rationale,
        }
    }

    pub fn accessory(&self, slot: AccessorySlot) -> &SlotAdvice<AccessoryAdvice> {
        match slot {
            AccessorySlot::VisibilityAid => &self.visibility_aid,
            AccessorySlot::EyeProtection => &self.eye_protection,
            AccessorySlot::SunProtection => &self.sun_protection,
        }
    }

    /// Garment slots with their choice and rationale, in display order
    pub fn garment_items(&self, language: Language) -> Vec<RenderedSlot<'_>> {
        Self::garment_slots()
            .iter()
            .map(|slot| RenderedSlot {
                slot: slot.label_in(language),
                choice: self.garment_label(*slot, language),
                rationale: self.garment_rationale(*slot).in_language(language),
            })
            .collect()
    }

    /// Accessory slots with their advice and rationale, in display order
    pub fn accessory_items(&self, language: Language) -> Vec<RenderedSlot<'_>> {
        Self::accessory_slots()
            .iter()
            .map(|slot| {
                let advice = self.accessory(*slot);
                RenderedSlot {
                    slot: slot.label_in(language),
                    choice: advice.choice.label_in(language),
                    rationale: advice.rationale.in_language(language),
                }
            })
            .collect()
    }
}

fn yes_no(value: bool, language: Language) -> &'static str {
    match (value, language) {
        (true, Language::English) => "Yes",
        (false, Language::English) => "No",
        (true, Language::Dutch) => "Ja",
        (false, Language::Dutch) => "Nee",
    }
}

impl Labelled for Headwear {
    fn label(&self) -> &'static str {
        match self {
            Headwear::InsulatingCap => "Insulating cap",
            Headwear::BrimmedCap => "Brimmed cap",
            Headwear::None => "None",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            Headwear::InsulatingCap => "Muts",
            Headwear::BrimmedCap => "Pet",
            Headwear::None => "Geen",
        }
    }
}

impl Labelled for TorsoLayer {
    fn label(&self) -> &'static str {
        match self {
            TorsoLayer::Sleeveless => "Singlet",
            TorsoLayer::ShortSleeve => "Short sleeve",
            TorsoLayer::LongSleeve => "Long sleeve",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            TorsoLayer::Sleeveless => "Singlet",
            TorsoLayer::ShortSleeve => "Korte mouw",
            TorsoLayer::LongSleeve => "Lange mouw",
        }
    }
}

impl Labelled for Legwear {
    fn label(&self) -> &'static str {
        match self {
            Legwear::Shorts => "Shorts",
            Legwear::MidweightTights => "Long tights",
            Legwear::WinterTights => "Winter tights",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            Legwear::Shorts => "Korte broek",
            Legwear::MidweightTights => "Lange tight",
            Legwear::WinterTights => "Wintertight",
        }
    }
}

impl Labelled for HandProtection {
    fn label(&self) -> &'static str {
        match self {
            HandProtection::Mittens => "Mittens",
            HandProtection::ThinGloves => "Thin gloves",
            HandProtection::None => "None",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            HandProtection::Mittens => "Wanten",
            HandProtection::ThinGloves => "Dunne handschoenen",
            HandProtection::None => "Geen",
        }
    }
}

impl Labelled for OuterShell {
    fn label(&self) -> &'static str {
        match self {
            OuterShell::None => "None",
            OuterShell::LightShell => "Light jacket",
            OuterShell::RainShell => "Rain jacket",
            OuterShell::HeavyShell => "Insulated jacket",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            OuterShell::None => "Geen",
            OuterShell::LightShell => "Licht jack",
            OuterShell::RainShell => "Regenjas",
            OuterShell::HeavyShell => "Winterjas",
        }
    }
}

impl Labelled for AccessoryAdvice {
    fn label(&self) -> &'static str {
        match self {
            AccessoryAdvice::Recommended => "Recommended",
            AccessoryAdvice::NotNeeded => "Not needed",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            AccessoryAdvice::Recommended => "Aanbevolen",
            AccessoryAdvice::NotNeeded => "Niet nodig",
        }
    }
}

impl Labelled for GarmentSlot {
    fn label(&self) -> &'static str {
        match self {
            GarmentSlot::Head => "Head",
            GarmentSlot::ThermalBaseLayer => "Thermal base layer",
            GarmentSlot::Torso => "Shirt",
            GarmentSlot::Legs => "Legs",
            GarmentSlot::HandProtection => "Hands",
            GarmentSlot::OuterShell => "Jacket",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            GarmentSlot::Head => "Hoofd",
            GarmentSlot::ThermalBaseLayer => "Thermisch ondershirt",
            GarmentSlot::Torso => "Shirt",
            GarmentSlot::Legs => "Broek",
            GarmentSlot::HandProtection => "Handen",
            GarmentSlot::OuterShell => "Jack",
        }
    }
}

impl Labelled for AccessorySlot {
    fn label(&self) -> &'static str {
        match self {
            AccessorySlot::VisibilityAid => "Lights",
            AccessorySlot::EyeProtection => "Sunglasses",
            AccessorySlot::SunProtection => "Sunscreen",
        }
    }

    fn label_nl(&self) -> &'static str {
        match self {
            AccessorySlot::VisibilityAid => "Verlichting",
            AccessorySlot::EyeProtection => "Zonnebril",
            AccessorySlot::SunProtection => "Zonnebrand",
        }
    }
}
