//! Clothing rule engine
//!
//! Each slot is decided by an ordered table of guards evaluated top to bottom;
//! the first guard whose predicate holds wins and every table ends in a
//! fallback outcome, so every slot always receives a value. Temperature
//! thresholds refer to the feels-like temperature in °C.
//!
//! The outer shell is decided first and handed to the thermal base layer
//! rules as an explicit second-phase input.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::models::{
    AccessoryAdvice, ClothingRecommendation, HandProtection, Headwear, Legwear, OuterShell,
    RunWindow, SkyCondition, SlotAdvice, TorsoLayer, WeatherSample,
};
use crate::types::LocalizedText;

/// Weather and timing inputs for one clothing evaluation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RunConditions {
    pub feels_like: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub uv_index: f64,
    pub sky: SkyCondition,
    pub is_night: bool,
    pub run_end: DateTime<FixedOffset>,
    pub sunset: DateTime<FixedOffset>,
}

impl RunConditions {
    /// Conditions of the midpoint sample for a given run
    pub fn new(sample: &WeatherSample, window: &RunWindow, sunset: DateTime<FixedOffset>) -> Self {
        Self {
            feels_like: sample.feels_like,
            wind_speed: sample.wind_speed,
            precipitation: sample.precipitation,
            uv_index: sample.uv_index,
            sky: sample.sky,
            is_night: sample.is_night,
            run_end: window.end(),
            sunset,
        }
    }

    /// Clear sky during daylight
    pub fn is_sunny(&self) -> bool {
        self.sky.is_clear() && !self.is_night
    }

    /// Whether any part of the run happens at or after sunset
    pub fn runs_after_sunset(&self) -> bool {
        self.run_end >= self.sunset
    }
}

/// Second-phase input: conditions plus the shell already chosen
#[derive(Debug, Clone, Copy)]
pub struct LayeringInput<'a> {
    pub conditions: &'a RunConditions,
    pub outer_shell: OuterShell,
}

struct Outcome<T> {
    choice: T,
    message: &'static str,
    message_nl: &'static str,
}

struct Guard<I, T> {
    when: fn(&I) -> bool,
    then: Outcome<T>,
}

fn outcome<T>(choice: T, message: &'static str, message_nl: &'static str) -> Outcome<T> {
    Outcome {
        choice,
        message,
        message_nl,
    }
}

fn guard<I, T>(when: fn(&I) -> bool, then: Outcome<T>) -> Guard<I, T> {
    Guard { when, then }
}

/// First matching guard wins, `otherwise` when none match
fn first_match<I, T: Copy>(
    input: &I,
    guards: &[Guard<I, T>],
    otherwise: Outcome<T>,
) -> SlotAdvice<T> {
    let chosen = guards
        .iter()
        .find(|g| (g.when)(input))
        .map(|g| &g.then)
        .unwrap_or(&otherwise);

    SlotAdvice {
        choice: chosen.choice,
        rationale: LocalizedText::new(chosen.message, chosen.message_nl),
    }
}

const NO_EXTRA_PROTECTION: (&str, &str) = (
    "No extra protection needed.",
    "Geen extra bescherming nodig.",
);

// ============================================================================
// Garments
// ============================================================================

pub fn outer_shell(c: &RunConditions) -> SlotAdvice<OuterShell> {
    let guards = [
        guard(
            |c: &RunConditions| c.precipitation > 1.0,
            outcome(
                OuterShell::RainShell,
                "A rain jacket keeps heavy precipitation out.",
                "Een regenjas houdt flinke neerslag tegen.",
            ),
        ),
        guard(
            |c: &RunConditions| c.wind_speed >= 15.0 && c.feels_like <= 6.0,
            outcome(
                OuterShell::LightShell,
                "A light jacket blocks cold wind.",
                "Een licht jack houdt koude wind tegen.",
            ),
        ),
    ];
    first_match(
        c,
        &guards,
        outcome(OuterShell::None, NO_EXTRA_PROTECTION.0, NO_EXTRA_PROTECTION.1),
    )
}

/// Thermal base layer, decided after the outer shell
pub fn thermal_base_layer(input: &LayeringInput<'_>) -> SlotAdvice<bool> {
    let guards = [
        guard(
            |i: &LayeringInput<'_>| i.conditions.feels_like <= -2.0,
            outcome(
                true,
                "Extra insulation against the deep cold.",
                "Extra isolatie tegen de strenge kou.",
            ),
        ),
        guard(
            |i: &LayeringInput<'_>| {
                i.conditions.feels_like <= 0.0 && i.conditions.wind_speed >= 15.0
            },
            outcome(
                true,
                "Extra insulation against freezing wind.",
                "Extra isolatie tegen ijzige wind.",
            ),
        ),
        guard(
            |i: &LayeringInput<'_>| i.conditions.feels_like <= 2.0 && i.outer_shell.is_worn(),
            outcome(
                true,
                "Extra insulation because the jacket only stops wind and rain.",
                "Extra isolatie omdat het jack alleen wind/regen tegenhoudt.",
            ),
        ),
    ];
    first_match(
        input,
        &guards,
        outcome(
            false,
            "Not needed at this feels-like temperature.",
            "Niet nodig bij deze gevoelstemperatuur.",
        ),
    )
}

pub fn headwear(c: &RunConditions) -> SlotAdvice<Headwear> {
    let guards = [
        guard(
            |c: &RunConditions| c.feels_like <= 0.0,
            outcome(
                Headwear::InsulatingCap,
                "A hat prevents heat loss in the cold.",
                "Muts voorkomt warmteverlies bij kou.",
            ),
        ),
        guard(
            |c: &RunConditions| c.is_sunny() || c.precipitation > 0.0,
            outcome(
                Headwear::BrimmedCap,
                "A cap shields against sun and rain.",
                "Pet beschermt tegen zon en regen.",
            ),
        ),
    ];
    first_match(
        c,
        &guards,
        outcome(
            Headwear::None,
            "No head covering needed.",
            "Geen hoofdbedekking nodig.",
        ),
    )
}

const TORSO_RATIONALE: (&str, &str) = (
    "Chosen from the feels-like temperature while running.",
    "Bepaald op basis van gevoelstemperatuur tijdens het lopen.",
);

pub fn torso_layer(c: &RunConditions) -> SlotAdvice<TorsoLayer> {
    let guards = [
        guard(
            |c: &RunConditions| c.feels_like > 18.0,
            outcome(TorsoLayer::Sleeveless, TORSO_RATIONALE.0, TORSO_RATIONALE.1),
        ),
        guard(
            |c: &RunConditions| c.feels_like > 12.0,
            outcome(TorsoLayer::ShortSleeve, TORSO_RATIONALE.0, TORSO_RATIONALE.1),
        ),
    ];
    first_match(
        c,
        &guards,
        outcome(TorsoLayer::LongSleeve, TORSO_RATIONALE.0, TORSO_RATIONALE.1),
    )
}

const LEGS_RATIONALE: (&str, &str) = (
    "Legs warm up faster than the torso, so they follow their own thresholds.",
    "Benen warmen sneller op dan romp; daarom andere drempels.",
);

pub fn legwear(c: &RunConditions) -> SlotAdvice<Legwear> {
    let guards = [
        guard(
            |c: &RunConditions| c.feels_like > 10.0,
            outcome(Legwear::Shorts, LEGS_RATIONALE.0, LEGS_RATIONALE.1),
        ),
        guard(
            |c: &RunConditions| c.feels_like > -2.0,
            outcome(Legwear::MidweightTights, LEGS_RATIONALE.0, LEGS_RATIONALE.1),
        ),
    ];
    first_match(
        c,
        &guards,
        outcome(Legwear::WinterTights, LEGS_RATIONALE.0, LEGS_RATIONALE.1),
    )
}

const COLD_HANDS: (&str, &str) = (
    "Hands cool down quickly at low temperatures.",
    "Handen koelen snel af bij lage temperatuur.",
);

pub fn hand_protection(c: &RunConditions) -> SlotAdvice<HandProtection> {
    let guards = [
        guard(
            |c: &RunConditions| c.feels_like < 0.0,
            outcome(HandProtection::Mittens, COLD_HANDS.0, COLD_HANDS.1),
        ),
        guard(
            |c: &RunConditions| c.feels_like <= 5.0,
            outcome(HandProtection::ThinGloves, COLD_HANDS.0, COLD_HANDS.1),
        ),
    ];
    first_match(
        c,
        &guards,
        outcome(HandProtection::None, NO_EXTRA_PROTECTION.0, NO_EXTRA_PROTECTION.1),
    )
}

// ============================================================================
// Accessories
// ============================================================================

pub fn visibility_aid(c: &RunConditions) -> SlotAdvice<AccessoryAdvice> {
    let guards = [guard(
        |c: &RunConditions| c.runs_after_sunset(),
        outcome(
            AccessoryAdvice::Recommended,
            "You run (partly) in the dark: being visible matters.",
            "Je loopt (deels) in het donker: zichtbaarheid is belangrijk.",
        ),
    )];
    first_match(
        c,
        &guards,
        outcome(
            AccessoryAdvice::NotNeeded,
            "You run entirely in daylight.",
            "Je loopt volledig bij daglicht.",
        ),
    )
}

pub fn eye_protection(c: &RunConditions) -> SlotAdvice<AccessoryAdvice> {
    let guards = [guard(
        |c: &RunConditions| c.is_sunny(),
        outcome(
            AccessoryAdvice::Recommended,
            "Protects your eyes from bright sunlight.",
            "Beschermt je ogen tegen fel zonlicht.",
        ),
    )];
    first_match(
        c,
        &guards,
        outcome(
            AccessoryAdvice::NotNeeded,
            "Not needed without sun.",
            "Niet nodig zonder zon.",
        ),
    )
}

pub fn sun_protection(c: &RunConditions) -> SlotAdvice<AccessoryAdvice> {
    let guards = [guard(
        |c: &RunConditions| c.uv_index >= 3.0,
        outcome(
            AccessoryAdvice::Recommended,
            "UV index is high enough to damage skin.",
            "UV-index is hoog genoeg om huid te beschadigen.",
        ),
    )];
    first_match(
        c,
        &guards,
        outcome(AccessoryAdvice::NotNeeded, "UV index is low.", "UV-index is laag."),
    )
}

/// Full outfit for the given conditions
pub fn recommend_clothing(conditions: &RunConditions) -> ClothingRecommendation {
    let shell = outer_shell(conditions);
    let base_layer = thermal_base_layer(&LayeringInput {
        conditions,
        outer_shell: shell.choice,
    });

    ClothingRecommendation {
        head: headwear(conditions),
        thermal_base_layer: base_layer,
        torso: torso_layer(conditions),
        legs: legwear(conditions),
        hands: hand_protection(conditions),
        outer_shell: shell,
        visibility_aid: visibility_aid(conditions),
        eye_protection: eye_protection(conditions),
        sun_protection: sun_protection(conditions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GarmentSlot, SkyCondition};
    use crate::types::Language;
    use proptest::prelude::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn conditions(feels_like: f64, wind_speed: f64, precipitation: f64) -> RunConditions {
        RunConditions {
            feels_like,
            wind_speed,
            precipitation,
            uv_index: 1.0,
            sky: SkyCondition::Overcast,
            is_night: false,
            run_end: at("2026-10-19T08:00:00+02:00"),
            sunset: at("2026-10-19T18:40:00+02:00"),
        }
    }

    // ========================================================================
    // Outer shell
    // ========================================================================

    #[test]
    fn test_rain_beats_wind() {
        assert_eq!(outer_shell(&conditions(3.0, 30.0, 1.5)).choice, OuterShell::RainShell);
    }

    #[test]
    fn test_light_shell_needs_wind_and_cold() {
        assert_eq!(outer_shell(&conditions(6.0, 15.0, 0.0)).choice, OuterShell::LightShell);
        assert_eq!(outer_shell(&conditions(6.1, 15.0, 0.0)).choice, OuterShell::None);
        assert_eq!(outer_shell(&conditions(2.0, 14.9, 0.0)).choice, OuterShell::None);
    }

    #[test]
    fn test_light_rain_alone_needs_no_shell() {
        assert_eq!(outer_shell(&conditions(8.0, 5.0, 1.0)).choice, OuterShell::None);
    }

    // ========================================================================
    // Thermal base layer
    // ========================================================================

    fn base_layer(c: &RunConditions, shell: OuterShell) -> bool {
        thermal_base_layer(&LayeringInput {
            conditions: c,
            outer_shell: shell,
        })
        .choice
    }

    #[test]
    fn test_base_layer_in_deep_cold() {
        assert!(base_layer(&conditions(-2.0, 0.0, 0.0), OuterShell::None));
        assert!(!base_layer(&conditions(-1.9, 0.0, 0.0), OuterShell::None));
    }

    #[test]
    fn test_base_layer_with_freezing_wind() {
        assert!(base_layer(&conditions(0.0, 15.0, 0.0), OuterShell::None));
        assert!(!base_layer(&conditions(0.5, 15.0, 0.0), OuterShell::None));
    }

    #[test]
    fn test_base_layer_depends_on_shell() {
        let c = conditions(2.0, 5.0, 0.0);
        assert!(base_layer(&c, OuterShell::RainShell));
        assert!(base_layer(&c, OuterShell::LightShell));
        assert!(!base_layer(&c, OuterShell::None));
        assert!(!base_layer(&conditions(2.5, 5.0, 0.0), OuterShell::RainShell));
    }

    #[test]
    fn test_base_layer_rationale_mentions_shell() {
        let c = conditions(1.0, 5.0, 0.0);
        let advice = thermal_base_layer(&LayeringInput {
            conditions: &c,
            outer_shell: OuterShell::RainShell,
        });
        assert!(advice.rationale.message.contains("jacket"));
        assert!(advice.rationale.message_nl.contains("jack"));
    }

    // ========================================================================
    // Other garments
    // ========================================================================

    #[test]
    fn test_headwear() {
        assert_eq!(headwear(&conditions(0.0, 0.0, 0.0)).choice, Headwear::InsulatingCap);
        assert_eq!(headwear(&conditions(0.1, 0.0, 0.2)).choice, Headwear::BrimmedCap);
        assert_eq!(headwear(&conditions(10.0, 0.0, 0.0)).choice, Headwear::None);

        let sunny = RunConditions {
            sky: SkyCondition::Clear,
            ..conditions(10.0, 0.0, 0.0)
        };
        assert_eq!(headwear(&sunny).choice, Headwear::BrimmedCap);

        let clear_night = RunConditions {
            is_night: true,
            ..sunny
        };
        assert_eq!(headwear(&clear_night).choice, Headwear::None);
    }

    #[test]
    fn test_torso_bands() {
        assert_eq!(torso_layer(&conditions(18.1, 0.0, 0.0)).choice, TorsoLayer::Sleeveless);
        assert_eq!(torso_layer(&conditions(18.0, 0.0, 0.0)).choice, TorsoLayer::ShortSleeve);
        assert_eq!(torso_layer(&conditions(12.1, 0.0, 0.0)).choice, TorsoLayer::ShortSleeve);
        assert_eq!(torso_layer(&conditions(12.0, 0.0, 0.0)).choice, TorsoLayer::LongSleeve);
    }

    #[test]
    fn test_legwear_bands() {
        assert_eq!(legwear(&conditions(10.1, 0.0, 0.0)).choice, Legwear::Shorts);
        assert_eq!(legwear(&conditions(10.0, 0.0, 0.0)).choice, Legwear::MidweightTights);
        assert_eq!(legwear(&conditions(-1.9, 0.0, 0.0)).choice, Legwear::MidweightTights);
        assert_eq!(legwear(&conditions(-2.0, 0.0, 0.0)).choice, Legwear::WinterTights);
    }

    #[test]
    fn test_hand_protection_bands() {
        assert_eq!(hand_protection(&conditions(-0.1, 0.0, 0.0)).choice, HandProtection::Mittens);
        assert_eq!(hand_protection(&conditions(0.0, 0.0, 0.0)).choice, HandProtection::ThinGloves);
        assert_eq!(hand_protection(&conditions(5.0, 0.0, 0.0)).choice, HandProtection::ThinGloves);
        assert_eq!(hand_protection(&conditions(5.1, 0.0, 0.0)).choice, HandProtection::None);
    }

    // ========================================================================
    // Accessories
    // ========================================================================

    #[test]
    fn test_visibility_aid_at_sunset() {
        let at_sunset = RunConditions {
            run_end: at("2026-10-19T18:40:00+02:00"),
            ..conditions(10.0, 0.0, 0.0)
        };
        assert!(visibility_aid(&at_sunset).choice.is_recommended());
        assert!(!visibility_aid(&conditions(10.0, 0.0, 0.0)).choice.is_recommended());

        let just_before = RunConditions {
            run_end: at("2026-10-19T18:39:00+02:00"),
            ..at_sunset
        };
        assert!(!just_before.runs_after_sunset());
        assert!(at_sunset.runs_after_sunset());
    }

    #[test]
    fn test_eye_and_sun_protection() {
        let bright = RunConditions {
            sky: SkyCondition::MainlyClear,
            uv_index: 3.0,
            ..conditions(15.0, 0.0, 0.0)
        };
        assert!(eye_protection(&bright).choice.is_recommended());
        assert!(sun_protection(&bright).choice.is_recommended());

        let grey = RunConditions {
            uv_index: 2.9,
            ..conditions(15.0, 0.0, 0.0)
        };
        assert!(!eye_protection(&grey).choice.is_recommended());
        assert!(!sun_protection(&grey).choice.is_recommended());
    }

    #[test]
    fn test_rendered_items_follow_display_order() {
        let outfit = recommend_clothing(&conditions(3.0, 10.0, 2.0));
        let items = outfit.garment_items(Language::Dutch);
        let slots: Vec<&str> = items.iter().map(|i| i.slot).collect();
        assert_eq!(
            slots,
            vec!["Hoofd", "Thermisch ondershirt", "Shirt", "Broek", "Jack", "Handen"]
        );
        assert_eq!(items[4].choice, "Regenjas");
        assert_eq!(outfit.garment_label(GarmentSlot::ThermalBaseLayer, Language::English), "No");
        assert_eq!(outfit.accessory_items(Language::English).len(), 3);
    }

    proptest! {
        #[test]
        fn prop_recommendation_is_deterministic(
            f in -30.0f64..40.0,
            w in 0.0f64..80.0,
            p in 0.0f64..20.0,
            uv in 0.0f64..12.0,
            night in any::<bool>(),
        ) {
            let c = RunConditions {
                uv_index: uv,
                is_night: night,
                ..conditions(f, w, p)
            };
            prop_assert_eq!(recommend_clothing(&c), recommend_clothing(&c));
        }

        #[test]
        fn prop_heavy_shell_never_chosen(
            f in -30.0f64..40.0,
            w in 0.0f64..80.0,
            p in 0.0f64..20.0,
        ) {
            prop_assert_ne!(outer_shell(&conditions(f, w, p)).choice, OuterShell::HeavyShell);
        }
    }
}
