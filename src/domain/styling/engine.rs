//! Recommendation Engine - rule groups mapping a profile to advice lines.
//!
//! The engine is a pure function. Each rule group inspects one attribute
//! (or attribute set) and appends to one or more category lists. Groups run
//! in a fixed order and never remove or reorder earlier lines.

use super::attributes::{BodyType, Budget, SkinTone, StylePreference, Undertone};
use super::profile::Profile;
use super::recommendation::{summarize, Recommendation};

const COOL_MAKEUP: &[&str] = &[
    "Choose pink or berry blushes",
    "Opt for foundations with pink/neutral base",
    "Silver or cool-toned highlighter",
];
const COOL_JEWELRY: &str = "Prefer silver, platinum, or white gold jewelry";

const WARM_MAKEUP: &[&str] = &[
    "Peach or coral blushes flatter warm undertones",
    "Golden highlighters and warm bronzers",
    "Foundations with yellow/golden base",
];
const WARM_JEWELRY: &str = "Prefer gold or rose-gold jewelry";

const NEUTRAL_MAKEUP: &[&str] = &[
    "Neutral blush tones like rose",
    "Neutral foundation shades with balanced undertone",
];
const NEUTRAL_JEWELRY: &str = "Mix of gold and silver works well";

const FAIR_SKINCARE: &[&str] = &[
    "Daily SPF 50 and gentle cleansers",
    "Niacinamide for tone-evening",
];
const MEDIUM_SKINCARE: &[&str] = &[
    "Daily SPF 30+, vitamin C serum",
    "Lightweight gel moisturizers",
];
const DEEP_SKINCARE: &[&str] = &[
    "SPF 30 daily; look for no white-cast formulas",
    "Hydrating cleansers and ceramide moisturizers",
];

const HOURGLASS_CLOTHING: &[&str] = &[
    "Wrap dresses and high-waisted bottoms",
    "Tailored pieces that define the waist",
];
const PEAR_CLOTHING: &[&str] = &[
    "A-line skirts, statement tops to balance proportions",
    "Structured jackets and darker bottoms",
];
const RECTANGLE_CLOTHING: &[&str] = &[
    "Peplum tops, belts, and layered textures",
    "High-rise pants and cropped jackets",
];
const INVERTED_TRIANGLE_CLOTHING: &[&str] = &[
    "V-necklines, A-line skirts, and straight-leg pants",
    "Avoid heavy shoulder padding",
];

const CAPSULE_WARDROBE: &str = "Focus on versatile pieces and capsule wardrobe basics";
const INVEST_IN_STAPLES: &str = "Invest in quality staples and timeless accessories";

/// Stateless rule engine producing styling recommendations.
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Builds the full recommendation for a profile.
    ///
    /// Never fails: missing or unrecognised values simply contribute nothing
    /// to the category they would have affected (undertone falls back to
    /// neutral instead).
    pub fn recommend(profile: &Profile) -> Recommendation {
        let mut rec = Recommendation::with_summary(summarize(profile));

        Self::apply_undertone(profile.undertone(), &mut rec);
        Self::apply_skin_tone(profile.skin_tone(), &mut rec);
        Self::apply_body_type(profile.body_type(), &mut rec);
        Self::apply_style_preferences(profile, &mut rec);
        Self::apply_accessory_styles(profile.accessory_styles(), &mut rec);
        Self::apply_budget(profile.budget(), &mut rec);

        rec
    }

    fn apply_undertone(undertone: Undertone, rec: &mut Recommendation) {
        let (makeup, jewelry) = match undertone {
            Undertone::Cool => (COOL_MAKEUP, COOL_JEWELRY),
            Undertone::Warm => (WARM_MAKEUP, WARM_JEWELRY),
            Undertone::Neutral => (NEUTRAL_MAKEUP, NEUTRAL_JEWELRY),
        };
        extend(&mut rec.makeup, makeup);
        rec.accessories.push(jewelry.to_string());
    }

    fn apply_skin_tone(tone: SkinTone, rec: &mut Recommendation) {
        let lines = match tone {
            SkinTone::Fair => FAIR_SKINCARE,
            SkinTone::Medium => MEDIUM_SKINCARE,
            SkinTone::Deep => DEEP_SKINCARE,
            SkinTone::Other => return,
        };
        extend(&mut rec.skincare, lines);
    }

    fn apply_body_type(body_type: BodyType, rec: &mut Recommendation) {
        let lines = match body_type {
            BodyType::Hourglass => HOURGLASS_CLOTHING,
            BodyType::Pear => PEAR_CLOTHING,
            BodyType::Rectangle => RECTANGLE_CLOTHING,
            BodyType::InvertedTriangle => INVERTED_TRIANGLE_CLOTHING,
            BodyType::Other => return,
        };
        extend(&mut rec.clothing, lines);
    }

    /// Output order follows `StylePreference::all()`, not input order.
    fn apply_style_preferences(profile: &Profile, rec: &mut Recommendation) {
        for style in StylePreference::all() {
            if profile.prefers(*style) {
                rec.clothing.push(style_line(*style).to_string());
            }
        }
    }

    fn apply_accessory_styles(styles: &[String], rec: &mut Recommendation) {
        rec.accessories.extend(
            styles
                .iter()
                .map(|style| format!("Lean into {} accessories as signature pieces", style)),
        );
    }

    fn apply_budget(budget: Budget, rec: &mut Recommendation) {
        match budget {
            Budget::Budget => rec.accessories.push(CAPSULE_WARDROBE.to_string()),
            Budget::Premium => rec.accessories.push(INVEST_IN_STAPLES.to_string()),
            Budget::Other => {}
        }
    }
}

fn style_line(style: StylePreference) -> &'static str {
    match style {
        StylePreference::Minimal => "Monochrome looks with clean lines and tailored fits",
        StylePreference::Streetwear => "Relaxed silhouettes, sneakers, and graphic accents",
        StylePreference::Classic => "Crisp shirts, trench coats, and neutral palettes",
        StylePreference::Edgy => "Leather accents, metal details, and bold contrasts",
        StylePreference::Boho => "Flowy fabrics, earthy tones, and layered accessories",
    }
}

fn extend(target: &mut Vec<String>, lines: &[&str]) {
    target.extend(lines.iter().map(|line| line.to_string()));
}
