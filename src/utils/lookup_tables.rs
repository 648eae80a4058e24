//! Crop Enrichment Lookup Tables
//!
//! Static icon and growing-tip tables keyed by normalised crop label.
//! Not derived from data: unknown labels fall back to a sprout icon and two
//! generic tips.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// Icon used for labels missing from the table
pub const DEFAULT_ICON: &str = "🌱";

/// Tips used for labels missing from the table
pub const DEFAULT_TIPS: &[&str] = &["Consult local agriculture experts", "Monitor soil regularly"];

// ============================================================================
// EMBEDDED TABLES
// ============================================================================

static CROP_ICONS: &[(&str, &str)] = &[
    ("rice", "🌾"),
    ("maize", "🌽"),
    ("chickpea", "🫘"),
    ("kidney beans", "🫘"),
    ("pigeon peas", "🫛"),
    ("moth beans", "🫘"),
    ("mung bean", "🫘"),
    ("black gram", "🫘"),
    ("lentil", "🫘"),
    ("pomegranate", "🍎"),
    ("banana", "🍌"),
    ("mango", "🥭"),
    ("grapes", "🍇"),
    ("watermelon", "🍉"),
    ("muskmelon", "🍈"),
    ("apple", "🍎"),
    ("orange", "🍊"),
    ("papaya", "🫐"),
    ("coconut", "🥥"),
    ("cotton", "☁️"),
    ("jute", "🌿"),
    ("coffee", "☕"),
];

static CROP_TIPS: &[(&str, &[&str])] = &[
    ("rice", &["Requires flooded fields", "Plant during monsoon", "Needs consistent water"]),
    ("maize", &["Good for crop rotation", "Drought tolerant", "Harvest when kernels are hard"]),
    ("chickpea", &["Nitrogen-fixing crop", "Good for soil health", "Avoid waterlogging"]),
    ("kidney beans", &["Needs moderate water", "Plant after frost", "Support with stakes"]),
    ("pigeon peas", &["Drought resistant", "Improves soil fertility", "Long growing season"]),
    ("moth beans", &["Very drought tolerant", "Thrives in arid zones", "Short growing period"]),
    ("mung bean", &["Fast growing", "Good summer crop", "Fixes nitrogen"]),
    ("black gram", &["Suits monsoon season", "Enriches soil", "Avoid waterlogging"]),
    ("lentil", &["Cool season crop", "Low water needs", "Good protein source"]),
    ("pomegranate", &["Drought tolerant tree", "Needs dry climate", "Prune regularly"]),
    ("banana", &["Needs lots of water", "Heavy feeder crop", "Protect from wind"]),
    ("mango", &["Needs dry flowering period", "Deep rooted tree", "Mulch well"]),
    ("grapes", &["Needs trellising", "Good drainage essential", "Prune in winter"]),
    ("watermelon", &["Needs warm weather", "Space plants well", "Avoid overhead watering"]),
    ("muskmelon", &["Needs warm soil", "Mulch heavily", "Pick when aromatic"]),
    ("apple", &["Needs cold winter", "Thin fruit early", "Pest management crucial"]),
    ("orange", &["Consistent watering", "Feed regularly", "Protect from frost"]),
    ("papaya", &["Fast growing", "Good drainage needed", "Male and female plants"]),
    ("coconut", &["Coastal areas ideal", "High potassium needs", "Long maturity period"]),
    ("cotton", &["Needs warm weather", "Pest control important", "Deep tillage needed"]),
    ("jute", &["Needs humid climate", "Waterlogging tolerant", "Harvest before flowering"]),
    ("coffee", &["Shade grown best", "Acidic soil preferred", "High altitude suits"]),
];

static ICON_INDEX: LazyLock<FxHashMap<&'static str, &'static str>> =
    LazyLock::new(|| CROP_ICONS.iter().copied().collect());

static TIPS_INDEX: LazyLock<FxHashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| CROP_TIPS.iter().copied().collect());

// ============================================================================
// LOOKUPS
// ============================================================================

/// Icon for a normalised crop label, or [`DEFAULT_ICON`]
pub fn crop_icon(label: &str) -> &'static str {
    match ICON_INDEX.get(label) {
        Some(icon) => *icon,
        None => DEFAULT_ICON,
    }
}

/// Growing tips for a normalised crop label, or [`DEFAULT_TIPS`]
pub fn crop_tips(label: &str) -> &'static [&'static str] {
    match TIPS_INDEX.get(label) {
        Some(tips) => *tips,
        None => DEFAULT_TIPS,
    }
}
