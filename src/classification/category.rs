//! Saffir-Simpson category from sustained wind speed

/// Lower bounds (kt) of categories 1 through 5. Bins are `[lower, upper)`;
/// everything below 64 kt (depressions and tropical storms) is category 0.
pub const CATEGORY_THRESHOLDS_KT: [f64; 5] = [64.0, 83.0, 96.0, 113.0, 137.0];

/// Wind speed (kt) at which a system becomes a named tropical storm
pub const TROPICAL_STORM_KT: f64 = 34.0;

pub const CATEGORY_LABELS: [&str; 6] = [
    "Tropical Storm",
    "Category 1",
    "Category 2",
    "Category 3",
    "Category 4",
    "Category 5",
];

/// Category 0..=5 for a wind speed in knots.
///
/// Total over `f64`: NaN and negative speeds fall into category 0.
pub fn category(wind_kt: f64) -> u8 {
    CATEGORY_THRESHOLDS_KT
        .iter()
        .take_while(|&&lower| wind_kt >= lower)
        .count() as u8
}

pub fn category_label(category: u8) -> &'static str {
    CATEGORY_LABELS[usize::from(category.min(5))]
}
