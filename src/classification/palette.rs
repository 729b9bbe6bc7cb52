//! Category colour palette

use super::category::category;

/// One hex colour per category, tropical storm through Category 5
pub const CATEGORY_COLORS: [&str; 6] = [
    "#6b7280", // gray
    "#eab308", // yellow
    "#f97316", // orange
    "#dc2626", // red
    "#9333ea", // purple
    "#000000", // black
];

/// Colour for a wind speed; bins exactly as [`category`] does
pub fn color(wind_kt: f64) -> &'static str {
    category_color(category(wind_kt))
}

pub fn category_color(category: u8) -> &'static str {
    CATEGORY_COLORS[usize::from(category.min(5))]
}
