//! Unit tests for category and colour classification

use hurricane_lens::classification::{
    category, category_color, category_label, color, CATEGORY_COLORS,
};

const BOUNDARIES: [(f64, u8); 12] = [
    (33.9, 0),
    (34.0, 0),
    (63.9, 0),
    (64.0, 1),
    (82.9, 1),
    (83.0, 2),
    (95.9, 2),
    (96.0, 3),
    (112.9, 3),
    (113.0, 4),
    (136.9, 4),
    (137.0, 5),
];

#[test]
fn test_category_boundaries() {
    for (wind, expected) in BOUNDARIES {
        assert_eq!(category(wind), expected, "wind {} kt", wind);
    }
}

#[test]
fn test_color_bins_match_category() {
    for (wind, expected) in BOUNDARIES {
        assert_eq!(color(wind), CATEGORY_COLORS[expected as usize], "wind {} kt", wind);
        assert_eq!(color(wind), category_color(category(wind)));
    }
}

#[test]
fn test_category_is_total() {
    assert_eq!(category(0.0), 0);
    assert_eq!(category(-20.0), 0);
    assert_eq!(category(f64::NAN), 0);
    assert_eq!(category(400.0), 5);
    assert_eq!(category(f64::INFINITY), 5);
}

#[test]
fn test_category_labels() {
    assert_eq!(category_label(0), "Tropical Storm");
    assert_eq!(category_label(3), "Category 3");
    assert_eq!(category_label(9), "Category 5");
}
