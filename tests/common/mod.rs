//! Shared test fixtures for the Bloomshop SDK integration tests.
//!
//! Provides a small sample catalog of wholesale flowers plus a `product()`
//! helper for building ad hoc entries with sensible defaults.

use bloomshop_sdk::models::Product;

/// Build a product with the given essentials and neutral defaults for the
/// rest. Tests that care about a specific field override it on the result.
pub fn product(id: u64, name: &str, unit_price: f64, available_qty: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        group_id: 10,
        group_name: "Roses".to_string(),
        color_id: 1,
        color_name: "Red".to_string(),
        available_qty,
        unit_price,
        packaging: None,
        stems_per_unit: None,
        height_id: None,
        quality_id: None,
        origin_id: None,
        image_url: None,
        has_image: false,
    }
}

/// A catalog snapshot spanning two groups, three colors, and a sold-out
/// entry, in a deliberate non-sorted order.
pub fn sample_catalog() -> Vec<Product> {
    let mut red_naomi = product(1, "Red Naomi", 1.20, 250);
    red_naomi.height_id = Some(60);
    red_naomi.quality_id = Some(1);
    red_naomi.packaging = Some(20);

    let mut avalanche = product(2, "Avalanche", 0.95, 180);
    avalanche.color_id = 2;
    avalanche.color_name = "White".to_string();
    avalanche.height_id = Some(70);

    let mut santini = product(3, "Santini Madiba", 0.45, 0);
    santini.group_id = 20;
    santini.group_name = "Chrysanthemums".to_string();
    santini.color_id = 3;
    santini.color_name = "Yellow".to_string();

    let mut anastasia = product(4, "Anastasia", 1.60, 90);
    anastasia.group_id = 20;
    anastasia.group_name = "Chrysanthemums".to_string();
    anastasia.color_id = 2;
    anastasia.color_name = "White".to_string();
    anastasia.origin_id = Some(5);

    vec![red_naomi, avalanche, santini, anastasia]
}
