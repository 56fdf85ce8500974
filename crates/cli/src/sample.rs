//! Built-in demo restaurant: five dishes, twelve materials, a year of sales.
//!
//! Everything is derived from the reference date so a given date always
//! produces the same dataset.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use pantry_engine::{Dataset, DishName, InventoryItem, MaterialName, OrderRecord, RecipeLine};

/// (dish, base servings per day, price per serving)
const DISHES: &[(&str, f64, f64)] = &[
    ("Chicken Curry", 15.0, 14.0),
    ("Beef Steak", 10.0, 24.0),
    ("Vegetable Salad", 20.0, 9.0),
    ("Pasta Marinara", 18.0, 12.0),
    ("Fish Soup", 12.0, 11.0),
];

/// (dish, material, quantity per serving)
const RECIPES: &[(&str, &str, f64)] = &[
    ("Chicken Curry", "Chicken Breast", 0.3),
    ("Chicken Curry", "Onions", 0.1),
    ("Chicken Curry", "Tomato Sauce", 0.2),
    ("Chicken Curry", "Herbs", 0.05),
    ("Beef Steak", "Beef Tenderloin", 0.4),
    ("Beef Steak", "Salt", 0.01),
    ("Beef Steak", "Pepper", 0.01),
    ("Vegetable Salad", "Mixed Vegetables", 0.3),
    ("Vegetable Salad", "Olive Oil", 0.02),
    ("Pasta Marinara", "Pasta", 0.2),
    ("Pasta Marinara", "Tomato Sauce", 0.15),
    ("Pasta Marinara", "Garlic", 0.02),
    ("Fish Soup", "Fish Fillet", 0.25),
    ("Fish Soup", "Onions", 0.1),
    ("Fish Soup", "Herbs", 0.03),
];

/// (material, stock, unit, days to expiry, cost per unit, minimum level)
const MATERIALS: &[(&str, f64, &str, u64, f64, f64)] = &[
    ("Chicken Breast", 24.0, "kg", 3, 8.5, 10.0),
    ("Beef Tenderloin", 12.0, "kg", 5, 32.0, 8.0),
    ("Mixed Vegetables", 18.0, "kg", 2, 4.2, 15.0),
    ("Pasta", 60.0, "kg", 180, 2.1, 10.0),
    ("Fish Fillet", 9.0, "kg", 1, 18.0, 6.0),
    ("Tomato Sauce", 35.0, "l", 30, 3.4, 10.0),
    ("Olive Oil", 8.0, "l", 200, 9.8, 2.0),
    ("Onions", 20.0, "kg", 14, 1.3, 5.0),
    ("Garlic", 3.0, "kg", 21, 6.0, 1.0),
    ("Salt", 5.0, "kg", 365, 0.8, 1.0),
    ("Pepper", 1.5, "kg", 365, 14.0, 0.5),
    ("Herbs", 2.0, "kg", 3, 22.0, 1.0),
];

pub fn restaurant(reference_date: NaiveDate) -> Dataset {
    Dataset {
        orders: orders(reference_date),
        recipes: RECIPES
            .iter()
            .map(|&(dish, material, qty)| RecipeLine::new(dish, material, qty))
            .collect(),
        inventory: MATERIALS
            .iter()
            .map(|&(name, stock, unit, expires_in, cost, minimum)| InventoryItem {
                material_name: MaterialName::from(name),
                current_stock: stock,
                unit: unit.to_string(),
                expiry_date: reference_date + Days::new(expires_in),
                cost_per_unit: cost,
                minimum_stock_level: minimum,
                incoming_stock: 0.0,
            })
            .collect(),
    }
}

/// The 365 days before `reference_date`, shaped by season and weekday.
fn orders(reference_date: NaiveDate) -> Vec<OrderRecord> {
    let mut orders = Vec::with_capacity(365 * DISHES.len());

    for back in (1..=365u64).rev() {
        let Some(date) = reference_date.checked_sub_days(Days::new(back)) else {
            continue;
        };
        let multiplier = season(date.month()) * weekday(date.weekday());

        for (i, &(dish, base, price)) in DISHES.iter().enumerate() {
            // Small repeatable wobble so the history is not perfectly flat.
            let wobble = ((date.ordinal() as usize + i * 5) % 7) as f64 - 3.0;
            let quantity = (base * multiplier + wobble).round().max(0.0) as u32;
            if quantity == 0 {
                continue;
            }
            orders.push(OrderRecord {
                date,
                dish_name: DishName::from(dish),
                quantity_sold: quantity,
                revenue: f64::from(quantity) * price,
            });
        }
    }

    orders
}

fn season(month: u32) -> f64 {
    match month {
        12 | 1 | 2 => 1.3,
        6..=8 => 1.1,
        _ => 1.0,
    }
}

fn weekday(day: Weekday) -> f64 {
    match day {
        Weekday::Sat | Weekday::Sun => 1.2,
        _ => 1.0,
    }
}
