//! Near-expiry stock and the dishes that can use it up.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use pantry_core::{DishName, EngineResult, MaterialName};

use crate::config::validate_days_threshold;
use crate::model::{CandidateDish, ExpiryRiskEntry, InventoryItem, RecipeLine};
use crate::requirements::ensure_valid_line;
use crate::restocking::ensure_valid_item;

/// Inventory expiring within `days_threshold` days of `reference_date`.
///
/// Items with `0 <= days_until_expiry <= days_threshold` are selected; items
/// already past expiry are included only when `include_expired` is set.
/// Results are ordered by days until expiry, then material name.
pub fn near_expiry(
    inventory: &[InventoryItem],
    recipes: &[RecipeLine],
    days_threshold: u32,
    include_expired: bool,
    reference_date: NaiveDate,
) -> EngineResult<Vec<ExpiryRiskEntry>> {
    validate_days_threshold(days_threshold)?;
    let usage = usage_by_material(recipes)?;
    for item in inventory {
        ensure_valid_item(item)?;
    }

    let mut entries: Vec<ExpiryRiskEntry> = inventory
        .iter()
        .filter_map(|item| {
            let days = (item.expiry_date - reference_date).num_days();
            let in_window = days <= i64::from(days_threshold) && (days >= 0 || include_expired);
            in_window.then(|| ExpiryRiskEntry {
                material_name: item.material_name.clone(),
                days_until_expiry: days,
                current_stock: item.current_stock,
                unit: item.unit.clone(),
                candidate_dishes: candidate_dishes(item, usage.get(&item.material_name)),
            })
        })
        .collect();

    entries.sort_by(|a, b| {
        a.days_until_expiry
            .cmp(&b.days_until_expiry)
            .then_with(|| a.material_name.cmp(&b.material_name))
    });

    tracing::debug!(
        materials = entries.len(),
        days_threshold,
        include_expired,
        %reference_date,
        "near-expiry analysis computed"
    );

    Ok(entries)
}

/// material → (dish → quantity per serving), summing repeated lines.
fn usage_by_material(
    recipes: &[RecipeLine],
) -> EngineResult<HashMap<&MaterialName, BTreeMap<&DishName, f64>>> {
    let mut usage: HashMap<&MaterialName, BTreeMap<&DishName, f64>> = HashMap::new();
    for line in recipes {
        ensure_valid_line(line)?;
        *usage
            .entry(&line.material_name)
            .or_default()
            .entry(&line.dish_name)
            .or_insert(0.0) += line.quantity_needed_per_serving;
    }
    Ok(usage)
}

fn candidate_dishes(
    item: &InventoryItem,
    usage: Option<&BTreeMap<&DishName, f64>>,
) -> Vec<CandidateDish> {
    let Some(usage) = usage else {
        return Vec::new();
    };

    let stock = item.current_stock;
    let mut dishes: Vec<CandidateDish> = usage
        .iter()
        .map(|(dish, per_serving)| CandidateDish {
            dish_name: (*dish).clone(),
            max_servings: (stock / per_serving).floor() as u64,
        })
        .collect();

    dishes.sort_by(|a, b| {
        b.max_servings
            .cmp(&a.max_servings)
            .then_with(|| a.dish_name.cmp(&b.dish_name))
    });
    dishes
}
