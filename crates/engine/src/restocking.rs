//! Restocking recommendations: requirements against the inventory snapshot.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use pantry_core::{EngineError, EngineResult, MaterialName};

use crate::issue::{DataWarning, Outcome, UnmatchedKeyPolicy, handle_unmatched};
use crate::model::{InventoryItem, RequirementEntry, RestockingEntry};

/// Materials to reorder, highest estimated cost first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestockingPlan {
    pub entries: Vec<RestockingEntry>,
    pub total_cost: f64,
}

impl RestockingPlan {
    fn from_entries(mut entries: Vec<RestockingEntry>) -> Self {
        entries.sort_by(by_cost_desc_then_name);
        let total_cost = entries.iter().map(|e| e.estimated_cost).sum();
        Self {
            entries,
            total_cost,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute shortfalls for every required material.
///
/// `target = max(required, minimum_stock_level)` and
/// `shortfall = max(0, target - (current_stock + incoming_stock))`.
/// Materials with no shortfall are omitted. A required material missing from
/// `inventory` is handled by `policy`.
pub fn restocking_needs(
    requirements: &[RequirementEntry],
    inventory: &[InventoryItem],
    policy: UnmatchedKeyPolicy,
) -> EngineResult<Outcome<RestockingPlan>> {
    let stock = index_inventory(inventory)?;

    let mut entries = Vec::new();
    let mut warnings = Vec::new();

    for req in requirements {
        let Some(item) = stock.get(&req.material_name) else {
            handle_unmatched(
                policy,
                DataWarning::UnknownMaterial {
                    material: req.material_name.clone(),
                },
                &mut warnings,
            )?;
            continue;
        };

        if let Some(entry) = shortfall_for(req, item) {
            entries.push(entry);
        }
    }

    let plan = RestockingPlan::from_entries(entries);

    tracing::debug!(
        materials = plan.entries.len(),
        total_cost = plan.total_cost,
        warnings = warnings.len(),
        "restocking needs computed"
    );

    Ok(Outcome::with_warnings(plan, warnings))
}

fn shortfall_for(req: &RequirementEntry, item: &InventoryItem) -> Option<RestockingEntry> {
    let target = req.total_required_quantity.max(item.minimum_stock_level);
    let shortfall = (target - item.available_stock()).max(0.0);
    if shortfall <= 0.0 {
        return None;
    }

    Some(RestockingEntry {
        material_name: req.material_name.clone(),
        required_quantity: req.total_required_quantity,
        current_stock: item.current_stock,
        incoming_stock: item.incoming_stock,
        minimum_stock_level: item.minimum_stock_level,
        shortfall_quantity: shortfall,
        unit: item.unit.clone(),
        cost_per_unit: item.cost_per_unit,
        estimated_cost: shortfall * item.cost_per_unit,
    })
}

/// Key inventory by material, rejecting duplicate keys and invalid quantities.
pub(crate) fn index_inventory(
    inventory: &[InventoryItem],
) -> EngineResult<HashMap<&MaterialName, &InventoryItem>> {
    let mut index = HashMap::with_capacity(inventory.len());
    for item in inventory {
        ensure_valid_item(item)?;
        if index.insert(&item.material_name, item).is_some() {
            return Err(EngineError::invalid_parameter(format!(
                "inventory lists material '{}' more than once",
                item.material_name
            )));
        }
    }
    Ok(index)
}

/// Stock levels and unit cost must be finite and non-negative.
pub(crate) fn ensure_valid_item(item: &InventoryItem) -> EngineResult<()> {
    let fields = [
        ("current_stock", item.current_stock),
        ("incoming_stock", item.incoming_stock),
        ("minimum_stock_level", item.minimum_stock_level),
        ("cost_per_unit", item.cost_per_unit),
    ];
    for (field, value) in fields {
        if !(value.is_finite() && value >= 0.0) {
            return Err(EngineError::invalid_parameter(format!(
                "inventory item '{}' has invalid {field} (got {value})",
                item.material_name
            )));
        }
    }
    Ok(())
}

fn by_cost_desc_then_name(a: &RestockingEntry, b: &RestockingEntry) -> Ordering {
    b.estimated_cost
        .total_cmp(&a.estimated_cost)
        .then_with(|| a.material_name.cmp(&b.material_name))
}
