//! Material requirements: forecast × bill-of-materials.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use pantry_core::{DishName, EngineError, EngineResult, MaterialName};

use crate::issue::{DataWarning, Outcome, UnmatchedKeyPolicy, handle_unmatched};
use crate::model::{DailyRequirement, ForecastEntry, RecipeLine, RequirementEntry};

/// Total required quantity per material, sorted by material name.
///
/// Each entry also carries the per-day amounts folded from the forecast's
/// daily breakdown.
///
/// A forecasted dish with no recipe lines is handled by `policy`: under
/// [`UnmatchedKeyPolicy::Warn`] it contributes nothing and is reported as
/// [`DataWarning::MissingRecipeData`].
pub fn requirements(
    forecast: &[ForecastEntry],
    recipes: &[RecipeLine],
    policy: UnmatchedKeyPolicy,
) -> EngineResult<Outcome<Vec<RequirementEntry>>> {
    let by_dish = recipes_by_dish(recipes)?;

    let mut totals: BTreeMap<MaterialName, MaterialDemand> = BTreeMap::new();
    let mut warnings = Vec::new();

    for entry in forecast {
        let Some(lines) = by_dish.get(&entry.dish_name) else {
            handle_unmatched(
                policy,
                DataWarning::MissingRecipeData {
                    dish: entry.dish_name.clone(),
                },
                &mut warnings,
            )?;
            continue;
        };

        for line in lines {
            totals
                .entry(line.material_name.clone())
                .or_default()
                .add(entry, line.quantity_needed_per_serving);
        }
    }

    let entries: Vec<RequirementEntry> = totals
        .into_iter()
        .map(|(material_name, demand)| demand.into_entry(material_name))
        .collect();

    tracing::debug!(
        materials = entries.len(),
        warnings = warnings.len(),
        "material requirements computed"
    );

    Ok(Outcome::with_warnings(entries, warnings))
}

#[derive(Default)]
struct MaterialDemand {
    total: f64,
    by_date: BTreeMap<NaiveDate, f64>,
}

impl MaterialDemand {
    fn add(&mut self, entry: &ForecastEntry, per_serving: f64) {
        self.total += entry.forecasted_quantity * per_serving;
        for day in &entry.daily {
            *self.by_date.entry(day.date).or_insert(0.0) += day.quantity * per_serving;
        }
    }

    fn into_entry(self, material_name: MaterialName) -> RequirementEntry {
        RequirementEntry {
            material_name,
            total_required_quantity: self.total,
            daily: self
                .by_date
                .into_iter()
                .map(|(date, quantity)| DailyRequirement { date, quantity })
                .collect(),
        }
    }
}

/// Index recipe lines by dish, rejecting lines with a non-positive quantity.
pub(crate) fn recipes_by_dish(
    recipes: &[RecipeLine],
) -> EngineResult<HashMap<&DishName, Vec<&RecipeLine>>> {
    let mut by_dish: HashMap<&DishName, Vec<&RecipeLine>> = HashMap::new();
    for line in recipes {
        ensure_valid_line(line)?;
        by_dish.entry(&line.dish_name).or_default().push(line);
    }
    Ok(by_dish)
}

pub(crate) fn ensure_valid_line(line: &RecipeLine) -> EngineResult<()> {
    if !line.is_valid() {
        return Err(EngineError::invalid_parameter(format!(
            "recipe line {} / {} must need a positive quantity per serving (got {})",
            line.dish_name, line.material_name, line.quantity_needed_per_serving
        )));
    }
    Ok(())
}
