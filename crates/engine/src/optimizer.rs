//! One-call optimization pipeline over a [`Dataset`].

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};

use pantry_core::{DishName, EngineResult};

use crate::config::EngineConfig;
use crate::expiry::near_expiry;
use crate::forecast::forecast;
use crate::model::Dataset;
use crate::report::{OptimizationReport, generate_report};
use crate::requirements::requirements;
use crate::restocking::restocking_needs;

/// One-call pipeline: forecast → requirements → restocking, plus expiry risk.
///
/// Holds only its configuration; every run is a pure function of the dataset
/// and the injected dates, so one optimizer can serve many snapshots.
#[derive(Debug, Clone, Default)]
pub struct InventoryOptimizer {
    config: EngineConfig,
}

impl InventoryOptimizer {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run against `dataset` as of `reference_date`, stamping the report with `generated_at`.
    pub fn run(
        &self,
        dataset: &Dataset,
        reference_date: NaiveDate,
        generated_at: DateTime<Utc>,
    ) -> EngineResult<OptimizationReport> {
        self.config.validate()?;

        // Recipe dishes with no sales still get a (zero) forecast.
        let menu: BTreeSet<&DishName> = dataset.recipes.iter().map(|r| &r.dish_name).collect();

        let demand = forecast(&dataset.orders, menu, &self.config, reference_date)?;

        let (material_requirements, mut warnings) = requirements(
            &demand,
            &dataset.recipes,
            self.config.missing_recipe_policy,
        )?
        .into_parts();

        let (restocking, restock_warnings) = restocking_needs(
            &material_requirements,
            &dataset.inventory,
            self.config.unknown_material_policy,
        )?
        .into_parts();
        warnings.extend(restock_warnings);

        let expiring = near_expiry(
            &dataset.inventory,
            &dataset.recipes,
            self.config.days_threshold,
            self.config.include_expired,
            reference_date,
        )?;

        let report = generate_report(
            self.config.days_ahead,
            demand,
            material_requirements,
            restocking,
            expiring,
            warnings,
            generated_at,
        );

        tracing::info!(
            %reference_date,
            forecast_period_days = report.summary.forecast_period_days,
            materials_to_restock = report.summary.materials_to_restock,
            materials_near_expiry = report.summary.materials_near_expiry,
            total_restock_cost = report.summary.total_restock_cost,
            data_warnings = report.summary.data_warnings,
            "optimization report generated"
        );

        Ok(report)
    }

    /// Run as of today's UTC date.
    pub fn run_now(&self, dataset: &Dataset) -> EngineResult<OptimizationReport> {
        let now = Utc::now();
        self.run(dataset, now.date_naive(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, TimeZone};
    use pantry_core::{EngineError, MaterialName};

    use crate::issue::DataWarning;
    use crate::model::{InventoryItem, OrderRecord, RecipeLine};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 15, 9, 0, 0).unwrap()
    }

    fn stock(name: &str, current: f64, minimum: f64, expires_in: u64) -> InventoryItem {
        InventoryItem {
            material_name: MaterialName::from(name),
            current_stock: current,
            unit: "kg".to_string(),
            expiry_date: reference() + Days::new(expires_in),
            cost_per_unit: 2.0,
            minimum_stock_level: minimum,
            incoming_stock: 0.0,
        }
    }

    fn dataset() -> Dataset {
        let orders = (0..10)
            .map(|i| OrderRecord {
                date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap() + Days::new(i),
                dish_name: DishName::from("Vegetable Salad"),
                quantity_sold: 10,
                revenue: 120.0,
            })
            .collect();

        Dataset {
            orders,
            recipes: vec![
                RecipeLine::new("Vegetable Salad", "Mixed Vegetables", 0.5),
                RecipeLine::new("Fish Soup", "Fish Fillet", 0.25),
            ],
            inventory: vec![
                stock("Mixed Vegetables", 10.0, 20.0, 2),
                stock("Fish Fillet", 5.0, 2.0, 10),
            ],
        }
    }

    #[test]
    fn run_wires_all_stages() {
        let optimizer = InventoryOptimizer::new(EngineConfig::flat().with_days_ahead(7));
        let report = optimizer.run(&dataset(), reference(), at()).unwrap();

        // 10/day × 7 days × 0.5 kg = 35 kg needed, 10 kg on hand.
        assert_eq!(report.restocking.entries.len(), 1);
        let veg = &report.restocking.entries[0];
        assert_eq!(veg.material_name.as_str(), "Mixed Vegetables");
        assert_eq!(veg.shortfall_quantity, 25.0);
        assert_eq!(report.summary.total_restock_cost, 50.0);

        let veg_need = &report.material_requirements[1];
        assert_eq!(veg_need.material_name.as_str(), "Mixed Vegetables");
        assert_eq!(veg_need.daily.len(), 7);
        assert!(veg_need.daily.iter().all(|d| d.quantity == 5.0));

        // Fish Soup is on the menu without sales.
        let soup = report
            .demand_forecast
            .iter()
            .find(|e| e.dish_name.as_str() == "Fish Soup")
            .unwrap();
        assert_eq!(soup.forecasted_quantity, 0.0);

        assert_eq!(report.near_expiry.len(), 1);
        assert_eq!(report.near_expiry[0].material_name.as_str(), "Mixed Vegetables");
        assert_eq!(report.near_expiry[0].candidate_dishes[0].max_servings, 20);

        assert!(report.warnings.is_empty());
        assert_eq!(report.summary.generated_at, at());
    }

    #[test]
    fn data_gaps_become_warnings_by_default() {
        let mut data = dataset();
        data.inventory.retain(|i| i.material_name.as_str() != "Fish Fillet");
        data.orders.push(OrderRecord {
            date: NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
            dish_name: DishName::from("Mystery Stew"),
            quantity_sold: 3,
            revenue: 30.0,
        });

        let report = InventoryOptimizer::default()
            .run(&data, reference(), at())
            .unwrap();

        assert!(report.warnings.contains(&DataWarning::MissingRecipeData {
            dish: DishName::from("Mystery Stew")
        }));
        assert!(report.warnings.contains(&DataWarning::UnknownMaterial {
            material: MaterialName::from("Fish Fillet")
        }));
        assert_eq!(report.summary.data_warnings, 2);
        assert!(!report.restocking.is_empty());
    }

    #[test]
    fn strict_config_surfaces_first_gap_as_error() {
        let mut data = dataset();
        data.inventory.clear();

        let err = InventoryOptimizer::new(EngineConfig::default().strict())
            .run(&data, reference(), at())
            .unwrap_err();
        assert!(matches!(err, EngineError::UnknownMaterial { .. }));
    }

    #[test]
    fn invalid_config_is_rejected_before_running() {
        let err = InventoryOptimizer::new(EngineConfig::default().with_days_threshold(1000))
            .run(&dataset(), reference(), at())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn empty_dataset_still_reports_configured_window() {
        let report = InventoryOptimizer::new(EngineConfig::default().with_days_ahead(10))
            .run(&Dataset::default(), reference(), at())
            .unwrap();
        assert!(report.demand_forecast.is_empty());
        assert_eq!(report.summary.forecast_period_days, 10);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let optimizer = InventoryOptimizer::default();
        let data = dataset();
        let a = optimizer.run(&data, reference(), at()).unwrap();
        let b = optimizer.run(&data, reference(), at()).unwrap();
        assert_eq!(a, b);
    }
}
