//! Input tables and derived result rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use pantry_core::{DishName, MaterialName, ValueObject};

/// One historical sale: a dish sold on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub date: NaiveDate,
    pub dish_name: DishName,
    pub quantity_sold: u32,
    pub revenue: f64,
}

/// Bill-of-materials line: how much of a material one serving of a dish uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub dish_name: DishName,
    pub material_name: MaterialName,
    /// Must be finite and > 0.
    pub quantity_needed_per_serving: f64,
}

impl RecipeLine {
    pub fn new(
        dish_name: impl Into<DishName>,
        material_name: impl Into<MaterialName>,
        quantity_needed_per_serving: f64,
    ) -> Self {
        Self {
            dish_name: dish_name.into(),
            material_name: material_name.into(),
            quantity_needed_per_serving,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.quantity_needed_per_serving.is_finite() && self.quantity_needed_per_serving > 0.0
    }
}

/// Current stock of a material, keyed by `material_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub material_name: MaterialName,
    pub current_stock: f64,
    pub unit: String,
    pub expiry_date: NaiveDate,
    pub cost_per_unit: f64,
    pub minimum_stock_level: f64,
    /// Stock already ordered but not yet received.
    #[serde(default)]
    pub incoming_stock: f64,
}

impl InventoryItem {
    /// Stock that will be on hand once incoming deliveries arrive.
    pub fn available_stock(&self) -> f64 {
        self.current_stock + self.incoming_stock
    }
}

/// The three in-memory tables a single optimization run works over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub orders: Vec<OrderRecord>,
    pub recipes: Vec<RecipeLine>,
    pub inventory: Vec<InventoryItem>,
}

/// Adjusted demand estimate for one projected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub quantity: f64,
    pub seasonal_factor: f64,
    pub weekend_factor: f64,
}

/// Forecasted servings of a dish over the projection window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub dish_name: DishName,
    pub forecasted_quantity: f64,
    pub period_days: u32,
    pub daily: Vec<DailyForecast>,
}

/// Amount of a material needed on one projected day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRequirement {
    pub date: NaiveDate,
    pub quantity: f64,
}

/// Total amount of a material needed to cover the forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementEntry {
    pub material_name: MaterialName,
    pub total_required_quantity: f64,
    /// Per-day split, ascending by date. Empty when the forecast had no daily breakdown.
    #[serde(default)]
    pub daily: Vec<DailyRequirement>,
}

/// A material that must be reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockingEntry {
    pub material_name: MaterialName,
    pub required_quantity: f64,
    pub current_stock: f64,
    pub incoming_stock: f64,
    pub minimum_stock_level: f64,
    pub shortfall_quantity: f64,
    pub unit: String,
    pub cost_per_unit: f64,
    pub estimated_cost: f64,
}

/// Dish that can consume a near-expiry material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDish {
    pub dish_name: DishName,
    /// Servings realizable from current stock of the material alone.
    pub max_servings: u64,
}

/// A material close to (or past) its expiry date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpiryRiskEntry {
    pub material_name: MaterialName,
    pub days_until_expiry: i64,
    pub current_stock: f64,
    pub unit: String,
    pub candidate_dishes: Vec<CandidateDish>,
}

impl ExpiryRiskEntry {
    pub fn is_expired(&self) -> bool {
        self.days_until_expiry < 0
    }
}

impl ValueObject for OrderRecord {}
impl ValueObject for RecipeLine {}
impl ValueObject for InventoryItem {}
impl ValueObject for ForecastEntry {}
impl ValueObject for RequirementEntry {}
impl ValueObject for RestockingEntry {}
impl ValueObject for ExpiryRiskEntry {}
