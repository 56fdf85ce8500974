//! `pantry-engine`
//!
//! **Responsibility:** forecasting-and-restocking engine for food & beverage stock.
//!
//! Turns order history, recipes and an inventory snapshot into a demand
//! forecast, per-material requirements, restocking recommendations and a
//! near-expiry list.
//!
//! - Every operation is a pure function of its inputs plus an explicit reference date.
//! - It performs no IO; tables are supplied in memory by callers.
//! - Data-consistency gaps follow an explicit [`UnmatchedKeyPolicy`].

pub mod config;
pub mod expiry;
pub mod forecast;
pub mod issue;
pub mod model;
pub mod optimizer;
pub mod report;
pub mod requirements;
pub mod restocking;

pub use config::EngineConfig;
pub use expiry::near_expiry;
pub use forecast::forecast;
pub use issue::{DataWarning, Outcome, UnmatchedKeyPolicy};
pub use model::{
    CandidateDish, DailyForecast, DailyRequirement, Dataset, ExpiryRiskEntry, ForecastEntry,
    InventoryItem, OrderRecord, RecipeLine, RequirementEntry, RestockingEntry,
};
pub use optimizer::InventoryOptimizer;
pub use report::{OptimizationReport, ReportSummary, generate_report};
pub use requirements::requirements;
pub use restocking::{RestockingPlan, restocking_needs};

pub use pantry_core::{DishName, EngineError, EngineResult, MaterialName};
