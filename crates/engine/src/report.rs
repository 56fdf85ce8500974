//! Report assembly: stage outputs plus headline counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::issue::DataWarning;
use crate::model::{ExpiryRiskEntry, ForecastEntry, RequirementEntry};
use crate::restocking::RestockingPlan;

/// Headline counters for an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub forecast_period_days: u32,
    pub materials_to_restock: usize,
    pub materials_near_expiry: usize,
    pub total_restock_cost: f64,
    pub data_warnings: usize,
    pub generated_at: DateTime<Utc>,
}

/// Everything one run produced, bundled for consumers (console, CSV, charts).
///
/// This is a read-only result; it does not feed back into the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationReport {
    pub summary: ReportSummary,
    pub demand_forecast: Vec<ForecastEntry>,
    pub material_requirements: Vec<RequirementEntry>,
    pub restocking: RestockingPlan,
    pub near_expiry: Vec<ExpiryRiskEntry>,
    pub warnings: Vec<DataWarning>,
}

impl OptimizationReport {
    pub fn needs_attention(&self) -> bool {
        self.summary.materials_to_restock > 0 || self.summary.materials_near_expiry > 0
    }
}

/// Bundle stage outputs into a report. Pure aggregation: every input entry is kept.
///
/// `forecast_period_days` is the configured window, reported even when the
/// forecast itself is empty.
pub fn generate_report(
    forecast_period_days: u32,
    forecast: Vec<ForecastEntry>,
    requirements: Vec<RequirementEntry>,
    restocking: RestockingPlan,
    near_expiry: Vec<ExpiryRiskEntry>,
    warnings: Vec<DataWarning>,
    generated_at: DateTime<Utc>,
) -> OptimizationReport {
    let summary = ReportSummary {
        forecast_period_days,
        materials_to_restock: restocking.entries.len(),
        materials_near_expiry: near_expiry.len(),
        total_restock_cost: restocking.total_cost,
        data_warnings: warnings.len(),
        generated_at,
    };

    OptimizationReport {
        summary,
        demand_forecast: forecast,
        material_requirements: requirements,
        restocking,
        near_expiry,
        warnings,
    }
}
