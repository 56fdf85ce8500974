//! `pantry` — run the forecasting-and-restocking engine over the built-in
//! demo restaurant and print the report as JSON on stdout.

mod sample;
mod settings;

use anyhow::{Context, Result};
use chrono::Utc;

use pantry_engine::InventoryOptimizer;

use crate::settings::Settings;

fn main() -> Result<()> {
    pantry_observability::init();

    let settings = Settings::from_env()?;
    tracing::info!(
        reference_date = %settings.reference_date,
        days_ahead = settings.engine.days_ahead,
        days_threshold = settings.engine.days_threshold,
        "starting optimization run"
    );

    let dataset = sample::restaurant(settings.reference_date);
    tracing::info!(
        orders = dataset.orders.len(),
        recipes = dataset.recipes.len(),
        inventory = dataset.inventory.len(),
        "loaded demo dataset"
    );

    let report = InventoryOptimizer::new(settings.engine)
        .run(&dataset, settings.reference_date, Utc::now())
        .context("optimization run failed")?;

    if !report.needs_attention() {
        tracing::info!("inventory levels are sufficient; nothing to restock or use up");
    }

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &report).context("writing report")?;
    println!();

    Ok(())
}
