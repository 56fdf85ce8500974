//! Demand forecasting.
//!
//! Model (deterministic, rule-based):
//! - Baseline per dish = total servings sold / calendar days from the dish's
//!   first sale to the last date in the order history (inclusive). Days with
//!   no sales inside that span count as zero-demand days; days before a dish
//!   was first sold do not.
//! - Each projected day `reference_date + 1 ..= reference_date + days_ahead`
//!   gets `baseline × month factor × weekend factor`.
//! - The forecast is the sum of the projected days.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};

use pantry_core::{DishName, EngineError, EngineResult};

use crate::config::EngineConfig;
use crate::model::{DailyForecast, ForecastEntry, OrderRecord};

/// Forecast servings for every dish in `orders` plus every dish in `menu`.
///
/// Menu dishes without any order history forecast to 0.
pub fn forecast<'a>(
    orders: &[OrderRecord],
    menu: impl IntoIterator<Item = &'a DishName>,
    config: &EngineConfig,
    reference_date: NaiveDate,
) -> EngineResult<Vec<ForecastEntry>> {
    config.validate_forecast()?;

    let baselines = daily_baselines(orders, menu);
    let days = projected_days(config, reference_date)?;

    let entries: Vec<ForecastEntry> = baselines
        .into_iter()
        .map(|(dish_name, baseline)| {
            let daily: Vec<DailyForecast> = days
                .iter()
                .map(|d| DailyForecast {
                    date: d.date,
                    quantity: baseline * d.seasonal_factor * d.weekend_factor,
                    seasonal_factor: d.seasonal_factor,
                    weekend_factor: d.weekend_factor,
                })
                .collect();
            let forecasted_quantity = daily.iter().map(|d| d.quantity).sum::<f64>();

            ForecastEntry {
                dish_name,
                forecasted_quantity,
                period_days: config.days_ahead,
                daily,
            }
        })
        .collect();

    tracing::debug!(
        dishes = entries.len(),
        days_ahead = config.days_ahead,
        %reference_date,
        "demand forecast computed"
    );

    Ok(entries)
}

/// Average servings per calendar day, keyed by dish (sorted by name).
fn daily_baselines<'a>(
    orders: &[OrderRecord],
    menu: impl IntoIterator<Item = &'a DishName>,
) -> BTreeMap<DishName, f64> {
    let mut history: BTreeMap<DishName, DishHistory> = BTreeMap::new();
    for dish in menu {
        history.entry(dish.clone()).or_default();
    }
    for order in orders {
        history
            .entry(order.dish_name.clone())
            .or_default()
            .record(order);
    }

    let Some(last) = orders.iter().map(|o| o.date).max() else {
        return history.into_keys().map(|dish| (dish, 0.0)).collect();
    };

    history
        .into_iter()
        .map(|(dish, h)| (dish, h.baseline(last)))
        .collect()
}

/// Running total and first sale date of one dish.
#[derive(Default)]
struct DishHistory {
    total: u64,
    first_sale: Option<NaiveDate>,
}

impl DishHistory {
    fn record(&mut self, order: &OrderRecord) {
        self.total += u64::from(order.quantity_sold);
        self.first_sale = Some(match self.first_sale {
            Some(first) => first.min(order.date),
            None => order.date,
        });
    }

    /// Servings per day from the first sale through `last`, inclusive.
    fn baseline(&self, last: NaiveDate) -> f64 {
        match self.first_sale {
            Some(first) => {
                let span = (last - first).num_days().unsigned_abs() + 1;
                self.total as f64 / span as f64
            }
            None => 0.0,
        }
    }
}

/// Calendar day in the projection window with its adjustment factors.
struct ProjectedDay {
    date: NaiveDate,
    seasonal_factor: f64,
    weekend_factor: f64,
}

fn projected_days(
    config: &EngineConfig,
    reference_date: NaiveDate,
) -> EngineResult<Vec<ProjectedDay>> {
    (1..=u64::from(config.days_ahead))
        .map(|offset| -> EngineResult<ProjectedDay> {
            let date = reference_date
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| {
                    EngineError::invalid_parameter(format!(
                        "forecast window overflows the calendar at {reference_date} + {offset} days"
                    ))
                })?;
            let weekend_factor = if is_weekend(date) {
                config.weekend_factor
            } else {
                1.0
            };
            Ok(ProjectedDay {
                date,
                seasonal_factor: config.month_factor(date.month()),
                weekend_factor,
            })
        })
        .collect()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
