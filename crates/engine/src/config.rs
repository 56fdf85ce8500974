//! Engine configuration.
//!
//! Everything the forecaster and analyzers need is passed in explicitly; the
//! engine keeps no process-wide settings.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use pantry_core::{EngineError, EngineResult};

use crate::issue::UnmatchedKeyPolicy;

/// Inclusive bounds for the forecast window, in days.
pub const MIN_DAYS_AHEAD: u32 = 1;
pub const MAX_DAYS_AHEAD: u32 = 365;
/// Upper bound for the near-expiry window, in days.
pub const MAX_DAYS_THRESHOLD: u32 = 365;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Calendar month (1..=12) → demand multiplier. Months not listed use 1.0.
    #[serde(deserialize_with = "month_keyed")]
    pub seasonal_month_factors: BTreeMap<u32, f64>,
    /// Multiplier applied to Saturdays and Sundays.
    pub weekend_factor: f64,
    pub days_ahead: u32,
    pub days_threshold: u32,
    /// Whether already-expired stock is reported alongside near-expiry stock.
    pub include_expired: bool,
    pub missing_recipe_policy: UnmatchedKeyPolicy,
    pub unknown_material_policy: UnmatchedKeyPolicy,
}

impl Default for EngineConfig {
    /// Winter (Dec–Feb) ×1.3, summer (Jun–Aug) ×1.1, weekends ×1.2,
    /// a 7-day forecast and a 3-day expiry window.
    fn default() -> Self {
        let mut seasonal_month_factors = BTreeMap::new();
        for month in [12, 1, 2] {
            seasonal_month_factors.insert(month, 1.3);
        }
        for month in [6, 7, 8] {
            seasonal_month_factors.insert(month, 1.1);
        }

        Self {
            seasonal_month_factors,
            weekend_factor: 1.2,
            days_ahead: 7,
            days_threshold: 3,
            include_expired: false,
            missing_recipe_policy: UnmatchedKeyPolicy::Warn,
            unknown_material_policy: UnmatchedKeyPolicy::Warn,
        }
    }
}

impl EngineConfig {
    /// Configuration with every factor at 1.0 (no seasonal or weekend adjustment).
    pub fn flat() -> Self {
        Self {
            seasonal_month_factors: BTreeMap::new(),
            weekend_factor: 1.0,
            ..Self::default()
        }
    }

    pub fn with_days_ahead(mut self, days_ahead: u32) -> Self {
        self.days_ahead = days_ahead;
        self
    }

    pub fn with_days_threshold(mut self, days_threshold: u32) -> Self {
        self.days_threshold = days_threshold;
        self
    }

    pub fn with_weekend_factor(mut self, weekend_factor: f64) -> Self {
        self.weekend_factor = weekend_factor;
        self
    }

    pub fn with_month_factor(mut self, month: u32, factor: f64) -> Self {
        self.seasonal_month_factors.insert(month, factor);
        self
    }

    pub fn with_include_expired(mut self, include_expired: bool) -> Self {
        self.include_expired = include_expired;
        self
    }

    pub fn with_missing_recipe_policy(mut self, policy: UnmatchedKeyPolicy) -> Self {
        self.missing_recipe_policy = policy;
        self
    }

    pub fn with_unknown_material_policy(mut self, policy: UnmatchedKeyPolicy) -> Self {
        self.unknown_material_policy = policy;
        self
    }

    /// Both unmatched-key policies set to [`UnmatchedKeyPolicy::Fail`].
    pub fn strict(self) -> Self {
        self.with_missing_recipe_policy(UnmatchedKeyPolicy::Fail)
            .with_unknown_material_policy(UnmatchedKeyPolicy::Fail)
    }

    /// Multiplier for a calendar month (1.0 when not configured).
    pub fn month_factor(&self, month: u32) -> f64 {
        self.seasonal_month_factors
            .get(&month)
            .copied()
            .unwrap_or(1.0)
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.validate_forecast()?;
        validate_days_threshold(self.days_threshold)
    }

    /// Checks only what the forecaster reads: the window and the factors.
    pub(crate) fn validate_forecast(&self) -> EngineResult<()> {
        validate_days_ahead(self.days_ahead)?;

        if !is_valid_factor(self.weekend_factor) {
            return Err(EngineError::invalid_parameter(
                "weekend_factor must be a finite non-negative number",
            ));
        }

        for (&month, &factor) in &self.seasonal_month_factors {
            if !(1..=12).contains(&month) {
                return Err(EngineError::invalid_parameter(format!(
                    "seasonal month key {month} is not a calendar month (1..=12)"
                )));
            }
            if !is_valid_factor(factor) {
                return Err(EngineError::invalid_parameter(format!(
                    "seasonal factor for month {month} must be a finite non-negative number"
                )));
            }
        }

        Ok(())
    }
}

fn validate_days_ahead(days_ahead: u32) -> EngineResult<()> {
    if !(MIN_DAYS_AHEAD..=MAX_DAYS_AHEAD).contains(&days_ahead) {
        return Err(EngineError::invalid_parameter(format!(
            "days_ahead must be within {MIN_DAYS_AHEAD}..={MAX_DAYS_AHEAD} (got {days_ahead})"
        )));
    }
    Ok(())
}

pub(crate) fn validate_days_threshold(days_threshold: u32) -> EngineResult<()> {
    if days_threshold > MAX_DAYS_THRESHOLD {
        return Err(EngineError::invalid_parameter(format!(
            "days_threshold must be at most {MAX_DAYS_THRESHOLD} (got {days_threshold})"
        )));
    }
    Ok(())
}

/// Month keys arrive as strings from JSON objects and layered config tables.
fn month_keyed<'de, D>(deserializer: D) -> Result<BTreeMap<u32, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    BTreeMap::<String, f64>::deserialize(deserializer)?
        .into_iter()
        .map(|(key, factor)| {
            key.trim()
                .parse::<u32>()
                .map(|month| (month, factor))
                .map_err(|_| D::Error::custom(format!("seasonal month key '{key}' is not a number")))
        })
        .collect()
}

fn is_valid_factor(factor: f64) -> bool {
    factor.is_finite() && factor >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_seasonal_profile() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.month_factor(1), 1.3);
        assert_eq!(cfg.month_factor(7), 1.1);
        assert_eq!(cfg.month_factor(4), 1.0);
        assert_eq!(cfg.weekend_factor, 1.2);
        assert_eq!(cfg.days_ahead, 7);
        assert_eq!(cfg.days_threshold, 3);
        assert!(!cfg.include_expired);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_window() {
        let err = EngineConfig::default().with_days_ahead(0).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));

        let err = EngineConfig::default().with_days_ahead(366).validate().unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));

        assert!(EngineConfig::default().with_days_ahead(365).validate().is_ok());
    }

    #[test]
    fn rejects_bad_factors() {
        let err = EngineConfig::default()
            .with_weekend_factor(f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));

        let err = EngineConfig::default()
            .with_month_factor(13, 1.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(msg) if msg.contains("13")));

        let err = EngineConfig::default()
            .with_month_factor(3, -0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidParameter(_)));
    }

    #[test]
    fn deserializes_partial_json_over_defaults() {
        let cfg: EngineConfig = serde_json::from_str(
            r#"{ "days_ahead": 14, "seasonal_month_factors": { "10": 1.5 }, "unknown_material_policy": "fail" }"#,
        )
        .unwrap();
        assert_eq!(cfg.days_ahead, 14);
        assert_eq!(cfg.month_factor(10), 1.5);
        assert_eq!(cfg.month_factor(1), 1.0);
        assert_eq!(cfg.weekend_factor, 1.2);
        assert_eq!(cfg.unknown_material_policy, UnmatchedKeyPolicy::Fail);
    }

    #[test]
    fn non_numeric_month_key_is_a_parse_error() {
        let err = serde_json::from_str::<EngineConfig>(r#"{ "seasonal_month_factors": { "march": 1.2 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("march"));
    }
}
