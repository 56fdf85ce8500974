//! Data-consistency gaps between the orders, recipes and inventory tables.

use serde::{Deserialize, Serialize};

use pantry_core::{DishName, EngineError, MaterialName};

/// What to do when a join key has no match in the other table.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedKeyPolicy {
    /// Record a [`DataWarning`], skip the row, keep going.
    #[default]
    Warn,
    /// Abort the operation with the corresponding [`EngineError`].
    Fail,
}

/// A non-fatal data-quality finding, carrying the offending key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataWarning {
    /// Dish was forecasted but has no recipe lines; contributed zero requirement.
    MissingRecipeData { dish: DishName },
    /// Material is required but absent from inventory; no restocking entry emitted.
    UnknownMaterial { material: MaterialName },
}

impl DataWarning {
    pub fn into_error(self) -> EngineError {
        match self {
            DataWarning::MissingRecipeData { dish } => EngineError::missing_recipe(dish),
            DataWarning::UnknownMaterial { material } => EngineError::unknown_material(material),
        }
    }
}

impl core::fmt::Display for DataWarning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DataWarning::MissingRecipeData { dish } => {
                write!(f, "dish '{dish}' has no recipe lines; treated as zero requirement")
            }
            DataWarning::UnknownMaterial { material } => {
                write!(f, "material '{material}' has no inventory item; skipped")
            }
        }
    }
}

/// Result of a stage that can continue past unmatched keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    pub value: T,
    pub warnings: Vec<DataWarning>,
}

impl<T> Outcome<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(value: T, warnings: Vec<DataWarning>) -> Self {
        Self { value, warnings }
    }

    pub fn into_parts(self) -> (T, Vec<DataWarning>) {
        (self.value, self.warnings)
    }
}

/// Apply `policy` to an unmatched key: push a warning, or turn it into an error.
pub(crate) fn handle_unmatched(
    policy: UnmatchedKeyPolicy,
    warning: DataWarning,
    warnings: &mut Vec<DataWarning>,
) -> Result<(), EngineError> {
    match policy {
        UnmatchedKeyPolicy::Warn => {
            tracing::warn!(%warning, "data consistency gap");
            warnings.push(warning);
            Ok(())
        }
        UnmatchedKeyPolicy::Fail => Err(warning.into_error()),
    }
}
