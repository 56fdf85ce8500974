//! Engine error model.

use thiserror::Error;

use crate::name::{DishName, MaterialName};

/// Result type used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;

/// Engine-level error.
///
/// All variants are deterministic functions of the input data; nothing here is
/// transient, so callers should never retry on these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A parameter (forecast window, threshold, factor, recipe quantity) was out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A forecasted dish has no recipe lines at all.
    #[error("missing recipe data for dish '{dish}'")]
    MissingRecipeData { dish: DishName },

    /// A required material has no matching inventory item.
    #[error("unknown material '{material}'")]
    UnknownMaterial { material: MaterialName },
}

impl EngineError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn missing_recipe(dish: DishName) -> Self {
        Self::MissingRecipeData { dish }
    }

    pub fn unknown_material(material: MaterialName) -> Self {
        Self::UnknownMaterial { material }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_key() {
        let err = EngineError::unknown_material(MaterialName::from("Saffron"));
        assert_eq!(err.to_string(), "unknown material 'Saffron'");

        let err = EngineError::missing_recipe(DishName::from("Fish Soup"));
        assert_eq!(err.to_string(), "missing recipe data for dish 'Fish Soup'");
    }
}
