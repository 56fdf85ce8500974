//! `pantry-core` — foundation building blocks shared by the engine crates.
//!
//! This crate contains **pure** primitives (no IO, no logging setup).

pub mod error;
pub mod name;
pub mod value_object;

pub use error::{EngineError, EngineResult};
pub use name::{DishName, MaterialName};
pub use value_object::ValueObject;
