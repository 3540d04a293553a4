//! Core types for TradeUp.
//!
//! This module provides the shared domain concepts of the validation engine.

pub mod error;
pub mod metafield;
pub mod points;
pub mod tier;

pub use error::{ErrorTarget, FunctionResult, ValidationError};
pub use metafield::MetafieldValue;
pub use points::{format_points, parse_points};
pub use tier::{Tier, tier_level};
