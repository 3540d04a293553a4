//! Buyer-facing validation errors and the function result envelope.
//!
//! These types mirror the wire contract the checkout platform expects from a
//! cart validation function: a single `errors` array whose entries carry a
//! localized message and a target locator. A non-empty array blocks checkout
//! progression; an empty array lets the buyer proceed.

use serde::{Deserialize, Serialize};

/// Where a validation error should be surfaced in the checkout UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorTarget {
    /// A specific cart line.
    CartLine {
        #[serde(rename = "cartLineId")]
        cart_line_id: String,
    },
    /// A specific cart attribute, by key.
    CartAttribute {
        #[serde(rename = "cartAttributeKey")]
        cart_attribute_key: String,
    },
    /// The checkout as a whole. Serializes to an empty object.
    Checkout {},
}

impl ErrorTarget {
    /// Target a cart line by id.
    #[must_use]
    pub fn cart_line(id: impl Into<String>) -> Self {
        Self::CartLine {
            cart_line_id: id.into(),
        }
    }

    /// Target a cart attribute by key.
    #[must_use]
    pub fn cart_attribute(key: impl Into<String>) -> Self {
        Self::CartAttribute {
            cart_attribute_key: key.into(),
        }
    }

    /// Target the whole checkout.
    #[must_use]
    pub const fn checkout() -> Self {
        Self::Checkout {}
    }
}

/// A single buyer-visible validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Message rendered to the buyer at checkout.
    pub localized_message: String,
    /// Locator for where the message should appear.
    pub target: ErrorTarget,
}

impl ValidationError {
    /// Create a validation error.
    #[must_use]
    pub fn new(message: impl Into<String>, target: ErrorTarget) -> Self {
        Self {
            localized_message: message.into(),
            target,
        }
    }
}

/// The function output envelope returned to the platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionResult {
    /// Validation errors; empty means checkout may proceed.
    pub errors: Vec<ValidationError>,
}
