//! Integration tests for TradeUp checkout validation.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tradeup-integration-tests
//! ```
//!
//! The tests drive the engine through its serialized contract: fixtures are
//! built as `serde_json::Value` documents shaped exactly like the platform's
//! function input, deserialized, and run through [`tradeup_function::run`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use serde_json::{Value, json};
use tradeup_core::FunctionResult;
use tradeup_function::input::FunctionInput;

/// Builder for function input documents.
///
/// Starts from an empty cart and a guest buyer; every method layers one
/// piece of state on top.
#[derive(Debug, Clone)]
pub struct InputFixture {
    cart: Value,
    buyer_identity: Option<Value>,
}

impl Default for InputFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl InputFixture {
    /// An empty guest cart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cart: json!({
                "attributes": [],
                "lines": [],
                "discountCodes": [],
                "cost": {
                    "subtotalAmount": {"amount": "0.0", "currencyCode": "USD"},
                    "totalAmount": {"amount": "0.0", "currencyCode": "USD"}
                }
            }),
            buyer_identity: None,
        }
    }

    /// Add a cart attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: &str, value: &str) -> Self {
        self.cart["attributes"]
            .as_array_mut()
            .expect("attributes array")
            .push(json!({"key": key, "value": value}));
        self
    }

    /// Set the legacy primary cart attribute.
    #[must_use]
    pub fn with_primary_attribute(mut self, key: &str, value: &str) -> Self {
        self.cart["attribute"] = json!({"key": key, "value": value});
        self
    }

    /// Add a discount code with the platform's applicability verdict.
    #[must_use]
    pub fn with_discount_code(mut self, code: &str, applicable: bool) -> Self {
        self.cart["discountCodes"]
            .as_array_mut()
            .expect("discountCodes array")
            .push(json!({"code": code, "applicable": applicable}));
        self
    }

    /// Add a product-variant cart line; `product` is the raw product JSON.
    #[must_use]
    pub fn with_product_line(mut self, line_id: &str, product: Value) -> Self {
        self.cart["lines"]
            .as_array_mut()
            .expect("lines array")
            .push(json!({
                "id": line_id,
                "quantity": 1,
                "merchandise": {
                    "__typename": "ProductVariant",
                    "id": format!("gid://shopify/ProductVariant/{line_id}"),
                    "product": product
                },
                "cost": {"totalAmount": {"amount": "25.0", "currencyCode": "USD"}}
            }));
        self
    }

    /// Add a non-variant cart line (excluded from product-based rules).
    #[must_use]
    pub fn with_custom_line(mut self, line_id: &str) -> Self {
        self.cart["lines"]
            .as_array_mut()
            .expect("lines array")
            .push(json!({
                "id": line_id,
                "quantity": 1,
                "merchandise": {"__typename": "CustomProduct"}
            }));
        self
    }

    /// Attach a logged-in customer; `metafields` are raw `{value}` wrappers
    /// keyed by the customer field name (e.g. `pointsBalance`).
    #[must_use]
    pub fn with_customer(mut self, metafields: &[(&str, &str)]) -> Self {
        let mut customer = json!({
            "id": "gid://shopify/Customer/1001",
            "email": "buyer@example.com"
        });
        for (field, value) in metafields {
            customer[*field] = json!({"value": value});
        }
        self.buyer_identity = Some(json!({"customer": customer}));
        self
    }

    /// The raw function input document.
    #[must_use]
    pub fn document(&self) -> Value {
        json!({
            "cart": self.cart,
            "buyerIdentity": self.buyer_identity,
            "localization": {
                "country": {"isoCode": "US"},
                "language": {"isoCode": "EN"}
            }
        })
    }

    /// Deserialize the document through the wire contract.
    ///
    /// # Panics
    ///
    /// Panics if the fixture does not satisfy the input contract; that is a
    /// test bug, not a runtime condition.
    #[must_use]
    pub fn build(&self) -> FunctionInput {
        serde_json::from_value(self.document()).expect("fixture must satisfy the input contract")
    }

    /// Build and run the engine.
    #[must_use]
    pub fn run(&self) -> FunctionResult {
        tradeup_function::run(&self.build())
    }
}
