//! Function input contract.
//!
//! These types mirror the GraphQL-shaped document the platform hands the
//! function on every cart recalculation. Everything the platform allows to
//! be null is optional here; the rules parse the rest defensively, so a
//! sparse or malformed snapshot never aborts deserialization.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level function input: cart, buyer, and localization snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionInput {
    pub cart: Cart,
    #[serde(default)]
    pub buyer_identity: Option<BuyerIdentity>,
    /// Present in the input but unused by the current rules; reserved for
    /// localized messaging.
    #[serde(default)]
    pub localization: Option<Localization>,
}

impl FunctionInput {
    /// The buyer's customer record, when logged in.
    #[must_use]
    pub fn customer(&self) -> Option<&Customer> {
        self.buyer_identity.as_ref()?.customer.as_ref()
    }
}

/// The cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Legacy single primary attribute, used as a fallback carrier for the
    /// points-redemption amount.
    #[serde(default)]
    pub attribute: Option<Attribute>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub lines: Vec<CartLine>,
    #[serde(default)]
    pub discount_codes: Vec<DiscountCode>,
    #[serde(default)]
    pub cost: Option<CartCost>,
}

impl Cart {
    /// Value of a cart attribute by key, if present and non-null.
    #[must_use]
    pub fn attribute_value(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.key.as_deref() == Some(key))
            .and_then(|attr| attr.value.as_deref())
    }
}

/// A free-form cart attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// A single cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    pub quantity: i64,
    pub merchandise: Merchandise,
    #[serde(default)]
    pub cost: Option<LineCost>,
}

impl CartLine {
    /// The line's product, when the merchandise is a product variant.
    ///
    /// Non-variant merchandise is excluded from every product-based rule.
    #[must_use]
    pub fn product(&self) -> Option<&Product> {
        match &self.merchandise {
            Merchandise::ProductVariant(variant) => variant.product.as_ref(),
            Merchandise::Other => None,
        }
    }
}

/// Line merchandise, discriminated by GraphQL `__typename`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Merchandise {
    ProductVariant(ProductVariant),
    /// Any non-variant merchandise type.
    #[serde(other)]
    Other,
}

/// A product variant on a cart line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub product: Option<Product>,
}

/// The product behind a variant, with its loyalty metafields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Tier gate: a tier name, or JSON `{required_tier|requiredTier, min_level}`.
    #[serde(default)]
    pub tier_restriction: Option<Metafield>,
    /// Points gate: a number, numeric string, or JSON
    /// `{points|min_points, use_lifetime}`.
    #[serde(default)]
    pub min_points_required: Option<Metafield>,
}

/// A discount code as applied to the cart, with the platform's own
/// eligibility verdict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountCode {
    pub code: String,
    #[serde(default)]
    pub applicable: bool,
}

/// Cart-level totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartCost {
    #[serde(default)]
    pub subtotal_amount: Option<Money>,
    #[serde(default)]
    pub total_amount: Option<Money>,
}

/// Line-level totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineCost {
    #[serde(default)]
    pub total_amount: Option<Money>,
}

/// Monetary amount with currency code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    /// Decimal amount (string on the wire, preserves precision).
    pub amount: Decimal,
    #[serde(default)]
    pub currency_code: Option<String>,
}

/// Buyer identity; `customer` is absent for guest checkouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuyerIdentity {
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// The logged-in customer with TradeUp loyalty metafields.
///
/// Every non-id field is a nullable `{value}` wrapper whose string content
/// may itself encode JSON; the rules parse them leniently.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub points_balance: Option<Metafield>,
    #[serde(default)]
    pub tier: Option<Metafield>,
    #[serde(default)]
    pub tier_level: Option<Metafield>,
    #[serde(default)]
    pub lifetime_points: Option<Metafield>,
    #[serde(default)]
    pub member_status: Option<Metafield>,
    #[serde(default)]
    pub redemptions_this_month: Option<Metafield>,
    #[serde(default)]
    pub max_redemptions_per_month: Option<Metafield>,
}

/// An opaque metafield wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metafield {
    #[serde(default)]
    pub value: Option<String>,
}

impl Metafield {
    /// Raw string content, if present.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Raw string content of an optional metafield.
#[must_use]
pub fn metafield_text(field: Option<&Metafield>) -> Option<&str> {
    field.and_then(Metafield::text)
}

/// Buyer localization context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Localization {
    #[serde(default)]
    pub country: Option<IsoCoded>,
    #[serde(default)]
    pub language: Option<IsoCoded>,
}

/// A country or language carrying only its ISO code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsoCoded {
    #[serde(default)]
    pub iso_code: Option<String>,
}
