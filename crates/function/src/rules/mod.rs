//! The five validation rule checkers.
//!
//! Each rule scans one slice of the input snapshot and returns its findings.
//! Rules are independent: they share no state, their error sets are unioned
//! by the engine, and their order carries no correctness weight. A rule
//! returns [`RuleFault`] only for a genuinely unexpected failure; ordinary
//! malformed merchant data is absorbed by the lenient metafield parse and
//! never escalates.

pub mod members_only;
pub mod min_points;
pub mod points_redemption;
pub mod reward_codes;
pub mod tier_restriction;

use thiserror::Error;
use tradeup_core::{MetafieldValue, ValidationError, parse_points};

use crate::input::{Customer, FunctionInput, Metafield, metafield_text};

/// An unexpected failure inside a rule checker.
///
/// The engine treats any fault as grounds to abort evaluation and return an
/// empty error list rather than risk blocking checkout on a defect.
#[derive(Debug, Error)]
#[error("rule {rule} faulted: {reason}")]
pub struct RuleFault {
    /// Name of the faulting rule.
    pub rule: &'static str,
    /// Human-readable cause.
    pub reason: String,
}

/// Common signature shared by every rule checker.
pub type RuleFn = fn(&FunctionInput) -> Result<Vec<ValidationError>, RuleFault>;

/// Points amount from a customer metafield, defaulting to 0 when the field
/// is absent or unparseable.
#[must_use]
pub(crate) fn points_metafield(field: Option<&Metafield>) -> i64 {
    let parsed = MetafieldValue::parse(metafield_text(field));
    #[allow(clippy::cast_possible_truncation)]
    let points = parsed
        .as_number()
        .filter(|n| n.is_finite())
        .map_or(0, |n| n.trunc() as i64);
    points
}

/// Lenient member status: JSON-decoded or raw text, defaulting to `"none"`.
#[must_use]
pub(crate) fn member_status(customer: &Customer) -> String {
    match MetafieldValue::parse(metafield_text(customer.member_status.as_ref())) {
        MetafieldValue::Text(status) => status,
        _ => "none".to_string(),
    }
}

/// Whether the buyer is a logged-in, active TradeUp member.
#[must_use]
pub(crate) fn is_active_member(customer: Option<&Customer>) -> bool {
    customer.is_some_and(|c| member_status(c) == "active")
}

/// The buyer's tier name, lenient-parsed from the tier metafield.
#[must_use]
pub(crate) fn buyer_tier_name(customer: &Customer) -> Option<String> {
    match MetafieldValue::parse(metafield_text(customer.tier.as_ref())) {
        MetafieldValue::Text(name) if !name.trim().is_empty() => Some(name),
        _ => None,
    }
}

/// Parse a redemption or threshold amount from free-form attribute text.
#[must_use]
pub(crate) fn amount_from_text(raw: &str) -> Option<i64> {
    parse_points(raw)
}

/// The remainder of `tag` after a case-insensitive `prefix` match.
pub(crate) fn prefix_rest<'a>(tag: &'a str, prefix: &str) -> Option<&'a str> {
    let head = tag.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| tag.get(prefix.len()..).unwrap_or_default())
}
