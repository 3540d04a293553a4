//! Points-redemption validation.
//!
//! The checkout UI writes the requested redemption amount into the cart
//! attribute `tradeup_points_redeem` (older widget builds used the cart's
//! single primary attribute instead). A non-positive or unparseable amount
//! means no redemption was requested.

use tradeup_core::{ErrorTarget, ValidationError, format_points};

use super::{RuleFault, amount_from_text, member_status, points_metafield};
use crate::input::FunctionInput;

/// Cart attribute carrying the requested redemption amount.
pub const REDEEM_ATTRIBUTE_KEY: &str = "tradeup_points_redeem";

/// Validate a requested points redemption.
///
/// # Errors
///
/// Never faults today; the signature matches the shared rule contract.
pub fn check(input: &FunctionInput) -> Result<Vec<ValidationError>, RuleFault> {
    let Some(requested) = requested_amount(input) else {
        return Ok(Vec::new());
    };

    let target = ErrorTarget::cart_attribute(REDEEM_ATTRIBUTE_KEY);

    let Some(customer) = input.customer() else {
        return Ok(vec![ValidationError::new(
            "You must be logged in to your TradeUp account to redeem points.",
            target,
        )]);
    };

    if member_status(customer) != "active" {
        return Ok(vec![ValidationError::new(
            "Your TradeUp membership is not active. Reactivate it to redeem points.",
            target,
        )]);
    }

    let mut errors = Vec::new();

    let balance = points_metafield(customer.points_balance.as_ref());
    if requested > balance {
        errors.push(ValidationError::new(
            format!(
                "You need {} more points to redeem {}. You currently have {} points.",
                format_points(requested - balance),
                format_points(requested),
                format_points(balance),
            ),
            target.clone(),
        ));
    }

    // Monthly cap is independent of the balance check; both may fire.
    let cap = points_metafield(customer.max_redemptions_per_month.as_ref());
    let used = points_metafield(customer.redemptions_this_month.as_ref());
    if cap > 0 && used >= cap {
        errors.push(ValidationError::new(
            format!(
                "You have reached your limit of {} point redemptions this month.",
                format_points(cap),
            ),
            target,
        ));
    }

    Ok(errors)
}

/// The requested redemption amount, when a positive one was asked for.
fn requested_amount(input: &FunctionInput) -> Option<i64> {
    let raw = input
        .cart
        .attribute_value(REDEEM_ATTRIBUTE_KEY)
        .or_else(|| {
            input
                .cart
                .attribute
                .as_ref()
                .and_then(|attr| attr.value.as_deref())
        })?;
    amount_from_text(raw).filter(|amount| *amount > 0)
}
