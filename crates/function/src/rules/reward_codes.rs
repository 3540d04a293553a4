//! Reward-code validation.
//!
//! TradeUp-issued reward codes are recognized by prefix; everything else on
//! the cart is a merchant or platform discount and is ignored here. The
//! platform's own eligibility engine has already decided `applicable` for
//! each code, so this rule only translates an inapplicable TradeUp code into
//! a buyer-facing message. The exact ineligibility reason is not knowable at
//! this layer, hence the generic wording.

use tradeup_core::{ErrorTarget, ValidationError};

use super::RuleFault;
use crate::input::FunctionInput;

/// Prefixes that mark a discount code as a TradeUp reward.
pub const REWARD_CODE_PREFIXES: &[&str] = &["TU-", "TRADEUP-"];

/// Validate TradeUp reward codes applied to the cart.
///
/// # Errors
///
/// Never faults today; the signature matches the shared rule contract.
pub fn check(input: &FunctionInput) -> Result<Vec<ValidationError>, RuleFault> {
    let reward_codes: Vec<_> = input
        .cart
        .discount_codes
        .iter()
        .filter(|dc| {
            REWARD_CODE_PREFIXES
                .iter()
                .any(|prefix| dc.code.starts_with(prefix))
        })
        .collect();

    if reward_codes.is_empty() {
        return Ok(Vec::new());
    }

    let logged_in = input.customer().is_some();
    let mut errors = Vec::new();

    for dc in reward_codes {
        if !logged_in {
            errors.push(ValidationError::new(
                format!(
                    "Log in to your TradeUp account to use reward code {}.",
                    dc.code
                ),
                ErrorTarget::checkout(),
            ));
        } else if !dc.applicable {
            errors.push(ValidationError::new(
                format!(
                    "Reward code {} cannot be applied. It may be expired, already used, \
                     or not available for your tier.",
                    dc.code
                ),
                ErrorTarget::checkout(),
            ));
        }
    }

    Ok(errors)
}
