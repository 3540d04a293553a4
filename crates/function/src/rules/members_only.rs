//! Members-only product validation.
//!
//! Products tagged `members-only` or `tradeup-members-only` can only be
//! purchased by logged-in buyers whose member status is exactly `"active"`.

use tradeup_core::{ErrorTarget, ValidationError};

use super::{RuleFault, is_active_member};
use crate::input::FunctionInput;

/// Tags that mark a product as exclusive to active members.
pub const MEMBERS_ONLY_TAGS: &[&str] = &["members-only", "tradeup-members-only"];

/// Validate members-only products against the buyer's membership.
///
/// # Errors
///
/// Never faults today; the signature matches the shared rule contract.
pub fn check(input: &FunctionInput) -> Result<Vec<ValidationError>, RuleFault> {
    let customer = input.customer();
    if is_active_member(customer) {
        return Ok(Vec::new());
    }

    let mut errors = Vec::new();

    for line in &input.cart.lines {
        let Some(product) = line.product() else {
            continue;
        };
        let gated = product.tags.iter().any(|tag| {
            MEMBERS_ONLY_TAGS
                .iter()
                .any(|marker| tag.eq_ignore_ascii_case(marker))
        });
        if !gated {
            continue;
        }

        let message = if customer.is_none() {
            format!(
                "{} is a members-only product. Please log in or join TradeUp to purchase it.",
                product.title,
            )
        } else {
            format!(
                "{} is a members-only product. Join TradeUp to purchase it.",
                product.title,
            )
        };
        errors.push(ValidationError::new(
            message,
            ErrorTarget::cart_line(line.id.clone()),
        ));
    }

    Ok(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(json: serde_json::Value) -> FunctionInput {
        serde_json::from_value(json).expect("input fixture")
    }

    fn gated_cart(tag: &str) -> serde_json::Value {
        serde_json::json!({
            "lines": [{
                "id": "gid://cart/line/1",
                "quantity": 1,
                "merchandise": {"__typename": "ProductVariant", "product": {
                    "title": "Members Jacket",
                    "tags": [tag]
                }}
            }]
        })
    }

    #[test]
    fn test_guest_is_asked_to_log_in_or_join() {
        let input = input(serde_json::json!({"cart": gated_cart("members-only")}));
        let errors = check(&input).expect("rule ok");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].localized_message.contains("log in or join"));
    }

    #[test]
    fn test_inactive_member_is_asked_to_join() {
        let input = input(serde_json::json!({
            "cart": gated_cart("TradeUp-Members-Only"),
            "buyerIdentity": {"customer": {
                "id": "gid://customer/1",
                "memberStatus": {"value": "lapsed"}
            }}
        }));
        let errors = check(&input).expect("rule ok");
        assert_eq!(errors.len(), 1);
        let message = &errors[0].localized_message;
        assert!(message.contains("Join TradeUp"), "{message}");
        assert!(!message.contains("log in"), "{message}");
    }

    #[test]
    fn test_active_member_passes() {
        let input = input(serde_json::json!({
            "cart": gated_cart("members-only"),
            "buyerIdentity": {"customer": {
                "id": "gid://customer/1",
                "memberStatus": {"value": "active"}
            }}
        }));
        assert!(check(&input).expect("rule ok").is_empty());
    }

    #[test]
    fn test_untagged_product_is_not_gated() {
        let input = input(serde_json::json!({
            "cart": {
                "lines": [{
                    "id": "gid://cart/line/1",
                    "quantity": 1,
                    "merchandise": {"__typename": "ProductVariant", "product": {
                        "title": "Plain Tee",
                        "tags": ["sale", "tier:gold-adjacent"]
                    }}
                }]
            }
        }));
        assert!(check(&input).expect("rule ok").is_empty());
    }
}
