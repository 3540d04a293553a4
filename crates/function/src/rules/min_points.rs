//! Minimum-points-requirement validation.
//!
//! Products can demand a points threshold through the `min_points_required`
//! metafield (number, numeric string, or `{points|min_points, use_lifetime}`
//! object) and through `min-points:<n>` tags. The metafield path compares
//! against the lifetime or current balance per its `use_lifetime` flag; the
//! tag path always compares against the current balance. Both paths can fire
//! for the same product.

use tradeup_core::{ErrorTarget, MetafieldValue, ValidationError, format_points, parse_points};

use super::{RuleFault, points_metafield, prefix_rest};
use crate::input::{FunctionInput, Product, metafield_text};

const TAG_PREFIX: &str = "min-points:";

/// Validate points-gated products against the buyer's balances.
///
/// # Errors
///
/// Never faults today; the signature matches the shared rule contract.
pub fn check(input: &FunctionInput) -> Result<Vec<ValidationError>, RuleFault> {
    let customer = input.customer();
    let current = customer.map_or(0, |c| points_metafield(c.points_balance.as_ref()));
    let lifetime = customer.map_or(0, |c| points_metafield(c.lifetime_points.as_ref()));

    let mut errors = Vec::new();

    for line in &input.cart.lines {
        let Some(product) = line.product() else {
            continue;
        };
        let target = ErrorTarget::cart_line(line.id.clone());

        if let Some(requirement) = metafield_requirement(product) {
            let (balance, kind) = if requirement.use_lifetime {
                (lifetime, "lifetime")
            } else {
                (current, "current")
            };
            if customer.is_none() {
                errors.push(ValidationError::new(
                    format!(
                        "{} requires a minimum points balance. Please log in to verify \
                         your TradeUp points.",
                        product.title,
                    ),
                    target.clone(),
                ));
            } else if balance < requirement.min_points {
                errors.push(ValidationError::new(
                    format!(
                        "{} requires {} {} points. You are {} points short.",
                        product.title,
                        format_points(requirement.min_points),
                        kind,
                        format_points(requirement.min_points - balance),
                    ),
                    target.clone(),
                ));
            }
        }

        // Tag thresholds always check the current balance, even when the
        // metafield path for the same product used the lifetime balance.
        for threshold in tag_thresholds(product) {
            if current < threshold {
                errors.push(ValidationError::new(
                    format!(
                        "{} requires at least {} TradeUp points to purchase.",
                        product.title,
                        format_points(threshold),
                    ),
                    target.clone(),
                ));
            }
        }
    }

    Ok(errors)
}

/// A resolved minimum-points requirement.
struct PointsRequirement {
    min_points: i64,
    use_lifetime: bool,
}

/// Requirement from the `min_points_required` metafield, when a positive
/// one is configured.
fn metafield_requirement(product: &Product) -> Option<PointsRequirement> {
    let parsed = MetafieldValue::parse(metafield_text(product.min_points_required.as_ref()));
    #[allow(clippy::cast_possible_truncation)]
    let requirement = match &parsed {
        MetafieldValue::Number(_) | MetafieldValue::Text(_) => {
            parsed.as_number().map(|n| PointsRequirement {
                min_points: n.trunc() as i64,
                use_lifetime: false,
            })
        }
        MetafieldValue::Object(_) => parsed
            .object_number("points")
            .or_else(|| parsed.object_number("min_points"))
            .map(|n| PointsRequirement {
                min_points: n.trunc() as i64,
                use_lifetime: parsed.object_bool("use_lifetime"),
            }),
        MetafieldValue::Missing => None,
    }?;
    (requirement.min_points > 0).then_some(requirement)
}

/// Positive thresholds from `min-points:<n>` tags.
fn tag_thresholds(product: &Product) -> impl Iterator<Item = i64> + '_ {
    product.tags.iter().filter_map(|tag| {
        let rest = prefix_rest(tag, TAG_PREFIX)?;
        parse_points(rest).filter(|n| *n > 0)
    })
}
