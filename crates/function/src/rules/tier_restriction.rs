//! Tier-restriction validation.
//!
//! Products can be tier-gated two ways: a `tier_restriction` metafield (a
//! tier name, or an object naming the tier and an explicit minimum level)
//! and `tier:<name>` product tags. The checks are independent; a product
//! carrying both can produce two distinct errors, and both survive
//! deduplication because their wording differs.

use tradeup_core::{ErrorTarget, MetafieldValue, Tier, ValidationError, tier_level};

use super::{RuleFault, buyer_tier_name, prefix_rest};
use crate::input::{FunctionInput, Product, metafield_text};

const TAG_PREFIX: &str = "tier:";

/// Validate tier-gated products against the buyer's tier.
///
/// # Errors
///
/// Never faults today; the signature matches the shared rule contract.
pub fn check(input: &FunctionInput) -> Result<Vec<ValidationError>, RuleFault> {
    let customer = input.customer();
    let buyer_tier = customer.and_then(buyer_tier_name);
    let buyer_level = buyer_tier.as_deref().map_or(0, tier_level);
    let logged_in = customer.is_some();

    let mut errors = Vec::new();

    for line in &input.cart.lines {
        let Some(product) = line.product() else {
            continue;
        };
        let target = ErrorTarget::cart_line(line.id.clone());

        if let Some((required_name, required_level)) = metafield_requirement(product)
            && buyer_level < required_level
        {
            let message = if logged_in {
                let current = buyer_tier
                    .as_deref()
                    .and_then(Tier::from_name)
                    .map_or("Basic", Tier::display_name);
                format!(
                    "{} requires {} tier membership. Your current tier: {}.",
                    product.title, required_name, current,
                )
            } else {
                format!(
                    "{} requires {} tier membership. Please log in to verify your tier.",
                    product.title, required_name,
                )
            };
            errors.push(ValidationError::new(message, target.clone()));
        }

        for tag_tier in tag_requirements(product) {
            if tag_tier.level() > buyer_level {
                errors.push(ValidationError::new(
                    format!(
                        "{} is reserved for {} tier members and above.",
                        product.title,
                        tag_tier.display_name(),
                    ),
                    target.clone(),
                ));
            }
        }
    }

    Ok(errors)
}

/// Required tier name and minimum level from the `tier_restriction`
/// metafield, when one is configured.
///
/// String form: the string is the tier name and its level is looked up.
/// Object form: name from `required_tier`/`requiredTier`, level from an
/// explicit `min_level` or derived from the name.
fn metafield_requirement(product: &Product) -> Option<(String, u8)> {
    let parsed = MetafieldValue::parse(metafield_text(product.tier_restriction.as_ref()));
    match parsed {
        MetafieldValue::Text(name) if !name.trim().is_empty() => {
            let level = tier_level(&name);
            Some((name, level))
        }
        MetafieldValue::Object(_) => {
            let name = parsed
                .object_text("required_tier")
                .or_else(|| parsed.object_text("requiredTier"))?
                .to_string();
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let level = parsed
                .object_number("min_level")
                .filter(|n| (0.0..=255.0).contains(n))
                .map_or_else(|| tier_level(&name), |n| n.trunc() as u8);
            Some((name, level))
        }
        _ => None,
    }
}

/// Tiers required by `tier:<name>` tags with a recognized tier name.
fn tag_requirements(product: &Product) -> impl Iterator<Item = Tier> + '_ {
    product.tags.iter().filter_map(|tag| {
        let rest = prefix_rest(tag, TAG_PREFIX)?;
        Tier::from_name(rest)
    })
}
