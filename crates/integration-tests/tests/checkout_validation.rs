//! End-to-end scenarios for the checkout validation engine.
//!
//! Each test builds a platform-shaped input document, runs the full rule
//! pipeline, and asserts on the buyer-visible error list.

use serde_json::json;
use tradeup_core::ErrorTarget;
use tradeup_integration_tests::InputFixture;

#[test]
fn empty_cart_guest_checkout_passes() {
    let result = InputFixture::new().run();
    assert!(result.errors.is_empty());
}

#[test]
fn run_is_idempotent() {
    let fixture = InputFixture::new()
        .with_attribute("tradeup_points_redeem", "250")
        .with_discount_code("TU-SUMMER", false)
        .with_product_line(
            "line-1",
            json!({"title": "Gold Edition Bag", "tierRestriction": {"value": "gold"}}),
        );
    let first = fixture.run();
    let second = fixture.run();
    assert_eq!(first, second);
    assert!(!first.errors.is_empty());
}

#[test]
fn no_two_errors_share_a_message() {
    // Pile on every rule at once and check the dedup invariant globally.
    let result = InputFixture::new()
        .with_attribute("tradeup_points_redeem", "500")
        .with_discount_code("TU-A", false)
        .with_discount_code("TRADEUP-B", false)
        .with_product_line(
            "line-1",
            json!({
                "title": "Members Jacket",
                "tags": ["members-only", "tier:gold", "min-points:400"],
                "tierRestriction": {"value": "gold"},
                "minPointsRequired": {"value": "400"}
            }),
        )
        .run();
    let mut messages: Vec<_> = result
        .errors
        .iter()
        .map(|e| e.localized_message.clone())
        .collect();
    let total = messages.len();
    messages.sort();
    messages.dedup();
    assert_eq!(messages.len(), total, "duplicate messages survived dedup");
}

#[test]
fn redemption_shortfall_reports_missing_and_current_points() {
    let result = InputFixture::new()
        .with_attribute("tradeup_points_redeem", "250")
        .with_customer(&[("pointsBalance", "100"), ("memberStatus", "active")])
        .run();
    assert_eq!(result.errors.len(), 1);
    let message = &result.errors[0].localized_message;
    assert!(message.contains("150 more points"), "{message}");
    assert!(message.contains("100 points"), "{message}");
    assert_eq!(
        result.errors[0].target,
        ErrorTarget::cart_attribute("tradeup_points_redeem")
    );
}

#[test]
fn legacy_primary_attribute_still_carries_redemption() {
    let result = InputFixture::new()
        .with_primary_attribute("points", "250")
        .with_customer(&[("pointsBalance", "100"), ("memberStatus", "active")])
        .run();
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].localized_message.contains("150 more points"));
}

#[test]
fn silver_buyer_blocked_from_gold_product() {
    let result = InputFixture::new()
        .with_product_line(
            "line-1",
            json!({"title": "Gold Edition Bag", "tierRestriction": {"value": "gold"}}),
        )
        .with_customer(&[("tier", "silver")])
        .run();
    assert_eq!(result.errors.len(), 1);
    let message = &result.errors[0].localized_message;
    assert!(message.contains("Gold Edition Bag"), "{message}");
    assert!(message.contains("gold"), "{message}");
    assert!(message.contains("Silver"), "{message}");
    assert_eq!(result.errors[0].target, ErrorTarget::cart_line("line-1"));
}

#[test]
fn guest_blocked_from_members_only_product() {
    let result = InputFixture::new()
        .with_product_line(
            "line-1",
            json!({"title": "Members Jacket", "tags": ["members-only"]}),
        )
        .run();
    assert_eq!(result.errors.len(), 1);
    let message = &result.errors[0].localized_message;
    assert!(message.contains("log in or join"), "{message}");
}

#[test]
fn inapplicable_reward_code_names_the_code() {
    let result = InputFixture::new()
        .with_discount_code("TU-SUMMER", false)
        .with_customer(&[("memberStatus", "active")])
        .run();
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].localized_message.contains("TU-SUMMER"));
    assert_eq!(result.errors[0].target, ErrorTarget::checkout());
}

#[test]
fn merchant_discounts_are_out_of_scope() {
    let result = InputFixture::new()
        .with_discount_code("SUMMER10", false)
        .with_customer(&[("memberStatus", "active")])
        .run();
    assert!(result.errors.is_empty());
}

#[test]
fn identical_messages_from_two_lines_collapse_to_one() {
    let product = json!({
        "title": "Limited Sneaker",
        "minPointsRequired": {"value": "500"}
    });
    let result = InputFixture::new()
        .with_product_line("line-1", product.clone())
        .with_product_line("line-2", product)
        .with_customer(&[("pointsBalance", "100"), ("memberStatus", "active")])
        .run();
    // Same title, same threshold, same balance: identical text, one error.
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].target, ErrorTarget::cart_line("line-1"));
}

#[test]
fn guest_gating_yields_login_errors_per_rule() {
    let redemption = InputFixture::new()
        .with_attribute("tradeup_points_redeem", "100")
        .run();
    assert_eq!(redemption.errors.len(), 1);
    assert!(redemption.errors[0].localized_message.contains("logged in"));

    let tier = InputFixture::new()
        .with_product_line(
            "line-1",
            json!({"title": "Gold Edition Bag", "tierRestriction": {"value": "gold"}}),
        )
        .run();
    assert_eq!(tier.errors.len(), 1);
    assert!(tier.errors[0].localized_message.contains("log in"));

    let points = InputFixture::new()
        .with_product_line(
            "line-1",
            json!({"title": "Limited Sneaker", "minPointsRequired": {"value": "500"}}),
        )
        .run();
    assert_eq!(points.errors.len(), 1);
    assert!(points.errors[0].localized_message.contains("log in"));

    let codes = InputFixture::new().with_discount_code("TU-VIP", true).run();
    assert_eq!(codes.errors.len(), 1);
    assert!(codes.errors[0].localized_message.contains("Log in"));
}

#[test]
fn non_variant_lines_are_excluded_from_product_rules() {
    let result = InputFixture::new().with_custom_line("line-1").run();
    assert!(result.errors.is_empty());
}

#[test]
fn result_serializes_to_platform_wire_shape() {
    let result = InputFixture::new()
        .with_attribute("tradeup_points_redeem", "100")
        .with_discount_code("TU-VIP", true)
        .run();
    let wire = serde_json::to_value(&result).expect("serialize result");
    let errors = wire["errors"].as_array().expect("errors array");
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0]["target"],
        json!({"cartAttributeKey": "tradeup_points_redeem"})
    );
    assert_eq!(errors[1]["target"], json!({}));
    assert!(errors[0]["localizedMessage"].is_string());
}

#[test]
fn metafield_and_tag_gates_fire_independently() {
    let result = InputFixture::new()
        .with_product_line(
            "line-1",
            json!({
                "title": "Diamond Drop",
                "tags": ["tier:diamond"],
                "tierRestriction": {"value": "gold"}
            }),
        )
        .with_customer(&[("tier", "silver")])
        .run();
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn json_object_metafields_are_honored_end_to_end() {
    let restriction = json!({"required_tier": "platinum", "min_level": 4}).to_string();
    let min_points = json!({"points": 1000, "use_lifetime": true}).to_string();
    let result = InputFixture::new()
        .with_product_line(
            "line-1",
            json!({
                "title": "Founders Jacket",
                "tierRestriction": {"value": restriction},
                "minPointsRequired": {"value": min_points}
            }),
        )
        .with_customer(&[
            ("tier", "gold"),
            ("pointsBalance", "50"),
            ("lifetimePoints", "2500"),
            ("memberStatus", "active"),
        ])
        .run();
    // Tier gate fires (gold < platinum); lifetime points gate passes.
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].localized_message.contains("platinum"));
}
