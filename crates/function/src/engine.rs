//! Rule orchestration, deduplication, and the fail-open boundary.
//!
//! The five rules run in a fixed order, their findings are unioned, and
//! duplicate messages are collapsed keeping the first occurrence. Evaluation
//! has exactly two terminal states: `Collected` with the deduplicated error
//! list, or `FaultAborted` when any rule faults. A fault is logged and the
//! engine answers with an empty error list - blocking every buyer's checkout
//! because of an internal defect is worse than occasionally letting an
//! invalid redemption through to be reconciled server-side.

use std::collections::HashSet;

use tradeup_core::{FunctionResult, ValidationError};

use crate::input::FunctionInput;
use crate::rules::{
    RuleFn, members_only, min_points, points_redemption, reward_codes, tier_restriction,
};

/// The rule pipeline, in fixed order.
///
/// Order matters only for readability and debugging; the rules are
/// independent and their error sets are unioned.
const PIPELINE: &[(&str, RuleFn)] = &[
    ("points_redemption", points_redemption::check),
    ("reward_codes", reward_codes::check),
    ("tier_restriction", tier_restriction::check),
    ("min_points", min_points::check),
    ("members_only", members_only::check),
];

/// Run the validation engine over a cart snapshot.
///
/// Never panics and never surfaces an internal failure to the caller: a
/// faulting rule yields an empty error list.
#[must_use]
pub fn run(input: &FunctionInput) -> FunctionResult {
    match evaluate(PIPELINE, input) {
        Evaluation::Collected(errors) => FunctionResult { errors },
        Evaluation::FaultAborted => FunctionResult::default(),
    }
}

/// Terminal states of a pipeline evaluation.
enum Evaluation {
    /// Every rule ran; carries the deduplicated error list.
    Collected(Vec<ValidationError>),
    /// A rule faulted; remaining rules were skipped.
    FaultAborted,
}

fn evaluate(pipeline: &[(&str, RuleFn)], input: &FunctionInput) -> Evaluation {
    let mut collected = Vec::new();
    for (name, rule) in pipeline {
        match rule(input) {
            Ok(errors) => collected.extend(errors),
            Err(fault) => {
                tracing::error!(rule = *name, error = %fault, "validation rule faulted, failing open");
                return Evaluation::FaultAborted;
            }
        }
    }
    Evaluation::Collected(dedupe(collected))
}

/// Collapse errors with identical message text, keeping first-seen order.
///
/// Targets are ignored for the comparison; only the first occurrence's
/// target survives.
fn dedupe(errors: Vec<ValidationError>) -> Vec<ValidationError> {
    let mut seen = HashSet::with_capacity(errors.len());
    errors
        .into_iter()
        .filter(|err| seen.insert(err.localized_message.clone()))
        .collect()
}
