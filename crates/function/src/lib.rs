//! TradeUp cart validation function.
//!
//! The checkout platform invokes this function once per cart recalculation
//! with a GraphQL-shaped snapshot of the cart, the buyer, and localization
//! context. The engine runs five independent loyalty rules over the snapshot
//! and returns a deduplicated list of buyer-visible errors; any non-empty
//! list blocks checkout progression.
//!
//! # Architecture
//!
//! - [`input`] - Deserialized function input contract
//! - [`rules`] - The five rule checkers (points redemption, reward codes,
//!   tier restriction, minimum points, members-only)
//! - [`engine`] - Fixed-order orchestration, message deduplication, and the
//!   fail-open failure boundary
//!
//! The engine is a pure function of its input: no I/O, no shared state, no
//! caching across invocations. A defect in a rule must never block checkout
//! for every buyer, so a faulting rule aborts evaluation and the engine
//! returns an empty error list instead of propagating the failure.
//!
//! # Example
//!
//! ```rust,ignore
//! use tradeup_function::{engine, input::FunctionInput};
//!
//! let input: FunctionInput = serde_json::from_str(&raw)?;
//! let result = engine::run(&input);
//! serde_json::to_writer(std::io::stdout(), &result)?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod engine;
pub mod input;
pub mod rules;

pub use engine::run;
