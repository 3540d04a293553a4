//! TradeUp Core - Shared types library.
//!
//! This crate provides common types used across all TradeUp components:
//! - `function` - Checkout validation engine run by the platform sandbox
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types and pure helpers - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be
//! used anywhere, including the sandboxed function runtime.
//!
//! # Modules
//!
//! - [`types`] - Tier hierarchy, lenient metafield parsing, points
//!   formatting, and validation error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
