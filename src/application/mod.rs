//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `DiscountEngine` (first-match discount selection)
//! and the `CheckoutManager`, the primary entry point for processing checkout
//! events against the injected submission and notification ports.

pub mod checkout;
pub mod engine;
