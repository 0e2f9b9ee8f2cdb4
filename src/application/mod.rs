//! Application layer orchestrating a shopping session.
//!
//! `Session` runs the interactive add-to-cart loop against a `Catalog` and
//! hands the final total to `Checkout`, which decides the payment outcome
//! through an injected random source.

pub mod checkout;
pub mod session;
