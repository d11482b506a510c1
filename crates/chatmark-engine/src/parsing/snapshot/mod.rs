//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via structural assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`normalize`**: projects span trees back to the literal characters they
//!   carry, for comparing against the source with delimiters removed
//! - **`invariants`**: runtime checks for parser correctness (non-empty
//!   output, flat emphasis, no empty payloads)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{block_text, plain_text};
