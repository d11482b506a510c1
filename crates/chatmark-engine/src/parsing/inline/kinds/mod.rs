//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `TICK = b'\`'` - raw zone that suppresses other parsing
//! - **`Autolink`**: `http://`, `https://`, `www.` prefixes and URL terminators
//! - **`Bold`**: `DELIM = b"**"`
//! - **`Italic`**: `DELIM = b'*'`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.

pub mod autolink;
pub mod code_span;
pub mod emphasis;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
