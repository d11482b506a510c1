//! # Block Segmentation
//!
//! Two-phase, single-pass segmentation of a chat message into blocks.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts only (blank, fence closer, which block
//!    it would open)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the open leaf
//!    (paragraph, list run or fence) and emits `Block`s as they close
//!
//! ## Modules
//!
//! - **`types`**: `Block` and `HeadingLevel`
//! - **`kinds`**: block-specific types owning their delimiters (CodeFence,
//!   Heading, BoldSection, ListMarker)
//! - **`classify`**: `MessageLineClassifier` produces `LineClass` for each line
//! - **`open`**: `try_open_leaf` dispatch in precedence order
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: no block or inline parsing inside
//! - Blocks are emitted in source order
//! - A list run takes its `ordered` flag from the last line consumed

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MessageLineClassifier};
pub use open::{BlockOpen, try_open_leaf};
pub use types::{Block, HeadingLevel};
