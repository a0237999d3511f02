//! Request middleware.
//!
//! Purpose: request lifecycle concerns that sit outside the recipe handlers,
//! currently per-request trace identifiers.

pub mod trace;

pub use trace::Trace;
