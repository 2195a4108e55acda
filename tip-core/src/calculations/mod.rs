//! Tip arithmetic.
//!
//! The functions here are pure: they take already-validated domain values
//! and return unrounded amounts. Rounding happens only when formatting.

pub mod common;
pub mod tip;

pub use tip::{MAX_BILL, tip_per_person, total_per_person};
