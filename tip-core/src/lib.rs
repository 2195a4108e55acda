//! Core tip-splitting logic.
//!
//! Everything in this crate is free of I/O: the [`TipCalculator`] holds the
//! state a tip screen mutates, and the derived amounts are recomputed from
//! that state on every query.

pub mod calculations;
pub mod calculator;
pub mod event;
pub mod format;
pub mod input;
pub mod models;

pub use calculator::{TipCalculator, TipDefaults};
pub use event::TipEvent;
pub use input::ParseAmountError;
pub use models::*;
