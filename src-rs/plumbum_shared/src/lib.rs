//! Shared utilities for the plumbum crates
//!
//! This crate holds the pieces every stage of the model pipeline needs: the
//! unified error representation used for reporting, and the explicit
//! [`Settings`] record that is threaded through assembly and checking.

pub mod error;
mod settings;

pub use settings::Settings;
