//! Lead-acid battery model assembly and well-posedness verification
//!
//! This crate ties the plumbum pipeline together. A caller describes the
//! model it wants with a [`RawOptions`] record and a [`BaseModel`];
//! [`LeadAcidModel`] validates the options, assembles the selected
//! sub-models, and offers the well-posedness check and the default
//! discretization for the result.
//!
//! ```rust
//! use plumbum::{LeadAcidModel, RawOptions, Settings};
//!
//! let options = RawOptions::new()
//!     .with("surface form", "differential")
//!     .with("side reactions", ["oxygen"]);
//!
//! let model = LeadAcidModel::loqs(&options).expect("valid options");
//! assert!(model.check_well_posedness(&Settings::default()).is_ok());
//! ```
//!
//! The individual stages are re-exported as modules for callers that need
//! more control than the facade gives.

pub mod lead_acid;

pub use lead_acid::{BuildError, LeadAcidModel};
pub use plumbum_assembler::BaseModel;
pub use plumbum_checker::ModelError;
pub use plumbum_options::{OptionError, OptionSet, OptionValue, RawOptions};
pub use plumbum_shared::Settings;

pub use plumbum_assembler as assembler;
pub use plumbum_checker as checker;
pub use plumbum_discretization as discretization;
pub use plumbum_expr as expr;
pub use plumbum_model as model;
pub use plumbum_options as options;
pub use plumbum_shared as shared;
