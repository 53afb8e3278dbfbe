//! Sub-model composition for plumbum
//!
//! [`assemble`] turns a [`BaseModel`] and a validated
//! [`OptionSet`](plumbum_options::OptionSet) into a
//! [`Model`](plumbum_model::Model). The registry selects the sub-models each
//! option calls for, and [`compose`] merges them into a [`PartialModel`] in
//! a fixed order: base, thermal, convection, surface form, side reactions,
//! current collector. A sub-model that provides a variable, equation,
//! condition or output already provided by another fails assembly with a
//! [`ModelConstructionError`].

mod assemble;
mod electrode;
mod error;
pub mod names;
mod params;
mod partial;
mod reaction;
pub mod registry;
pub mod submodel;

pub use assemble::{assemble, compose};
pub use electrode::Electrode;
pub use error::ModelConstructionError;
pub use params::{FunctionParam, Param};
pub use partial::PartialModel;
pub use reaction::Reaction;
pub use registry::BaseModel;
pub use submodel::{Phase, SubModel};
