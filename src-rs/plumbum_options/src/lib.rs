//! Model options for plumbum
//!
//! Callers describe the model they want with a plain [`RawOptions`] record.
//! [`OptionSet::new`] validates that record once, rejecting unknown keys,
//! out-of-range values and incompatible combinations, and produces an
//! immutable [`OptionSet`] made of closed enumerations. Every later stage
//! works from the `OptionSet` and never re-validates.

mod error;
mod key;
mod option_set;
mod raw;
mod values;

pub use error::{Incompatibility, OptionError};
pub use key::OptionKey;
pub use option_set::OptionSet;
pub use raw::{OptionValue, RawOptions};
pub use values::{
    Convection, CurrentCollector, Dimensionality, SideReaction, SurfaceForm, Thermal,
    TransverseConvection,
};
