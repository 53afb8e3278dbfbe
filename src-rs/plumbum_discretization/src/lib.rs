//! Default discretization choices for plumbum
//!
//! [`defaults`] maps a validated [`OptionSet`](plumbum_options::OptionSet)
//! to the geometry, spatial method, submesh type and point count a
//! discretization layer should use. It is a total function of the options:
//! it never looks at the model's equations and never fails.

mod geometry;
mod method;
mod select;

pub use geometry::{Coordinate, Geometry, Interval, RegionGeometry, Tab, Tabs};
pub use method::{SpatialMethod, SubmeshType};
pub use select::{DiscretizationDefaults, defaults};
