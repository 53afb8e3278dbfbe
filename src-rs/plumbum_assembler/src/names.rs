//! Names of cell-level variables and outputs shared between sub-models.
//!
//! Electrode-level names live on [`Electrode`](crate::Electrode).

/// X-averaged electrolyte concentration.
pub const ELECTROLYTE_CONCENTRATION: &str = "X-averaged electrolyte concentration";
/// Electrolyte concentration broadcast over the electrolyte domain.
pub const ELECTROLYTE_CONCENTRATION_PROFILE: &str = "Electrolyte concentration";
/// First-order correction to the electrolyte concentration.
pub const FIRST_ORDER_ELECTROLYTE_CONCENTRATION: &str = "First-order electrolyte concentration";
/// Porosity of the separator.
pub const SEPARATOR_POROSITY: &str = "X-averaged separator porosity";
/// Cell temperature.
pub const CELL_TEMPERATURE: &str = "X-averaged cell temperature";
/// Separator pressure, solved for under full transverse convection.
pub const SEPARATOR_PRESSURE: &str = "X-averaged separator pressure";
/// Transverse volume-averaged acceleration in the separator.
pub const TRANSVERSE_ACCELERATION: &str =
    "X-averaged separator transverse volume-averaged acceleration";
/// Oxygen concentration.
pub const OXYGEN_CONCENTRATION: &str = "X-averaged oxygen concentration";
/// Potential of the negative current collector.
pub const NEGATIVE_CURRENT_COLLECTOR_POTENTIAL: &str = "Negative current collector potential";
/// Potential of the positive current collector.
pub const POSITIVE_CURRENT_COLLECTOR_POTENTIAL: &str = "Positive current collector potential";
/// Current density through the current collectors.
pub const CURRENT_COLLECTOR_CURRENT_DENSITY: &str = "Current collector current density";
/// Voltage across the cell at a point of the current collector.
pub const LOCAL_VOLTAGE: &str = "Local voltage";
/// Voltage between the tabs.
pub const TERMINAL_VOLTAGE: &str = "Terminal voltage";
