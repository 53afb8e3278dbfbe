//! The catalog of parameters sub-models may reference.
//!
//! Parameters are declared on a model the first time a sub-model asks for
//! them through [`PartialModel::param`](crate::PartialModel::param) or
//! [`PartialModel::function`](crate::PartialModel::function), so the
//! assembled model declares exactly the parameters its equations use.

use crate::Electrode;

/// A scalar parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// Thickness of an electrode, relative to the cell width.
    Thickness(Electrode),
    /// Thickness of the separator, relative to the cell width.
    SeparatorThickness,
    /// Porosity of the separator.
    SeparatorPorosity,
    /// Initial porosity of an electrode.
    InitialPorosity(Electrode),
    /// Initial electrolyte concentration.
    InitialElectrolyteConcentration,
    /// Signed stoichiometry of cations in the main reaction.
    CationStoichiometry(Electrode),
    /// Volumetric change of the solid in the main reaction.
    VolumetricChange(Electrode),
    /// Double-layer capacity of an electrode.
    DoubleLayerCapacity(Electrode),
    /// Initial surface potential difference of an electrode.
    InitialSurfacePotentialDifference(Electrode),
    /// Ambient temperature.
    AmbientTemperature,
    /// Initial cell temperature.
    InitialTemperature,
    /// Total heat transfer coefficient to the surroundings.
    HeatTransferCoefficient,
    /// Volumetric heat capacity of the cell.
    VolumetricHeatCapacity,
    /// Electrical conductivity of a current collector.
    CurrentCollectorConductivity(Electrode),
    /// Thickness of a current collector.
    CurrentCollectorThickness(Electrode),
    /// Signed stoichiometry of cations in the oxygen reaction.
    OxygenCationStoichiometry,
    /// Signed stoichiometry of oxygen in the oxygen reaction.
    OxygenStoichiometry,
    /// Volumetric change of the solid in the oxygen reaction.
    OxygenVolumetricChange,
    /// Initial oxygen concentration.
    InitialOxygenConcentration,
    /// Open-circuit potential of the oxygen reaction.
    OxygenOpenCircuitPotential,
}

impl Param {
    /// Returns the parameter name.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Thickness(electrode) => format!("{} thickness", capitalized(electrode)),
            Self::SeparatorThickness => "Separator thickness".to_string(),
            Self::SeparatorPorosity => "Separator porosity".to_string(),
            Self::InitialPorosity(electrode) => format!("Initial {electrode} porosity"),
            Self::InitialElectrolyteConcentration => {
                "Initial electrolyte concentration".to_string()
            }
            Self::CationStoichiometry(electrode) => {
                format!("{} cation signed stoichiometry", capitalized(electrode))
            }
            Self::VolumetricChange(electrode) => {
                format!("{} volumetric change", capitalized(electrode))
            }
            Self::DoubleLayerCapacity(electrode) => {
                format!("{} double-layer capacity", capitalized(electrode))
            }
            Self::InitialSurfacePotentialDifference(electrode) => {
                format!("Initial {electrode} surface potential difference")
            }
            Self::AmbientTemperature => "Ambient temperature".to_string(),
            Self::InitialTemperature => "Initial temperature".to_string(),
            Self::HeatTransferCoefficient => "Total heat transfer coefficient".to_string(),
            Self::VolumetricHeatCapacity => "Cell volumetric heat capacity".to_string(),
            Self::CurrentCollectorConductivity(electrode) => {
                format!("{} current collector conductivity", capitalized_name(electrode))
            }
            Self::CurrentCollectorThickness(electrode) => {
                format!("{} current collector thickness", capitalized_name(electrode))
            }
            Self::OxygenCationStoichiometry => {
                "Signed stoichiometry of cations (oxygen reaction)".to_string()
            }
            Self::OxygenStoichiometry => {
                "Signed stoichiometry of oxygen (oxygen reaction)".to_string()
            }
            Self::OxygenVolumetricChange => "Volumetric change (oxygen reaction)".to_string(),
            Self::InitialOxygenConcentration => "Initial oxygen concentration".to_string(),
            Self::OxygenOpenCircuitPotential => "Oxygen reference OCP vs SHE".to_string(),
        }
    }

    /// Returns a short description of the parameter.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Thickness(_) | Self::SeparatorThickness => "dimensionless thickness",
            Self::SeparatorPorosity | Self::InitialPorosity(_) => "volume fraction of electrolyte",
            Self::InitialElectrolyteConcentration | Self::InitialOxygenConcentration => {
                "dimensionless concentration at t = 0"
            }
            Self::CationStoichiometry(_)
            | Self::OxygenCationStoichiometry
            | Self::OxygenStoichiometry => "signed stoichiometric coefficient",
            Self::VolumetricChange(_) | Self::OxygenVolumetricChange => {
                "change in solid volume per unit reaction"
            }
            Self::DoubleLayerCapacity(_) => "dimensionless double-layer capacity",
            Self::InitialSurfacePotentialDifference(_) => "dimensionless potential at t = 0",
            Self::AmbientTemperature | Self::InitialTemperature => "dimensionless temperature",
            Self::HeatTransferCoefficient => "dimensionless heat transfer coefficient",
            Self::VolumetricHeatCapacity => "dimensionless volumetric heat capacity",
            Self::CurrentCollectorConductivity(_) => "dimensionless electrical conductivity",
            Self::CurrentCollectorThickness(_) => "thickness relative to the cell width",
            Self::OxygenOpenCircuitPotential => "dimensionless open-circuit potential",
        }
    }
}

/// A parameter whose value is a function of other expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionParam {
    /// Exchange-current density of the main reaction, a function of
    /// electrolyte concentration and temperature.
    ExchangeCurrentDensity(Electrode),
    /// Open-circuit potential of the main reaction, a function of
    /// electrolyte concentration and temperature.
    OpenCircuitPotential(Electrode),
    /// Exchange-current density of the oxygen reaction, a function of
    /// electrolyte concentration and temperature.
    OxygenExchangeCurrentDensity(Electrode),
    /// Electrolyte diffusivity, a function of electrolyte concentration.
    ElectrolyteDiffusivity,
    /// Applied current density, a function of time.
    CurrentFunction,
}

impl FunctionParam {
    /// Returns the parameter name.
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::ExchangeCurrentDensity(electrode) => {
                format!("{} exchange-current density", capitalized(electrode))
            }
            Self::OpenCircuitPotential(electrode) => format!("{} OCP", capitalized(electrode)),
            Self::OxygenExchangeCurrentDensity(electrode) => {
                format!("{} oxygen exchange-current density", capitalized(electrode))
            }
            Self::ElectrolyteDiffusivity => "Electrolyte diffusivity".to_string(),
            Self::CurrentFunction => "Current function".to_string(),
        }
    }

    /// Returns a short description of the parameter.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ExchangeCurrentDensity(_) | Self::OxygenExchangeCurrentDensity(_) => {
                "exchange-current density as a function of concentration and temperature"
            }
            Self::OpenCircuitPotential(_) => {
                "open-circuit potential as a function of concentration and temperature"
            }
            Self::ElectrolyteDiffusivity => "diffusivity as a function of concentration",
            Self::CurrentFunction => "applied current density as a function of time",
        }
    }
}

fn capitalized(electrode: Electrode) -> String {
    format!("{} electrode", capitalized_name(electrode))
}

const fn capitalized_name(electrode: Electrode) -> &'static str {
    match electrode {
        Electrode::Negative => "Negative",
        Electrode::Positive => "Positive",
    }
}
