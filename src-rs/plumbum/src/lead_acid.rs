//! Lead-acid battery models.

use std::{fmt, sync::OnceLock};

use indexmap::IndexMap;
use plumbum_assembler::{BaseModel, ModelConstructionError};
use plumbum_checker::ModelError;
use plumbum_discretization::{
    Coordinate, DiscretizationDefaults, Geometry, SpatialMethod, SubmeshType,
};
use plumbum_expr::Region;
use plumbum_model::Model;
use plumbum_options::{OptionError, OptionSet, RawOptions};
use plumbum_shared::{
    Settings,
    error::{AsPlumbumError, Context, Stage},
};

/// An assembled lead-acid model.
///
/// Construction validates the options and assembles the model in one step,
/// so a `LeadAcidModel` always holds a complete model. The default
/// discretization is computed the first time one of the `default_*`
/// accessors is called and reused afterwards.
#[derive(Debug)]
pub struct LeadAcidModel {
    base: BaseModel,
    model: Model,
    defaults: OnceLock<DiscretizationDefaults>,
}

impl LeadAcidModel {
    /// Validates `options` and assembles the `base` model with the
    /// sub-models they select.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Options`] if the options are invalid and
    /// [`BuildError::Construction`] if the selected sub-models collide.
    pub fn new(
        base: BaseModel,
        options: &RawOptions,
        settings: &Settings,
    ) -> Result<Self, BuildError> {
        let options = OptionSet::new(options)?;

        tracing::debug!(%base, "building lead-acid model");

        let model = plumbum_assembler::assemble(base, &options, settings)?;

        Ok(Self {
            base,
            model,
            defaults: OnceLock::new(),
        })
    }

    /// Builds a leading-order quasi-static model with default settings.
    ///
    /// # Errors
    ///
    /// See [`LeadAcidModel::new`].
    pub fn loqs(options: &RawOptions) -> Result<Self, BuildError> {
        Self::new(BaseModel::Loqs, options, &Settings::default())
    }

    /// Builds a composite model with default settings.
    ///
    /// # Errors
    ///
    /// See [`LeadAcidModel::new`].
    pub fn composite(options: &RawOptions) -> Result<Self, BuildError> {
        Self::new(BaseModel::Composite, options, &Settings::default())
    }

    /// Returns the base model this model was built on.
    #[must_use]
    pub const fn base(&self) -> BaseModel {
        self.base
    }

    /// Returns the validated options.
    #[must_use]
    pub const fn options(&self) -> &OptionSet {
        self.model.options()
    }

    /// Returns the assembled model.
    #[must_use]
    pub const fn model(&self) -> &Model {
        &self.model
    }

    /// Consumes this and returns the assembled model.
    #[must_use]
    pub fn into_model(self) -> Model {
        self.model
    }

    /// Checks that the assembled model is well posed.
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] naming the first violated rule.
    pub fn check_well_posedness(&self, settings: &Settings) -> Result<(), ModelError> {
        plumbum_checker::check(&self.model, settings)
    }

    /// Returns the default discretization.
    #[must_use]
    pub fn default_discretization(&self) -> &DiscretizationDefaults {
        self.defaults.get_or_init(|| {
            tracing::debug!("computing default discretization");
            plumbum_discretization::defaults(self.options())
        })
    }

    /// Returns the default geometry.
    #[must_use]
    pub fn default_geometry(&self) -> &Geometry {
        self.default_discretization().geometry()
    }

    /// Returns the default spatial method of each region.
    #[must_use]
    pub fn default_spatial_methods(&self) -> &IndexMap<Region, SpatialMethod> {
        self.default_discretization().spatial_methods()
    }

    /// Returns the default submesh type of each region.
    #[must_use]
    pub fn default_submesh_types(&self) -> &IndexMap<Region, SubmeshType> {
        self.default_discretization().submesh_types()
    }

    /// Returns the default number of points along each coordinate.
    #[must_use]
    pub fn default_var_pts(&self) -> &IndexMap<Coordinate, usize> {
        self.default_discretization().var_pts()
    }
}

/// An error raised while building a [`LeadAcidModel`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The options record was rejected.
    Options(OptionError),
    /// The selected sub-models could not be composed.
    Construction(ModelConstructionError),
}

impl BuildError {
    /// Returns the stage of the pipeline that failed.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Options(_) => Stage::Options,
            Self::Construction(_) => Stage::Assembly,
        }
    }
}

impl From<OptionError> for BuildError {
    fn from(error: OptionError) -> Self {
        Self::Options(error)
    }
}

impl From<ModelConstructionError> for BuildError {
    fn from(error: ModelConstructionError) -> Self {
        Self::Construction(error)
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Options(error) => write!(f, "{error}"),
            Self::Construction(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Options(error) => Some(error),
            Self::Construction(error) => Some(error),
        }
    }
}

impl AsPlumbumError for BuildError {
    fn message(&self) -> String {
        match self {
            Self::Options(error) => error.message(),
            Self::Construction(error) => error.message(),
        }
    }

    fn context(&self) -> Vec<Context> {
        match self {
            Self::Options(error) => error.context(),
            Self::Construction(error) => error.context(),
        }
    }
}

#[cfg(test)]
mod tests {
    use plumbum_assembler::Electrode;
    use plumbum_checker::Rule;
    use plumbum_expr::VariableName;
    use plumbum_model::EquationKind;
    use plumbum_options::OptionValue;

    use super::*;

    fn count_kind(model: &Model, kind: EquationKind) -> usize {
        model
            .equations()
            .iter()
            .filter(|equation| equation.kind() == kind)
            .count()
    }

    #[test]
    fn unregistered_side_reaction_is_rejected() {
        // create the options
        let options = RawOptions::new()
            .with("surface form", "differential")
            .with("side reactions", ["something"]);

        // build the model
        let result = LeadAcidModel::loqs(&options);

        // check the errors
        let error = match result {
            Err(BuildError::Options(error)) => error,
            other @ (Ok(_) | Err(BuildError::Construction(_))) => {
                panic!("expected an option error, got {other:?}")
            }
        };
        assert_eq!(
            error,
            OptionError::UnknownSideReaction {
                name: "something".to_string(),
            }
        );
    }

    #[test]
    fn default_options_use_zero_dimensional_current_collector() {
        // create the model
        let model = LeadAcidModel::loqs(&RawOptions::new()).expect("model should build");

        // check the defaults
        assert_eq!(
            model.default_spatial_methods().get(&Region::CurrentCollector),
            Some(&SpatialMethod::ZeroDimensional)
        );
        assert_eq!(
            model.default_submesh_types().get(&Region::CurrentCollector),
            Some(&SubmeshType::ZeroDimensional)
        );
        assert!(!model.default_geometry().contains_name("negative particle"));
        assert!(model.default_geometry().contains_name("current collector"));
    }

    #[test]
    fn one_dimensional_potential_pair_uses_finite_volumes() {
        // create the options
        let options = RawOptions::new()
            .with("dimensionality", 1)
            .with("current collector", "potential pair")
            .with("surface form", "differential");

        // create the model
        let model = LeadAcidModel::loqs(&options).expect("model should build");

        // check the defaults
        assert_eq!(
            model.default_spatial_methods().get(&Region::CurrentCollector),
            Some(&SpatialMethod::FiniteVolume)
        );
        assert_eq!(
            model.default_submesh_types().get(&Region::CurrentCollector),
            Some(&SubmeshType::Uniform1D)
        );
        assert_eq!(model.default_var_pts().get(&Coordinate::Z), Some(&10));
        assert_eq!(model.default_var_pts().get(&Coordinate::Y), None);

        // check the model
        assert_eq!(model.check_well_posedness(&Settings::default()), Ok(()));
    }

    #[test]
    fn two_dimensional_potential_pair_uses_finite_elements() {
        // create the options
        let options = RawOptions::new()
            .with("dimensionality", 2)
            .with("current collector", "potential pair")
            .with("surface form", "differential");

        // create the model
        let model = LeadAcidModel::loqs(&options).expect("model should build");

        // check the defaults
        assert_eq!(
            model.default_spatial_methods().get(&Region::CurrentCollector),
            Some(&SpatialMethod::FiniteElement)
        );
        assert_eq!(
            model.default_submesh_types().get(&Region::CurrentCollector),
            Some(&SubmeshType::Uniform2D)
        );
        assert_eq!(model.default_var_pts().get(&Coordinate::Y), Some(&10));

        // check the model
        assert_eq!(model.check_well_posedness(&Settings::default()), Ok(()));
    }

    #[test]
    fn surface_forms_with_oxygen_differ_in_kind() {
        // create the models
        let differential = LeadAcidModel::loqs(
            &RawOptions::new()
                .with("surface form", "differential")
                .with("side reactions", ["oxygen"]),
        )
        .expect("differential model should build");
        let algebraic = LeadAcidModel::loqs(
            &RawOptions::new()
                .with("surface form", "algebraic")
                .with("side reactions", ["oxygen"]),
        )
        .expect("algebraic model should build");

        // check that both are well posed
        assert_eq!(differential.check_well_posedness(&Settings::default()), Ok(()));
        assert_eq!(algebraic.check_well_posedness(&Settings::default()), Ok(()));

        // check the surface potential equations
        for electrode in Electrode::ALL {
            let variable = VariableName::new(electrode.surface_potential_difference());

            let equation = differential
                .model()
                .equation_for(&variable)
                .expect("differential surface form defines the potential");
            assert_eq!(equation.kind(), EquationKind::Ode);

            let equation = algebraic
                .model()
                .equation_for(&variable)
                .expect("algebraic surface form defines the potential");
            assert_eq!(equation.kind(), EquationKind::Algebraic);
        }

        // check the equation counts
        let differential = differential.model();
        let algebraic = algebraic.model();
        assert_eq!(differential.equations().len(), algebraic.equations().len());
        assert_eq!(
            count_kind(differential, EquationKind::Ode),
            count_kind(algebraic, EquationKind::Ode) + Electrode::ALL.len()
        );
        assert_eq!(
            count_kind(algebraic, EquationKind::Algebraic),
            count_kind(differential, EquationKind::Algebraic) + Electrode::ALL.len()
        );
    }

    #[test]
    fn defaults_are_computed_once() {
        // create the model
        let options = RawOptions::new()
            .with("dimensionality", 2)
            .with("current collector", "potential pair");
        let model = LeadAcidModel::loqs(&options).expect("model should build");

        // request the defaults twice
        let first = model.default_discretization();
        let second = model.default_discretization();

        // check that the same value is returned
        assert!(std::ptr::eq(first, second));
        assert_eq!(model.default_geometry(), model.default_geometry());
        assert_eq!(
            model.default_spatial_methods(),
            model.default_spatial_methods()
        );
        assert_eq!(model.default_submesh_types(), model.default_submesh_types());
    }

    #[test]
    fn removing_a_boundary_condition_violates_rule_three() {
        // create the model
        let options = RawOptions::new()
            .with("dimensionality", 1)
            .with("current collector", "potential pair")
            .with("surface form", "differential");
        let model = LeadAcidModel::loqs(&options).expect("model should build");
        assert_eq!(model.check_well_posedness(&Settings::default()), Ok(()));

        // remove a boundary condition
        let mut parts = model.into_model().into_parts();
        assert!(!parts.boundary_conditions.is_empty());
        parts.boundary_conditions.remove(0);
        let broken = Model::from_parts(parts);

        // check the errors
        let error = plumbum_checker::check(&broken, &Settings::default())
            .expect_err("model should not be well posed");
        assert_eq!(error.rule(), Rule::BoundaryConditions);
        assert_eq!(error.rule().number(), 3);
    }

    #[test]
    fn incompatible_options_never_reach_assembly() {
        // create the options
        let options = RawOptions::new().with("current collector", "potential pair");

        // build the model
        let error = LeadAcidModel::composite(&options).expect_err("options are incompatible");

        // check the errors
        assert_eq!(error.stage(), Stage::Options);
        assert!(matches!(error, BuildError::Options(OptionError::Incompatible(_))));
        assert!(!error.context().is_empty());
    }

    #[test]
    fn base_model_is_recorded() {
        let loqs = LeadAcidModel::loqs(&RawOptions::new()).expect("model should build");
        let composite = LeadAcidModel::composite(&RawOptions::new()).expect("model should build");

        assert_eq!(loqs.base(), BaseModel::Loqs);
        assert_eq!(composite.base(), BaseModel::Composite);
        assert!(composite.model().equations().len() > loqs.model().equations().len());
    }

    fn every_raw_options() -> Vec<RawOptions> {
        let thermals = ["isothermal", "lumped"];
        let convections: [OptionValue; 4] = [
            false.into(),
            true.into(),
            [("transverse", "uniform")].into(),
            [("transverse", "full")].into(),
        ];
        let surface_forms: [OptionValue; 3] =
            [false.into(), "differential".into(), "algebraic".into()];
        let side_reactions: [OptionValue; 2] = [Vec::<&str>::new().into(), ["oxygen"].into()];
        let current_collectors = ["uniform", "potential pair"];
        let dimensionalities = [0, 1, 2];

        let mut all = Vec::new();
        for thermal in thermals {
            for convection in &convections {
                for surface_form in &surface_forms {
                    for side_reaction in &side_reactions {
                        for current_collector in current_collectors {
                            for dimensionality in dimensionalities {
                                all.push(
                                    RawOptions::new()
                                        .with("thermal", thermal)
                                        .with("convection", convection.clone())
                                        .with("surface form", surface_form.clone())
                                        .with("side reactions", side_reaction.clone())
                                        .with("current collector", current_collector)
                                        .with("dimensionality", dimensionality),
                                );
                            }
                        }
                    }
                }
            }
        }
        all
    }

    #[test]
    fn every_valid_option_set_assembles_and_is_well_posed() {
        let mut valid = 0;

        for options in every_raw_options() {
            // skip the combinations that are rejected up front
            if OptionSet::new(&options).is_err() {
                continue;
            }
            valid += 1;

            for base in BaseModel::ALL {
                for settings in [Settings::default(), Settings::debug()] {
                    // build the model
                    let model = LeadAcidModel::new(base, &options, &settings)
                        .unwrap_or_else(|error| panic!("{base} with {options:?}: {error}"));

                    // check the model
                    if let Err(error) = model.check_well_posedness(&settings) {
                        panic!("{base} with {options:?}: {error}");
                    }
                }
            }
        }

        assert!(valid > 0);
    }

    #[test]
    fn rejected_option_sets_fail_before_assembly() {
        for options in every_raw_options() {
            let Err(expected) = OptionSet::new(&options) else {
                continue;
            };

            for base in BaseModel::ALL {
                let error = LeadAcidModel::new(base, &options, &Settings::default())
                    .expect_err("options should be rejected");
                assert_eq!(error, BuildError::Options(expected.clone()));
            }
        }
    }
}
