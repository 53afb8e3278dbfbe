use clap::{Args, Parser, Subcommand, ValueEnum};
use plumbum::{BaseModel, OptionValue, RawOptions, Settings};
use tracing::Level;

/// Plumbum lead-acid model CLI
#[derive(Parser)]
#[command(name = "plumbum")]
#[command(version, about = "Lead-acid battery model tooling", long_about = None)]
pub struct CliCommand {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: Level,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a model and check that it is well posed
    Check {
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Print the variables, equations and conditions of a model
    PrintModel {
        #[command(flatten)]
        model: ModelArgs,
    },
    /// Print the default discretization of a model
    PrintDefaults {
        #[command(flatten)]
        model: ModelArgs,
    },
}

/// The base model to build on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BaseArg {
    /// Leading-order quasi-static
    Loqs,
    /// Composite
    Composite,
}

impl From<BaseArg> for BaseModel {
    fn from(base: BaseArg) -> Self {
        match base {
            BaseArg::Loqs => Self::Loqs,
            BaseArg::Composite => Self::Composite,
        }
    }
}

#[derive(Args)]
pub struct ModelArgs {
    /// Base model
    #[arg(long, value_enum, default_value_t = BaseArg::Loqs)]
    pub base: BaseArg,

    /// Thermal option (isothermal, lumped)
    #[arg(long)]
    pub thermal: Option<String>,

    /// Convection option (false, true, uniform, full)
    #[arg(long)]
    pub convection: Option<String>,

    /// Surface form option (false, differential, algebraic)
    #[arg(long)]
    pub surface_form: Option<String>,

    /// Side reaction to include; may be repeated
    #[arg(long = "side-reaction", value_name = "REACTION")]
    pub side_reactions: Vec<String>,

    /// Current collector option (uniform, "potential pair")
    #[arg(long)]
    pub current_collector: Option<String>,

    /// Current collector dimensionality (0, 1, 2)
    #[arg(long)]
    pub dimensionality: Option<i64>,

    /// Enable debug mode for assembly and checking
    #[arg(long)]
    pub debug: bool,

    /// Print the output in debug format
    #[arg(long)]
    pub print_debug: bool,

    /// Disable colors in the output
    #[arg(long)]
    pub no_colors: bool,
}

impl ModelArgs {
    /// Builds the options record described by the flags.
    ///
    /// Values are passed through as written; validating them is left to
    /// the option set so the CLI reports the same errors as library callers.
    pub fn raw_options(&self) -> RawOptions {
        let mut options = RawOptions::new();

        if let Some(thermal) = &self.thermal {
            options.insert("thermal", thermal.as_str());
        }
        if let Some(convection) = &self.convection {
            options.insert("convection", convection_value(convection));
        }
        if let Some(surface_form) = &self.surface_form {
            options.insert("surface form", flag_value(surface_form));
        }
        if !self.side_reactions.is_empty() {
            let reactions = self
                .side_reactions
                .iter()
                .map(|reaction| OptionValue::from(reaction.as_str()))
                .collect();
            options.insert("side reactions", OptionValue::List(reactions));
        }
        if let Some(current_collector) = &self.current_collector {
            options.insert("current collector", current_collector.as_str());
        }
        if let Some(dimensionality) = self.dimensionality {
            options.insert("dimensionality", dimensionality);
        }

        options
    }

    pub fn settings(&self) -> Settings {
        Settings::default().with_debug_mode(self.debug)
    }
}

fn flag_value(value: &str) -> OptionValue {
    match value {
        "true" => OptionValue::Bool(true),
        "false" => OptionValue::Bool(false),
        other => OptionValue::from(other),
    }
}

fn convection_value(value: &str) -> OptionValue {
    match value {
        "uniform" | "full" => OptionValue::from([("transverse", value)]),
        other => flag_value(other),
    }
}

#[cfg(test)]
mod tests {
    use plumbum::OptionSet;
    use plumbum_options::{
        Convection, CurrentCollector, Dimensionality, OptionKey, SurfaceForm, TransverseConvection,
    };

    use super::*;

    fn parse_model_args(args: &[&str]) -> ModelArgs {
        let cli = CliCommand::try_parse_from(["plumbum", "check"].iter().chain(args))
            .expect("arguments should parse");
        let Commands::Check { model } = cli.command else {
            panic!("expected the check command");
        };
        model
    }

    #[test]
    fn no_flags_give_an_empty_record() {
        let args = parse_model_args(&[]);

        assert!(args.raw_options().is_empty());
        assert_eq!(args.base, BaseArg::Loqs);
        assert_eq!(args.settings(), Settings::default());
    }

    #[test]
    fn flags_map_onto_option_keys() {
        // parse the flags
        let args = parse_model_args(&[
            "--base",
            "composite",
            "--convection",
            "full",
            "--surface-form",
            "algebraic",
            "--side-reaction",
            "oxygen",
            "--current-collector",
            "potential pair",
            "--dimensionality",
            "2",
            "--debug",
        ]);

        // validate the record
        let options = OptionSet::new(&args.raw_options()).expect("options should be valid");

        // check the options
        assert_eq!(BaseModel::from(args.base), BaseModel::Composite);
        assert_eq!(
            options.convection(),
            Convection::Transverse(TransverseConvection::Full)
        );
        assert_eq!(options.surface_form(), SurfaceForm::Algebraic);
        assert_eq!(options.side_reactions().len(), 1);
        assert_eq!(options.current_collector(), CurrentCollector::PotentialPair);
        assert_eq!(options.dimensionality(), Dimensionality::Two);
        assert!(args.settings().debug_mode());
    }

    #[test]
    fn boolean_flags_are_passed_as_booleans() {
        let args = parse_model_args(&["--convection", "true", "--surface-form", "false"]);
        let options = args.raw_options();

        assert_eq!(options.get("convection"), Some(&OptionValue::Bool(true)));
        assert_eq!(options.get("surface form"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn unknown_values_reach_validation() {
        let args = parse_model_args(&["--thermal", "tepid"]);

        let error = OptionSet::new(&args.raw_options()).expect_err("value should be rejected");
        assert_eq!(error.key(), Some(OptionKey::Thermal));
    }
}
