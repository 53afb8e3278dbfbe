//! The `plumbum` command-line tool

use std::process::ExitCode;

use anstream::{ColorChoice, println};
use clap::Parser;
use owo_colors::OwoColorize;
use plumbum::LeadAcidModel;
use plumbum_shared::error::PlumbumError;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::command::{CliCommand, Commands, ModelArgs};

mod command;
mod convert_error;
mod print_error;
mod printer;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    init_logging(cli.log_level);

    let result = match cli.command {
        Commands::Check { model } => run(&model, |built| {
            built
                .check_well_posedness(&model.settings())
                .map_err(|error| convert_error::convert_model_error(&error))?;

            println!(
                "{} model is {}",
                built.base(),
                "well posed".style(stylesheet::SUCCESS_COLOR)
            );
            Ok(())
        }),
        Commands::PrintModel { model } => run(&model, |built| {
            printer::print_model(built, model.print_debug);
            Ok(())
        }),
        Commands::PrintDefaults { model } => run(&model, |built| {
            printer::print_defaults(built, model.print_debug);
            Ok(())
        }),
    };

    if result { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

fn init_logging(level: Level) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        print_error::print_warning(&format!("failed to install the log subscriber: {error}"));
    }
}

/// Builds the model described by `args` and hands it to `action`.
///
/// Returns whether both steps succeeded; any error has been printed.
fn run(
    args: &ModelArgs,
    action: impl FnOnce(&LeadAcidModel) -> Result<(), PlumbumError>,
) -> bool {
    if args.no_colors {
        ColorChoice::Never.write_global();
    }

    let result = LeadAcidModel::new(args.base.into(), &args.raw_options(), &args.settings())
        .map_err(|error| convert_error::convert_build_error(&error))
        .and_then(|model| action(&model));

    match result {
        Ok(()) => true,
        Err(error) => {
            print_error::print(&error, args.print_debug);
            false
        }
    }
}
