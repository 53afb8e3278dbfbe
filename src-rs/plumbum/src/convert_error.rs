//! Conversion of pipeline errors into the unified error format

use plumbum::{BuildError, ModelError};
use plumbum_shared::error::{PlumbumError, Stage};

/// Converts an error raised while building a model
pub fn convert_build_error(error: &BuildError) -> PlumbumError {
    PlumbumError::from_error(error, error.stage())
}

/// Converts an error raised by the well-posedness check
pub fn convert_model_error(error: &ModelError) -> PlumbumError {
    PlumbumError::from_error(error, Stage::WellPosedness)
}
