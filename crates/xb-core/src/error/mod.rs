use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid email status: {value} {location}")]
    InvalidEmailStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid studio status: {value} {location}")]
    InvalidStudioStatus {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
