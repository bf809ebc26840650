//! Error types.
//!
//! Bad input text never produces an error: validators repair it. These are
//! only raised when parsing names supplied by a caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BarcodeError {
    /// The name does not match any supported symbology.
    #[error("unknown symbology: {0:?}")]
    UnknownSymbology(String),

    /// A configuration option was given a value it does not recognize.
    #[error("unknown value {value:?} for option `{option}`")]
    UnknownOption { option: &'static str, value: String },
}
