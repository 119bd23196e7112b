//! Error type shared by the pricing and catalog layers.

use thiserror::Error;

/// Errors raised while building or evaluating a shipment.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimulatorError {
    /// A numeric input is out of its valid range (e.g. non-positive weight)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Product name not present in the catalog
    #[error("unknown product: {0}")]
    UnknownProduct(String),

    /// Text that does not name one of the Incoterms 2020 codes
    #[error("unknown trade term: {0}")]
    UnknownTerm(String),
}

impl SimulatorError {
    /// A computed amount does not fit in a `Decimal`.
    pub fn out_of_range(what: &str) -> Self {
        Self::InvalidInput(format!("{what} is out of range"))
    }
}

pub type Result<T> = std::result::Result<T, SimulatorError>;
