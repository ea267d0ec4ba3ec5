//! Error types for rfline.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A formula was evaluated outside the domain where it yields a real value.
    #[error("domain error in {op}: {reason}")]
    Domain { op: &'static str, reason: String },

    #[error("W/H synthesis did not converge after {iterations} iterations")]
    Convergence { iterations: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    pub fn domain(op: &'static str, reason: impl Into<String>) -> Self {
        Error::Domain {
            op,
            reason: reason.into(),
        }
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain { .. })
    }

    pub fn is_convergence(&self) -> bool {
        matches!(self, Error::Convergence { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
