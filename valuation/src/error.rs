//! Valuation error types.

use thiserror::Error;
use xpm_core::Variable;

/// Errors that can occur while building or reducing valuations.
///
/// Apart from `Engine`, every variant is a broken contract: the caller asked
/// for something that cannot exist, or a valuation lost its partition
/// invariant. The driver should abandon the current branch.
#[derive(Debug, Error)]
pub enum ValuationError {
    /// Asked for the front variable of an empty variable set.
    #[error("Valuation has no variables")]
    NoVariables,

    /// Asked for a variable past the end of the variable set.
    #[error("Variable index {index} out of range for {len} variables")]
    VariableIndexOutOfRange { index: usize, len: usize },

    /// No component owns a variable of the composite valuation.
    #[error("No component holds variable {variable}")]
    MissingComponent { variable: Variable },

    /// Components do not partition the variable set.
    #[error("Broken partition: {message}")]
    BrokenPartition { message: String },

    /// A satisfying-set row does not match the component's variable count.
    #[error("Row has {actual} values, expected {expected}")]
    RowArity { expected: usize, actual: usize },

    /// Elimination of a variable outside the valuation, with strict
    /// elimination enabled.
    #[error("Cannot eliminate {variable}: not a variable of this valuation")]
    UnknownVariable { variable: Variable },

    /// The matching engine failed.
    #[error("Matching engine failed: {0}")]
    Engine(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ValuationError {
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::VariableIndexOutOfRange { index, len }
    }

    pub fn missing_component(variable: &Variable) -> Self {
        Self::MissingComponent {
            variable: variable.clone(),
        }
    }

    pub fn broken_partition(message: impl Into<String>) -> Self {
        Self::BrokenPartition {
            message: message.into(),
        }
    }

    pub fn row_arity(expected: usize, actual: usize) -> Self {
        Self::RowArity { expected, actual }
    }

    pub fn unknown_variable(variable: &Variable) -> Self {
        Self::UnknownVariable {
            variable: variable.clone(),
        }
    }

    pub fn engine(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Engine(Box::new(source))
    }
}

/// Result type for valuation operations.
pub type ValuationResult<T> = Result<T, ValuationError>;
