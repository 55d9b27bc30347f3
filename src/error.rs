use crate::formula::Literal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormulaError {
    #[error("literal {literal} is outside the declared range of {num_variables} variables")]
    LiteralOutOfRange { literal: Literal, num_variables: usize },

    #[error("{num_variables} variables exceed the supported maximum")]
    TooManyVariables { num_variables: usize },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input, with the 1-based line it was found on.
    #[error("line {line}: {message}")]
    Format { line: usize, message: String },

    #[error("header declares {declared} clauses but {found} were given")]
    ClauseCount { declared: usize, found: usize },

    #[error(transparent)]
    Formula(#[from] FormulaError),
}

impl ParseError {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }
}
