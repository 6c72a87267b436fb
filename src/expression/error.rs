use thiserror::Error;

pub type EvaluationResult<T> = std::result::Result<T, EvaluationError>;

/// Everything that can go wrong between the expression text and its values.
///
/// Positions are byte offsets into the trimmed expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("invalid character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("'^' at position {position} is not supported, use '**' for powers")]
    Caret { position: usize },

    #[error("string literals are not allowed (position {position})")]
    StringLiteral { position: usize },

    #[error("assignment is not allowed (position {position}), enter a single expression")]
    Assignment { position: usize },

    #[error("invalid number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    #[error("unexpected {found} at position {position}")]
    UnexpectedToken { found: String, position: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expression is nested more than {limit} levels deep")]
    TooDeep { limit: usize },

    #[error("name '{0}' is not defined")]
    UnknownName(String),

    #[error("'{owner}' has no attribute '{attribute}'")]
    UnknownAttribute { owner: String, attribute: String },

    #[error("'{0}' is not callable")]
    NotCallable(String),

    #[error("'{name}' is a {kind} and cannot be used as a number")]
    NotAValue { name: String, kind: &'static str },

    #[error("{name}() takes {expected} argument(s) ({found} given)")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("operands could not be broadcast together with shapes ({left},) ({right},)")]
    Broadcast { left: usize, right: usize },
}
