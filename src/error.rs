use crate::expression::EvaluationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The form field a domain value was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainField {
    Start,
    End,
    Points,
}

impl DomainField {
    pub fn to_string(&self) -> &str {
        match self {
            DomainField::Start => "x start",
            DomainField::End => "x end",
            DomainField::Points => "points",
        }
    }

    pub fn expected(&self) -> &str {
        match self {
            DomainField::Points => "integer",
            _ => "number",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("{} must be a valid {}, got {input:?}", .field.to_string(), .field.expected())]
    Parse { field: DomainField, input: String },

    #[error("points must be >1 and start != end (got start={start}, end={end}, points={count})")]
    Range { start: f64, end: f64, count: i64 },

    #[error("cannot allocate {count} points")]
    Allocation { count: usize },

    #[error("Type an expression to plot.")]
    EmptyExpression,

    #[error("Error evaluating expression: {0}")]
    Evaluation(#[from] EvaluationError),

    #[error("Evaluated result shape ({actual},) does not match x ({expected},).")]
    Shape { expected: usize, actual: usize },
}

impl Error {
    /// Title of the dialog the error is reported in.
    pub fn title(&self) -> &'static str {
        match self {
            Error::Parse { .. } | Error::Range { .. } | Error::Allocation { .. } => {
                "Domain error"
            }
            Error::EmptyExpression => "Input error",
            Error::Evaluation(_) | Error::Shape { .. } => "Evaluation error",
        }
    }
}
