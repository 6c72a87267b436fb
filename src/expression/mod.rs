//! Sandboxed evaluation of user formulas in `x`.
//!
//! Input goes through a small grammar (tokenizer, recursive-descent parser,
//! AST evaluator) instead of a general purpose interpreter, so the only names
//! an expression can reach are the ones [`Environment`] hands out.

pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod tokenizer;
pub mod value;

pub use environment::{Environment, Function, Operation};
pub use error::{EvaluationError, EvaluationResult};
pub use value::Value;

use crate::error::Result;

/// Evaluates `expression` for every sample, broadcasting constant results.
pub fn evaluate(expression: &str, samples: &[f64]) -> Result<Vec<f64>> {
    let parsed = parser::parse(expression)?;
    log::debug!("parsed '{}' as {}", expression, parsed);
    let environment = Environment::new(samples);
    let value = evaluator::evaluate(&parsed, &environment)?;
    value.into_samples(samples.len())
}
