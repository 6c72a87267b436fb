use super::error::{EvaluationError, EvaluationResult};
use crate::error::{Error, Result};

/// Intermediate result: a single number or one value per sample.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Value {
    pub fn map(self, function: impl Fn(f64) -> f64) -> Self {
        match self {
            Value::Scalar(value) => Value::Scalar(function(value)),
            Value::Array(mut values) => {
                values.iter_mut().for_each(|value| *value = function(*value));
                Value::Array(values)
            }
        }
    }

    /// Elementwise combination, broadcasting a scalar against an array.
    pub fn zip_with(
        self,
        other: Self,
        function: impl Fn(f64, f64) -> f64,
    ) -> EvaluationResult<Self> {
        match (self, other) {
            (Value::Scalar(left), Value::Scalar(right)) => {
                Ok(Value::Scalar(function(left, right)))
            }
            (Value::Scalar(left), Value::Array(right)) => Ok(Value::Array(
                right.into_iter().map(|r| function(left, r)).collect(),
            )),
            (Value::Array(left), Value::Scalar(right)) => Ok(Value::Array(
                left.into_iter().map(|l| function(l, right)).collect(),
            )),
            (Value::Array(left), Value::Array(right)) => {
                if left.len() != right.len() {
                    return Err(EvaluationError::Broadcast {
                        left: left.len(),
                        right: right.len(),
                    });
                }
                Ok(Value::Array(
                    left.into_iter()
                        .zip(right)
                        .map(|(l, r)| function(l, r))
                        .collect(),
                ))
            }
        }
    }

    /// Turns the result into exactly `length` values; scalars are broadcast.
    pub fn into_samples(self, length: usize) -> Result<Vec<f64>> {
        match self {
            Value::Scalar(value) => Ok(vec![value; length]),
            Value::Array(values) if values.len() == length => Ok(values),
            Value::Array(values) => Err(Error::Shape {
                expected: length,
                actual: values.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_broadcast_against_arrays() {
        let sum = Value::Scalar(1.0)
            .zip_with(Value::Array(vec![1.0, 2.0]), |l, r| l + r)
            .unwrap();
        assert_eq!(sum, Value::Array(vec![2.0, 3.0]));

        let quotient = Value::Array(vec![1.0, 2.0])
            .zip_with(Value::Scalar(0.0), |l, r| l / r)
            .unwrap();
        assert_eq!(quotient, Value::Array(vec![f64::INFINITY, f64::INFINITY]));
    }

    #[test]
    fn mismatched_arrays_do_not_broadcast() {
        let error = Value::Array(vec![1.0, 2.0])
            .zip_with(Value::Array(vec![1.0, 2.0, 3.0]), |l, r| l * r)
            .unwrap_err();
        assert_eq!(error, EvaluationError::Broadcast { left: 2, right: 3 });
    }

    #[test]
    fn results_are_normalized_to_the_sample_length() {
        assert_eq!(
            Value::Scalar(5.0).into_samples(4).unwrap(),
            vec![5.0, 5.0, 5.0, 5.0]
        );
        assert_eq!(
            Value::Array(vec![1.0, 2.0, 3.0]).into_samples(3).unwrap(),
            vec![1.0, 2.0, 3.0]
        );
        assert_eq!(
            Value::Array(vec![1.0, 2.0]).into_samples(3).unwrap_err(),
            Error::Shape {
                expected: 3,
                actual: 2
            }
        );
    }
}
