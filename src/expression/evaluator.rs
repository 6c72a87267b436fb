use super::ast::Expr;
use super::environment::{Binding, Environment, Operation};
use super::error::{EvaluationError, EvaluationResult};
use super::value::Value;

pub fn evaluate(expr: &Expr, environment: &Environment) -> EvaluationResult<Value> {
    match expr {
        Expr::Number(value) => Ok(Value::Scalar(*value)),
        Expr::Variable(name) => match environment.resolve(name)? {
            Binding::Constant(value) => Ok(Value::Scalar(value)),
            Binding::Samples(samples) => Ok(Value::Array(samples.to_vec())),
            binding => Err(EvaluationError::NotAValue {
                name: name.to_string(),
                kind: binding.kind(),
            }),
        },
        Expr::Call {
            function,
            arguments,
        } => {
            let Binding::Function(resolved) = environment.resolve(function)? else {
                return Err(EvaluationError::NotCallable(function.to_string()));
            };
            match (resolved.operation(), arguments.as_slice()) {
                (Operation::Unary(operation), [argument]) => {
                    Ok(evaluate(argument, environment)?.map(operation))
                }
                (Operation::Binary(operation), [left, right]) => {
                    let left = evaluate(left, environment)?;
                    let right = evaluate(right, environment)?;
                    left.zip_with(right, operation)
                }
                _ => Err(EvaluationError::Arity {
                    name: function.to_string(),
                    expected: resolved.arity(),
                    found: arguments.len(),
                }),
            }
        }
        Expr::Binary {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left, environment)?;
            let right = evaluate(right, environment)?;
            left.zip_with(right, |l, r| operator.apply(l, r))
        }
        Expr::Negate(operand) => Ok(evaluate(operand, environment)?.map(|v| -v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::parser;
    use assert_approx_eq::assert_approx_eq;

    fn evaluate_with(input: &str, samples: &[f64]) -> EvaluationResult<Value> {
        evaluate(&parser::parse(input)?, &Environment::new(samples))
    }

    #[test]
    fn constants_stay_scalar() {
        assert_eq!(evaluate_with("5", &[1.0, 2.0]).unwrap(), Value::Scalar(5.0));
        assert_eq!(
            evaluate_with("2**-1 + 7 % 3", &[]).unwrap(),
            Value::Scalar(1.5)
        );
        let Value::Scalar(tau) = evaluate_with("2*pi", &[]).unwrap() else {
            panic!("expected a scalar");
        };
        assert_approx_eq!(tau, std::f64::consts::TAU);
    }

    #[test]
    fn arrays_follow_the_samples() {
        assert_eq!(
            evaluate_with("-x**2 + 1", &[-1.0, 0.0, 2.0]).unwrap(),
            Value::Array(vec![0.0, 1.0, -3.0])
        );
        assert_eq!(
            evaluate_with("np.maximum(x, 0)", &[-1.0, 2.0]).unwrap(),
            Value::Array(vec![0.0, 2.0])
        );
        assert_eq!(
            evaluate_with("np.power(2, x)", &[0.0, 3.0]).unwrap(),
            Value::Array(vec![1.0, 8.0])
        );
    }

    #[test]
    fn misuse_of_names_is_reported() {
        assert_eq!(
            evaluate_with("sin + 1", &[]).unwrap_err(),
            EvaluationError::NotAValue {
                name: String::from("sin"),
                kind: "function"
            }
        );
        assert_eq!(
            evaluate_with("np", &[]).unwrap_err(),
            EvaluationError::NotAValue {
                name: String::from("np"),
                kind: "module"
            }
        );
        assert_eq!(
            evaluate_with("pi(2)", &[]).unwrap_err(),
            EvaluationError::NotCallable(String::from("pi"))
        );
        assert_eq!(
            evaluate_with("x(1)", &[1.0]).unwrap_err(),
            EvaluationError::NotCallable(String::from("x"))
        );
        assert_eq!(
            evaluate_with("sin(x, x)", &[1.0]).unwrap_err(),
            EvaluationError::Arity {
                name: String::from("sin"),
                expected: 1,
                found: 2
            }
        );
        assert_eq!(
            evaluate_with("np.hypot(x)", &[1.0]).unwrap_err(),
            EvaluationError::Arity {
                name: String::from("np.hypot"),
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            evaluate_with("cos()", &[1.0]).unwrap_err(),
            EvaluationError::Arity {
                name: String::from("cos"),
                expected: 1,
                found: 0
            }
        );
    }

    #[test]
    fn arity_is_checked_before_arguments_are_evaluated() {
        assert_eq!(
            evaluate_with("sin(undefined, x)", &[1.0]).unwrap_err(),
            EvaluationError::Arity {
                name: String::from("sin"),
                expected: 1,
                found: 2
            }
        );
    }

    #[test]
    fn unknown_function_is_reported_before_arguments() {
        assert_eq!(
            evaluate_with("os.system(1)", &[]).unwrap_err(),
            EvaluationError::UnknownName(String::from("os"))
        );
        assert_eq!(
            evaluate_with("exec(undefined)", &[]).unwrap_err(),
            EvaluationError::UnknownName(String::from("exec"))
        );
    }
}
