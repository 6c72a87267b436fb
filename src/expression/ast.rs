use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    Modulo,
    Power,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::FloorDivide => "//",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Power => "**",
        }
    }

    pub fn apply(&self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOperator::Add => left + right,
            BinaryOperator::Subtract => left - right,
            BinaryOperator::Multiply => left * right,
            BinaryOperator::Divide => left / right,
            BinaryOperator::FloorDivide => (left / right).floor(),
            BinaryOperator::Modulo => floored_modulo(left, right),
            BinaryOperator::Power => left.powf(right),
        }
    }
}

/// Remainder taking the sign of the divisor.
pub fn floored_modulo(dividend: f64, divisor: f64) -> f64 {
    let remainder = dividend % divisor;
    if remainder != 0.0 && (remainder < 0.0) != (divisor < 0.0) {
        remainder + divisor
    } else {
        remainder
    }
}

/// Dotted identifier such as `x` or `np.sinc`.
#[derive(Debug, PartialEq, Clone)]
pub struct Name {
    pub path: Vec<String>,
}

impl Name {
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|segment| String::from(*segment)).collect(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.join("."))
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expr {
    Number(f64),
    Variable(Name),
    Call {
        function: Name,
        arguments: Vec<Expr>,
    },
    Binary {
        operator: BinaryOperator,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Negate(Box<Expr>),
}

/// Fully parenthesized, so the printed form shows how the input was grouped.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Call {
                function,
                arguments,
            } => {
                write!(f, "{function}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            }
            Expr::Binary {
                operator,
                left,
                right,
            } => write!(f, "({left} {} {right})", operator.symbol()),
            Expr::Negate(operand) => write!(f, "(-{operand})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn modulo_follows_divisor_sign() {
        assert_approx_eq!(floored_modulo(7.0, 3.0), 1.0);
        assert_approx_eq!(floored_modulo(-7.0, 3.0), 2.0);
        assert_approx_eq!(floored_modulo(7.0, -3.0), -2.0);
        assert_approx_eq!(floored_modulo(-7.0, -3.0), -1.0);
        assert_approx_eq!(floored_modulo(5.5, 2.0), 1.5);
        assert!(floored_modulo(1.0, 0.0).is_nan());
    }

    #[test]
    fn floor_division_rounds_down() {
        assert_eq!(BinaryOperator::FloorDivide.apply(7.0, 2.0), 3.0);
        assert_eq!(BinaryOperator::FloorDivide.apply(-7.0, 2.0), -4.0);
        assert_eq!(
            BinaryOperator::FloorDivide.apply(1.0, 0.0),
            f64::INFINITY
        );
    }

    #[test]
    fn display_shows_grouping() {
        let expr = Expr::Negate(Box::new(Expr::Binary {
            operator: BinaryOperator::Power,
            left: Box::new(Expr::Variable(Name::new(&["x"]))),
            right: Box::new(Expr::Number(2.0)),
        }));
        assert_eq!(expr.to_string(), "(-(x ** 2))");

        let call = Expr::Call {
            function: Name::new(&["np", "hypot"]),
            arguments: vec![Expr::Variable(Name::new(&["x"])), Expr::Number(0.5)],
        };
        assert_eq!(call.to_string(), "np.hypot(x, 0.5)");
    }
}
