use super::ast::{Name, floored_modulo};
use super::error::{EvaluationError, EvaluationResult};

/// Numeric functions reachable from an expression, named as in numpy.
#[derive(Debug, PartialEq, Clone, Copy, variant_count::VariantCount)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    Sinh,
    Cosh,
    Tanh,
    Arcsinh,
    Arccosh,
    Arctanh,
    Exp,
    Exp2,
    Expm1,
    Log,
    Log2,
    Log10,
    Log1p,
    Sqrt,
    Cbrt,
    Abs,
    Sign,
    Floor,
    Ceil,
    Trunc,
    Rint,
    Square,
    Reciprocal,
    Sinc,
    Deg2Rad,
    Rad2Deg,
    Negative,
    Positive,
    Arctan2,
    Hypot,
    Power,
    Maximum,
    Minimum,
    Fmax,
    Fmin,
    Mod,
    Fmod,
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Function {
    pub const ALL: [Self; Self::VARIANT_COUNT] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Arcsin,
        Self::Arccos,
        Self::Arctan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Arcsinh,
        Self::Arccosh,
        Self::Arctanh,
        Self::Exp,
        Self::Exp2,
        Self::Expm1,
        Self::Log,
        Self::Log2,
        Self::Log10,
        Self::Log1p,
        Self::Sqrt,
        Self::Cbrt,
        Self::Abs,
        Self::Sign,
        Self::Floor,
        Self::Ceil,
        Self::Trunc,
        Self::Rint,
        Self::Square,
        Self::Reciprocal,
        Self::Sinc,
        Self::Deg2Rad,
        Self::Rad2Deg,
        Self::Negative,
        Self::Positive,
        Self::Arctan2,
        Self::Hypot,
        Self::Power,
        Self::Maximum,
        Self::Minimum,
        Self::Fmax,
        Self::Fmin,
        Self::Mod,
        Self::Fmod,
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
    ];

    /// Functions usable without the `np.` prefix.
    pub const TOP_LEVEL: [Self; 10] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Arcsin,
        Self::Arccos,
        Self::Arctan,
        Self::Exp,
        Self::Log,
        Self::Sqrt,
        Self::Abs,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Arcsin => "arcsin",
            Function::Arccos => "arccos",
            Function::Arctan => "arctan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Arcsinh => "arcsinh",
            Function::Arccosh => "arccosh",
            Function::Arctanh => "arctanh",
            Function::Exp => "exp",
            Function::Exp2 => "exp2",
            Function::Expm1 => "expm1",
            Function::Log => "log",
            Function::Log2 => "log2",
            Function::Log10 => "log10",
            Function::Log1p => "log1p",
            Function::Sqrt => "sqrt",
            Function::Cbrt => "cbrt",
            Function::Abs => "abs",
            Function::Sign => "sign",
            Function::Floor => "floor",
            Function::Ceil => "ceil",
            Function::Trunc => "trunc",
            Function::Rint => "rint",
            Function::Square => "square",
            Function::Reciprocal => "reciprocal",
            Function::Sinc => "sinc",
            Function::Deg2Rad => "deg2rad",
            Function::Rad2Deg => "rad2deg",
            Function::Negative => "negative",
            Function::Positive => "positive",
            Function::Arctan2 => "arctan2",
            Function::Hypot => "hypot",
            Function::Power => "power",
            Function::Maximum => "maximum",
            Function::Minimum => "minimum",
            Function::Fmax => "fmax",
            Function::Fmin => "fmin",
            Function::Mod => "mod",
            Function::Fmod => "fmod",
            Function::Add => "add",
            Function::Subtract => "subtract",
            Function::Multiply => "multiply",
            Function::Divide => "divide",
        }
    }

    pub fn arity(&self) -> usize {
        match self.operation() {
            Operation::Unary(_) => 1,
            Operation::Binary(_) => 2,
        }
    }

    /// Looks a function up by its numpy name, aliases included.
    pub fn from_numpy_name(name: &str) -> Option<Self> {
        let canonical = match name {
            "absolute" | "fabs" => "abs",
            "degrees" => "rad2deg",
            "radians" => "deg2rad",
            "remainder" => "mod",
            "true_divide" => "divide",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|function| function.name() == canonical)
    }

    /// The elementwise operation behind the function; its shape fixes the arity.
    pub fn operation(&self) -> Operation {
        match self {
            Function::Sin => Operation::Unary(f64::sin),
            Function::Cos => Operation::Unary(f64::cos),
            Function::Tan => Operation::Unary(f64::tan),
            Function::Arcsin => Operation::Unary(f64::asin),
            Function::Arccos => Operation::Unary(f64::acos),
            Function::Arctan => Operation::Unary(f64::atan),
            Function::Sinh => Operation::Unary(f64::sinh),
            Function::Cosh => Operation::Unary(f64::cosh),
            Function::Tanh => Operation::Unary(f64::tanh),
            Function::Arcsinh => Operation::Unary(f64::asinh),
            Function::Arccosh => Operation::Unary(f64::acosh),
            Function::Arctanh => Operation::Unary(f64::atanh),
            Function::Exp => Operation::Unary(f64::exp),
            Function::Exp2 => Operation::Unary(f64::exp2),
            Function::Expm1 => Operation::Unary(f64::exp_m1),
            Function::Log => Operation::Unary(f64::ln),
            Function::Log2 => Operation::Unary(f64::log2),
            Function::Log10 => Operation::Unary(f64::log10),
            Function::Log1p => Operation::Unary(f64::ln_1p),
            Function::Sqrt => Operation::Unary(f64::sqrt),
            Function::Cbrt => Operation::Unary(f64::cbrt),
            Function::Abs => Operation::Unary(f64::abs),
            Function::Sign => Operation::Unary(sign),
            Function::Floor => Operation::Unary(f64::floor),
            Function::Ceil => Operation::Unary(f64::ceil),
            Function::Trunc => Operation::Unary(f64::trunc),
            Function::Rint => Operation::Unary(f64::round_ties_even),
            Function::Square => Operation::Unary(|value| value * value),
            Function::Reciprocal => Operation::Unary(|value| 1.0 / value),
            Function::Sinc => Operation::Unary(sinc),
            Function::Deg2Rad => Operation::Unary(f64::to_radians),
            Function::Rad2Deg => Operation::Unary(f64::to_degrees),
            Function::Negative => Operation::Unary(|value| -value),
            Function::Positive => Operation::Unary(|value| value),
            Function::Arctan2 => Operation::Binary(f64::atan2),
            Function::Hypot => Operation::Binary(f64::hypot),
            Function::Power => Operation::Binary(f64::powf),
            Function::Maximum => Operation::Binary(|l, r| propagate_nan(l, r, f64::max)),
            Function::Minimum => Operation::Binary(|l, r| propagate_nan(l, r, f64::min)),
            Function::Fmax => Operation::Binary(f64::max),
            Function::Fmin => Operation::Binary(f64::min),
            Function::Mod => Operation::Binary(floored_modulo),
            Function::Fmod => Operation::Binary(|l, r| l % r),
            Function::Add => Operation::Binary(|l, r| l + r),
            Function::Subtract => Operation::Binary(|l, r| l - r),
            Function::Multiply => Operation::Binary(|l, r| l * r),
            Function::Divide => Operation::Binary(|l, r| l / r),
        }
    }
}

/// Elementwise kernel of a [`Function`], typed by the number of arguments it takes.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

fn sign(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        value
    } else {
        value.signum()
    }
}

/// Normalized sinc, `sin(pi x) / (pi x)`.
fn sinc(value: f64) -> f64 {
    if value == 0.0 {
        return 1.0;
    }
    let scaled = std::f64::consts::PI * value;
    scaled.sin() / scaled
}

fn propagate_nan(left: f64, right: f64, select: impl Fn(f64, f64) -> f64) -> f64 {
    if left.is_nan() || right.is_nan() {
        f64::NAN
    } else {
        select(left, right)
    }
}

/// What a name in an expression refers to.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Binding<'env> {
    Function(Function),
    Constant(f64),
    Namespace,
    Samples(&'env [f64]),
}

impl Binding<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Binding::Function(_) => "function",
            Binding::Constant(_) => "constant",
            Binding::Namespace => "module",
            Binding::Samples(_) => "array",
        }
    }
}

/// The closed set of names an expression may use, with `x` bound to the samples.
pub struct Environment<'env> {
    samples: &'env [f64],
}

impl<'env> Environment<'env> {
    pub const NAMES: [&'static str; 14] = [
        "sin", "cos", "tan", "arcsin", "arccos", "arctan", "exp", "log", "sqrt", "abs", "pi",
        "e", "np", "x",
    ];

    pub fn new(samples: &'env [f64]) -> Self {
        Self { samples }
    }

    pub fn resolve(&self, name: &Name) -> EvaluationResult<Binding<'env>> {
        let Some((first, attributes)) = name.path.split_first() else {
            return Err(EvaluationError::UnknownName(String::new()));
        };
        let mut binding = self.resolve_top_level(first)?;
        let mut owner = first.clone();
        for attribute in attributes {
            binding = match binding {
                Binding::Namespace => numpy_attribute(attribute),
                _ => None,
            }
            .ok_or_else(|| EvaluationError::UnknownAttribute {
                owner: owner.clone(),
                attribute: attribute.clone(),
            })?;
            owner = format!("{owner}.{attribute}");
        }
        Ok(binding)
    }

    fn resolve_top_level(&self, name: &str) -> EvaluationResult<Binding<'env>> {
        match name {
            "x" => Ok(Binding::Samples(self.samples)),
            "pi" => Ok(Binding::Constant(std::f64::consts::PI)),
            "e" => Ok(Binding::Constant(std::f64::consts::E)),
            "np" => Ok(Binding::Namespace),
            _ => Function::TOP_LEVEL
                .into_iter()
                .find(|function| function.name() == name)
                .map(Binding::Function)
                .ok_or_else(|| EvaluationError::UnknownName(String::from(name))),
        }
    }
}

fn numpy_attribute<'env>(attribute: &str) -> Option<Binding<'env>> {
    match attribute {
        "pi" => Some(Binding::Constant(std::f64::consts::PI)),
        "e" => Some(Binding::Constant(std::f64::consts::E)),
        "inf" => Some(Binding::Constant(f64::INFINITY)),
        "nan" => Some(Binding::Constant(f64::NAN)),
        "euler_gamma" => Some(Binding::Constant(0.577_215_664_901_532_9)),
        _ => Function::from_numpy_name(attribute).map(Binding::Function),
    }
}
