use super::ast::{BinaryOperator, Expr, Name};
use super::error::{EvaluationError, EvaluationResult};
use super::tokenizer::{self, Spanned, Token};

/// Limits the depth of the tree so pathological input fails instead of exhausting
/// the stack. Nesting and each operator of a chain such as `x+x+x` count alike.
pub const MAX_DEPTH: usize = 200;

/// Parses a single expression; trailing input is an error.
///
/// ```text
/// expression := term (("+" | "-") term)*
/// term       := factor (("*" | "/" | "//" | "%") factor)*
/// factor     := ("+" | "-") factor | power
/// power      := primary ("**" factor)?
/// primary    := NUMBER | name ("(" arguments? ")")? | "(" expression ")"
/// name       := IDENT ("." IDENT)*
/// arguments  := expression ("," expression)* ","?
/// ```
pub fn parse(input: &str) -> EvaluationResult<Expr> {
    let tokens = tokenizer::tokenize(input)?;
    let mut parser = Parser {
        tokens,
        index: 0,
        depth: 0,
    };
    let expr = parser.expression()?;
    match parser.peek() {
        None => Ok(expr),
        Some(spanned) => Err(parser.unexpected(spanned)),
    }
}

struct Parser<'input> {
    tokens: Vec<Spanned<'input>>,
    index: usize,
    depth: usize,
}

impl<'input> Parser<'input> {
    fn peek(&self) -> Option<&Spanned<'input>> {
        self.tokens.get(self.index)
    }

    fn peek_token(&self) -> Option<&Token<'input>> {
        self.peek().map(|spanned| &spanned.token)
    }

    fn advance(&mut self) -> EvaluationResult<Spanned<'input>> {
        let spanned = self
            .tokens
            .get(self.index)
            .cloned()
            .ok_or(EvaluationError::UnexpectedEnd)?;
        self.index += 1;
        Ok(spanned)
    }

    fn unexpected(&self, spanned: &Spanned<'input>) -> EvaluationError {
        EvaluationError::UnexpectedToken {
            found: spanned.token.describe(),
            position: spanned.position,
        }
    }

    fn expect(&mut self, expected: Token<'input>) -> EvaluationResult<()> {
        let spanned = self.advance()?;
        if spanned.token == expected {
            Ok(())
        } else {
            Err(self.unexpected(&spanned))
        }
    }

    fn descend(&mut self) -> EvaluationResult<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvaluationError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn expression(&mut self) -> EvaluationResult<Expr> {
        self.descend()?;
        let entry_depth = self.depth;
        let mut expr = self.term()?;
        loop {
            let operator = match self.peek_token() {
                Some(Token::Plus) => BinaryOperator::Add,
                Some(Token::Minus) => BinaryOperator::Subtract,
                _ => break,
            };
            self.index += 1;
            // every operator adds a level to the left-leaning tree
            self.descend()?;
            let right = self.term()?;
            expr = binary(operator, expr, right);
        }
        self.depth = entry_depth - 1;
        Ok(expr)
    }

    fn term(&mut self) -> EvaluationResult<Expr> {
        let entry_depth = self.depth;
        let mut expr = self.factor()?;
        loop {
            let operator = match self.peek_token() {
                Some(Token::Star) => BinaryOperator::Multiply,
                Some(Token::Slash) => BinaryOperator::Divide,
                Some(Token::DoubleSlash) => BinaryOperator::FloorDivide,
                Some(Token::Percent) => BinaryOperator::Modulo,
                _ => break,
            };
            self.index += 1;
            self.descend()?;
            let right = self.factor()?;
            expr = binary(operator, expr, right);
        }
        self.depth = entry_depth;
        Ok(expr)
    }

    fn factor(&mut self) -> EvaluationResult<Expr> {
        self.descend()?;
        let expr = match self.peek_token() {
            Some(Token::Minus) => {
                self.index += 1;
                Expr::Negate(Box::new(self.factor()?))
            }
            Some(Token::Plus) => {
                self.index += 1;
                self.factor()?
            }
            _ => self.power()?,
        };
        self.depth -= 1;
        Ok(expr)
    }

    /// `**` binds tighter than a unary minus on its left but accepts one on its right.
    fn power(&mut self) -> EvaluationResult<Expr> {
        let base = self.primary()?;
        if self.peek_token() == Some(&Token::DoubleStar) {
            self.index += 1;
            let exponent = self.factor()?;
            return Ok(binary(BinaryOperator::Power, base, exponent));
        }
        Ok(base)
    }

    fn primary(&mut self) -> EvaluationResult<Expr> {
        let spanned = self.advance()?;
        match spanned.token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::Identifier(first) => {
                let name = self.name(first)?;
                if self.peek_token() == Some(&Token::LeftParen) {
                    self.index += 1;
                    let arguments = self.arguments()?;
                    Ok(Expr::Call {
                        function: name,
                        arguments,
                    })
                } else {
                    Ok(Expr::Variable(name))
                }
            }
            Token::LeftParen => {
                let expr = self.expression()?;
                self.expect(Token::RightParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected(&spanned)),
        }
    }

    fn name(&mut self, first: &str) -> EvaluationResult<Name> {
        let mut path = vec![String::from(first)];
        while self.peek_token() == Some(&Token::Dot) {
            self.index += 1;
            let spanned = self.advance()?;
            match spanned.token {
                Token::Identifier(segment) => path.push(String::from(segment)),
                _ => return Err(self.unexpected(&spanned)),
            }
        }
        Ok(Name { path })
    }

    /// Arguments after the opening parenthesis, consuming the closing one.
    fn arguments(&mut self) -> EvaluationResult<Vec<Expr>> {
        let mut arguments = Vec::new();
        loop {
            if self.peek_token() == Some(&Token::RightParen) {
                self.index += 1;
                return Ok(arguments);
            }
            arguments.push(self.expression()?);
            let spanned = self.advance()?;
            match spanned.token {
                Token::Comma => continue,
                Token::RightParen => return Ok(arguments),
                _ => return Err(self.unexpected(&spanned)),
            }
        }
    }
}

fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(input: &str) -> String {
        parse(input).unwrap().to_string()
    }

    #[test]
    fn precedence_and_associativity() {
        assert_eq!(grouped("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(grouped("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(grouped("8 / 4 / 2"), "((8 / 4) / 2)");
        assert_eq!(grouped("-x**2"), "(-(x ** 2))");
        assert_eq!(grouped("2**3**2"), "(2 ** (3 ** 2))");
        assert_eq!(grouped("2**-1"), "(2 ** (-1))");
        assert_eq!(grouped("x % 2 // 3"), "((x % 2) // 3)");
        assert_eq!(grouped("+x"), "x");
        assert_eq!(grouped("(1 + 2) * 3"), "((1 + 2) * 3)");
    }

    #[test]
    fn parses_calls_and_dotted_names() {
        assert_eq!(grouped("sin(x) + 0.5*x**2"), "(sin(x) + (0.5 * (x ** 2)))");
        assert_eq!(grouped("np.sinc(x)"), "np.sinc(x)");
        assert_eq!(grouped("np.arctan2(x, 1,)"), "np.arctan2(x, 1)");
        assert_eq!(grouped("np.pi * x"), "(np.pi * x)");
        assert_eq!(
            parse("f()").unwrap(),
            Expr::Call {
                function: Name::new(&["f"]),
                arguments: Vec::new(),
            }
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse("").unwrap_err(), EvaluationError::UnexpectedEnd);
        assert_eq!(parse("x +").unwrap_err(), EvaluationError::UnexpectedEnd);
        assert_eq!(parse("(x").unwrap_err(), EvaluationError::UnexpectedEnd);
        assert_eq!(
            parse("x)").unwrap_err(),
            EvaluationError::UnexpectedToken {
                found: String::from("')'"),
                position: 1
            }
        );
        assert_eq!(
            parse("2 x").unwrap_err(),
            EvaluationError::UnexpectedToken {
                found: String::from("name 'x'"),
                position: 2
            }
        );
        assert_eq!(
            parse("np.(x)").unwrap_err(),
            EvaluationError::UnexpectedToken {
                found: String::from("'('"),
                position: 3
            }
        );
        assert!(matches!(
            parse("sin(x,,)").unwrap_err(),
            EvaluationError::UnexpectedToken { position: 6, .. }
        ));
        assert!(matches!(
            parse("* x").unwrap_err(),
            EvaluationError::UnexpectedToken { position: 0, .. }
        ));
    }

    #[test]
    fn deep_nesting_is_an_error() {
        let deep = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        assert_eq!(
            parse(&deep).unwrap_err(),
            EvaluationError::TooDeep { limit: MAX_DEPTH }
        );
        let negations = format!("{}x", "-".repeat(10_000));
        assert_eq!(
            parse(&negations).unwrap_err(),
            EvaluationError::TooDeep { limit: MAX_DEPTH }
        );

        let shallow = format!("{}x{}", "(".repeat(50), ")".repeat(50));
        assert_eq!(grouped(&shallow), "x");
    }

    #[test]
    fn long_operator_chains_are_bounded() {
        for operator in ["+", "-", "*", "/", "//", "%"] {
            let chain = vec!["x"; 200_000].join(operator);
            assert_eq!(
                parse(&chain).unwrap_err(),
                EvaluationError::TooDeep { limit: MAX_DEPTH },
                "{operator}"
            );
        }
        let mixed = vec!["x*x"; 100_000].join("+");
        assert_eq!(
            parse(&mixed).unwrap_err(),
            EvaluationError::TooDeep { limit: MAX_DEPTH }
        );

        let polynomial = vec!["x"; 50].join(" + ");
        assert!(parse(&polynomial).is_ok());
        // the budget is released once a chain is closed
        let siblings = vec![format!("({})", vec!["x"; 100].join("+")); 10].join("*");
        assert!(parse(&siblings).is_ok());
    }
}
