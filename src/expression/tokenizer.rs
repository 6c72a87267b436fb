use super::error::{EvaluationError, EvaluationResult};

#[derive(Debug, Clone, PartialEq)]
pub enum Token<'input> {
    Number(f64),
    Identifier(&'input str),
    Plus,
    Minus,
    Star,
    DoubleStar,
    Slash,
    DoubleSlash,
    Percent,
    LeftParen,
    RightParen,
    Comma,
    Dot,
}

impl Token<'_> {
    /// How the token reads in error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Number(value) => format!("number {value}"),
            Token::Identifier(name) => format!("name '{name}'"),
            Token::Plus => String::from("'+'"),
            Token::Minus => String::from("'-'"),
            Token::Star => String::from("'*'"),
            Token::DoubleStar => String::from("'**'"),
            Token::Slash => String::from("'/'"),
            Token::DoubleSlash => String::from("'//'"),
            Token::Percent => String::from("'%'"),
            Token::LeftParen => String::from("'('"),
            Token::RightParen => String::from("')'"),
            Token::Comma => String::from("','"),
            Token::Dot => String::from("'.'"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<'input> {
    pub token: Token<'input>,
    pub position: usize,
}

pub fn tokenize(input: &str) -> EvaluationResult<Vec<Spanned<'_>>> {
    Tokenizer { input, position: 0 }.collect()
}

struct Tokenizer<'input> {
    input: &'input str,
    position: usize,
}

impl<'input> Tokenizer<'input> {
    fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.position + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek_byte(0) {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.position += 1;
        }
    }

    fn skip_digits(&mut self) -> usize {
        let begin = self.position;
        while self.peek_byte(0).is_some_and(|byte| byte.is_ascii_digit()) {
            self.position += 1;
        }
        self.position - begin
    }

    fn number(&mut self) -> EvaluationResult<Token<'input>> {
        let begin = self.position;
        self.skip_digits();
        if self.peek_byte(0) == Some(b'.') {
            self.position += 1;
            self.skip_digits();
        }
        // an exponent is only taken when digits follow, so `2e` stays number then name
        if matches!(self.peek_byte(0), Some(b'e' | b'E')) {
            let sign_length = match self.peek_byte(1) {
                Some(b'+' | b'-') => 1,
                _ => 0,
            };
            if self
                .peek_byte(1 + sign_length)
                .is_some_and(|byte| byte.is_ascii_digit())
            {
                self.position += 1 + sign_length;
                self.skip_digits();
            }
        }
        let text = &self.input[begin..self.position];
        text.parse::<f64>()
            .map(Token::Number)
            .map_err(|_| EvaluationError::InvalidNumber {
                text: String::from(text),
                position: begin,
            })
    }

    fn identifier(&mut self) -> Token<'input> {
        let begin = self.position;
        while self
            .peek_byte(0)
            .is_some_and(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
        {
            self.position += 1;
        }
        Token::Identifier(&self.input[begin..self.position])
    }

    fn operator(&mut self, byte: u8) -> EvaluationResult<Token<'input>> {
        let position = self.position;
        let doubled = self.peek_byte(1) == Some(byte);
        let (token, length) = match byte {
            b'+' => (Token::Plus, 1),
            b'-' => (Token::Minus, 1),
            b'*' if doubled => (Token::DoubleStar, 2),
            b'*' => (Token::Star, 1),
            b'/' if doubled => (Token::DoubleSlash, 2),
            b'/' => (Token::Slash, 1),
            b'%' => (Token::Percent, 1),
            b'(' => (Token::LeftParen, 1),
            b')' => (Token::RightParen, 1),
            b',' => (Token::Comma, 1),
            b'.' => (Token::Dot, 1),
            b'^' => return Err(EvaluationError::Caret { position }),
            b'\'' | b'"' => return Err(EvaluationError::StringLiteral { position }),
            b'=' if !doubled => return Err(EvaluationError::Assignment { position }),
            _ => {
                let character = self.input[position..].chars().next().unwrap_or('?');
                return Err(EvaluationError::UnexpectedCharacter {
                    character,
                    position,
                });
            }
        };
        self.position += length;
        Ok(token)
    }
}

impl<'input> Iterator for Tokenizer<'input> {
    type Item = EvaluationResult<Spanned<'input>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.skip_whitespace();
        let byte = self.peek_byte(0)?;
        let position = self.position;
        let starts_number = byte.is_ascii_digit()
            || (byte == b'.' && self.peek_byte(1).is_some_and(|next| next.is_ascii_digit()));
        let token = if starts_number {
            self.number()
        } else if byte.is_ascii_alphabetic() || byte == b'_' {
            Ok(self.identifier())
        } else {
            self.operator(byte)
        };
        if token.is_err() {
            // stop after the first error
            self.position = self.input.len();
        }
        Some(token.map(|token| Spanned { token, position }))
    }
}
