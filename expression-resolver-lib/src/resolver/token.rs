use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression.
///
/// A `Number` carries its decimal text as scanned from the input (or as
/// formatted from a substituted variable value); the remaining kinds carry
/// no payload. `EndOfExpression` is the synthetic marker appended after the
/// last real token.
#[derive(Clone, PartialEq)]
pub enum Token {
    Number(String),
    Plus,
    Dash,
    Asterisk,
    ForwardSlash,
    OpenParenthesis,
    CloseParenthesis,
    EndOfExpression,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Plus => write!(f, "+"),
            Token::Dash => write!(f, "-"),
            Token::Asterisk => write!(f, "*"),
            Token::ForwardSlash => write!(f, "/"),
            Token::OpenParenthesis => write!(f, "("),
            Token::CloseParenthesis => write!(f, ")"),
            Token::EndOfExpression => write!(f, ""),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A cursor over a token sequence with single-token pushback.
///
/// The only permitted movements are [`TokenBuffer::next`] (read the current
/// token and advance) and [`TokenBuffer::back`] (retreat exactly one
/// position). The position never moves below zero.
pub struct TokenBuffer {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenBuffer {
    pub fn new(tokens: Vec<Token>) -> TokenBuffer {
        TokenBuffer {
            tokens,
            position: 0,
        }
    }

    /// Reads the token at the current position and advances past it.
    ///
    /// A well-formed sequence ends with [`Token::EndOfExpression`]; reads
    /// past the end of the sequence yield the end marker again.
    pub fn next(&mut self) -> Token {
        let token = self
            .tokens
            .get(self.position)
            .cloned()
            .unwrap_or(Token::EndOfExpression);
        self.position += 1;
        token
    }

    /// Undoes the most recent read by stepping back one position.
    pub fn back(&mut self) {
        self.position = self.position.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_advances_through_the_sequence() {
        let mut buffer = TokenBuffer::new(vec![
            Token::Number("12".to_string()),
            Token::Plus,
            Token::EndOfExpression,
        ]);

        assert_eq!(buffer.next(), Token::Number("12".to_string()));
        assert_eq!(buffer.next(), Token::Plus);
        assert_eq!(buffer.next(), Token::EndOfExpression);
    }

    #[test]
    fn back_rereads_the_pushed_back_token() {
        let mut buffer = TokenBuffer::new(vec![Token::Plus, Token::EndOfExpression]);

        assert_eq!(buffer.next(), Token::Plus);
        buffer.back();
        assert_eq!(buffer.next(), Token::Plus);
    }

    #[test]
    fn reading_past_the_end_yields_the_end_marker() {
        let mut buffer = TokenBuffer::new(vec![Token::EndOfExpression]);

        buffer.next();
        assert_eq!(buffer.next(), Token::EndOfExpression);
    }

    #[test]
    fn tokens_display_as_their_source_text() {
        assert_eq!(Token::Number("12".to_string()).to_string(), "12");
        assert_eq!(Token::Asterisk.to_string(), "*");
        assert_eq!(Token::OpenParenthesis.to_string(), "(");
    }
}
