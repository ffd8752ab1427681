use crate::resolver::error::ResolveError;
use crate::resolver::token::Token;
use itertools::Itertools;
use std::collections::HashMap;

/// Converts the given expression into an equivalent sequence of tokens.
///
/// Variable references are substituted during the scan, so the produced
/// sequence consists of numbers, operators and parentheses only, terminated
/// by a single end-of-expression marker.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
/// * `variables`: Values to substitute for variable names in the expression.
///
/// returns: The tokens of the expression.
///
/// # Examples
///
/// ```
/// use expression_resolver::resolver::lexer::tokenize;
/// use std::collections::HashMap;
///
/// let variables = HashMap::from([("x".to_string(), 10.5)]);
/// let tokens = tokenize("2 * x".to_string(), &variables);
/// ```
pub fn tokenize(
    expression: String,
    variables: &HashMap<String, f64>,
) -> Result<Vec<Token>, ResolveError> {
    let mut tokens = Vec::new();
    let mut characters = expression.chars().peekable();

    while let Some(&symbol) = characters.peek() {
        match symbol {
            '(' => {
                tokens.push(Token::OpenParenthesis);
                characters.next();
            }
            ')' => {
                tokens.push(Token::CloseParenthesis);
                characters.next();
            }
            '+' => {
                tokens.push(Token::Plus);
                characters.next();
            }
            '-' => {
                tokens.push(Token::Dash);
                characters.next();
            }
            '*' => {
                tokens.push(Token::Asterisk);
                characters.next();
            }
            '/' => {
                tokens.push(Token::ForwardSlash);
                characters.next();
            }
            '0'..='9' => {
                let digits: String = characters
                    .peeking_take_while(|character| character.is_ascii_digit())
                    .collect();
                tokens.push(Token::Number(digits));
            }
            'a'..='z' => {
                let name: String = characters
                    .peeking_take_while(|character| character.is_ascii_lowercase())
                    .collect();
                let value = variables
                    .get(&name)
                    .copied()
                    .ok_or(ResolveError::UnknownVariable { name })?;
                tokens.push(Token::Number(value.to_string()));
            }
            ' ' => {
                characters.next();
            }
            _ => return Err(ResolveError::UnexpectedSymbol { symbol }),
        }
    }

    tokens.push(Token::EndOfExpression);

    Ok(tokens)
}
