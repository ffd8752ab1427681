pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod token;

use crate::debug;
use crate::resolver::error::ResolveError;
use crate::resolver::token::Token;
use anyhow::{Context, Result};
use std::collections::HashMap;
use string_builder::Builder;

/// Evaluates the given arithmetic expression with the given variable bindings.
///
/// Supports the binary operators `+ - * /`, parenthesized grouping, integer
/// literals and variable references. Variables are substituted while the
/// expression is tokenized, before any evaluation happens. Arithmetic follows
/// IEEE 754 `f64` semantics, so dividing by zero yields an infinity or NaN
/// rather than a failure.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `variables`: Values to substitute for variable names in the expression.
///   Read-only; never mutated.
///
/// returns: The numeric value of the expression.
///
/// # Examples
///
/// ```
/// use expression_resolver::resolver::evaluate;
/// use std::collections::HashMap;
///
/// let variables = HashMap::from([("x".to_string(), 10.5)]);
/// let value = evaluate("2 * x".to_string(), &variables);
/// assert_eq!(value, Ok(21.0));
/// ```
pub fn evaluate(
    expression: String,
    variables: &HashMap<String, f64>,
) -> Result<f64, ResolveError> {
    let tokens = lexer::tokenize(expression, variables)?;
    debug!(&tokens);
    evaluator::resolve(tokens)
}

/// Evaluates the given expression, substituting `0.0` for any failure.
///
/// A convenience adapter for callers that treat malformed input as zero
/// instead of inspecting the failure. Use [`evaluate`] to find out *why* an
/// expression did not resolve.
///
/// # Examples
///
/// ```
/// use expression_resolver::resolver::evaluate_or_zero;
/// use std::collections::HashMap;
///
/// let value = evaluate_or_zero("2 +".to_string(), &HashMap::new());
/// assert_eq!(value, 0.0);
/// ```
pub fn evaluate_or_zero(expression: String, variables: &HashMap<String, f64>) -> f64 {
    evaluate(expression, variables).unwrap_or(0.0)
}

/// Pretty-prints the given tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use expression_resolver::resolver::lexer::tokenize;
/// use expression_resolver::resolver::tokens_to_string;
/// # use anyhow::Result;
/// use std::collections::HashMap;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("1+2".to_string(), &HashMap::new())?;
/// assert_eq!(tokens_to_string(&tokens)?, "1 + 2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Plus | Token::Dash | Token::Asterisk | Token::ForwardSlash => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            Token::EndOfExpression => {}
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}

#[macro_export]
#[cfg(debug_assertions)]
macro_rules! debug {
    ($( $args:expr ),*) => { dbg!( $( $args ),* ); }
}

#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! debug {
    ($( $args:expr ),*) => {()}
}

#[cfg(test)]
mod resolver_tests {
    use super::*;
    use parameterized_macro::parameterized;
    use pretty_assertions::assert_eq;

    fn bindings() -> HashMap<String, f64> {
        HashMap::from([("x".to_string(), 10.5), ("y".to_string(), 20.1)])
    }

    #[parameterized(
    expression = {
    "2 + 3 * 4",
    "(2 + 3) * 4",
    "",
    "          2 + 3",
    "2+3",
    "126  + 100                - 923 / 4",
    "12 + 34 * 9 - 100 + (34 - 78) / 81",
    "x - 46 * (y + 4) / 2",
    },
    expected_value = {
    14.0,
    20.0,
    0.0,
    5.0,
    5.0,
    126.0 + 100.0 - 923.0 / 4.0,
    12.0 + 34.0 * 9.0 - 100.0 + (34.0 - 78.0) / 81.0,
    10.5 - 46.0 * (20.1 + 4.0) / 2.0,
    }
    )]
    fn evaluate_expression_returns_correct_value(expression: &str, expected_value: f64) {
        let actual_value = evaluate(expression.to_string(), &bindings()).unwrap();
        ::pretty_assertions::assert_eq!(actual_value, expected_value);
    }

    #[test]
    fn unexpected_symbol_is_reported_to_the_caller() {
        let actual = evaluate("Hello!".to_string(), &bindings());

        assert_eq!(actual, Err(ResolveError::UnexpectedSymbol { symbol: 'H' }));
    }

    #[test]
    fn unknown_variable_is_reported_with_its_name() {
        let actual = evaluate("x + height".to_string(), &bindings());

        assert_eq!(
            actual,
            Err(ResolveError::UnknownVariable {
                name: "height".to_string()
            })
        );
    }

    #[test]
    fn mismatched_brackets_cannot_be_resolved() {
        let actual = evaluate("12 + 34 * 9 - 128 + )34 - 78( / 81".to_string(), &bindings());

        assert_eq!(actual, Err(ResolveError::ExpressionCannotBeResolved));
    }

    #[test]
    fn division_by_zero_follows_floating_point_semantics() {
        let actual = evaluate("(0 - 1) / 0".to_string(), &bindings()).unwrap();

        assert_eq!(actual, f64::NEG_INFINITY);
    }

    #[parameterized(
    expression = {
    "12 + 34 * 9 - 100 + (34 - 78) / 81",
    "",
    "Hello!",
    "12 + 34 * 9 - 128 + )34 - 78( / 81",
    "          2 + 3",
    "126  + 100                - 923 / 4",
    "x - 46 * (y + 4) / 2",
    },
    expected_truncated = {
    217,
    0,
    0,
    0,
    5,
    -4,
    -543,
    }
    )]
    fn evaluate_or_zero_swallows_failures(expression: &str, expected_truncated: i32) {
        let actual_value = evaluate_or_zero(expression.to_string(), &bindings());
        ::pretty_assertions::assert_eq!(actual_value as i32, expected_truncated);
    }

    #[test]
    fn tokenized_expression_pretty_prints_with_spacing() {
        let tokens = lexer::tokenize("(2+3)*4".to_string(), &bindings()).unwrap();

        let pretty_printed = tokens_to_string(&tokens).unwrap();

        assert_eq!(pretty_printed, "(2 + 3) * 4");
    }
}
