use thiserror::Error;

/// Every way in which resolving an expression can fail.
///
/// All three failures are structural: the input is deterministic, so retrying
/// an evaluation reproduces the identical failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolveError {
    /// A character in the input is not an operator, a parenthesis, a digit,
    /// a lowercase letter or a space.
    #[error("Unexpected symbol: {symbol}")]
    UnexpectedSymbol { symbol: char },
    /// A variable reference in the input does not match any binding.
    #[error("Unknown variable: {name}")]
    UnknownVariable { name: String },
    /// The token sequence does not conform to the expression grammar.
    #[error("This expression cannot be resolved")]
    ExpressionCannotBeResolved,
}
