use anyhow::{anyhow, Context, Result};
use clap::Parser;
use expression_resolver::resolver::{evaluate, lexer, tokens_to_string};
use log::{debug, warn};
use std::collections::HashMap;

/// Evaluates the given arithmetic expression
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The expression to evaluate
    expression: String,

    /// A variable binding on the form name=value (may be repeated)
    #[clap(short = 'V', long = "variable", value_name = "NAME=VALUE")]
    variables: Vec<String>,

    /// Print the tokenized form of the expression before evaluating it
    #[clap(long)]
    tokens: bool,

    /// Print 0 instead of failing when the expression cannot be evaluated
    #[clap(long)]
    zero_on_error: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let arguments = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(arguments.verbose.log_level_filter())
        .init();

    let variables = parse_variables(&arguments.variables)?;
    debug!("parsed {} variable binding(s)", variables.len());

    if arguments.tokens {
        let tokens = lexer::tokenize(arguments.expression.clone(), &variables)?;
        println!("{}", tokens_to_string(&tokens)?);
    }

    let value = if arguments.zero_on_error {
        evaluate(arguments.expression, &variables).unwrap_or_else(|error| {
            warn!("{}", error);
            0.0
        })
    } else {
        evaluate(arguments.expression, &variables)?
    };
    println!("{}", value);

    Ok(())
}

fn parse_variables(bindings: &[String]) -> Result<HashMap<String, f64>> {
    let mut variables = HashMap::new();

    for binding in bindings {
        let (name, value) = binding
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected binding on the form name=value, got: {}", binding))?;
        let value: f64 = value
            .parse()
            .with_context(|| format!("Invalid value for variable {}: {}", name, value))?;
        variables.insert(name.to_string(), value);
    }

    Ok(variables)
}
