use std::io::Write;

use calculator::{evaluate, lexer, NumericMode};
use clap::Parser;
use miette::LabeledSpan;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Input {
    /// The expression to evaluate. Read from standard input when omitted.
    expression: Option<String>,

    /// Evaluate with floating-point arithmetic instead of integer arithmetic.
    #[clap(long, default_value = "false")]
    float: bool,

    /// Debug the lexer, printing out each token. Does not evaluate the expression.
    #[clap(long, default_value = "false")]
    debug_lexer: bool,
}

fn main() {
    let Input {
        expression,
        float,
        debug_lexer,
    } = Input::parse();

    let raw = expression.unwrap_or_else(read_expression);

    // The evaluator assumes whitespace-free input; "1 2" means "12".
    let expression: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if debug_lexer {
        run_debug_lexer(&lexer::insert_implicit_multiplication(&expression));
        return;
    }

    let mode = if float {
        NumericMode::Float
    } else {
        NumericMode::Integer
    };

    match evaluate(&expression, mode) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            // Error spans index into the preprocessed expression; the
            // preprocessor is pure, so recomputing it here yields the exact
            // text the labels point into.
            let report = miette::Report::new(e)
                .with_source_code(lexer::insert_implicit_multiplication(&expression));
            eprintln!("{:?}", report);
            std::process::exit(1);
        }
    }
}

fn read_expression() -> String {
    print!("Enter an expression: ");
    std::io::stdout().flush().expect("failed to flush stdout");

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .expect("failed to read expression from stdin");
    line
}

fn run_debug_lexer(source: &str) {
    for token in lexer::Lexer::new(source) {
        let diag = miette::miette!(
            labels = vec![LabeledSpan::at(
                token.span.start..token.span.end,
                format!("{:?}", token.kind)
            )],
            severity = miette::Severity::Advice,
            "found a token",
        )
        .with_source_code(source.to_string());
        eprintln!("{:?}", diag);
    }
}
