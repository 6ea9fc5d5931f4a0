use std::fs;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use trigcalc::interpreter::{
    evaluator::core::eval,
    parser::{DEFAULT_MAX_DEPTH, ParserConfig, TrailingTokens, parse_with},
};

/// trigcalc evaluates arithmetic expressions with trigonometric functions.
/// Angles are in radians.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells trigcalc to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Ignore anything that follows a complete expression instead of failing.
    #[arg(long)]
    allow_trailing: bool,

    /// Deepest nesting of parentheses and operators accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Print the parsed expression, fully parenthesized, before the result.
    #[arg(long)]
    ast: bool,

    /// Increase log verbosity (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or a file path when `--file` is given.
    #[arg(default_value = "(sin(3)+2)*7^2")]
    contents: String,
}

fn main() {
    let args = Args::parse();

    let log_level_filter = match args.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(log_level_filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = ParserConfig { trailing_tokens: if args.allow_trailing {
                                    TrailingTokens::Ignore
                                } else {
                                    TrailingTokens::Reject
                                },
                                max_depth:       args.max_depth, };

    let expr = parse_with(&source, &config).unwrap_or_else(|e| {
                                               eprintln!("{e}");
                                               std::process::exit(1);
                                           });

    if args.ast {
        println!("{expr}");
    }

    match eval(&expr) {
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
