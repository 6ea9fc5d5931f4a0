/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator walks the AST in post-order, applies the arithmetic
/// operators and dispatches function calls to the builtin table.
///
/// # Responsibilities
/// - Evaluates every AST node kind to an `f64`.
/// - Reports calls to functions that are not builtins.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces the ordered sequence of
/// tokens: numbers, operators, parentheses, function names and the variable.
/// This is the first stage of interpretation and it never fails; characters it
/// cannot classify become `Unknown` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with three left-associative binary tiers
/// (additive, multiplicative, exponentiative) above the primary expressions.
///
/// # Responsibilities
/// - Converts tokens into AST nodes honoring precedence and associativity.
/// - Rejects invalid input with positioned syntax errors.
pub mod parser;
