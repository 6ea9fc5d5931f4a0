use std::fmt;

/// Binary operators, one per operator character of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// Returns the operator for a source character, if it is one.
    ///
    /// # Example
    /// ```
    /// use trigcalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::from_symbol('^'), Some(BinaryOperator::Pow));
    /// assert_eq!(BinaryOperator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The source character of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the abstract syntax tree.
///
/// Every node owns its children, so a parsed expression is a plain tree that
/// is never mutated after the parser returns it. Evaluating it has no side
/// effects and can be repeated.
///
/// `Display` renders the tree with every binary expression parenthesized,
/// which makes the grouping chosen by the parser visible:
///
/// ```
/// use trigcalc::interpreter::parser::parse;
///
/// let expr = parse("2^3^2 + sin(x)").unwrap();
/// assert_eq!(expr.to_string(), "(((2 ^ 3) ^ 2) + sin(x))");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal such as `42`.
    NumericLiteral(f64),
    /// A reference to the single-character variable.
    Identifier(char),
    /// `left op right`
    BinaryExpression {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Expr>,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A call of a named unary function, such as `cos(1)`.
    MathFunction {
        /// Function name as written in the source.
        name:     String,
        /// The single argument.
        argument: Box<Expr>,
    },
}

impl Expr {
    /// Builds a binary expression node.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryExpression { op,
                                 left: Box::new(left),
                                 right: Box::new(right) }
    }

    /// Builds a function call node.
    #[must_use]
    pub fn function(name: impl Into<String>, argument: Self) -> Self {
        Self::MathFunction { name:     name.into(),
                             argument: Box::new(argument), }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumericLiteral(value) => write!(f, "{value}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::BinaryExpression { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::MathFunction { name, argument } => {
                // Parenthesized arguments would print their parens twice.
                match argument.as_ref() {
                    Self::BinaryExpression { op, left, right } => {
                        write!(f, "{name}({left} {op} {right})")
                    },
                    other => write!(f, "{name}({other})"),
                }
            },
        }
    }
}
