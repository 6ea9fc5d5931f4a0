#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// Called a function that is not a builtin.
    UnknownFunction {
        /// The name of the function.
        name: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => {
                write!(f, "Evaluation error: Unsupported function '{name}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
