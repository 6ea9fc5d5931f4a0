use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Type alias for builtin function handlers.
type BuiltinFn = fn(f64) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ($($name:literal => $func:expr),* $(,)?) => {
        struct BuiltinDef {
            name: &'static str,
            func: BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, func: $func },
            )*
        ];
        /// Names of all functions an expression may call.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

// All angles are in radians.
builtin_functions! {
    "sin"  => f64::sin,
    "cos"  => f64::cos,
    "tan"  => f64::tan,
    "asin" => f64::asin,
    "acos" => f64::acos,
    "atan" => f64::atan,
}

/// Calls the builtin function `name` on an evaluated argument.
///
/// # Errors
/// [`EvalError::UnknownFunction`] if `name` is not in [`BUILTIN_FUNCTIONS`].
///
/// # Example
/// ```
/// use trigcalc::interpreter::evaluator::function::call_builtin;
///
/// assert_eq!(call_builtin("cos", 0.0).unwrap(), 1.0);
/// assert!(call_builtin("sinh", 0.0).is_err());
/// ```
pub fn call_builtin(name: &str, argument: f64) -> EvalResult<f64> {
    BUILTIN_TABLE.iter()
                 .find(|builtin| builtin.name == name)
                 .map(|builtin| (builtin.func)(argument))
                 .ok_or_else(|| EvalError::UnknownFunction { name: name.to_string() })
}
