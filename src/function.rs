//! Function trait, error taxonomy, argument validation, and the registry

use crate::signature::{FunctionSignature, ValueKind};
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for function evaluation
pub type FunctionResult<T> = Result<T, FunctionError>;

/// Function evaluation errors.
///
/// The `Display` text follows the fixed template
/// `JMESPath function '<name>': <detail>` and is part of the external
/// contract for callers that inspect error messages. Argument positions are
/// reported 1-based.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FunctionError {
    /// An argument's runtime kind is outside the accepted set for its position
    #[error("JMESPath function '{name}': {position} argument is expected of {expected} type")]
    InvalidArgumentType {
        /// Function name
        name: String,
        /// 1-based argument position
        position: usize,
        /// Human-readable name of the accepted kinds
        expected: String,
    },

    /// A delegated operation failed; the detail carries the underlying error text
    #[error("JMESPath function '{name}': {message}")]
    Evaluation {
        /// Function name
        name: String,
        /// Underlying error text
        message: String,
    },

    /// Division by a numerically-zero right operand
    #[error("JMESPath function '{name}': Zero divisor passed")]
    ZeroDivisor {
        /// Function name
        name: String,
    },

    /// The quotient cannot be represented for the declared result kind
    #[error("JMESPath function '{name}': Undefined quotient")]
    UndefinedQuotient {
        /// Function name
        name: String,
    },

    /// Modulo over operands with non-zero fractional parts
    #[error("JMESPath function '{name}': Non-integer argument(s) passed for modulo")]
    NonIntegerModulo {
        /// Function name
        name: String,
    },
}

impl FunctionError {
    /// Invalid-argument error for a 0-based index, reported 1-based.
    pub(crate) fn invalid_argument(
        function: &str,
        index: usize,
        expected: impl Into<String>,
    ) -> Self {
        FunctionError::InvalidArgumentType {
            name: function.to_string(),
            position: index + 1,
            expected: expected.into(),
        }
    }

    /// Generic evaluation error wrapping a delegated failure.
    pub(crate) fn evaluation(function: &str, message: impl Into<String>) -> Self {
        FunctionError::Evaluation {
            name: function.to_string(),
            message: message.into(),
        }
    }
}

/// Trait implemented by every custom JMESPath function.
///
/// Implementations are stateless; each invocation is an independent,
/// synchronous computation over already-evaluated argument values.
pub trait JmesPathFunction: Send + Sync {
    /// Function name the evaluator dispatches on
    fn name(&self) -> &str;

    /// Declared arity and per-position accepted kinds
    fn signature(&self) -> &FunctionSignature;

    /// Evaluate the function over already-evaluated argument values.
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value>;

    /// Validate every declared position against its accepted kinds.
    ///
    /// A missing argument or a kind mismatch fails with
    /// [`FunctionError::InvalidArgumentType`] naming the 1-based position.
    fn validate_args(&self, args: &[Value]) -> FunctionResult<()> {
        for (index, spec) in self.signature().arguments().iter().enumerate() {
            match args.get(index) {
                Some(value) if spec.accepts(value) => {}
                _ => {
                    return Err(FunctionError::invalid_argument(
                        self.name(),
                        index,
                        spec.expected_name(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Check-and-unwrap a positional argument against a single expected kind.
///
/// Pure check; the reported position is `index + 1`.
pub fn validate_arg<'a>(
    function: &str,
    args: &'a [Value],
    index: usize,
    expected: ValueKind,
) -> FunctionResult<&'a Value> {
    match args.get(index) {
        Some(value) if expected.matches(value) => Ok(value),
        _ => Err(FunctionError::invalid_argument(
            function,
            index,
            expected.to_string(),
        )),
    }
}

/// Unwrap a string argument.
pub fn str_arg<'a>(function: &str, args: &'a [Value], index: usize) -> FunctionResult<&'a str> {
    validate_arg(function, args, index, ValueKind::String).map(|value| {
        // matches() guarantees a string here
        value.as_str().unwrap_or_default()
    })
}

/// Unwrap a numeric argument as `f64`.
pub fn number_arg(function: &str, args: &[Value], index: usize) -> FunctionResult<f64> {
    let value = validate_arg(function, args, index, ValueKind::Number)?;
    value
        .as_f64()
        .ok_or_else(|| FunctionError::invalid_argument(function, index, ValueKind::Number.to_string()))
}

/// Unwrap an object argument.
pub fn object_arg<'a>(
    function: &str,
    args: &'a [Value],
    index: usize,
) -> FunctionResult<&'a serde_json::Map<String, Value>> {
    validate_arg(function, args, index, ValueKind::Object)?
        .as_object()
        .ok_or_else(|| FunctionError::invalid_argument(function, index, ValueKind::Object.to_string()))
}

/// Alternate path for positions accepting string or number.
///
/// Tries each kind in order and uses the first successful conversion.
/// Numbers are stringified locale-independently with the shortest
/// round-trippable representation (no thousands separators, integers
/// without a decimal point).
pub fn string_or_number_arg(
    function: &str,
    args: &[Value],
    index: usize,
) -> FunctionResult<String> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(number_to_string(n)),
        _ => Err(FunctionError::invalid_argument(
            function,
            index,
            "String or Number",
        )),
    }
}

fn number_to_string(number: &serde_json::Number) -> String {
    if let Some(i) = number.as_i64() {
        i.to_string()
    } else if let Some(u) = number.as_u64() {
        u.to_string()
    } else {
        // Display on f64 is the shortest representation that round-trips
        number.as_f64().unwrap_or_default().to_string()
    }
}

/// Immutable table mapping function names to their handlers.
///
/// Populated once at initialization and read-only thereafter; lookups are
/// safe from any number of threads without locking. Registration order is
/// preserved, so the registry exposes the complete ordered list of functions
/// to the evaluator.
#[derive(Clone, Default)]
pub struct FunctionRegistry {
    functions: IndexMap<String, Arc<dyn JmesPathFunction>>,
}

impl FunctionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            functions: IndexMap::new(),
        }
    }

    /// Register a function.
    ///
    /// Two functions sharing a name is a construction-time defect, checked
    /// in debug builds only.
    pub fn register<F: JmesPathFunction + 'static>(&mut self, function: F) {
        let name = function.name().to_string();
        let previous = self.functions.insert(name, Arc::new(function));
        debug_assert!(previous.is_none(), "duplicate function name in registry");
    }

    /// Look up a function by exact name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn JmesPathFunction>> {
        self.functions.get(name).cloned()
    }

    /// Check whether a function is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All registered function names, in registration order.
    pub fn function_names(&self) -> Vec<&str> {
        self.functions.keys().map(String::as_str).collect()
    }

    /// Iterate over the registered functions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn JmesPathFunction>> {
        self.functions.values()
    }

    /// Number of registered functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validate_arg_reports_one_based_position() {
        let args = vec![json!("ok"), json!(5)];
        let err = validate_arg("demo", &args, 1, ValueKind::String).unwrap_err();
        assert_eq!(
            err.to_string(),
            "JMESPath function 'demo': 2 argument is expected of String type"
        );
    }

    #[test]
    fn validate_arg_missing_argument() {
        let err = validate_arg("demo", &[], 0, ValueKind::Object).unwrap_err();
        assert_eq!(
            err.to_string(),
            "JMESPath function 'demo': 1 argument is expected of Object type"
        );
    }

    #[test]
    fn string_or_number_stringifies_numbers() {
        assert_eq!(string_or_number_arg("f", &[json!(123)], 0).unwrap(), "123");
        assert_eq!(string_or_number_arg("f", &[json!(123.0)], 0).unwrap(), "123");
        assert_eq!(string_or_number_arg("f", &[json!(1.5)], 0).unwrap(), "1.5");
        assert_eq!(string_or_number_arg("f", &[json!("x")], 0).unwrap(), "x");
        let err = string_or_number_arg("f", &[json!(true)], 0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "JMESPath function 'f': 1 argument is expected of String or Number type"
        );
    }
}
