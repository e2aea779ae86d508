//! Operand coercion for the typed arithmetic functions
//!
//! `add`, `subtract`, `multiply`, `divide`, and `modulo` declare both
//! positions as `Any` and classify the raw values here instead. Dispatch is
//! an exhaustive match over variant pairs: adding a quantity or duration
//! variant means adding its pairwise rules below, and the compiler flags
//! every match that misses them. Handler code never inspects variants.

use crate::function::{FunctionError, FunctionResult};
use serde_json::Value;

/// A typed wrapper around an evaluated argument value that supports
/// arithmetic. Ephemeral; created and consumed within a single invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Plain floating-point scalar
    Number(f64),
}

/// Classify the two raw arguments of an arithmetic function into operands.
///
/// Fails with [`FunctionError::InvalidArgumentType`] when an argument has no
/// supported operand representation.
pub fn parse_operands(function: &str, args: &[Value]) -> FunctionResult<(Operand, Operand)> {
    let left = Operand::from_value(function, args, 0)?;
    let right = Operand::from_value(function, args, 1)?;
    Ok((left, right))
}

impl Operand {
    fn from_value(function: &str, args: &[Value], index: usize) -> FunctionResult<Self> {
        match args.get(index) {
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Operand::Number)
                .ok_or_else(|| FunctionError::invalid_argument(function, index, "Number")),
            _ => Err(FunctionError::invalid_argument(function, index, "Number")),
        }
    }

    /// Add another operand to this one.
    pub fn add(&self, rhs: &Operand, function: &str) -> FunctionResult<Value> {
        match (self, rhs) {
            (Operand::Number(a), Operand::Number(b)) => number_value(function, a + b),
        }
    }

    /// Subtract another operand from this one.
    pub fn subtract(&self, rhs: &Operand, function: &str) -> FunctionResult<Value> {
        match (self, rhs) {
            (Operand::Number(a), Operand::Number(b)) => number_value(function, a - b),
        }
    }

    /// Multiply this operand by another.
    pub fn multiply(&self, rhs: &Operand, function: &str) -> FunctionResult<Value> {
        match (self, rhs) {
            (Operand::Number(a), Operand::Number(b)) => number_value(function, a * b),
        }
    }

    /// Divide this operand by another.
    ///
    /// Fails with [`FunctionError::ZeroDivisor`] when the right operand is
    /// numerically zero.
    pub fn divide(&self, rhs: &Operand, function: &str) -> FunctionResult<Value> {
        match (self, rhs) {
            (Operand::Number(a), Operand::Number(b)) => {
                if *b == 0.0 {
                    return Err(FunctionError::ZeroDivisor {
                        name: function.to_string(),
                    });
                }
                number_value(function, a / b)
            }
        }
    }

    /// Truncating (toward-zero) integer modulo.
    ///
    /// Both operands must reduce to integral values; a non-zero fractional
    /// part fails with [`FunctionError::NonIntegerModulo`], a zero right
    /// operand with [`FunctionError::ZeroDivisor`].
    pub fn modulo(&self, rhs: &Operand, function: &str) -> FunctionResult<Value> {
        match (self, rhs) {
            (Operand::Number(a), Operand::Number(b)) => {
                if a.fract() != 0.0 || b.fract() != 0.0 {
                    return Err(FunctionError::NonIntegerModulo {
                        name: function.to_string(),
                    });
                }
                if *b == 0.0 {
                    return Err(FunctionError::ZeroDivisor {
                        name: function.to_string(),
                    });
                }
                number_value(function, ((*a as i64) % (*b as i64)) as f64)
            }
        }
    }
}

/// Wrap an arithmetic result as a JSON number. NaN and infinities have no
/// JSON representation and fail with a generic evaluation error.
fn number_value(function: &str, value: f64) -> FunctionResult<Value> {
    serde_json::Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| FunctionError::evaluation(function, "result is not a finite number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_numeric_operands() {
        let (left, right) = parse_operands("add", &[json!(2), json!(3.5)]).unwrap();
        assert_eq!(left, Operand::Number(2.0));
        assert_eq!(right, Operand::Number(3.5));
    }

    #[test]
    fn rejects_non_numeric_operands() {
        let err = parse_operands("add", &[json!("2"), json!(3)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "JMESPath function 'add': 1 argument is expected of Number type"
        );
    }

    #[test]
    fn divide_by_zero() {
        let (left, right) = parse_operands("divide", &[json!(7), json!(0)]).unwrap();
        let err = left.divide(&right, "divide").unwrap_err();
        assert_eq!(err.to_string(), "JMESPath function 'divide': Zero divisor passed");
    }

    #[test]
    fn modulo_requires_integral_operands() {
        let (left, right) = parse_operands("modulo", &[json!(7.5), json!(2)]).unwrap();
        let err = left.modulo(&right, "modulo").unwrap_err();
        assert_eq!(
            err.to_string(),
            "JMESPath function 'modulo': Non-integer argument(s) passed for modulo"
        );
    }

    #[test]
    fn modulo_truncates_toward_zero() {
        let (left, right) = parse_operands("modulo", &[json!(-7), json!(2)]).unwrap();
        assert_eq!(left.modulo(&right, "modulo").unwrap(), json!(-1.0));
    }

    #[test]
    fn modulo_by_zero() {
        let (left, right) = parse_operands("modulo", &[json!(7), json!(0)]).unwrap();
        let err = left.modulo(&right, "modulo").unwrap_err();
        assert_eq!(err.to_string(), "JMESPath function 'modulo': Zero divisor passed");
    }

    #[test]
    fn overflowing_result_is_an_error() {
        let (left, right) = parse_operands("multiply", &[json!(f64::MAX), json!(f64::MAX)]).unwrap();
        let err = left.multiply(&right, "multiply").unwrap_err();
        assert_eq!(
            err.to_string(),
            "JMESPath function 'multiply': result is not a finite number"
        );
    }
}
