//! Function signatures and runtime value kinds

use serde_json::Value;
use std::fmt;

/// Coarse runtime classification of a JSON-derived value produced by the
/// expression evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// JSON object
    Object,
    /// JSON string
    String,
    /// JSON number
    Number,
    /// JSON array whose elements are all strings
    ArrayString,
    /// Any value; disables kind checking for the position
    Any,
}

impl ValueKind {
    /// Check whether a runtime value belongs to this kind.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::Object => value.is_object(),
            ValueKind::String => value.is_string(),
            ValueKind::Number => value.is_number(),
            ValueKind::ArrayString => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            ValueKind::Any => true,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Object => "Object",
            ValueKind::String => "String",
            ValueKind::Number => "Number",
            ValueKind::ArrayString => "Array of String",
            ValueKind::Any => "Any",
        };
        f.write_str(name)
    }
}

/// Accepted kinds for a single positional argument. Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentSpec {
    kinds: Vec<ValueKind>,
}

impl ArgumentSpec {
    /// An argument accepting exactly one kind.
    pub fn of(kind: ValueKind) -> Self {
        Self { kinds: vec![kind] }
    }

    /// An argument accepting any of the given kinds.
    ///
    /// Panics when `kinds` is empty; an argument position must accept at
    /// least one kind, and an empty set is a construction-time defect.
    pub fn any_of(kinds: Vec<ValueKind>) -> Self {
        assert!(!kinds.is_empty(), "argument must accept at least one kind");
        Self { kinds }
    }

    /// The kinds this position accepts.
    pub fn kinds(&self) -> &[ValueKind] {
        &self.kinds
    }

    /// Check the value against the accepted kinds.
    pub fn accepts(&self, value: &Value) -> bool {
        self.kinds.iter().any(|kind| kind.matches(value))
    }

    /// Human-readable name of the accepted kinds, e.g. `"String or Number"`.
    pub fn expected_name(&self) -> String {
        let names: Vec<String> = self.kinds.iter().map(ValueKind::to_string).collect();
        names.join(" or ")
    }
}

/// Declared arity and per-position accepted kinds of a function.
///
/// The arity is fixed by the number of argument specs; there is no variadic
/// support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    name: String,
    arguments: Vec<ArgumentSpec>,
}

impl FunctionSignature {
    /// Create a new signature.
    pub fn new(name: impl Into<String>, arguments: Vec<ArgumentSpec>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Function name the signature belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-position accepted kinds.
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Number of arguments the function takes.
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kind_classification() {
        assert!(ValueKind::Object.matches(&json!({"a": 1})));
        assert!(ValueKind::String.matches(&json!("x")));
        assert!(ValueKind::Number.matches(&json!(1.5)));
        assert!(ValueKind::ArrayString.matches(&json!(["a", "b"])));
        assert!(!ValueKind::ArrayString.matches(&json!(["a", 1])));
        assert!(ValueKind::Any.matches(&json!(null)));
        assert!(!ValueKind::String.matches(&json!(1)));
    }

    #[test]
    fn multi_kind_argument() {
        let spec = ArgumentSpec::any_of(vec![ValueKind::String, ValueKind::Number]);
        assert!(spec.accepts(&json!("x")));
        assert!(spec.accepts(&json!(2)));
        assert!(!spec.accepts(&json!({})));
        assert_eq!(spec.expected_name(), "String or Number");
    }

    #[test]
    #[should_panic(expected = "at least one kind")]
    fn empty_kind_set_panics() {
        ArgumentSpec::any_of(vec![]);
    }
}
