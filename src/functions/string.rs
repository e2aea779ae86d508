//! String transform functions

use crate::function::{FunctionResult, JmesPathFunction, number_arg, str_arg};
use crate::signature::{ArgumentSpec, FunctionSignature, ValueKind};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::LazyLock;

/// compare() - three-way lexicographic comparison of two strings
pub struct CompareFunction;

impl JmesPathFunction for CompareFunction {
    fn name(&self) -> &str {
        "compare"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "compare",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let a = str_arg(self.name(), args, 0)?;
        let b = str_arg(self.name(), args, 1)?;
        let ordering = match a.cmp(b) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        };
        Ok(Value::from(ordering))
    }
}

/// equal_fold() - Unicode case-insensitive string equality
pub struct EqualFoldFunction;

impl JmesPathFunction for EqualFoldFunction {
    fn name(&self) -> &str {
        "equal_fold"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "equal_fold",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let a = str_arg(self.name(), args, 0)?;
        let b = str_arg(self.name(), args, 1)?;
        let equal = a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase));
        Ok(Value::Bool(equal))
    }
}

/// replace() - bounded substring replacement; a negative count replaces all
pub struct ReplaceFunction;

impl JmesPathFunction for ReplaceFunction {
    fn name(&self) -> &str {
        "replace"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "replace",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::Number),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let subject = str_arg(self.name(), args, 0)?;
        let old = str_arg(self.name(), args, 1)?;
        let new = str_arg(self.name(), args, 2)?;
        let count = number_arg(self.name(), args, 3)?;

        // Occurrence limit truncates toward zero; negative means replace all
        let replaced = if count < 0.0 {
            subject.replace(old, new)
        } else {
            subject.replacen(old, new, count.trunc() as usize)
        };
        Ok(Value::String(replaced))
    }
}

/// replace_all() - unbounded substring replacement
pub struct ReplaceAllFunction;

impl JmesPathFunction for ReplaceAllFunction {
    fn name(&self) -> &str {
        "replace_all"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "replace_all",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let subject = str_arg(self.name(), args, 0)?;
        let old = str_arg(self.name(), args, 1)?;
        let new = str_arg(self.name(), args, 2)?;
        Ok(Value::String(subject.replace(old, new)))
    }
}

/// to_upper() - uppercase a string
pub struct ToUpperFunction;

impl JmesPathFunction for ToUpperFunction {
    fn name(&self) -> &str {
        "to_upper"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new("to_upper", vec![ArgumentSpec::of(ValueKind::String)])
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let subject = str_arg(self.name(), args, 0)?;
        Ok(Value::String(subject.to_uppercase()))
    }
}

/// to_lower() - lowercase a string
pub struct ToLowerFunction;

impl JmesPathFunction for ToLowerFunction {
    fn name(&self) -> &str {
        "to_lower"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new("to_lower", vec![ArgumentSpec::of(ValueKind::String)])
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let subject = str_arg(self.name(), args, 0)?;
        Ok(Value::String(subject.to_lowercase()))
    }
}

/// trim() - trim any characters in the cutset from both ends
pub struct TrimFunction;

impl JmesPathFunction for TrimFunction {
    fn name(&self) -> &str {
        "trim"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "trim",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let subject = str_arg(self.name(), args, 0)?;
        let cutset = str_arg(self.name(), args, 1)?;
        let trimmed = subject.trim_matches(|c| cutset.contains(c));
        Ok(Value::String(trimmed.to_string()))
    }
}

/// split() - split a string around a separator into an array of strings
pub struct SplitFunction;

impl JmesPathFunction for SplitFunction {
    fn name(&self) -> &str {
        "split"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "split",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let subject = str_arg(self.name(), args, 0)?;
        let separator = str_arg(self.name(), args, 1)?;
        let parts: Vec<Value> = subject
            .split(separator)
            .map(|part| Value::String(part.to_string()))
            .collect();
        Ok(Value::Array(parts))
    }
}

/// truncate() - prefix cut to at most `length` characters; negative lengths
/// clamp to zero
pub struct TruncateFunction;

impl JmesPathFunction for TruncateFunction {
    fn name(&self) -> &str {
        "truncate"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "truncate",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::Number),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let subject = str_arg(self.name(), args, 0)?;
        let length = number_arg(self.name(), args, 1)?;
        let length = if length < 0.0 { 0 } else { length.trunc() as usize };
        Ok(Value::String(subject.chars().take(length).collect()))
    }
}
