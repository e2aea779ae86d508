//! Regex, glob, and label matching functions

use crate::function::{
    FunctionError, FunctionResult, JmesPathFunction, object_arg, str_arg, string_or_number_arg,
};
use crate::signature::{ArgumentSpec, FunctionSignature, ValueKind};
use regex::{NoExpand, Regex};
use serde_json::Value;
use std::sync::LazyLock;

fn compile(function: &str, pattern: &str) -> FunctionResult<Regex> {
    Regex::new(pattern).map_err(|e| FunctionError::evaluation(function, e.to_string()))
}

/// regex_replace_all() - regex replacement with `$name`/`$1` expansion in the
/// replacement text; subject and replacement accept string or number
pub struct RegexReplaceAllFunction;

impl JmesPathFunction for RegexReplaceAllFunction {
    fn name(&self) -> &str {
        "regex_replace_all"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "regex_replace_all",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::any_of(vec![ValueKind::String, ValueKind::Number]),
                    ArgumentSpec::any_of(vec![ValueKind::String, ValueKind::Number]),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let pattern = str_arg(self.name(), args, 0)?;
        let subject = string_or_number_arg(self.name(), args, 1)?;
        let replacement = string_or_number_arg(self.name(), args, 2)?;
        let regex = compile(self.name(), pattern)?;
        Ok(Value::String(
            regex.replace_all(&subject, replacement.as_str()).into_owned(),
        ))
    }
}

/// regex_replace_all_literal() - regex replacement substituting the
/// replacement text verbatim, without `$` expansion
pub struct RegexReplaceAllLiteralFunction;

impl JmesPathFunction for RegexReplaceAllLiteralFunction {
    fn name(&self) -> &str {
        "regex_replace_all_literal"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "regex_replace_all_literal",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::any_of(vec![ValueKind::String, ValueKind::Number]),
                    ArgumentSpec::any_of(vec![ValueKind::String, ValueKind::Number]),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let pattern = str_arg(self.name(), args, 0)?;
        let subject = string_or_number_arg(self.name(), args, 1)?;
        let replacement = string_or_number_arg(self.name(), args, 2)?;
        let regex = compile(self.name(), pattern)?;
        Ok(Value::String(
            regex
                .replace_all(&subject, NoExpand(replacement.as_str()))
                .into_owned(),
        ))
    }
}

/// regex_match() - whether the subject contains a match of the pattern
pub struct RegexMatchFunction;

impl JmesPathFunction for RegexMatchFunction {
    fn name(&self) -> &str {
        "regex_match"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "regex_match",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::any_of(vec![ValueKind::String, ValueKind::Number]),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let pattern = str_arg(self.name(), args, 0)?;
        let subject = string_or_number_arg(self.name(), args, 1)?;
        let regex = compile(self.name(), pattern)?;
        Ok(Value::Bool(regex.is_match(&subject)))
    }
}

/// pattern_match() - glob-style match (`*`, `?`), not regular expressions
pub struct PatternMatchFunction;

impl JmesPathFunction for PatternMatchFunction {
    fn name(&self) -> &str {
        "pattern_match"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "pattern_match",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::any_of(vec![ValueKind::String, ValueKind::Number]),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let pattern = str_arg(self.name(), args, 0)?;
        let subject = string_or_number_arg(self.name(), args, 1)?;
        let glob = glob::Pattern::new(pattern)
            .map_err(|e| FunctionError::evaluation(self.name(), e.to_string()))?;
        Ok(Value::Bool(glob.matches(&subject)))
    }
}

/// label_match() - true iff every key of the label set is present in the
/// target set with an equal value
pub struct LabelMatchFunction;

impl JmesPathFunction for LabelMatchFunction {
    fn name(&self) -> &str {
        "label_match"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "label_match",
                vec![
                    ArgumentSpec::of(ValueKind::Object),
                    ArgumentSpec::of(ValueKind::Object),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let labels = object_arg(self.name(), args, 0)?;
        let target = object_arg(self.name(), args, 1)?;
        for (key, value) in labels {
            if target.get(key) != Some(value) {
                return Ok(Value::Bool(false));
            }
        }
        Ok(Value::Bool(true))
    }
}
