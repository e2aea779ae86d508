//! Path and version utility functions

use crate::function::{FunctionError, FunctionResult, JmesPathFunction, str_arg};
use crate::signature::{ArgumentSpec, FunctionSignature, ValueKind};
use semver::{Version, VersionReq};
use serde_json::Value;
use std::sync::LazyLock;

/// path_canonicalize() - lexical path cleaning, no filesystem access
pub struct PathCanonicalizeFunction;

impl JmesPathFunction for PathCanonicalizeFunction {
    fn name(&self) -> &str {
        "path_canonicalize"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "path_canonicalize",
                vec![ArgumentSpec::of(ValueKind::String)],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let path = str_arg(self.name(), args, 0)?;
        Ok(Value::String(clean_path(path)))
    }
}

/// Resolve `.` and `..` segments and collapse repeated separators, purely
/// syntactically. `..` above the root of an absolute path is dropped; a
/// relative path that cleans to nothing becomes `"."`.
fn clean_path(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|last| *last != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// semver_compare() - true iff the version satisfies the range expression
///
/// Range syntax follows the policy-engine convention: whitespace-separated
/// comparators are ANDed, `||` separates alternatives. A malformed version
/// is parsed best-effort and compared as `0.0.0`.
pub struct SemverCompareFunction;

impl JmesPathFunction for SemverCompareFunction {
    fn name(&self) -> &str {
        "semver_compare"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "semver_compare",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let version_text = str_arg(self.name(), args, 0)?;
        let range_text = str_arg(self.name(), args, 1)?;

        let version = Version::parse(version_text).unwrap_or_else(|_| Version::new(0, 0, 0));
        let alternatives = parse_range(self.name(), range_text)?;
        let satisfied = alternatives.iter().any(|req| req.matches(&version));
        Ok(Value::Bool(satisfied))
    }
}

fn parse_range(function: &str, range: &str) -> FunctionResult<Vec<VersionReq>> {
    range
        .split("||")
        .map(|alternative| {
            let comparators: Vec<&str> = alternative.split_whitespace().collect();
            VersionReq::parse(&comparators.join(", "))
                .map_err(|e| FunctionError::evaluation(function, e.to_string()))
        })
        .collect()
}
