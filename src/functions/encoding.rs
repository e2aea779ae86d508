//! Base64 and JSON encoding functions

use crate::function::{FunctionError, FunctionResult, JmesPathFunction, str_arg};
use crate::signature::{ArgumentSpec, FunctionSignature, ValueKind};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;
use std::sync::LazyLock;

/// base64_decode() - decode a padded standard-alphabet Base64 string
pub struct Base64DecodeFunction;

impl JmesPathFunction for Base64DecodeFunction {
    fn name(&self) -> &str {
        "base64_decode"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new("base64_decode", vec![ArgumentSpec::of(ValueKind::String)])
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let encoded = str_arg(self.name(), args, 0)?;
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| FunctionError::evaluation(self.name(), e.to_string()))?;
        // The value model is UTF-8 strings; non-UTF-8 payloads are a decode failure
        let decoded = String::from_utf8(bytes)
            .map_err(|e| FunctionError::evaluation(self.name(), e.to_string()))?;
        Ok(Value::String(decoded))
    }
}

/// base64_encode() - encode a string with the padded standard alphabet
pub struct Base64EncodeFunction;

impl JmesPathFunction for Base64EncodeFunction {
    fn name(&self) -> &str {
        "base64_encode"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new("base64_encode", vec![ArgumentSpec::of(ValueKind::String)])
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let plain = str_arg(self.name(), args, 0)?;
        Ok(Value::String(STANDARD.encode(plain)))
    }
}

/// parse_json() - unmarshal arbitrary JSON text into the evaluator's value
/// model; parse failures propagate verbatim
pub struct ParseJsonFunction;

impl JmesPathFunction for ParseJsonFunction {
    fn name(&self) -> &str {
        "parse_json"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new("parse_json", vec![ArgumentSpec::of(ValueKind::String)])
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let text = str_arg(self.name(), args, 0)?;
        serde_json::from_str(text).map_err(|e| FunctionError::evaluation(self.name(), e.to_string()))
    }
}
