//! Typed arithmetic functions
//!
//! Both positions are declared `Any`; operand classification and the
//! per-variant rules live in [`crate::operand`].

use crate::function::{FunctionResult, JmesPathFunction};
use crate::operand::parse_operands;
use crate::signature::{ArgumentSpec, FunctionSignature, ValueKind};
use serde_json::Value;
use std::sync::LazyLock;

fn binary_signature(name: &str) -> FunctionSignature {
    FunctionSignature::new(
        name,
        vec![
            ArgumentSpec::of(ValueKind::Any),
            ArgumentSpec::of(ValueKind::Any),
        ],
    )
}

/// add() - addition over coerced operands
pub struct AddFunction;

impl JmesPathFunction for AddFunction {
    fn name(&self) -> &str {
        "add"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| binary_signature("add"));
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let (left, right) = parse_operands(self.name(), args)?;
        left.add(&right, self.name())
    }
}

/// subtract() - subtraction over coerced operands
pub struct SubtractFunction;

impl JmesPathFunction for SubtractFunction {
    fn name(&self) -> &str {
        "subtract"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| binary_signature("subtract"));
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let (left, right) = parse_operands(self.name(), args)?;
        left.subtract(&right, self.name())
    }
}

/// multiply() - multiplication over coerced operands
pub struct MultiplyFunction;

impl JmesPathFunction for MultiplyFunction {
    fn name(&self) -> &str {
        "multiply"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| binary_signature("multiply"));
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let (left, right) = parse_operands(self.name(), args)?;
        left.multiply(&right, self.name())
    }
}

/// divide() - division over coerced operands; zero divisors fail
pub struct DivideFunction;

impl JmesPathFunction for DivideFunction {
    fn name(&self) -> &str {
        "divide"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| binary_signature("divide"));
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let (left, right) = parse_operands(self.name(), args)?;
        left.divide(&right, self.name())
    }
}

/// modulo() - truncating integer modulo over coerced operands
pub struct ModuloFunction;

impl JmesPathFunction for ModuloFunction {
    fn name(&self) -> &str {
        "modulo"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| binary_signature("modulo"));
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let (left, right) = parse_operands(self.name(), args)?;
        left.modulo(&right, self.name())
    }
}
