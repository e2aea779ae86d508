//! Custom function registry for JMESPath policy expressions
//!
//! This crate augments a JMESPath-style expression evaluator with a set of
//! strongly-typed custom functions: string transforms, regex and glob
//! matching, label matching, typed arithmetic, Base64 encoding, time and
//! semantic-version comparison. The evaluator owns expression parsing and
//! dispatch; this crate owns the function table, per-argument kind
//! validation, and the operand coercion that lets the arithmetic functions
//! operate over heterogeneous operand kinds.
//!
//! Arguments arrive as the evaluator's dynamic JSON value representation
//! ([`serde_json::Value`]) and results are returned in the same
//! representation. The registry is constructed once, is immutable
//! afterwards, and is safe for unbounded concurrent lookup.

#![warn(missing_docs)]

pub mod function;
pub mod functions;
pub mod operand;
pub mod signature;

pub use function::{FunctionError, FunctionRegistry, FunctionResult, JmesPathFunction};
pub use operand::Operand;
pub use signature::{ArgumentSpec, FunctionSignature, ValueKind};

/// Create a registry populated with all built-in functions.
///
/// The returned value is owned by the caller and passed explicitly into the
/// evaluator's configuration; multiple independently configured evaluators
/// can coexist in one process.
pub fn create_standard_registry() -> FunctionRegistry {
    let mut registry = FunctionRegistry::new();
    functions::register_builtin_functions(&mut registry);
    registry
}
