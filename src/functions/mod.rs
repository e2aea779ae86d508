//! Function implementations organized by category

pub mod arithmetic;
pub mod datetime;
pub mod encoding;
pub mod pattern;
pub mod string;
pub mod utility;

pub use arithmetic::*;
pub use datetime::*;
pub use encoding::*;
pub use pattern::*;
pub use string::*;
pub use utility::*;

use crate::function::FunctionRegistry;
use log::debug;

/// Register all built-in functions, in their canonical order.
pub fn register_builtin_functions(registry: &mut FunctionRegistry) {
    // String transforms
    registry.register(CompareFunction);
    registry.register(EqualFoldFunction);
    registry.register(ReplaceFunction);
    registry.register(ReplaceAllFunction);
    registry.register(ToUpperFunction);
    registry.register(ToLowerFunction);
    registry.register(TrimFunction);
    registry.register(SplitFunction);

    // Regex, glob, and label matching
    registry.register(RegexReplaceAllFunction);
    registry.register(RegexReplaceAllLiteralFunction);
    registry.register(RegexMatchFunction);
    registry.register(PatternMatchFunction);
    registry.register(LabelMatchFunction);

    // Typed arithmetic
    registry.register(AddFunction);
    registry.register(SubtractFunction);
    registry.register(MultiplyFunction);
    registry.register(DivideFunction);
    registry.register(ModuloFunction);

    // Encoding
    registry.register(Base64DecodeFunction);
    registry.register(Base64EncodeFunction);

    // Time, paths, versions
    registry.register(TimeSinceFunction);
    registry.register(PathCanonicalizeFunction);
    registry.register(TruncateFunction);
    registry.register(SemverCompareFunction);
    registry.register(ParseJsonFunction);

    debug!("registered {} built-in functions", registry.len());
}
