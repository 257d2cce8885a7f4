/// The registry itself.
///
/// Holds [`FunctionRegistry`](core::FunctionRegistry), keyed by name and
/// arity, and the helpers preset functions share.
pub mod core;

/// Functions available in real mode.
pub mod real;

/// Functions available in complex mode.
pub mod complex;
