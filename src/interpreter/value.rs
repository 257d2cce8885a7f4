/// Complex number support.
///
/// Defines the `ComplexNumber` type used for arithmetic with real and imaginary
/// parts, together with the elementary functions the complex function table
/// is built from.
pub mod complex;

pub mod core;

pub use self::core::Value;
