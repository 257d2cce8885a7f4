/// Binary node evaluation and operator dispatch.
pub mod core;

/// Exponentiation and n-th roots.
///
/// Handles real and complex powers, the domain rules for negative bases and
/// zero, and the root operator built on top of them.
pub mod power;

/// The four arithmetic operators.
pub mod scalar;
