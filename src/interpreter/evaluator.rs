/// Binary operator evaluation logic.
///
/// Handles the execution of binary operations: arithmetic, powers and
/// n-th roots.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation and the square root.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, the per-call
/// frame and the deferred result type.
pub mod core;

/// Utility functions for evaluation.
///
/// Free-name collection and binding substitution for deferred trees.
pub mod utils;

/// Function evaluation.
///
/// Resolves calls against the registry and evaluates their arguments.
pub mod function;
