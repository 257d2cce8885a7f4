/// Core parsing entry points.
///
/// Contains the program and expression entry points and the shared result
/// type.
pub mod core;

/// Unary and atomic expressions.
///
/// Handles prefix signs, both root operand forms, literals, names, calls and
/// parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the precedence levels for `+ -`, `* /`, `^` and binary `%`.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides the token cursor and helpers shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Distinguishes assignments from expression statements.
pub mod statement;
