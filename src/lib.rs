//! # mapa
//!
//! mapa is a math expression parser and evaluator.
//! It evaluates arithmetic programs over the real or complex numbers, with
//! variables, constants, named functions and expressions that keep unknown
//! names symbolic until they are bound.
//!
//! ```
//! use mapa::{MathParser, Options, Value};
//!
//! let parser = MathParser::new(Options::default());
//! let outcome = parser.parse("r = 2; pi * r^2").unwrap().unwrap();
//! assert_eq!(outcome.value(), Some(Value::Real(std::f64::consts::PI * 4.0)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a program as a tree, and renders trees back to
/// infix text. The AST is built by the parser and traversed by the
/// evaluator.
pub mod ast;
/// Parser options.
///
/// The switches fixed at construction time: numeric domain, variables and
/// unknown names.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code, and the [`ErrorKind`](error::ErrorKind) classification
/// hosts can match on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions to lexical and syntax errors.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and function registries, and exposes the public parser
/// type.
pub mod interpreter;

pub use crate::{
    config::{Domain, Options},
    error::{Error, ErrorKind},
    interpreter::{
        deferred::DeferredExpression,
        engine::{MathParser, Outcome},
        environment::Binding,
        registry::core::Arity,
        value::Value,
    },
};

/// Evaluates a program with a fresh parser and returns its result.
///
/// A shorthand for one-off evaluation; use [`MathParser`] to keep variables
/// between calls.
///
/// # Errors
/// Returns an error if tokenizing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use mapa::{Options, Value, get_result};
///
/// let outcome = get_result("2 + 2", Options::default()).unwrap().unwrap();
/// assert_eq!(outcome.value(), Some(Value::Real(4.0)));
///
/// // 'x' is not defined
/// assert!(get_result("y = x + 1", Options::default()).is_err());
/// ```
pub fn get_result(source: &str, options: Options) -> Result<Option<Outcome>, Error> {
    MathParser::new(options).parse(source)
}
