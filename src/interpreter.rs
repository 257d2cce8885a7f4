/// Deferred expressions.
///
/// Results that still depend on unbound names, with rendering and later
/// evaluation against the parser instance they came from.
pub mod deferred;
/// The public parser type and its outcomes.
///
/// Ties lexing, parsing and evaluation together behind `MathParser::parse`
/// and exposes the host-side API for variables, constants and functions.
pub mod engine;
/// Variable and constant storage.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, resolves names and calls functions. When unknown
/// names are allowed it produces residual trees instead of failing on them.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Keeps results inside the active numeric domain.
/// - Reports runtime errors such as division by zero or domain violations.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens: numbers, imaginary numbers, identifiers, operators, parentheses,
/// commas, `=` and statement separators. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line and column.
/// - Decodes real and imaginary number literals.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the tokens produced by the lexer and constructs a
/// list of statements, each holding an expression tree with the usual
/// precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location
///   info.
pub mod parser;
/// Named functions callable from expressions.
///
/// A registry per parser instance, keyed by name and arity, with presets for
/// real and complex mode.
pub mod registry;
/// The value module defines the runtime data types for evaluation.
///
/// A value is either a real or a complex number. This module provides the
/// conversions between the two and their display forms.
pub mod value;
