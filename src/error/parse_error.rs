use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur during lexing or parsing.
///
/// The first two variants are lexical errors, the rest are grammar
/// violations. Every variant carries the source position it was raised at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("Error at {position}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending source text.
        character: String,
        /// Where the character starts.
        position:  Position,
    },
    /// A number literal running straight into another literal or a name.
    #[error("Error at {position}: Malformed number literal '{literal}'.")]
    MalformedLiteral {
        /// The literal together with whatever was glued to it.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
    /// Found a token that does not fit the grammar at this point.
    #[error("Error at {position}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Where the token starts.
        position: Position,
    },
    /// An operator is missing its operand.
    #[error("Error at {position}: Missing operand.")]
    MissingOperand {
        /// Where the operand was expected.
        position: Position,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at {position}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// Position of the unmatched opening parenthesis.
        position: Position,
    },
    /// A `)` without a matching `(`.
    #[error("Error at {position}: Unmatched closing parenthesis ')'.")]
    UnmatchedClosingParen {
        /// Where the parenthesis is.
        position: Position,
    },
    /// An `=` outside of statement position, e.g. `x = y = 1` or `(x = 1)`.
    #[error("Error at {position}: Assignment is only allowed as a whole statement.")]
    MisplacedAssignment {
        /// Where the `=` is.
        position: Position,
    },
}

impl ParseError {
    /// Returns the source position the error was raised at.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::MalformedLiteral { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::MissingOperand { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnmatchedClosingParen { position }
            | Self::MisplacedAssignment { position } => *position,
        }
    }

    /// Returns `true` for errors raised by the tokenizer rather than the
    /// grammar.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self,
                 Self::UnexpectedCharacter { .. } | Self::MalformedLiteral { .. })
    }
}
