use std::fmt;

use crate::interpreter::value::Value;

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of variants is closed: the evaluator, the renderer and the
/// free-name walker all match on it exhaustively. Trees are immutable once
/// built and own their children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal number. Imaginary literals are stored as complex values with
    /// a zero real part.
    Literal {
        /// The constant value.
        value: Value,
    },
    /// Reference to a variable or constant by name.
    Variable {
        /// Name of the variable.
        name: String,
    },
    /// A prefix operation, negation or square root.
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation.
    BinaryOp {
        /// Left operand. For [`BinaryOperator::Root`] this is the index.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand. For [`BinaryOperator::Root`] this is the radicand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)` or `atan2(y, x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
}

/// Represents a top-level statement.
///
/// Statements are the units a program is split into by `;` and newlines.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
    /// A variable assignment binding a name to the result of an expression.
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^` or `**`)
    Pow,
    /// N-th root (`%`), `index % radicand`
    Root,
}

/// Represents a unary prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Square root (`%x`).
    Root,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Root => "%",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Root => write!(f, "%"),
        }
    }
}

/// Binding strength of an atom; nothing ever needs parentheses around it.
const ATOM: u8 = 7;

impl Expr {
    /// Shorthand for a literal node.
    #[must_use]
    pub fn literal(value: impl Into<Value>) -> Self {
        Self::Literal { value: value.into() }
    }

    /// Shorthand for a variable reference.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable { name: name.into() }
    }

    /// How tightly the rendered form of this node binds, mirroring the
    /// parser's precedence levels.
    const fn binding_power(&self) -> u8 {
        match self {
            Self::BinaryOp { op: BinaryOperator::Add | BinaryOperator::Sub,
                             .. } => 1,
            Self::BinaryOp { op: BinaryOperator::Mul | BinaryOperator::Div,
                             .. } => 2,
            Self::UnaryOp { op: UnaryOperator::Negate,
                            .. } => 3,
            Self::BinaryOp { op: BinaryOperator::Pow,
                             .. } => 4,
            Self::BinaryOp { op: BinaryOperator::Root,
                             .. } => 5,
            Self::UnaryOp { op: UnaryOperator::Root,
                            .. } => 6,
            Self::Literal { value } if value.renders_signed() => 3,
            Self::Literal { .. } | Self::Variable { .. } | Self::FunctionCall { .. } => ATOM,
        }
    }

    /// Renders the expression with every compound sub-expression wrapped in
    /// parentheses, so the tree shape can be read off without knowing any
    /// precedence rules.
    ///
    /// # Example
    /// ```
    /// use mapa::{MathParser, Options};
    ///
    /// let parser = MathParser::new(Options { allow_unknown: true,
    ///                                        ..Options::default() });
    /// let outcome = parser.parse("1 + 2 * x").unwrap().unwrap();
    /// let deferred = outcome.as_deferred().unwrap();
    /// assert_eq!(deferred.render_parenthesized(), "(1 + (2 * x))");
    /// ```
    #[must_use]
    pub fn render_parenthesized(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, Style::Parenthesized);
        out
    }

    fn write(&self, out: &mut String, style: Style) {
        match self {
            Self::Literal { value } => out.push_str(&value.to_string()),
            Self::Variable { name } => out.push_str(name),
            Self::FunctionCall { name, arguments } => {
                out.push_str(name);
                out.push('(');
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    argument.write(out, style);
                }
                out.push(')');
            },
            Self::UnaryOp { op, expr } => {
                let wrap = style == Style::Parenthesized;
                if wrap {
                    out.push('(');
                }
                out.push_str(&op.to_string());
                let power = self.binding_power();
                expr.write_child(out, style, expr.binding_power() < power);
                if wrap {
                    out.push(')');
                }
            },
            Self::BinaryOp { left, op, right } => {
                let wrap = style == Style::Parenthesized;
                if wrap {
                    out.push('(');
                }
                let power = self.binding_power();
                // `^` groups to the right, everything else to the left.
                let (left_parens, right_parens) = if *op == BinaryOperator::Pow {
                    (left.binding_power() <= power, right.binding_power() < power)
                } else {
                    (left.binding_power() < power, right.binding_power() <= power)
                };
                left.write_child(out, style, left_parens);
                match op {
                    BinaryOperator::Pow | BinaryOperator::Root => out.push_str(&op.to_string()),
                    _ => {
                        out.push(' ');
                        out.push_str(&op.to_string());
                        out.push(' ');
                    },
                }
                right.write_child(out, style, right_parens);
                if wrap {
                    out.push(')');
                }
            },
        }
    }

    fn write_child(&self, out: &mut String, style: Style, parens: bool) {
        // Parenthesized style already wraps compound nodes itself.
        let parens = parens
                     && !(style == Style::Parenthesized
                          && matches!(self, Self::UnaryOp { .. } | Self::BinaryOp { .. }));
        if parens {
            out.push('(');
        }
        self.write(out, style);
        if parens {
            out.push(')');
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Canonical,
    Parenthesized,
}

impl fmt::Display for Expr {
    /// Canonical infix rendering: `+ - * /` spaced, `^` and `%` tight,
    /// parentheses only where precedence or associativity needs them. The
    /// output parses back to an expression with the same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write(&mut out, Style::Canonical);
        f.write_str(&out)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expression { expr } => write!(f, "{expr}"),
            Self::Assignment { name, value } => write!(f, "{name} = {value}"),
        }
    }
}
