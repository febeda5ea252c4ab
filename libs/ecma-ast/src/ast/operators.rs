//! # Operators
//!
//! Operator enums serialized as their source text, as ESTree expects.

use serde::{Serialize, Serializer};

macro_rules! operator_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)*
        }

        impl $name {
            /// Returns the operator's source text.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }

            /// Parses an operator from its source text.
            pub fn from_text(text: &str) -> Option<Self> {
                match text {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

operator_enum! {
    /// Operators of `BinaryExpression`.
    BinaryOperator {
        Equal => "==", NotEqual => "!=", StrictEqual => "===",
        StrictNotEqual => "!==", Less => "<", LessEqual => "<=",
        Greater => ">", GreaterEqual => ">=", ShiftLeft => "<<",
        ShiftRight => ">>", UnsignedShiftRight => ">>>", Add => "+",
        Subtract => "-", Multiply => "*", Divide => "/", Remainder => "%",
        Exponent => "**", BitOr => "|", BitXor => "^", BitAnd => "&",
        In => "in", Instanceof => "instanceof",
    }
}

operator_enum! {
    /// Operators of `LogicalExpression`.
    LogicalOperator { Or => "||", And => "&&", Coalesce => "??" }
}

operator_enum! {
    /// Prefix operators of `UnaryExpression`.
    UnaryOperator {
        Minus => "-", Plus => "+", Not => "!", BitNot => "~",
        Typeof => "typeof", Void => "void", Delete => "delete",
    }
}

operator_enum! {
    /// Operators of `UpdateExpression`.
    UpdateOperator { Increment => "++", Decrement => "--" }
}

operator_enum! {
    /// Operators of `AssignmentExpression`.
    AssignmentOperator {
        Assign => "=", AddAssign => "+=", SubtractAssign => "-=",
        MultiplyAssign => "*=", DivideAssign => "/=", RemainderAssign => "%=",
        ExponentAssign => "**=", ShiftLeftAssign => "<<=",
        ShiftRightAssign => ">>=", UnsignedShiftRightAssign => ">>>=",
        BitOrAssign => "|=", BitXorAssign => "^=", BitAndAssign => "&=",
        OrAssign => "||=", AndAssign => "&&=", CoalesceAssign => "??=",
    }
}

/// A binary-level operator: either arithmetic/relational or logical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Binary(BinaryOperator),
    Logical(LogicalOperator),
}

impl InfixOperator {
    /// Parses an infix operator, logical operators first.
    pub fn from_text(text: &str) -> Option<Self> {
        LogicalOperator::from_text(text)
            .map(Self::Logical)
            .or_else(|| BinaryOperator::from_text(text).map(Self::Binary))
    }
}
