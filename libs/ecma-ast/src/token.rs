//! # Decoration Tokens
//!
//! Keyword and punctuator records attached to AST nodes so a printer can
//! reproduce the exact source tokens (and their positions) that the
//! minimal ESTree shape drops.
//!
//! ## Example
//!
//! ```rust
//! use ecma_ast::token::{TokenKind, TokenMaterializer};
//! use ecma_cst::CstBuilder;
//!
//! let b = CstBuilder::new();
//! let paren = b.tok("(");
//! let token = TokenMaterializer::new(true).materialize(&paren).unwrap();
//! assert_eq!(token.kind, TokenKind::LParen);
//! assert!(TokenMaterializer::new(false).materialize(&paren).is_none());
//! ```

use ecma_cst::{CstNode, SourceLocation};
use serde::Serialize;
use tracing::trace;

macro_rules! token_kinds {
    ($($variant:ident => $text:literal),* $(,)?) => {
        /// Every keyword and punctuator that can decorate an AST node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
        pub enum TokenKind {
            $($variant,)*
        }

        impl TokenKind {
            /// Returns the source text of the token.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }

            /// Looks up a token by its source text.
            pub fn from_text(text: &str) -> Option<Self> {
                match text {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    // Punctuators
    LBrace => "{", RBrace => "}", LParen => "(", RParen => ")",
    LBracket => "[", RBracket => "]", Dot => ".", Ellipsis => "...",
    Semicolon => ";", Comma => ",", Lt => "<", Gt => ">", LtEq => "<=",
    GtEq => ">=", EqEq => "==", NotEq => "!=", EqEqEq => "===",
    NotEqEq => "!==", Plus => "+", Minus => "-", Star => "*", Slash => "/",
    Percent => "%", StarStar => "**", PlusPlus => "++", MinusMinus => "--",
    Shl => "<<", Shr => ">>", UShr => ">>>", Amp => "&", Pipe => "|",
    Caret => "^", Bang => "!", Tilde => "~", AmpAmp => "&&",
    PipePipe => "||", QuestionQuestion => "??", Question => "?",
    QuestionDot => "?.", Colon => ":", Eq => "=", PlusEq => "+=",
    MinusEq => "-=", StarEq => "*=", SlashEq => "/=", PercentEq => "%=",
    StarStarEq => "**=", ShlEq => "<<=", ShrEq => ">>=", UShrEq => ">>>=",
    AmpEq => "&=", PipeEq => "|=", CaretEq => "^=", AmpAmpEq => "&&=",
    PipePipeEq => "||=", QuestionQuestionEq => "??=", Arrow => "=>",
    // Reserved words
    Await => "await", Break => "break", Case => "case", Catch => "catch",
    Class => "class", Const => "const", Continue => "continue",
    Debugger => "debugger", Default => "default", Delete => "delete",
    Do => "do", Else => "else", Export => "export", Extends => "extends",
    Finally => "finally", For => "for", Function => "function", If => "if",
    Import => "import", In => "in", Instanceof => "instanceof", New => "new",
    Return => "return", Super => "super", Switch => "switch", This => "this",
    Throw => "throw", Try => "try", Typeof => "typeof", Var => "var",
    Void => "void", While => "while", With => "with", Yield => "yield",
    // Contextual keywords
    Let => "let", Static => "static", Get => "get", Set => "set",
    Async => "async", Of => "of", From => "from", As => "as",
    Target => "target", Meta => "meta",
}

/// A keyword or punctuator and where it appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub loc: SourceLocation,
}

/// Turns terminal CST nodes into [`Token`]s, or into nothing when
/// decoration is switched off.
#[derive(Debug, Clone, Copy)]
pub struct TokenMaterializer {
    enabled: bool,
}

impl TokenMaterializer {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if tokens are being produced at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Converts a terminal (or a single-token wrapper rule) into a token.
    ///
    /// ## Returns
    ///
    /// `None` when decoration is off, the node carries no token text, or
    /// the text is not a known keyword/punctuator.
    pub fn materialize(&self, node: &CstNode) -> Option<Token> {
        if !self.enabled {
            return None;
        }
        let text = node.token_text()?;
        match TokenKind::from_text(text) {
            Some(kind) => Some(Token {
                kind,
                loc: node.loc,
            }),
            None => {
                trace!(text, "no decoration token for terminal");
                None
            }
        }
    }

    /// Materializes the first direct child of `parent` with the given text.
    pub fn find(&self, parent: &CstNode, text: &str) -> Option<Token> {
        if !self.enabled {
            return None;
        }
        parent.find_token(text).and_then(|n| self.materialize(n))
    }

    /// Materializes every direct child of `parent` with the given text.
    pub fn all(&self, parent: &CstNode, text: &str) -> Vec<Token> {
        if !self.enabled {
            return Vec::new();
        }
        parent
            .children
            .iter()
            .filter(|c| c.is_token(text))
            .filter_map(|c| self.materialize(c))
            .collect()
    }
}
