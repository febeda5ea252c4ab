//! # Node Kinds
//!
//! The closed set of grammar rules and terminal kinds a CST node can carry.
//!
//! Rule names follow the ECMAScript 2025 grammar productions. Each kind
//! belongs to exactly one [`RuleCategory`], which is what the dispatcher
//! matches on; adding a kind without a category is a compile error.
//!
//! ## Example
//!
//! ```rust
//! use ecma_cst::{NodeKind, RuleCategory};
//!
//! assert_eq!(NodeKind::from_name("BinaryExpression"), None);
//! assert_eq!(NodeKind::from_name("AdditiveExpression"), Some(NodeKind::AdditiveExpression));
//! assert_eq!(
//!     NodeKind::from_name("Es2025Parser.AdditiveExpression"),
//!     Some(NodeKind::AdditiveExpression)
//! );
//! assert_eq!(NodeKind::IfStatement.category(), RuleCategory::Statement);
//! ```

use config::constants::RULE_QUALIFIER_SEPARATORS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse grouping of node kinds used for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Goal symbols: `Program`, `Script`, `Module` and their bodies.
    Program,
    /// Lists of statements or module items.
    ItemList,
    /// Anything that converts to a single AST statement.
    Statement,
    /// Pieces of statements with no standalone AST statement
    /// (declarator lists, case blocks, catch clauses).
    StatementPart,
    /// Anything that converts to a single AST expression.
    Expression,
    /// Pieces of expressions (operators, argument lists, template spans).
    ExpressionPart,
    /// Binding and assignment targets.
    Pattern,
    /// Pieces of patterns (property lists, elision elements).
    PatternPart,
    /// Function parameters and bodies.
    FunctionPart,
    /// Class heads, bodies and members.
    ClassPart,
    /// `import` / `export` declarations.
    ModuleDeclaration,
    /// Clauses and specifiers of module declarations.
    ModulePart,
    /// Terminal tokens (punctuators, keywords, comments, template chunks).
    Token,
}

macro_rules! node_kinds {
    ($($category:ident => [$($kind:ident),* $(,)?]),* $(,)?) => {
        /// Grammar rule or terminal kind of a CST node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum NodeKind {
            $($($kind,)*)*
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$($(NodeKind::$kind,)*)*];

            /// Returns the plain rule name.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($(NodeKind::$kind => stringify!($kind),)*)*
                }
            }

            /// Returns the dispatch category of this kind.
            pub const fn category(&self) -> RuleCategory {
                match self {
                    $($(NodeKind::$kind => RuleCategory::$category,)*)*
                }
            }

            fn from_plain(name: &str) -> Option<NodeKind> {
                match name {
                    $($(stringify!($kind) => Some(NodeKind::$kind),)*)*
                    _ => None,
                }
            }
        }
    };
}

node_kinds! {
    Program => [Program, Script, ScriptBody, Module, ModuleBody],
    ItemList => [
        ModuleItemList, ModuleItem, StatementList, StatementListItem,
        FunctionStatementList, ClassStaticBlockStatementList,
    ],
    Statement => [
        Statement, Declaration, HoistableDeclaration, BreakableStatement,
        IterationStatement, BlockStatement, Block, VariableStatement,
        LexicalDeclaration, EmptyStatement, ExpressionStatement, IfStatement,
        DoWhileStatement, WhileStatement, ForStatement, ForInOfStatement,
        ContinueStatement, BreakStatement, ReturnStatement, WithStatement,
        SwitchStatement, LabelledStatement, LabelledItem, ThrowStatement,
        TryStatement, DebuggerStatement, FunctionDeclaration,
        GeneratorDeclaration, AsyncFunctionDeclaration,
        AsyncGeneratorDeclaration, ClassDeclaration,
    ],
    StatementPart => [
        VariableDeclarationList, VariableDeclaration, LetOrConst, BindingList,
        LexicalBinding, Initializer, ForDeclaration, CaseBlock, CaseClauses,
        CaseClause, DefaultClause, Catch, Finally,
    ],
    Expression => [
        Expression, AssignmentExpression, ConditionalExpression,
        ShortCircuitExpression, LogicalORExpression, LogicalANDExpression,
        CoalesceExpression, BitwiseORExpression, BitwiseXORExpression,
        BitwiseANDExpression, EqualityExpression, RelationalExpression,
        ShiftExpression, AdditiveExpression, MultiplicativeExpression,
        ExponentiationExpression, UnaryExpression, AwaitExpression,
        UpdateExpression, LeftHandSideExpression, NewExpression,
        MemberExpression, SuperProperty, MetaProperty, NewTarget, ImportMeta,
        CallExpression, SuperCall, ImportCall, OptionalExpression,
        PrimaryExpression, IdentifierReference, Identifier, Literal,
        NullLiteral, BooleanLiteral, ArrayLiteral, ObjectLiteral,
        TemplateLiteral, YieldExpression, FunctionExpression,
        GeneratorExpression, AsyncFunctionExpression, AsyncGeneratorExpression,
        ClassExpression, ArrowFunction, AsyncArrowFunction,
        CoverParenthesizedExpressionAndArrowParameterList,
        ParenthesizedExpression, CoverCallExpressionAndAsyncArrowHead,
        CallMemberExpression, ExpressionBody, IdentifierName, PrivateIdentifier,
        NumericLiteral, StringLiteral, RegularExpressionLiteral,
        NoSubstitutionTemplate,
    ],
    ExpressionPart => [
        AssignmentOperator, MultiplicativeOperator, CoalesceExpressionHead,
        OptionalChain, Arguments, ArgumentList, ElementList, Elision,
        SpreadElement, PropertyDefinitionList, PropertyDefinition,
        CoverInitializedName, SubstitutionTemplate, TemplateSpans,
        TemplateMiddleList, PropertyName, LiteralPropertyName,
        ComputedPropertyName,
    ],
    Pattern => [
        BindingIdentifier, LabelIdentifier, BindingPattern,
        ObjectBindingPattern, ArrayBindingPattern, BindingElement,
        SingleNameBinding, BindingRestElement, AssignmentPattern,
        ObjectAssignmentPattern, ArrayAssignmentPattern, AssignmentElement,
        AssignmentRestElement, DestructuringAssignmentTarget, ForBinding,
        CatchParameter, ImportedBinding, ImportedDefaultBinding,
        AsyncArrowBindingIdentifier,
    ],
    PatternPart => [
        BindingPropertyList, BindingElementList, BindingElisionElement,
        BindingProperty, BindingRestProperty, AssignmentPropertyList,
        AssignmentElementList, AssignmentElisionElement, AssignmentProperty,
        AssignmentRestProperty,
    ],
    FunctionPart => [
        FunctionBody, GeneratorBody, AsyncFunctionBody, AsyncGeneratorBody,
        FormalParameters, UniqueFormalParameters, FormalParameterList,
        FormalParameter, FunctionRestParameter, PropertySetParameterList,
        ArrowParameters, ArrowFormalParameters, ConciseBody, AsyncConciseBody,
        AsyncArrowHead,
    ],
    ClassPart => [
        ClassTail, ClassHeritage, ClassBody, ClassElementList, ClassElement,
        ClassElementName, MethodDefinition, GeneratorMethod, AsyncMethod,
        AsyncGeneratorMethod, FieldDefinition, ClassStaticBlock,
        ClassStaticBlockBody,
    ],
    ModuleDeclaration => [ImportDeclaration, ExportDeclaration],
    ModulePart => [
        ImportClause, NameSpaceImport, NamedImports, ImportsList,
        ImportSpecifier, ModuleExportName, FromClause, ModuleSpecifier,
        WithClause, WithEntries, AttributeKey, ExportFromClause, NamedExports,
        ExportsList, ExportSpecifier,
    ],
    Token => [Punctuator, Keyword, TemplateHead, TemplateMiddle, TemplateTail, Comment],
}

impl NodeKind {
    /// Resolves a rule name as written by a CST producer.
    ///
    /// Both the plain spelling (`"IfStatement"`) and a qualified spelling
    /// (`"Es2025Parser.IfStatement"`, `"es2025::IfStatement"`) are accepted.
    ///
    /// ## Returns
    ///
    /// The matching kind, or `None` if the name is not an ES2025 rule.
    pub fn from_name(name: &str) -> Option<NodeKind> {
        if let Some(kind) = Self::from_plain(name) {
            return Some(kind);
        }
        RULE_QUALIFIER_SEPARATORS
            .iter()
            .find_map(|sep| name.rsplit_once(sep))
            .and_then(|(_, plain)| Self::from_plain(plain))
    }

    /// Check if this kind is a terminal token kind.
    pub const fn is_token(&self) -> bool {
        matches!(
            self,
            Self::Punctuator
                | Self::Keyword
                | Self::Comment
                | Self::TemplateHead
                | Self::TemplateMiddle
                | Self::TemplateTail
                | Self::IdentifierName
                | Self::PrivateIdentifier
                | Self::NumericLiteral
                | Self::StringLiteral
                | Self::RegularExpressionLiteral
                | Self::NoSubstitutionTemplate
        )
    }

    /// Check if this is a level of the binary/logical operator cascade.
    pub const fn is_binary_level(&self) -> bool {
        matches!(
            self,
            Self::LogicalORExpression
                | Self::LogicalANDExpression
                | Self::CoalesceExpression
                | Self::BitwiseORExpression
                | Self::BitwiseXORExpression
                | Self::BitwiseANDExpression
                | Self::EqualityExpression
                | Self::RelationalExpression
                | Self::ShiftExpression
                | Self::AdditiveExpression
                | Self::MultiplicativeExpression
        )
    }

    /// Check if this kind declares a function-like construct.
    pub const fn is_function(&self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration
                | Self::FunctionExpression
                | Self::GeneratorDeclaration
                | Self::GeneratorExpression
                | Self::AsyncFunctionDeclaration
                | Self::AsyncFunctionExpression
                | Self::AsyncGeneratorDeclaration
                | Self::AsyncGeneratorExpression
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
