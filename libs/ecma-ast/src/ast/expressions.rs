//! Expression nodes.

use super::{
    ArrowFunctionExpression, AssignmentOperator, BinaryOperator, ClassExpression,
    FunctionExpression, Identifier, Literal, LogicalOperator, Pattern, PrivateIdentifier,
    SourceLocation, UnaryOperator, UpdateOperator,
};
use crate::token::Token;
use serde::Serialize;

/// Any ESTree expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expression {
    Identifier(Identifier),
    /// Only valid as the left operand of `in`.
    PrivateIdentifier(PrivateIdentifier),
    Literal(Literal),
    This(ThisExpression),
    Super(Super),
    Array(ArrayExpression),
    Object(ObjectExpression),
    Function(Box<FunctionExpression>),
    ArrowFunction(Box<ArrowFunctionExpression>),
    Class(Box<ClassExpression>),
    TemplateLiteral(TemplateLiteral),
    TaggedTemplate(TaggedTemplateExpression),
    Unary(UnaryExpression),
    Update(UpdateExpression),
    Binary(BinaryExpression),
    Logical(LogicalExpression),
    Assignment(AssignmentExpression),
    Conditional(ConditionalExpression),
    Call(CallExpression),
    New(NewExpression),
    Member(MemberExpression),
    Sequence(SequenceExpression),
    Yield(YieldExpression),
    Await(AwaitExpression),
    MetaProperty(MetaProperty),
    Chain(ChainExpression),
    Import(ImportExpression),
    Parenthesized(ParenthesizedExpression),
}

impl_located!(Expression {
    Identifier, PrivateIdentifier, Literal, This, Super, Array, Object,
    Function, ArrowFunction, Class, TemplateLiteral, TaggedTemplate, Unary,
    Update, Binary, Logical, Assignment, Conditional, Call, New, Member,
    Sequence, Yield, Await, MetaProperty, Chain, Import, Parenthesized,
});

impl Expression {
    /// ESTree type name of the node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::PrivateIdentifier(_) => "PrivateIdentifier",
            Expression::Literal(_) => "Literal",
            Expression::This(_) => "ThisExpression",
            Expression::Super(_) => "Super",
            Expression::Array(_) => "ArrayExpression",
            Expression::Object(_) => "ObjectExpression",
            Expression::Function(_) => "FunctionExpression",
            Expression::ArrowFunction(_) => "ArrowFunctionExpression",
            Expression::Class(_) => "ClassExpression",
            Expression::TemplateLiteral(_) => "TemplateLiteral",
            Expression::TaggedTemplate(_) => "TaggedTemplateExpression",
            Expression::Unary(_) => "UnaryExpression",
            Expression::Update(_) => "UpdateExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::Logical(_) => "LogicalExpression",
            Expression::Assignment(_) => "AssignmentExpression",
            Expression::Conditional(_) => "ConditionalExpression",
            Expression::Call(_) => "CallExpression",
            Expression::New(_) => "NewExpression",
            Expression::Member(_) => "MemberExpression",
            Expression::Sequence(_) => "SequenceExpression",
            Expression::Yield(_) => "YieldExpression",
            Expression::Await(_) => "AwaitExpression",
            Expression::MetaProperty(_) => "MetaProperty",
            Expression::Chain(_) => "ChainExpression",
            Expression::Import(_) => "ImportExpression",
            Expression::Parenthesized(_) => "ParenthesizedExpression",
        }
    }
}

/// An argument or array element: either an expression or `...expr`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExpressionOrSpread {
    Expression(Expression),
    Spread(SpreadElement),
}

impl ecma_cst::Located for ExpressionOrSpread {
    fn loc(&self) -> SourceLocation {
        match self {
            ExpressionOrSpread::Expression(expr) => ecma_cst::Located::loc(expr),
            ExpressionOrSpread::Spread(spread) => spread.loc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ThisExpression {
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct Super {
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SpreadElement {
    pub argument: Expression,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ellipsis_token: Option<Token>,
    pub loc: SourceLocation,
}

// =============================================================================
// ARRAYS AND OBJECTS
// =============================================================================

/// `[a, , ...b]`; holes are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ArrayExpression {
    pub elements: Vec<Option<ExpressionOrSpread>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_bracket_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_bracket_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ObjectExpression {
    pub properties: Vec<ObjectMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_brace_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ObjectMember {
    Property(Property),
    Spread(SpreadElement),
}

impl_located!(ObjectMember { Property, Spread });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Init,
    Get,
    Set,
}

/// An object literal member. Methods and accessors carry a
/// `FunctionExpression` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expression,
    pub kind: PropertyKind,
    pub method: bool,
    pub shorthand: bool,
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colon_token: Option<Token>,
    pub loc: SourceLocation,
}

/// Key of a property, method or field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyKey {
    Identifier(Identifier),
    Literal(Literal),
    PrivateIdentifier(PrivateIdentifier),
    /// `[expr]`; the owner has `computed: true`.
    Computed(Box<Expression>),
}

impl ecma_cst::Located for PropertyKey {
    fn loc(&self) -> SourceLocation {
        match self {
            PropertyKey::Identifier(id) => id.loc,
            PropertyKey::Literal(lit) => lit.loc,
            PropertyKey::PrivateIdentifier(id) => id.loc,
            PropertyKey::Computed(expr) => ecma_cst::Located::loc(expr.as_ref()),
        }
    }
}

impl PropertyKey {
    /// Check if the key is the plain name or string `name`.
    pub fn is_named(&self, name: &str) -> bool {
        match self {
            PropertyKey::Identifier(id) => id.name == name,
            PropertyKey::Literal(lit) => lit.as_str() == Some(name),
            _ => false,
        }
    }
}

// =============================================================================
// TEMPLATES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateLiteral {
    pub quasis: Vec<TemplateElement>,
    pub expressions: Vec<Expression>,
    pub loc: SourceLocation,
}

/// `cooked` is `None` when the chunk has an invalid escape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateValue {
    pub raw: String,
    pub cooked: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TemplateElement {
    pub value: TemplateValue,
    pub tail: bool,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct TaggedTemplateExpression {
    pub tag: Box<Expression>,
    pub quasi: TemplateLiteral,
    pub loc: SourceLocation,
}

// =============================================================================
// OPERATORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct UpdateExpression {
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub argument: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct LogicalExpression {
    pub operator: LogicalOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct AssignmentExpression {
    pub operator: AssignmentOperator,
    pub left: Box<Pattern>,
    pub right: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colon_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct SequenceExpression {
    pub expressions: Vec<Expression>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct YieldExpression {
    pub argument: Option<Box<Expression>>,
    pub delegate: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct AwaitExpression {
    pub argument: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub await_token: Option<Token>,
    pub loc: SourceLocation,
}

// =============================================================================
// MEMBER ACCESS AND CALLS
// =============================================================================

/// `a.b`, `a[b]`, `a?.b`, `a.#b`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Box<Expression>,
    pub computed: bool,
    pub optional: bool,
    /// `.` or `?.` before the property.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_bracket_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_bracket_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<ExpressionOrSpread>,
    pub optional: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<ExpressionOrSpread>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comma_tokens: Vec<Token>,
    pub loc: SourceLocation,
}

/// `new.target` / `import.meta`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct MetaProperty {
    pub meta: Identifier,
    pub property: Identifier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot_token: Option<Token>,
    pub loc: SourceLocation,
}

/// Wraps a member/call chain containing at least one `?.`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub struct ChainExpression {
    pub expression: Box<Expression>,
    pub loc: SourceLocation,
}

/// `import(source, options)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ImportExpression {
    pub source: Box<Expression>,
    pub options: Option<Box<Expression>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    pub loc: SourceLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct ParenthesizedExpression {
    pub expression: Box<Expression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l_paren_token: Option<Token>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r_paren_token: Option<Token>,
    pub loc: SourceLocation,
}
