//! # Operator Conversion
//!
//! Builds operator trees from the flat child lists of each precedence
//! level.
//!
//! ```text
//! AdditiveExpression [a, "-", b, "-", c]     ExponentiationExpression [a, "**", Exp[b, "**", c]]
//!        │ fold left                                 │ fold right
//!        ▼                                           ▼
//!     (a - b) - c                                 a ** (b ** c)
//! ```
//!
//! A level with a single child is not an operator node at all; the child
//! is converted in its place.

use super::{ChildCursor, Dispatcher};
use crate::ast::{
    AssignmentExpression, AssignmentOperator, AwaitExpression, BinaryExpression, BinaryOperator,
    ConditionalExpression, Expression, InfixOperator, Located, LogicalExpression, SourceLocation,
    UnaryExpression, UnaryOperator, UpdateExpression, UpdateOperator,
};
use crate::convert::patterns::TargetContext;
use crate::error::ConvertResult;
use crate::token::Token;
use ecma_cst::{CstNode, NodeKind};

impl Dispatcher {
    /// Folds `[operand, op, operand, op, operand, ...]` left to right.
    ///
    /// Intermediate nodes span their two operands; the outermost node
    /// takes the location of the CST node itself.
    pub(crate) fn binary(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let first = self.require(cursor.next(), node, "left operand")?;
        let mut left = self.expression(first)?;

        while let Some(op_node) = cursor.next() {
            let op = self.infix_operator(node, op_node)?;
            let right_node = self.require(cursor.next(), node, "right operand")?;
            let right = self.expression(right_node)?;
            let loc = if cursor.is_done() {
                node.loc
            } else {
                left.loc().merge(&right.loc())
            };
            left = make_infix(op, left, right, self.tok(op_node), loc);
        }
        Ok(left)
    }

    /// Folds `**` to the right, accepting both the nested grammar shape
    /// and a flat operand list.
    pub(crate) fn exponentiation(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut operands = Vec::new();
        let mut operators = Vec::new();
        let mut cursor = ChildCursor::new(node);
        let first = self.require(cursor.next(), node, "base operand")?;
        operands.push(self.expression(first)?);
        while let Some(op_node) = cursor.next() {
            if !op_node.is_token("**") {
                return Err(self.malformed(node, "expected `**`"));
            }
            operators.push(op_node);
            let operand = self.require(cursor.next(), node, "exponent operand")?;
            operands.push(self.expression(operand)?);
        }

        let mut right = operands
            .pop()
            .ok_or_else(|| self.malformed(node, "missing operand"))?;
        while let (Some(left), Some(op_node)) = (operands.pop(), operators.pop()) {
            let loc = if operands.is_empty() {
                node.loc
            } else {
                left.loc().merge(&right.loc())
            };
            right = Expression::Binary(BinaryExpression {
                operator: BinaryOperator::Exponent,
                left: Box::new(left),
                right: Box::new(right),
                operator_token: self.tok(op_node),
                loc,
            });
        }
        Ok(right)
    }

    fn infix_operator(&self, node: &CstNode, op_node: &CstNode) -> ConvertResult<InfixOperator> {
        let text = op_node
            .token_text()
            .ok_or_else(|| self.malformed(node, "expected an operator token"))?;
        InfixOperator::from_text(text)
            .ok_or_else(|| self.malformed(node, format!("unknown binary operator `{text}`")))
    }

    /// `UnaryExpression: op UnaryExpression`. `await` in operator position
    /// yields an `AwaitExpression`.
    pub(crate) fn unary(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let op_node = self.require(cursor.next(), node, "unary operator")?;
        let text = op_node.token_text().unwrap_or_default();
        if text == "await" {
            return self.await_expression(node);
        }
        let operator = UnaryOperator::from_text(text)
            .ok_or_else(|| self.malformed(node, format!("unknown unary operator `{text}`")))?;
        let argument = self.require(cursor.next(), node, "operand")?;
        Ok(Expression::Unary(UnaryExpression {
            operator,
            prefix: true,
            argument: Box::new(self.expression(argument)?),
            operator_token: self.tok(op_node),
            loc: node.loc,
        }))
    }

    pub(crate) fn await_expression(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let await_node = self.require(cursor.eat("await"), node, "`await`")?;
        let argument = self.require(cursor.next(), node, "await operand")?;
        Ok(Expression::Await(AwaitExpression {
            argument: Box::new(self.expression(argument)?),
            await_token: self.tok(await_node),
            loc: node.loc,
        }))
    }

    /// `UpdateExpression: LHS ++ | LHS -- | ++ Unary | -- Unary`.
    pub(crate) fn update(&self, node: &CstNode) -> ConvertResult<Expression> {
        let (first, second) = match node.children.as_slice() {
            [first, second] => (first, second),
            _ => return Err(self.malformed(node, "update expression needs an operand and `++`/`--`")),
        };
        let (op_node, operand, prefix) = if first.is_any_token(&["++", "--"]) {
            (first, second, true)
        } else {
            (second, first, false)
        };
        let text = op_node.token_text().unwrap_or_default();
        let operator = UpdateOperator::from_text(text)
            .ok_or_else(|| self.malformed(node, format!("unknown update operator `{text}`")))?;
        Ok(Expression::Update(UpdateExpression {
            operator,
            prefix,
            argument: Box::new(self.expression(operand)?),
            operator_token: self.tok(op_node),
            loc: node.loc,
        }))
    }

    /// `AssignmentExpression: LHS op AssignmentExpression`.
    ///
    /// With `=`, an array or object literal on the left is a destructuring
    /// target and becomes the matching pattern.
    pub(crate) fn assignment(&self, node: &CstNode) -> ConvertResult<Expression> {
        let (lhs, op_node, rhs) = match node.children.as_slice() {
            [lhs, op, rhs] => (lhs, op, rhs),
            _ => return Err(self.malformed(node, "assignment needs a target, operator and value")),
        };
        let text = op_node.token_text().unwrap_or_default();
        let operator = AssignmentOperator::from_text(text)
            .ok_or_else(|| self.malformed(node, format!("unknown assignment operator `{text}`")))?;

        let left = match lhs.kind {
            NodeKind::AssignmentPattern
            | NodeKind::ObjectAssignmentPattern
            | NodeKind::ArrayAssignmentPattern => self.pattern(lhs)?,
            _ => {
                let target = self.expression(lhs)?;
                if operator == AssignmentOperator::Assign {
                    self.reinterpret(target, TargetContext::Assignment)
                        .map_err(|_| self.malformed(lhs, "invalid assignment target"))?
                } else {
                    self.simple_target(target)
                }
            }
        };

        Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(self.expression(rhs)?),
            operator_token: self.tok(op_node),
            loc: node.loc,
        }))
    }

    /// `ConditionalExpression: test ? consequent : alternate`.
    pub(crate) fn conditional(&self, node: &CstNode) -> ConvertResult<Expression> {
        let mut cursor = ChildCursor::new(node);
        let test = self.require(cursor.next(), node, "condition")?;
        let question = self.require(cursor.eat("?"), node, "`?`")?;
        let consequent = self.require(cursor.next(), node, "consequent")?;
        let colon = self.require(cursor.eat(":"), node, "`:`")?;
        let alternate = self.require(cursor.next(), node, "alternate")?;
        Ok(Expression::Conditional(ConditionalExpression {
            test: Box::new(self.expression(test)?),
            consequent: Box::new(self.expression(consequent)?),
            alternate: Box::new(self.expression(alternate)?),
            question_token: self.tok(question),
            colon_token: self.tok(colon),
            loc: node.loc,
        }))
    }
}

fn make_infix(
    op: InfixOperator,
    left: Expression,
    right: Expression,
    operator_token: Option<Token>,
    loc: SourceLocation,
) -> Expression {
    match op {
        InfixOperator::Binary(operator) => Expression::Binary(BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            operator_token,
            loc,
        }),
        InfixOperator::Logical(operator) => Expression::Logical(LogicalExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            operator_token,
            loc,
        }),
    }
}
