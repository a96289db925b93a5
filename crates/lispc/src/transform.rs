//! Rewrite of the source tree into the target tree.
//!
//! The rewrite is pre-order: every source node builds its target node, hands
//! a fresh child list to its own children, and appends itself to the list
//! supplied by its parent. Whether the node is wrapped in an
//! `ExpressionStatement` depends on the kind of that parent at run time:
//!
//! | node               | left unwrapped under                          |
//! |--------------------|-----------------------------------------------|
//! | literal            | anything                                      |
//! | CallExpression     | CallExpression, BinaryExpression              |
//! | BinaryExpression   | BinaryExpression, CallExpression, VariableDeclarator, IfStatement |
//! | VariableDeclarator | VariableDeclarator                            |
//! | IfStatement        | IfStatement                                   |

use crate::ir::source::{self, BinaryOperator};
use crate::ir::target;

/// Kind of the node whose child list is being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    Program,
    Call,
    Binary,
    Declarator,
    If,
}

impl Parent {
    /// Whether a compound node of kind `child` appended under `self` becomes
    /// a statement.
    fn wraps(self, child: Parent) -> bool {
        match child {
            Parent::Call => !matches!(self, Parent::Call | Parent::Binary),
            Parent::Binary => !matches!(
                self,
                Parent::Binary | Parent::Call | Parent::Declarator | Parent::If
            ),
            Parent::Declarator => self != Parent::Declarator,
            Parent::If => self != Parent::If,
            Parent::Program => false,
        }
    }
}

/// Rewrite a parsed program into its target shape.
pub fn transform(program: &source::Program) -> target::Program {
    let mut body = Vec::with_capacity(program.body.len());
    rewrite_all(&program.body, Parent::Program, &mut body);
    target::Program::new(body)
}

fn rewrite_all(nodes: &[source::Node], parent: Parent, out: &mut Vec<target::Node>) {
    for node in nodes {
        rewrite(node, parent, out);
    }
}

/// Append the target form of `node` to `out`. Pushes exactly one node.
fn rewrite(node: &source::Node, parent: Parent, out: &mut Vec<target::Node>) {
    let (rewritten, kind) = match node {
        source::Node::NumberLiteral { value } => {
            out.push(target::Node::number(value.as_str()));
            return;
        }
        source::Node::StringLiteral { value } => {
            out.push(target::Node::string(value.as_str()));
            return;
        }
        source::Node::CallExpression { name, params } => {
            let mut arguments = Vec::with_capacity(params.len());
            rewrite_all(params, Parent::Call, &mut arguments);
            (target::Node::call(name.as_str(), arguments), Parent::Call)
        }
        source::Node::BinaryExpression { operator, params } => {
            let mut arguments = Vec::with_capacity(params.len());
            rewrite_all(params, Parent::Binary, &mut arguments);
            (
                target::Node::binary(operator_text(*operator), arguments),
                Parent::Binary,
            )
        }
        source::Node::VariableDeclarator { name, params } => {
            let mut init = Vec::with_capacity(1);
            if let Some((first, rest)) = params.split_first() {
                rewrite(first, Parent::Declarator, &mut init);
                if !rest.is_empty() {
                    tracing::warn!(
                        name = %name,
                        dropped = rest.len(),
                        "declaration has more than one initializer, ignoring the rest"
                    );
                }
            }
            (target::Node::declare(name.as_str(), init), Parent::Declarator)
        }
        source::Node::IfStatement { test, conseq, alt } => {
            let mut body = Vec::with_capacity(3);
            rewrite(test, Parent::If, &mut body);
            rewrite(conseq, Parent::If, &mut body);
            if let Some((first, rest)) = alt.split_first() {
                rewrite(first, Parent::If, &mut body);
                if !rest.is_empty() {
                    tracing::warn!(
                        dropped = rest.len(),
                        "conditional has more than one alternative, ignoring the rest"
                    );
                }
            }
            (target::Node::if_stmt(body), Parent::If)
        }
    };

    if parent.wraps(kind) {
        out.push(target::Node::statement(rewritten));
    } else {
        out.push(rewritten);
    }
}

/// Operator text in the output; `=` compares, so it becomes `==`.
fn operator_text(operator: BinaryOperator) -> &'static str {
    match operator {
        BinaryOperator::Eq => "==",
        other => other.symbol(),
    }
}
