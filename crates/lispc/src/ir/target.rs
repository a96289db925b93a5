//! Target tree, shaped after the emitted pseudo-C.

use serde::Serialize;

/// Root of the target tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "type")]
pub struct Program {
    pub body: Vec<Node>,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self { body }
    }
}

/// Callee of a call or name of a declared variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Operator text as it appears in the output (`==` rather than `=`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Operator {
    pub value: String,
}

impl Operator {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Marks a node as a standalone statement.
    ExpressionStatement {
        expression: Box<Node>,
    },

    CallExpression {
        callee: Identifier,
        arguments: Vec<Node>,
    },

    BinaryExpression {
        operation: Operator,
        arguments: Vec<Node>,
    },

    /// `init` holds exactly one node in well-formed trees.
    VariableDeclarator {
        id: Identifier,
        init: Vec<Node>,
    },

    /// `body` is `[condition, consequent]` or `[condition, consequent, alternative]`.
    IfStatement {
        body: Vec<Node>,
    },

    Identifier {
        name: String,
    },

    Operator {
        value: String,
    },

    NumberLiteral {
        value: String,
    },

    StringLiteral {
        value: String,
    },
}

impl Node {
    pub fn statement(expression: Node) -> Self {
        Node::ExpressionStatement {
            expression: Box::new(expression),
        }
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::CallExpression {
            callee: Identifier::new(callee),
            arguments,
        }
    }

    pub fn binary(operation: impl Into<String>, arguments: Vec<Node>) -> Self {
        Node::BinaryExpression {
            operation: Operator::new(operation),
            arguments,
        }
    }

    pub fn declare(id: impl Into<String>, init: Vec<Node>) -> Self {
        Node::VariableDeclarator {
            id: Identifier::new(id),
            init,
        }
    }

    pub fn if_stmt(body: Vec<Node>) -> Self {
        Node::IfStatement { body }
    }

    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral {
            value: value.into(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral {
            value: value.into(),
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(self, Node::ExpressionStatement { .. })
    }
}
