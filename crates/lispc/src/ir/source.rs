//! Source tree, shaped after the surface grammar.

use serde::Serialize;

/// Root of a parsed program: one node per top-level form.
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

/// Operators accepted in the head of a binary form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">")]
    Gt,
    /// Written `=` in the source; compares for equality.
    #[serde(rename = "=")]
    Eq,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "+" => Self::Add,
            "-" => Self::Sub,
            "*" => Self::Mul,
            "/" => Self::Div,
            "<" => Self::Lt,
            ">" => Self::Gt,
            "=" => Self::Eq,
            _ => return None,
        })
    }

    /// The symbol as written in the source.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "=",
        }
    }
}

/// One node of the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
    NumberLiteral {
        value: String,
    },

    /// A bare name in expression position.
    StringLiteral {
        value: String,
    },

    CallExpression {
        name: String,
        params: Vec<Node>,
    },

    BinaryExpression {
        operator: BinaryOperator,
        params: Vec<Node>,
    },

    /// `(defvar name init)`. `params` holds the initializer; it is a list
    /// because it is collected like call arguments.
    VariableDeclarator {
        name: String,
        params: Vec<Node>,
    },

    /// `(if test conseq [alt])`. Only the first `alt` entry is meaningful.
    IfStatement {
        test: Box<Node>,
        conseq: Box<Node>,
        alt: Vec<Node>,
    },
}

impl Node {
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

    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression {
            name: name.into(),
            params,
        }
    }

    pub fn binary(operator: BinaryOperator, params: Vec<Node>) -> Self {
        Node::BinaryExpression { operator, params }
    }

    pub fn declare(name: impl Into<String>, init: Node) -> Self {
        Node::VariableDeclarator {
            name: name.into(),
            params: vec![init],
        }
    }

    pub fn if_stmt(test: Node, conseq: Node, alt: Option<Node>) -> Self {
        Node::IfStatement {
            test: Box::new(test),
            conseq: Box::new(conseq),
            alt: alt.into_iter().collect(),
        }
    }

    /// Name of the node kind, as used in the serialized form.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::NumberLiteral { .. } => "NumberLiteral",
            Node::StringLiteral { .. } => "StringLiteral",
            Node::CallExpression { .. } => "CallExpression",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::VariableDeclarator { .. } => "VariableDeclarator",
            Node::IfStatement { .. } => "IfStatement",
        }
    }
}
