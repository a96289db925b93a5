//! Pseudo-C writer for the target tree.
//!
//! Output is rendered text only; it is not meant to compile. Conditionals bind
//! their branches to the fixed names `a` and `b`, so nested conditionals reuse
//! the same names.

use crate::error::CodeGenError;
use crate::ir::target::{Node, Program};

/// Renders target trees into a string buffer.
pub struct CWriter {
    output: String,
}

impl CWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
        }
    }

    /// Render a program, one top-level node per line.
    pub fn emit(program: &Program) -> Result<String, CodeGenError> {
        let mut writer = Self::new();
        writer.write_program(program)?;
        Ok(writer.output)
    }

    /// Render a single node and its subtree.
    pub fn emit_node(node: &Node) -> Result<String, CodeGenError> {
        let mut writer = Self::new();
        writer.write_node(node)?;
        Ok(writer.output)
    }

    fn write_program(&mut self, program: &Program) -> Result<(), CodeGenError> {
        for (i, node) in program.body.iter().enumerate() {
            if i > 0 {
                self.output.push('\n');
            }
            self.write_node(node)?;
        }
        Ok(())
    }

    fn write_node(&mut self, node: &Node) -> Result<(), CodeGenError> {
        match node {
            Node::ExpressionStatement { expression } => {
                self.write_node(expression)?;
                // A conditional already ends with its closing brace.
                if !matches!(expression.as_ref(), Node::IfStatement { .. }) {
                    self.output.push(';');
                }
            }

            Node::CallExpression { callee, arguments } => {
                self.output.push_str(&callee.name);
                self.output.push('(');
                self.write_separated(arguments, ", ")?;
                self.output.push(')');
            }

            Node::BinaryExpression {
                operation,
                arguments,
            } => {
                let separator = format!(" {} ", operation.value);
                self.output.push('(');
                self.write_separated(arguments, &separator)?;
                self.output.push(')');
            }

            Node::VariableDeclarator { id, init } => match init.as_slice() {
                [] => {
                    return Err(CodeGenError::MissingInitializer {
                        name: id.name.clone(),
                    });
                }
                [Node::StringLiteral { value }] => {
                    self.output.push_str("char *");
                    self.output.push_str(&id.name);
                    self.output.push_str(" = \"");
                    self.output.push_str(value);
                    self.output.push('"');
                }
                [value] => {
                    self.output.push_str("int ");
                    self.output.push_str(&id.name);
                    self.output.push_str(" = ");
                    self.write_node(value)?;
                }
                _ => {
                    return Err(CodeGenError::ExtraInitializers {
                        name: id.name.clone(),
                        count: init.len(),
                    });
                }
            },

            Node::IfStatement { body } => {
                let (condition, consequent, alternative) = match body.as_slice() {
                    [condition, consequent] => (condition, consequent, None),
                    [condition, consequent, alternative] => {
                        (condition, consequent, Some(alternative))
                    }
                    _ => {
                        return Err(CodeGenError::IncompleteConditional { slots: body.len() });
                    }
                };

                self.output.push_str("if ");
                self.write_node(condition)?;
                self.output.push_str(" {\n var a = ");
                self.write_node(consequent)?;
                self.output.push_str(";\n}");

                if let Some(alternative) = alternative {
                    self.output.push_str("\nelse {\n var b = ");
                    self.write_node(alternative)?;
                    self.output.push_str(";\n}");
                }
            }

            Node::Identifier { name } => self.output.push_str(name),
            Node::Operator { value }
            | Node::NumberLiteral { value }
            | Node::StringLiteral { value } => self.output.push_str(value),
        }
        Ok(())
    }

    fn write_separated(&mut self, nodes: &[Node], separator: &str) -> Result<(), CodeGenError> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.output.push_str(separator);
            }
            self.write_node(node)?;
        }
        Ok(())
    }
}

impl Default for CWriter {
    fn default() -> Self {
        Self::new()
    }
}
