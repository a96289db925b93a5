//! Recursive-descent parser producing the source tree.
//!
//! Each form is selected by the token after its opening parenthesis:
//!
//! ```text
//! (name args...)          -> CallExpression
//! (op args...)            -> BinaryExpression   op in + - * / < > =
//! (defvar name init)      -> VariableDeclarator
//! (if test conseq [alt])  -> IfStatement
//! ```
//!
//! The cursor lives in [`Parser`] and is threaded by `&mut self` through the
//! recursion.

use crate::error::ParseError;
use crate::ir::source::{BinaryOperator, Node, Program};
use crate::token::{Token, TokenKind};

/// Default bound on form nesting. The transformer and code generator recurse
/// once per level, so this bounds their stack use too.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a token stream with the default nesting limit.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Cursor over a borrowed token stream.
pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Walk top-level forms until the tokens run out.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while self.pos < self.tokens.len() {
            body.push(self.walk()?);
        }
        Ok(Program::new(body))
    }

    fn walk(&mut self) -> Result<Node, ParseError> {
        let token = self.current("an expression")?;
        match token.kind {
            TokenKind::Number => {
                self.pos += 1;
                Ok(Node::number(token.literal.as_str()))
            }
            TokenKind::Name => {
                self.pos += 1;
                Ok(Node::string(token.literal.as_str()))
            }
            TokenKind::Paren if token.is_open_paren() => self.walk_form(token),
            _ => Err(unexpected(token)),
        }
    }

    fn walk_form(&mut self, open: &Token) -> Result<Node, ParseError> {
        if self.depth >= self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
                position: open.span.start,
            });
        }
        self.depth += 1;
        self.pos += 1;

        let head = self.current("a form head")?;
        let node = match head.kind {
            TokenKind::Name => {
                self.pos += 1;
                Node::CallExpression {
                    name: head.literal.clone(),
                    params: self.walk_until_close()?,
                }
            }
            TokenKind::Operator | TokenKind::CondOperator => {
                let operator = BinaryOperator::from_symbol(&head.literal).ok_or_else(|| {
                    ParseError::UnknownOperator {
                        operator: head.literal.clone(),
                        position: head.span.start,
                    }
                })?;
                self.pos += 1;
                Node::BinaryExpression {
                    operator,
                    params: self.walk_until_close()?,
                }
            }
            TokenKind::Keyword => match head.literal.as_str() {
                "defvar" => {
                    self.pos += 1;
                    let name = self.declared_name()?;
                    let next = self.current("an initializer")?;
                    if next.is_close_paren() {
                        return Err(ParseError::MissingInitializer {
                            name,
                            position: next.span.start,
                        });
                    }
                    Node::VariableDeclarator {
                        name,
                        params: self.walk_until_close()?,
                    }
                }
                "if" => {
                    self.pos += 1;
                    let test = self.walk()?;
                    let conseq = self.walk()?;
                    Node::IfStatement {
                        test: Box::new(test),
                        conseq: Box::new(conseq),
                        alt: self.walk_until_close()?,
                    }
                }
                other => {
                    return Err(ParseError::UnsupportedKeyword {
                        keyword: other.to_string(),
                        position: head.span.start,
                    });
                }
            },
            TokenKind::Paren | TokenKind::Number => return Err(unexpected(head)),
        };

        self.expect_close()?;
        self.depth -= 1;
        Ok(node)
    }

    /// Name token following `defvar`.
    fn declared_name(&mut self) -> Result<String, ParseError> {
        let token = self.current("a declared name")?;
        if token.kind != TokenKind::Name {
            return Err(ParseError::ExpectedName {
                kind: token.kind,
                literal: token.literal.clone(),
                position: token.span.start,
            });
        }
        self.pos += 1;
        Ok(token.literal.clone())
    }

    /// Walk children until the closing parenthesis, leaving it unconsumed.
    fn walk_until_close(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut children = Vec::new();
        while !self.current("')'")?.is_close_paren() {
            children.push(self.walk()?);
        }
        Ok(children)
    }

    fn expect_close(&mut self) -> Result<(), ParseError> {
        let token = self.current("')'")?;
        if !token.is_close_paren() {
            return Err(unexpected(token));
        }
        self.pos += 1;
        Ok(())
    }

    fn current(&self, expected: &'static str) -> Result<&'a Token, ParseError> {
        self.tokens
            .get(self.pos)
            .ok_or(ParseError::UnexpectedEof { expected })
    }
}

fn unexpected(token: &Token) -> ParseError {
    ParseError::UnexpectedToken {
        kind: token.kind,
        literal: token.literal.clone(),
        position: token.span.start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::lexer::tokenize;

    fn parse_str(source: &str) -> Result<Program, ParseError> {
        parse(&tokenize(source).expect("tokenize failed"))
    }

    fn parse_one(source: &str) -> Node {
        let mut program = parse_str(source).expect("parse failed");
        assert_eq!(program.body.len(), 1);
        program.body.remove(0)
    }

    #[test]
    fn test_leaves_at_top_level() {
        let program = parse_str("42 x").unwrap();
        assert_eq!(program.body, vec![Node::number("42"), Node::string("x")]);
    }

    #[test]
    fn test_binary_expression() {
        assert_eq!(
            parse_one("(+ 10 20)"),
            Node::binary(BinaryOperator::Add, vec![Node::number("10"), Node::number("20")])
        );
    }

    #[test]
    fn test_nested_call() {
        assert_eq!(
            parse_one("(add 2 (subtract 4 2))"),
            Node::call(
                "add",
                vec![
                    Node::number("2"),
                    Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
                ]
            )
        );
    }

    #[test]
    fn test_call_without_arguments() {
        assert_eq!(parse_one("(now)"), Node::call("now", vec![]));
    }

    #[test]
    fn test_variable_declarator() {
        assert_eq!(
            parse_one("(defvar x (+ 1 2))"),
            Node::declare(
                "x",
                Node::binary(BinaryOperator::Add, vec![Node::number("1"), Node::number("2")])
            )
        );
    }

    #[test]
    fn test_if_with_alternative() {
        assert_eq!(
            parse_one("(if (< 3 1) 10 20)"),
            Node::if_stmt(
                Node::binary(BinaryOperator::Lt, vec![Node::number("3"), Node::number("1")]),
                Node::number("10"),
                Some(Node::number("20")),
            )
        );
    }

    #[test]
    fn test_if_without_alternative() {
        assert_eq!(
            parse_one("(if x 1)"),
            Node::if_stmt(Node::string("x"), Node::number("1"), None)
        );
    }

    #[test]
    fn test_if_collects_surplus_alternatives() {
        match parse_one("(if x 1 2 3)") {
            Node::IfStatement { alt, .. } => {
                assert_eq!(alt, vec![Node::number("2"), Node::number("3")]);
            }
            other => panic!("expected IfStatement, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_multiple_top_level_forms() {
        let program = parse_str("(+ 1 2) (defvar y 3)").unwrap();
        assert_eq!(program.body.len(), 2);
        assert_eq!(program.body[1].kind_name(), "VariableDeclarator");
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(parse(&[]).unwrap(), Program::default());
    }

    #[test]
    fn test_unclosed_form() {
        assert_eq!(
            parse_str("(+ 1 2"),
            Err(ParseError::UnexpectedEof { expected: "')'" })
        );
    }

    #[test]
    fn test_excess_close_paren() {
        assert_eq!(
            parse_str("(+ 1 2))"),
            Err(ParseError::UnexpectedToken {
                kind: TokenKind::Paren,
                literal: ")".into(),
                position: 7,
            })
        );
    }

    #[test]
    fn test_lone_open_paren() {
        assert_eq!(
            parse_str("("),
            Err(ParseError::UnexpectedEof {
                expected: "a form head"
            })
        );
    }

    #[test]
    fn test_unsupported_keywords() {
        for (source, keyword) in [("(define x 1)", "define"), ("(write-line x)", "write-line")] {
            assert_eq!(
                parse_str(source),
                Err(ParseError::UnsupportedKeyword {
                    keyword: keyword.into(),
                    position: 1,
                })
            );
        }
    }

    #[test]
    fn test_number_in_head_position() {
        assert!(matches!(
            parse_str("(10 20)"),
            Err(ParseError::UnexpectedToken {
                kind: TokenKind::Number,
                ..
            })
        ));
    }

    #[test]
    fn test_operator_in_argument_position() {
        assert!(matches!(
            parse_str("(+ 1 *)"),
            Err(ParseError::UnexpectedToken {
                kind: TokenKind::Operator,
                ..
            })
        ));
    }

    #[test]
    fn test_defvar_requires_name() {
        assert_eq!(
            parse_str("(defvar 1 2)"),
            Err(ParseError::ExpectedName {
                kind: TokenKind::Number,
                literal: "1".into(),
                position: 8,
            })
        );
    }

    #[test]
    fn test_defvar_requires_initializer() {
        assert_eq!(
            parse_str("(defvar x)"),
            Err(ParseError::MissingInitializer {
                name: "x".into(),
                position: 9,
            })
        );
        assert_eq!(
            parse_str("(defvar x"),
            Err(ParseError::UnexpectedEof {
                expected: "an initializer"
            })
        );
    }

    #[test]
    fn test_defvar_keeps_every_initializer() {
        match parse_one("(defvar x 1 2)") {
            Node::VariableDeclarator { params, .. } => {
                assert_eq!(params, vec![Node::number("1"), Node::number("2")]);
            }
            other => panic!("expected VariableDeclarator, got {}", other.kind_name()),
        }
    }

    #[test]
    fn test_if_missing_consequent() {
        assert!(matches!(
            parse_str("(if x)"),
            Err(ParseError::UnexpectedToken {
                kind: TokenKind::Paren,
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_operator_from_foreign_stream() {
        let tokens = vec![
            Token::bare(TokenKind::Paren, "("),
            Token::bare(TokenKind::Operator, "%"),
            Token::bare(TokenKind::Number, "1"),
            Token::bare(TokenKind::Paren, ")"),
        ];
        assert_eq!(
            parse(&tokens),
            Err(ParseError::UnknownOperator {
                operator: "%".into(),
                position: 0,
            })
        );
    }

    #[test]
    fn test_nesting_limit() {
        let source = format!("{}1{}", "(+ ".repeat(5), ")".repeat(5));
        let tokens = tokenize(&source).unwrap();

        assert!(Parser::new(&tokens).with_max_depth(5).parse_program().is_ok());
        assert_eq!(
            Parser::new(&tokens).with_max_depth(4).parse_program(),
            Err(ParseError::NestingTooDeep {
                limit: 4,
                position: 12,
            })
        );
    }

    #[test]
    fn test_depth_resets_between_siblings() {
        let tokens = tokenize("(+ (+ 1 2) (+ 3 4)) (+ 5 6)").unwrap();
        assert!(Parser::new(&tokens).with_max_depth(2).parse_program().is_ok());
    }
}
