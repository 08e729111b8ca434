//! Statement parsing implementation
//!
//! # Grammar
//!
//! ```text
//! stmt ::= "print" exp ";"
//!        | exp "=" exp ";"
//!        | "{" stmt* "}"
//!        | "if" "(" exp ")" stmt
//!        | "while" "(" exp ")" stmt
//!        | "def" ident "(" exp,* ")" stmt
//!        | ident "(" exp,* ")" ";"
//! ```
//!
//! The form is chosen from the leading token(s). Expressions contain no call
//! syntax, so an identifier directly followed by `(` can only start a call
//! statement; anything not claimed by a keyword or `{` is an assignment.
//!
//! Assignment targets and `def` parameters are full expressions, not just
//! names: `a[0] = 1;` and `def f(x + 1) {}` both parse.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<NodeId, ParseError> {
        self.nested(|p| p.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<NodeId, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Print(loc)) {
            return self.parse_print_statement();
        }

        if self.match_token(&Token::LBrace(loc)) {
            return self.parse_block_statement();
        }

        if self.match_token(&Token::If(loc)) {
            let (exp, stmt) = self.parse_conditional("'if'")?;
            return Ok(self.push(Node::If { exp, stmt }));
        }

        if self.match_token(&Token::While(loc)) {
            let (exp, stmt) = self.parse_conditional("'while'")?;
            return Ok(self.push(Node::While { exp, stmt }));
        }

        if self.match_token(&Token::Def(loc)) {
            return self.parse_def_statement();
        }

        if matches!(self.peek(), Token::Ident(_, _))
            && matches!(self.peek_ahead(1), Some(Token::LParen(_)))
        {
            return self.parse_call_statement();
        }

        self.parse_assignment_statement()
    }

    /// Parse `print exp ;` after the keyword
    fn parse_print_statement(&mut self) -> Result<NodeId, ParseError> {
        let exp = self.parse_expression()?;
        self.expect_semicolon("after print statement")?;
        Ok(self.push(Node::Print { exp }))
    }

    /// Parse `{ stmt* }` after the opening brace
    fn parse_block_statement(&mut self) -> Result<NodeId, ParseError> {
        let mut stmts = Vec::new();

        while !self.check(&Token::RBrace(self.current_location())) {
            if self.is_at_end() {
                return Err(self.error("'}' after block"));
            }
            stmts.push(self.parse_statement()?);
        }
        self.advance();

        Ok(self.push(Node::Block { stmts }))
    }

    /// Parse `( exp ) stmt`, shared by `if` and `while`
    fn parse_conditional(&mut self, keyword: &str) -> Result<(NodeId, NodeId), ParseError> {
        self.expect_lparen(&format!("after {keyword}"))?;
        let exp = self.parse_expression()?;
        self.expect_rparen(&format!("after {keyword} condition"))?;
        let stmt = self.parse_statement()?;
        Ok((exp, stmt))
    }

    /// Parse `def name ( exp,* ) stmt` after the keyword
    fn parse_def_statement(&mut self) -> Result<NodeId, ParseError> {
        let name = self.expect_identifier("after 'def'")?;
        self.expect_lparen("after procedure name")?;
        let params = self.parse_expression_list(
            &Token::RParen(self.current_location()),
            "after procedure parameters",
        )?;
        let body = self.parse_statement()?;
        Ok(self.push(Node::Def { name, params, body }))
    }

    /// Parse `name ( exp,* ) ;`
    fn parse_call_statement(&mut self) -> Result<NodeId, ParseError> {
        let name = self.expect_identifier("at start of call")?;
        self.expect_lparen("after procedure name")?;
        let args = self.parse_expression_list(
            &Token::RParen(self.current_location()),
            "after call arguments",
        )?;
        self.expect_semicolon("after call statement")?;
        Ok(self.push(Node::Call { name, args }))
    }

    /// Parse `exp = exp ;`
    fn parse_assignment_statement(&mut self) -> Result<NodeId, ParseError> {
        let left = self.parse_expression()?;
        self.expect_token(&Token::Eq(self.current_location()), "'=' in assignment")?;
        let right = self.parse_expression()?;
        self.expect_semicolon("after assignment")?;
        Ok(self.push(Node::Assign { left, right }))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::{Node, SourceLocation};
    use crate::parser::parse::parse;

    fn stmt(source: &str) -> String {
        let ast = parse(source).unwrap();
        ast.display(ast.root()).to_string()
    }

    #[test]
    fn test_statement_forms() {
        assert_eq!(stmt("print x;"), "Print(Var('x'))");
        assert_eq!(stmt("x = 1;"), "Assign(Var('x'),Int(1))");
        assert_eq!(stmt("{}"), "Block([])");
        assert_eq!(stmt("if (x) print 1;"), "If(Var('x'),Print(Int(1)))");
        assert_eq!(
            stmt("while (i < 3) { i = i + 1; }"),
            "While(BinOpExp(Var('i'),'<',Int(3)),Block([Assign(Var('i'),BinOpExp(Var('i'),'+',Int(1)))]))"
        );
        assert_eq!(
            stmt("def f(a, b) print a;"),
            "Def('f',[Var('a'),Var('b')],Print(Var('a')))"
        );
        assert_eq!(stmt("f();"), "Call('f',[])");
        assert_eq!(stmt("f(1, \"s\");"), "Call('f',[Int(1),String('s')])");
    }

    #[test]
    fn test_permissive_targets() {
        assert_eq!(stmt("a[0] = 1;"), "Assign(Index(Var('a'),Int(0)),Int(1))");
        assert_eq!(stmt("1 + 2 = 3;"), "Assign(BinOpExp(Int(1),'+',Int(2)),Int(3))");
        assert_eq!(
            stmt("def g(x + 1, [y]) {}"),
            "Def('g',[BinOpExp(Var('x'),'+',Int(1)),Array([Var('y')])],Block([]))"
        );
    }

    #[test]
    fn test_block_keeps_order() {
        let ast = parse("{ a = 1; print a; f(a); }").unwrap();
        match ast.root_node() {
            Node::Block { stmts } => {
                let kinds: Vec<_> = stmts.iter().map(|s| ast.get(*s).kind().name()).collect();
                assert_eq!(kinds, ["Assign", "Print", "Call"]);
            }
            other => panic!("Expected block, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_closing_paren() {
        let err = parse("if (x").unwrap_err();
        assert_eq!(err.expected, "')' after 'if' condition");
        assert_eq!(err.found, "end of file");
        assert_eq!(err.location, SourceLocation::new(1, 6));
    }

    #[test]
    fn test_unclosed_block() {
        let err = parse("{ print 1;").unwrap_err();
        assert_eq!(err.expected, "'}' after block");
    }

    #[test]
    fn test_call_requires_semicolon() {
        let err = parse("f(1)").unwrap_err();
        assert_eq!(err.expected, "';' after call statement");
    }

    #[test]
    fn test_keywords_are_not_call_names() {
        assert!(parse("print(1);").is_ok());
        assert!(parse("def (x) {}").is_err());
        assert!(parse("not(x);").is_err());
    }

    #[test]
    fn test_assignment_needs_single_equals() {
        let err = parse("x == 1;").unwrap_err();
        assert_eq!(err.expected, "'=' in assignment");
    }
}
