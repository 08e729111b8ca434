//! Lexer (tokenizer) for MustScript source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! Whitespace and `#` line comments are skipped between tokens. Keywords are
//! recognised by looking up each scanned word, so a reserved word can never
//! come out as an identifier while `printer` or `iffy` still do.

use super::ast::SourceLocation;
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    /// Decimal digits with leading zeros removed; never empty.
    IntLiteral(String, SourceLocation),
    StringLiteral(String, SourceLocation),

    // Identifiers
    Ident(String, SourceLocation),

    // Keywords
    Print(SourceLocation),
    If(SourceLocation),
    While(SourceLocation),
    Def(SourceLocation),
    Or(SourceLocation),
    And(SourceLocation),
    Not(SourceLocation),

    // Arithmetic
    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -
    Star(SourceLocation),  // *
    Slash(SourceLocation), // /

    // Comparison
    EqEq(SourceLocation), // ==
    Lt(SourceLocation),   // <
    Gt(SourceLocation),   // >

    // Assignment
    Eq(SourceLocation), // =

    // Punctuation
    LParen(SourceLocation),    // (
    RParen(SourceLocation),    // )
    LBrace(SourceLocation),    // {
    RBrace(SourceLocation),    // }
    LBracket(SourceLocation),  // [
    RBracket(SourceLocation),  // ]
    Semicolon(SourceLocation), // ;
    Comma(SourceLocation),     // ,

    // End of file
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::IntLiteral(_, loc)
            | Token::StringLiteral(_, loc)
            | Token::Ident(_, loc)
            | Token::Print(loc)
            | Token::If(loc)
            | Token::While(loc)
            | Token::Def(loc)
            | Token::Or(loc)
            | Token::And(loc)
            | Token::Not(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::Star(loc)
            | Token::Slash(loc)
            | Token::EqEq(loc)
            | Token::Lt(loc)
            | Token::Gt(loc)
            | Token::Eq(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::LBracket(loc)
            | Token::RBracket(loc)
            | Token::Semicolon(loc)
            | Token::Comma(loc)
            | Token::Eof(loc) => *loc,
        }
    }

    /// Operator spelling as it appears in `BinOpExp`/`UniOpExp` facts, for
    /// tokens that are operators.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Token::Or(_) => Some("or"),
            Token::And(_) => Some("and"),
            Token::Not(_) => Some("not"),
            Token::Plus(_) => Some("+"),
            Token::Minus(_) => Some("-"),
            Token::Star(_) => Some("*"),
            Token::Slash(_) => Some("/"),
            Token::EqEq(_) => Some("=="),
            Token::Lt(_) => Some("<"),
            Token::Gt(_) => Some(">"),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::IntLiteral(n, _) => write!(f, "int literal {}", n),
            Token::StringLiteral(s, _) => write!(f, "string literal \"{}\"", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Print(_) => write!(f, "'print'"),
            Token::If(_) => write!(f, "'if'"),
            Token::While(_) => write!(f, "'while'"),
            Token::Def(_) => write!(f, "'def'"),
            Token::Or(_) => write!(f, "'or'"),
            Token::And(_) => write!(f, "'and'"),
            Token::Not(_) => write!(f, "'not'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::Star(_) => write!(f, "'*'"),
            Token::Slash(_) => write!(f, "'/'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::LBracket(_) => write!(f, "'['"),
            Token::RBracket(_) => write!(f, "']'"),
            Token::Semicolon(_) => write!(f, "';'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Eof(_) => write!(f, "end of file"),
        }
    }
}

/// Lexer error type; converted into a `ParseError` before it reaches callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub expected: String,
    pub found: String,
    pub location: SourceLocation,
}

/// Lexer for MustScript source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            expected: "a token".to_string(),
            found: "end of file".to_string(),
            location: loc,
        })?;

        match ch {
            '"' => self.string_literal(loc),
            '0'..='9' => Ok(self.number_literal(ch, loc)),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, loc)),

            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::EqEq(loc))
                } else {
                    Ok(Token::Eq(loc))
                }
            }
            '<' => Ok(Token::Lt(loc)),
            '>' => Ok(Token::Gt(loc)),
            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '*' => Ok(Token::Star(loc)),
            '/' => Ok(Token::Slash(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '{' => Ok(Token::LBrace(loc)),
            '}' => Ok(Token::RBrace(loc)),
            '[' => Ok(Token::LBracket(loc)),
            ']' => Ok(Token::RBracket(loc)),
            ';' => Ok(Token::Semicolon(loc)),
            ',' => Ok(Token::Comma(loc)),

            _ => Err(LexError {
                expected: "a token".to_string(),
                found: format!("character '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Parse string literal; the opening quote is already consumed.
    /// There are no escapes: everything up to the next `"` is the value.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.advance() {
            if ch == '"' {
                return Ok(Token::StringLiteral(string, loc));
            }
            string.push(ch);
        }

        Err(LexError {
            expected: "closing '\"' of string literal".to_string(),
            found: "end of file".to_string(),
            location: loc,
        })
    }

    /// Parse integer literal. Literals have no size limit, so the value is
    /// kept as its digit string with leading zeros removed (`007` -> `7`).
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let digits = num_str.trim_start_matches('0');
        let value = if digits.is_empty() { "0" } else { digits };

        Token::IntLiteral(value.to_string(), loc)
    }

    /// Parse identifier or keyword. The first character is an ASCII letter
    /// or `_`; later characters may be any Unicode letter or digit.
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "print" => Token::Print(loc),
            "if" => Token::If(loc),
            "while" => Token::While(loc),
            "def" => Token::Def(loc),
            "or" => Token::Or(loc),
            "and" => Token::And(loc),
            "not" => Token::Not(loc),
            _ => Token::Ident(ident, loc),
        }
    }

    /// Skip whitespace and `#` comments
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else if ch == '#' {
                self.skip_line_comment();
            } else {
                break;
            }
        }
    }

    /// Skip single-line comment (# ...)
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
