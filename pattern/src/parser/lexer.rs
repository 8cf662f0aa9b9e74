//! Lexer (tokenizer) for pattern and text source.

use super::Span;
use crate::{PatternError, PatternResult};

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Literals
    Ident(String),
    /// `$name`, stored without the sigil.
    Var(String),
    Int(i64),
    String(String),
    True,
    False,

    // Symbols
    LParen, // (
    RParen, // )
    Comma,  // ,
    Dot,    // .

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Ident(_) => "identifier",
            TokenKind::Var(_) => "variable",
            TokenKind::Int(_) => "integer",
            TokenKind::String(_) => "string",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Eof => "end of input",
        }
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Lexer state.
pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens.
    pub fn tokenize(mut self) -> PatternResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn current_span(&self) -> Span {
        Span::new(self.line, self.column)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_whitespace_and_comments(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else if c == '#' {
                while let Some(c) = self.next_char() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    fn take_word(&mut self, first: Option<char>) -> String {
        let mut word: String = first.into_iter().collect();
        while let Some(c) = self.peek_char() {
            if c.is_alphanumeric() || c == '_' {
                word.push(c);
                self.next_char();
            } else {
                break;
            }
        }
        word
    }

    fn next_token(&mut self) -> PatternResult<Token> {
        self.skip_whitespace_and_comments();

        let span = self.current_span();
        let Some(c) = self.next_char() else {
            return Ok(Token {
                kind: TokenKind::Eof,
                span,
            });
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '$' => {
                let name = self.take_word(None);
                if name.is_empty() {
                    return Err(PatternError::parse("expected variable name after '$'", span));
                }
                TokenKind::Var(name)
            }
            '"' => self.string(span)?,
            '-' | '0'..='9' => self.integer(c, span)?,
            c if c.is_alphabetic() || c == '_' => match self.take_word(Some(c)).as_str() {
                "true" => TokenKind::True,
                "false" => TokenKind::False,
                word => TokenKind::Ident(word.to_string()),
            },
            other => {
                return Err(PatternError::parse(
                    format!("unexpected character '{}'", other),
                    span,
                ))
            }
        };

        Ok(Token { kind, span })
    }

    fn string(&mut self, span: Span) -> PatternResult<TokenKind> {
        let mut value = String::new();
        loop {
            match self.next_char() {
                Some('"') => return Ok(TokenKind::String(value)),
                Some('\\') => match self.next_char() {
                    Some('n') => value.push('\n'),
                    Some('t') => value.push('\t'),
                    Some(c) => value.push(c),
                    None => break,
                },
                Some(c) => value.push(c),
                None => break,
            }
        }
        Err(PatternError::parse("unterminated string", span))
    }

    fn integer(&mut self, first: char, span: Span) -> PatternResult<TokenKind> {
        let mut digits = String::from(first);
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.next_char();
            } else {
                break;
            }
        }
        digits
            .parse::<i64>()
            .map(TokenKind::Int)
            .map_err(|_| PatternError::parse(format!("invalid integer '{}'", digits), span))
    }
}
