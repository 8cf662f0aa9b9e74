//! Parser for the pattern and text syntax.
//!
//! ```text
//! pattern := clause ("," clause)*
//! texts   := (clause "."?)*
//! clause  := ident "(" [term ("," term)*] ")"
//! term    := $var | integer | "string" | true | false | ident
//! ```
//!
//! Texts must be ground. `#` starts a line comment.

mod lexer;

use crate::{Clause, Pattern, PatternError, PatternResult, Term};
use lexer::{Lexer, Token, TokenKind};
use std::fmt;
use xpm_core::{Value, Variable};
use xpm_corpus::Corpus;

/// Source location (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Parse a pattern: clauses separated by commas.
pub fn parse_pattern(source: &str) -> PatternResult<Pattern> {
    let mut parser = Parser::new(source)?;
    let mut clauses = vec![parser.clause()?];
    while parser.eat(&TokenKind::Comma) {
        clauses.push(parser.clause()?);
    }
    parser.expect(&TokenKind::Eof)?;
    Ok(Pattern::new(clauses))
}

/// Parse ground texts as `(relation, args)` pairs.
pub fn parse_texts(source: &str) -> PatternResult<Vec<(String, Vec<Value>)>> {
    let mut parser = Parser::new(source)?;
    let mut texts = Vec::new();
    while !parser.check(&TokenKind::Eof) {
        let span = parser.peek().span;
        let clause = parser.clause()?;
        let args = clause
            .terms
            .into_iter()
            .map(|term| match term {
                Term::Const(value) => Ok(value),
                Term::Var(var) => Err(PatternError::parse(
                    format!("texts must be ground, found variable {}", var),
                    span,
                )),
            })
            .collect::<PatternResult<Vec<_>>>()?;
        texts.push((clause.relation, args));
        parser.eat(&TokenKind::Dot);
    }
    Ok(texts)
}

/// Parse ground texts straight into a new corpus.
pub fn parse_corpus(source: &str) -> PatternResult<Corpus> {
    Ok(parse_texts(source)?.into_iter().collect())
}

/// Parser state.
struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(input: &str) -> PatternResult<Self> {
        let tokens = Lexer::new(input).tokenize()?;
        Ok(Self { tokens, pos: 0 })
    }

    fn peek(&self) -> &Token {
        // The lexer always ends the stream with Eof, and `advance` never
        // moves past it.
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind) -> PatternResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let token = self.peek();
            Err(PatternError::unexpected_token(
                token.span,
                kind.name(),
                token.kind.name(),
            ))
        }
    }

    fn clause(&mut self) -> PatternResult<Clause> {
        let token = self.advance();
        let relation = match token.kind {
            TokenKind::Ident(name) => name,
            other => {
                return Err(PatternError::unexpected_token(
                    token.span,
                    "relation name",
                    other.name(),
                ))
            }
        };

        self.expect(&TokenKind::LParen)?;
        let mut terms = Vec::new();
        if !self.check(&TokenKind::RParen) {
            terms.push(self.term()?);
            while self.eat(&TokenKind::Comma) {
                terms.push(self.term()?);
            }
        }
        self.expect(&TokenKind::RParen)?;
        Ok(Clause::new(relation, terms))
    }

    fn term(&mut self) -> PatternResult<Term> {
        let token = self.advance();
        let term = match token.kind {
            TokenKind::Var(name) => Term::Var(Variable::parse(&name)?),
            TokenKind::Int(i) => Term::Const(Value::Int(i)),
            TokenKind::String(s) => Term::Const(Value::Str(s)),
            TokenKind::True => Term::Const(Value::Bool(true)),
            TokenKind::False => Term::Const(Value::Bool(false)),
            TokenKind::Ident(name) => Term::Const(Value::Symbol(name)),
            other => {
                return Err(PatternError::unexpected_token(
                    token.span,
                    "term",
                    other.name(),
                ))
            }
        };
        Ok(term)
    }
}
