//! Lexer implementation.

use logos::Logos;
use std::{fmt, ops::Range};

/// A token read from an input line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    /// A character that cannot start any token.
    Illegal(char),
    /// Returned at the end of input, as many times as requested.
    EndOfInput,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Plus => f.write_str("`+'"),
            Self::Minus => f.write_str("`-'"),
            Self::Star => f.write_str("`*'"),
            Self::Slash => f.write_str("`/'"),
            Self::Illegal(ch) => write!(f, "illegal character `{}'", ch.escape_debug()),
            Self::EndOfInput => f.write_str("end of input"),
        }
    }
}

pub type Spanned = (usize, Token, usize);

// The patterns recognized by logos. A second `.` is not part of the number
// regex, so `1.2.3` lexes as `1.2`, an illegal `.` and `3`.
#[derive(Debug, Copy, Clone, Logos, PartialEq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]*)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,
}

fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

/// A forward-only lexer over a single input line.
pub struct Lexer<'source> {
    inner: logos::Lexer<'source, RawToken>,
    span: Range<usize>,
}

impl fmt::Debug for Lexer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("remainder", &self.inner.remainder())
            .field("span", &self.span)
            .finish()
    }
}

impl<'source> Lexer<'source> {
    pub fn new(input: &'source str) -> Self {
        Self {
            inner: RawToken::lexer(input),
            span: 0..0,
        }
    }

    /// Return the original input.
    pub fn source(&self) -> &'source str {
        self.inner.source()
    }

    /// Return the byte range of the token most recently returned by `next_token`.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Return whether only blanks remain in the input.
    pub fn at_end(&self) -> bool {
        self.inner
            .remainder()
            .trim_start_matches(is_blank)
            .is_empty()
    }

    /// Read the next token.
    ///
    /// Once the input is exhausted, every call returns `Token::EndOfInput`
    /// with an empty span at the end of the source.
    pub fn next_token(&mut self) -> Token {
        let raw = match self.inner.next() {
            Some(raw) => raw,
            None => {
                let end = self.source().len();
                self.span = end..end;
                return Token::EndOfInput;
            }
        };

        let token = match raw {
            Ok(RawToken::Number(n)) => Token::Number(n),
            Ok(RawToken::Plus) => Token::Plus,
            Ok(RawToken::Minus) => Token::Minus,
            Ok(RawToken::Star) => Token::Star,
            Ok(RawToken::Slash) => Token::Slash,
            Err(()) => {
                let start = self.inner.span().start;
                let ch = self.source()[start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                // keep the span on a char boundary for multibyte input.
                let consumed = self.inner.span().len();
                if consumed < ch.len_utf8() {
                    self.inner.bump(ch.len_utf8() - consumed);
                }
                Token::Illegal(ch)
            }
        };
        self.span = self.inner.span();

        token
    }
}

impl Iterator for Lexer<'_> {
    type Item = Spanned;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Token::EndOfInput => None,
            token => Some((self.span.start, token, self.span.end)),
        }
    }
}
