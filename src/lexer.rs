use crate::error::LexError;
use crate::token::{Kind, Token};

// Token grammar:
//
//   LParen:  '('
//   RParen:  ')'
//   Id:      IdStart IdCont*
//   IdStart: <alphabetic> | '_'
//   IdCont:  IdStart | Digit
//   IntLit:  Digit+
//
// Whitespace (' ', '\t', '\n') separates tokens and is never part of one.

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_cont(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// One lexer per input line. Iterating yields tokens left to right; the first
/// unrecognized character yields `Err` once, after which the lexer is spent.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    failed: bool,
}

impl Lexer {
    pub fn new(line: &str) -> Self {
        Self {
            chars: line.chars().collect(),
            current: 0,
            failed: false,
        }
    }

    fn is_eof(&self) -> bool {
        self.current >= self.chars.len()
    }

    fn at(&self) -> char {
        self.chars[self.current]
    }

    // Maximal munch: extend rightward while the continuation predicate holds.
    fn scan_while(&mut self, cond: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while !self.is_eof() && cond(self.at()) {
            text.push(self.at());
            self.current += 1;
        }
        text
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        while !self.is_eof() && matches!(self.at(), ' ' | '\t' | '\n') {
            self.current += 1;
        }
        if self.is_eof() {
            return None;
        }

        let start = self.current;
        let item = match self.at() {
            '(' => {
                self.current += 1;
                Ok(Token::new(start, Kind::LParen, "(".to_string()))
            }
            ')' => {
                self.current += 1;
                Ok(Token::new(start, Kind::RParen, ")".to_string()))
            }
            c if is_ident_start(c) => {
                let text = self.scan_while(is_ident_cont);
                Ok(Token::new(start, Kind::Identifier, text))
            }
            c if c.is_ascii_digit() => {
                let text = self.scan_while(|c| c.is_ascii_digit());
                Ok(Token::new(start, Kind::IntLiteral, text))
            }
            c => {
                self.failed = true;
                Err(LexError::new(start, c))
            }
        };

        Some(item)
    }
}

/// Eager form of the iterator; partial tokens are lost on error, so callers
/// that want them should iterate a `Lexer` instead.
pub fn tokenize(line: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(line).collect()
}
