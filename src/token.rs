use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub offset: usize,
    pub kind: Kind,
    pub text: String,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    LParen,     // (
    RParen,     // )
    Identifier, // letter or '_', then letters/digits/'_'
    IntLiteral, // base-10 digit run
}

impl Token {
    pub fn new(offset: usize, kind: Kind, text: String) -> Self {
        Token { offset, kind, text }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::LParen => "LParen",
            Kind::RParen => "RParen",
            Kind::Identifier => "Identifier",
            Kind::IntLiteral => "IntLiteral",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.text)
    }
}
