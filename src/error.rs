use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CliError {
    FileNotFound(String),
    Io(std::io::Error),
}

impl Error for CliError {}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::FileNotFound(msg) => write!(f, "FileNotFoundError: {}", msg),
            CliError::Io(err) => write!(f, "IOError: {}", err),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LexError {
    pub offset: usize,
    pub character: char,
}

impl LexError {
    pub fn new(offset: usize, character: char) -> Self {
        Self { offset, character }
    }
}

impl Error for LexError {}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "unrecognized character '{}' at column {}",
            self.character.escape_debug(),
            self.offset
        )
    }
}
