/// End of a line. At the start of a line it ends the program.
pub const TERMINATOR: u8 = 0x76;

/// Precedes the packed form of a number whose digits are already in the line.
pub const NUMBER: u8 = 0x7e;

/// Size of the packed floating point value after [`NUMBER`].
pub const NUMBER_LEN: usize = 5;

/// The inverse `>` the machine draws beside the current line.
pub const CURSOR: u8 = 0x92;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    Terminator,
    Number,
    Glyph(u8),
}

impl Token {
    pub fn from_byte(byte: u8) -> Token {
        match byte {
            TERMINATOR => Token::Terminator,
            NUMBER => Token::Number,
            _ => Token::Glyph(byte),
        }
    }

    /// Bytes taken from the program by this token.
    pub fn len(&self) -> usize {
        match self {
            Token::Terminator => 1,
            Token::Number => 1 + NUMBER_LEN,
            Token::Glyph(_) => 1,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Terminator => write!(f, "NEWLINE"),
            Number => write!(f, "NUMBER"),
            Glyph(b) => write!(f, "{:#04x}", b),
        }
    }
}
