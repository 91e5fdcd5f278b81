#![allow(dead_code)]

use plist::mach::{list, Config, Image, E_PPC, PROGRAM, P_FILE_ORIGIN};

pub const NEWLINE: u8 = 0x76;
pub const NUMBER: u8 = 0x7e;

pub const AND: u8 = 0xda;
pub const OR: u8 = 0xd9;
pub const THEN: u8 = 0xde;
pub const REM: u8 = 0xea;
pub const GOTO: u8 = 0xec;
pub const LET: u8 = 0xf1;
pub const PRINT: u8 = 0xf5;
pub const IF: u8 = 0xfa;

/// ZX81 character codes for plain text.
pub fn text(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            ' ' => 0x00,
            '"' => 0x0b,
            '$' => 0x0d,
            ':' => 0x0e,
            '?' => 0x0f,
            '(' => 0x10,
            ')' => 0x11,
            '>' => 0x12,
            '<' => 0x13,
            '=' => 0x14,
            '+' => 0x15,
            '-' => 0x16,
            '*' => 0x17,
            '/' => 0x18,
            ';' => 0x19,
            ',' => 0x1a,
            '.' => 0x1b,
            '0'..='9' => 0x1c + (c as u8 - b'0'),
            'A'..='Z' => 0x26 + (c as u8 - b'A'),
            _ => panic!("no ZX81 code for {:?}", c),
        })
        .collect()
}

pub fn cat(parts: &[&[u8]]) -> Vec<u8> {
    parts.concat()
}

/// A number as the editor stores it: its digits, then the packed value.
pub fn number(digits: &str, packed: [u8; 5]) -> Vec<u8> {
    let mut v = text(digits);
    v.push(NUMBER);
    v.extend_from_slice(&packed);
    v
}

/// Assembles a program area line by line.
#[derive(Default, Clone)]
pub struct Program {
    bytes: Vec<u8>,
    cursor: u16,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// A well formed line: `body` then its terminator.
    pub fn line(self, number: u16, body: &[u8]) -> Program {
        let mut with_end = body.to_vec();
        with_end.push(NEWLINE);
        self.line_raw(number, with_end.len() as u16, &with_end)
    }

    /// A line with whatever length field and bytes the test wants.
    pub fn line_raw(mut self, number: u16, len: u16, bytes: &[u8]) -> Program {
        self.bytes.push((number >> 8) as u8);
        self.bytes.push(number as u8);
        self.bytes.push(len as u8);
        self.bytes.push((len >> 8) as u8);
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn bytes(mut self, bytes: &[u8]) -> Program {
        self.bytes.extend_from_slice(bytes);
        self
    }

    pub fn cursor(mut self, line: u16) -> Program {
        self.cursor = line;
        self
    }

    /// The program area, closed with the end of program marker.
    pub fn area(&self) -> Vec<u8> {
        let mut v = self.bytes.clone();
        v.push(NEWLINE);
        v
    }

    pub fn image(&self) -> Image {
        let mut image = Image::default();
        image.poke_le_word(E_PPC, self.cursor);
        image.load(PROGRAM, &self.area());
        image
    }

    /// The program saved as a P file.
    pub fn p_file(&self) -> Vec<u8> {
        let mut v = vec![0u8; PROGRAM - P_FILE_ORIGIN];
        let e_ppc = E_PPC - P_FILE_ORIGIN;
        v[e_ppc] = self.cursor as u8;
        v[e_ppc + 1] = (self.cursor >> 8) as u8;
        v.extend(self.area());
        v
    }

    pub fn list(&self, config: &Config) -> String {
        list(&self.image(), config)
    }
}

pub fn config() -> Config {
    Config::default()
}
