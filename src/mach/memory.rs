use super::Address;
use crate::lang::token::{NUMBER, NUMBER_LEN, TERMINATOR};
use crate::lang::LineNumber;

const MEMORY_SIZE: usize = 0x10000;

/// Where a `.P` file lands: it starts with the VERSN system variable.
pub const P_FILE_ORIGIN: Address = 0x4009;

/// E_PPC, the number of the line holding the edit cursor.
pub const E_PPC: Address = 0x400a;

/// The first program line. It follows the fixed block of system variables.
pub const PROGRAM: Address = 0x407d;

/// ## 64K memory snapshot
///
/// Reads outside the address space give [`TERMINATOR`], so anything
/// walking a damaged program runs into a stop condition instead of
/// running off the end.
#[derive(Clone)]
pub struct Image {
    ram: Vec<u8>,
}

impl Default for Image {
    fn default() -> Image {
        Image {
            ram: vec![0; MEMORY_SIZE],
        }
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Image {{ program: {:02x?} }}", &self.ram[PROGRAM..PROGRAM + 16])
    }
}

impl Image {
    /// Loads the contents of a `.P` file. Anything past the top of
    /// memory is dropped.
    pub fn from_p_file(bytes: &[u8]) -> Image {
        let mut image = Image::default();
        image.load(P_FILE_ORIGIN, bytes);
        image
    }

    /// Copies `bytes` to `addr`, dropping what doesn't fit.
    pub fn load(&mut self, addr: Address, bytes: &[u8]) {
        if addr >= MEMORY_SIZE {
            return;
        }
        let len = bytes.len().min(MEMORY_SIZE - addr);
        self.ram[addr..addr + len].copy_from_slice(&bytes[..len]);
    }

    pub fn peek(&self, addr: Address) -> u8 {
        match self.ram.get(addr) {
            Some(byte) => *byte,
            None => TERMINATOR,
        }
    }

    pub fn poke(&mut self, addr: Address, byte: u8) {
        if let Some(cell) = self.ram.get_mut(addr) {
            *cell = byte;
        }
    }

    /// Line numbers are stored high byte first.
    pub fn peek_be_word(&self, addr: Address) -> u16 {
        (self.peek(addr) as u16) << 8 | self.peek(addr + 1) as u16
    }

    /// Everything else the Z80 way round.
    pub fn peek_le_word(&self, addr: Address) -> u16 {
        self.peek(addr) as u16 | (self.peek(addr + 1) as u16) << 8
    }

    pub fn poke_le_word(&mut self, addr: Address, word: u16) {
        self.poke(addr, word as u8);
        self.poke(addr + 1, (word >> 8) as u8);
    }

    /// The line the edit cursor sits on.
    pub fn cursor_line(&self) -> LineNumber {
        self.peek_le_word(E_PPC)
    }

    /// Removes spurious program endings.
    ///
    /// A spurious ending is a second [`TERMINATOR`] right after a line's
    /// own, while the line's length says the next line starts further on.
    /// Lines are copied down over such gaps and the program is closed with
    /// a fresh terminator, so a plain LIST walks every line.
    pub fn strip_spurious_endings(&mut self) {
        let mut current = PROGRAM;
        let mut target = PROGRAM;
        while current < MEMORY_SIZE && self.peek(current) != TERMINATOR {
            let next_line = current + self.peek_le_word(current + 2) as usize + 4;
            for _ in 0..4 {
                self.copy_byte(&mut current, &mut target);
            }
            while current < MEMORY_SIZE && self.peek(current) != TERMINATOR {
                let len = if self.peek(current) == NUMBER {
                    1 + NUMBER_LEN
                } else {
                    1
                };
                for _ in 0..len {
                    self.copy_byte(&mut current, &mut target);
                }
            }
            self.copy_byte(&mut current, &mut target);
            // a bogus length can point back into this line
            if self.peek(current) == TERMINATOR && next_line > current {
                current = next_line;
            }
        }
        self.poke(target, TERMINATOR);
    }

    fn copy_byte(&mut self, current: &mut Address, target: &mut Address) {
        let byte = self.peek(*current);
        self.poke(*target, byte);
        *current += 1;
        *target += 1;
    }
}
