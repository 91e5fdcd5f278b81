use super::{Address, Config, Image, Printer, Tokens, PROGRAM};
use crate::lang::token::{CURSOR, TERMINATOR};
use crate::lang::{label, LineNumber, MAX_LINE_NUMBER};
use std::io::Write;
use tracing::{debug, trace};

/// ## LIST, one program line at a time
///
/// Each item is the complete text of one line: label, cursor cell, the
/// decoded tokens with any wrapping, and a final newline. Damaged
/// programs never fail, the listing just ends early.
#[derive(Debug)]
pub struct Listing<'a> {
    image: &'a Image,
    config: &'a Config,
    addr: Address,
    cursor_line: Option<LineNumber>,
    done: bool,
}

impl<'a> Listing<'a> {
    pub fn new(image: &'a Image, config: &'a Config) -> Listing<'a> {
        let cursor_line = if config.show_cursor {
            Some(image.cursor_line())
        } else {
            None
        };
        Listing {
            image,
            config,
            addr: PROGRAM,
            cursor_line,
            done: false,
        }
    }

    /// Where the next line will be read from.
    pub fn address(&self) -> Address {
        self.addr
    }

    /// Writes every remaining line, returning how many were listed.
    pub fn write_to<W: Write>(&mut self, sink: &mut W) -> std::io::Result<usize> {
        let mut count = 0;
        for line in self {
            sink.write_all(line.as_bytes())?;
            count += 1;
        }
        Ok(count)
    }

    fn stop(&mut self) -> Option<String> {
        self.done = true;
        None
    }
}

impl<'a> Iterator for Listing<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        loop {
            let image = self.image;
            if image.peek(self.addr) == TERMINATOR {
                trace!("end of program at {:#06x}", self.addr);
                return self.stop();
            }
            let next_line = self.addr + image.peek_le_word(self.addr + 2) as usize + 4;
            let number = image.peek_be_word(self.addr);
            if number > MAX_LINE_NUMBER {
                debug!("line number {} at {:#06x} ends the listing", number, self.addr);
                return self.stop();
            }
            if number < self.config.start_line {
                trace!("skipping line {}", number);
                self.addr = next_line;
                continue;
            }
            debug!(
                "line {} at {:#06x}, next at {:#06x}",
                number, self.addr, next_line
            );

            let charset = self.config.charset;
            let cursor = match self.cursor_line {
                Some(line) if line == number => charset.resolve(CURSOR),
                _ => " ",
            };
            let mut printer = Printer::new(self.config.width);
            printer.start_line(&label(number), cursor);
            let mut tokens = Tokens::new(image, charset, self.addr + 4);
            for text in tokens.by_ref() {
                printer.print(text);
            }
            printer.newline();

            self.addr = if self.config.full {
                next_line
            } else {
                tokens.address() + 1
            };
            return Some(printer.take());
        }
    }
}

/// The whole listing as one string.
pub fn list(image: &Image, config: &Config) -> String {
    Listing::new(image, config).collect()
}
