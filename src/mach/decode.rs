use super::{Address, Image};
use crate::lang::{Charset, Token};
use tracing::trace;

/// Walks the token bytes of one line, yielding what each prints as.
///
/// Packed numbers are skipped whole. Iteration ends on the line's
/// terminator, and [`Tokens::address`] is then left pointing at it.
pub struct Tokens<'a> {
    image: &'a Image,
    charset: Charset,
    addr: Address,
}

impl<'a> Tokens<'a> {
    pub fn new(image: &'a Image, charset: Charset, addr: Address) -> Tokens<'a> {
        Tokens {
            image,
            charset,
            addr,
        }
    }

    pub fn address(&self) -> Address {
        self.addr
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'static str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = Token::from_byte(self.image.peek(self.addr));
            match token {
                Token::Terminator => return None,
                Token::Number => {
                    trace!("{} at {:#06x} elided", token, self.addr);
                    self.addr += token.len();
                }
                Token::Glyph(byte) => {
                    self.addr += token.len();
                    return Some(self.charset.resolve(byte));
                }
            }
        }
    }
}
