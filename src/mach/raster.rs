/*!
## Listing to pixels

Draws text lines with the ZX81's own 8x8 character set, one text line
per 8 pixel rows. Characters the font has no glyph for draw as `?`.

*/

use crate::error;
use crate::lang::Error;

/// Where the character set sits in the 8K ROM.
pub const FONT_ADDR: usize = 0x1e00;

pub const GLYPH_SIZE: usize = 8;

const GLYPHS: usize = 64;
const QUESTION_MARK: usize = 15;
const INVERSE: i16 = 128;

/// Font glyph for each output character up to U+00FF. Values from 128 up
/// are the inverse of glyph `value - 128`.
#[rustfmt::skip]
static GLYPH_INDEX: [i16; 256] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    0, -1, 11, -1, 13, -1, -1, -1, 16, 17, 23, 21, 26, 22, 27, 24,
    28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 14, 25, 19, 20, 18, 15,
    -1, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, 50, 51, 52,
    53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63, -1, -1, -1, -1, -1,
    -1, 166, 167, 168, 169, 170, 171, 172, 173, 174, 175, 176, 177, 178, 179, 180,
    181, 182, 183, 184, 185, 186, 187, 188, 189, 190, 191, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, 12, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    8, 9, 10, 136, 137, 138, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, 1, 2, 3, 4, 5, 6, 7, 135, 134, 133, 132, 131, 130, 129, 128,
    -1, -1, 139, -1, 141, 140, -1, -1, 144, 145, 151, 149, 154, 150, 155, 152,
    156, 157, 158, 159, 160, 161, 162, 163, 164, 165, 142, 153, 147, 148, 146, 143,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
];

/// Glyph number and inversion for `ch`.
pub fn glyph_index(ch: char) -> (usize, bool) {
    let index = match GLYPH_INDEX.get(ch as usize) {
        Some(index) if *index >= 0 => *index,
        _ => QUESTION_MARK as i16,
    };
    if index >= INVERSE {
        ((index - INVERSE) as usize, true)
    } else {
        (index as usize, false)
    }
}

/// The 64 glyphs of the character set, top row first.
#[derive(Clone)]
pub struct Font {
    bitmaps: Vec<[u8; GLYPH_SIZE]>,
}

impl Font {
    /// Takes the character set out of an 8K ROM image.
    pub fn from_rom(rom: &[u8]) -> Result<Font, Error> {
        match rom.get(FONT_ADDR..FONT_ADDR + GLYPHS * GLYPH_SIZE) {
            Some(bytes) => Font::from_bitmaps(bytes),
            None => Err(error!(BadFont; format!("ROM IS {} BYTES", rom.len()))),
        }
    }

    /// 512 bytes, eight per glyph.
    pub fn from_bitmaps(bytes: &[u8]) -> Result<Font, Error> {
        if bytes.len() != GLYPHS * GLYPH_SIZE {
            return Err(error!(BadFont; format!("{} BYTES OF GLYPHS", bytes.len())));
        }
        let bitmaps = bytes
            .chunks(GLYPH_SIZE)
            .map(|chunk| {
                let mut glyph = [0u8; GLYPH_SIZE];
                glyph.copy_from_slice(chunk);
                glyph
            })
            .collect();
        Ok(Font { bitmaps })
    }

    /// One row of pixels of `ch`, most significant bit leftmost.
    pub fn row(&self, ch: char, row: usize) -> u8 {
        let (index, inverse) = glyph_index(ch);
        let bits = self.bitmaps[index][row];
        if inverse {
            !bits
        } else {
            bits
        }
    }
}

/// One bit per pixel, set for ink. Rows run top to bottom and each is
/// padded to a whole number of 32 bit words.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    width: usize,
    height: usize,
    stride: usize,
    pixels: Vec<u8>,
}

impl Raster {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per row including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.pixels[y * self.stride..(y + 1) * self.stride]
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.row(y)[x / 8] & (0x80 >> (x % 8)) != 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

/// Draws `lines`. Trailing line breaks on each line are ignored.
pub fn render<S: AsRef<str>>(lines: &[S], font: &Font) -> Result<Raster, Error> {
    let lines: Vec<Vec<char>> = lines
        .iter()
        .map(|line| line.as_ref().trim_end_matches(&['\r', '\n'][..]).chars().collect())
        .collect();
    let columns = lines.iter().map(|line| line.len()).max().unwrap_or(0);
    if columns == 0 {
        return Err(error!(NoTextToOutput));
    }
    let width = columns * GLYPH_SIZE;
    let stride = ((width + 31) & !31) / 8;
    let height = lines.len() * GLYPH_SIZE;
    let mut pixels = vec![0u8; stride * height];
    for (line_index, line) in lines.iter().enumerate() {
        for row in 0..GLYPH_SIZE {
            let start = (line_index * GLYPH_SIZE + row) * stride;
            for (column, ch) in line.iter().enumerate() {
                pixels[start + column] = font.row(*ch, row);
            }
        }
    }
    Ok(Raster {
        width,
        height,
        stride,
        pixels,
    })
}
