use super::LineNumber;

/// Line numbers at or above 16384 are not program lines.
pub const MAX_LINE_NUMBER: LineNumber = 16383;

/// Highest line LIST accepts as a starting point.
pub const MAX_START_LINE: LineNumber = 9999;

// The thousands cell goes past 9 for line numbers the editor can't enter.
const THOUSANDS: &[u8; 17] = b" 123456789ABCDEFG";

/// The four cells the machine prints before a line's text.
///
/// Below 1000 the number is right aligned with spaces. From 1000 on the
/// thousands cell shows `1`..`9` or `A`..`G` and the rest is zero padded,
/// so 1005 prints as `1005` and 12345 as `C345`.
pub fn label(number: LineNumber) -> String {
    let number = number.min(MAX_LINE_NUMBER);
    let thousands = THOUSANDS[(number / 1000) as usize] as char;
    let rest = number % 1000;
    if thousands == ' ' {
        format!(" {:>3}", rest)
    } else {
        format!("{}{:03}", thousands, rest)
    }
}
