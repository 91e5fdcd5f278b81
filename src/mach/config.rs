use crate::error;
use crate::lang::{Charset, Error, LineNumber, MAX_START_LINE};

/// Line label and cursor cell.
const LABEL_CELLS: usize = 5;

/// How to list a program. Fixed for the length of a listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Characters per row.
    pub width: usize,
    /// Lines numbered below this are skipped.
    pub start_line: LineNumber,
    /// Mark the E_PPC line with the machine's cursor.
    pub show_cursor: bool,
    pub charset: Charset,
    /// Follow line lengths instead of stopping at spurious program endings.
    pub full: bool,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            width: 32,
            start_line: 0,
            show_cursor: false,
            charset: Charset::Ascii,
            full: false,
        }
    }
}

impl Config {
    /// What the machine itself would show: a 32 column screen, the ZX81
    /// font, the cursor, and a listing that stops where LIST stops.
    pub fn accurate() -> Config {
        Config {
            width: 32,
            start_line: 0,
            show_cursor: true,
            charset: Charset::Font,
            full: false,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.width < LABEL_CELLS {
            return Err(error!(IllegalFunctionCall;
                format!("WIDTH {} IS NARROWER THAN A LINE LABEL", self.width)));
        }
        if self.start_line > MAX_START_LINE {
            return Err(error!(IllegalFunctionCall;
                format!("START LINE {} NOT IN 0 TO {}", self.start_line, MAX_START_LINE)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_defaults() {
        let c = Config::default();
        assert_eq!(c.width, 32);
        assert_eq!(c.start_line, 0);
        assert!(!c.show_cursor && !c.full);
        assert_eq!(c.charset, Charset::Ascii);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_accurate() {
        let c = Config::accurate();
        assert!(c.show_cursor);
        assert_eq!(c.charset, Charset::Font);
        assert!(!c.full);
    }

    #[test]
    fn test_validate() {
        let mut c = Config::default();
        c.width = 4;
        assert!(c.validate().unwrap_err().is(ErrorCode::IllegalFunctionCall));
        c.width = 5;
        assert!(c.validate().is_ok());
        c.start_line = 10000;
        assert!(c.validate().is_err());
        c.start_line = 9999;
        assert!(c.validate().is_ok());
    }
}
