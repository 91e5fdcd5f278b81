/// Selects the printed form of each program byte.
///
/// `Ascii` is readable anywhere: block graphics become `#` and inverse
/// letters become lowercase. `Font` targets the ZX-81 TrueType font,
/// which keeps the graphics and inverse characters at U+00B0..U+00EF.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Charset {
    Ascii,
    Font,
}

impl Default for Charset {
    fn default() -> Charset {
        Charset::Ascii
    }
}

impl Charset {
    pub fn resolve(self, byte: u8) -> &'static str {
        match self {
            Charset::Ascii => ASCII[byte as usize],
            Charset::Font => FONT[byte as usize],
        }
    }

    pub fn toggle(self) -> Charset {
        match self {
            Charset::Ascii => Charset::Font,
            Charset::Font => Charset::Ascii,
        }
    }
}

static ASCII: [&str; 256] = [
    /* 00 */ " ", "#", "#", "#", "#", "#", "#", "#",
    /* 08 */ "#", "#", "#", "\"", "£", "$", ":", "?",
    /* 10 */ "(", ")", ">", "<", "=", "+", "-", "*",
    /* 18 */ "/", ";", ",", ".", "0", "1", "2", "3",
    /* 20 */ "4", "5", "6", "7", "8", "9", "A", "B",
    /* 28 */ "C", "D", "E", "F", "G", "H", "I", "J",
    /* 30 */ "K", "L", "M", "N", "O", "P", "Q", "R",
    /* 38 */ "S", "T", "U", "V", "W", "X", "Y", "Z",
    /* 40 */ "RND", "INKEY$", "PI", "?", "?", "?", "?", "?",
    /* 48 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 50 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 58 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 60 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 68 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 70 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 78 */ "?", "?", "?", "?", "?", "?", "?", "k",
    /* 80 */ "#", "#", "#", "#", "#", "#", "#", "#",
    /* 88 */ "#", "#", "#", "\"", "£", "$", ":", "?",
    /* 90 */ "(", ")", ">", "<", "=", "+", "-", "*",
    /* 98 */ "/", ";", ",", ".", "0", "1", "2", "3",
    /* a0 */ "4", "5", "6", "7", "8", "9", "a", "b",
    /* a8 */ "c", "d", "e", "f", "g", "h", "i", "j",
    /* b0 */ "k", "l", "m", "n", "o", "p", "q", "r",
    /* b8 */ "s", "t", "u", "v", "w", "x", "y", "z",
    /* c0 */ "\"\"", "AT ", "TAB ", "?", "CODE ", "VAL ", "LEN ", "SIN ",
    /* c8 */ "COS ", "TAN ", "ASN ", "ACS ", "ATN ", "LN ", "EXP ", "INT ",
    /* d0 */ "SQR ", "SGN ", "ABS ", "PEEK ", "USR ", "STR$ ", "CHR$ ", "NOT ",
    /* d8 */ "**", " OR ", " AND ", "<=", ">=", "<>", " THEN ", " TO ",
    /* e0 */ " STEP ", " LPRINT ", " LLIST ", " STOP ", " SLOW ", " FAST ", " NEW ", " SCROLL ",
    /* e8 */ " CONT ", " DIM ", " REM ", " FOR ", " GOTO ", " GOSUB ", " INPUT ", " LOAD ",
    /* f0 */ " LIST ", " LET ", " PAUSE ", " NEXT ", " POKE ", " PRINT ", " PLOT ", " RUN ",
    /* f8 */ " SAVE ", " RAND ", " IF ", " CLS ", " UNPLOT ", " CLEAR ", " RETURN ", " COPY ",
];

static FONT: [&str; 256] = [
    /* 00 */ " ", "\u{c1}", "\u{c2}", "\u{c3}", "\u{c4}", "\u{c5}", "\u{c6}", "\u{c7}",
    /* 08 */ "\u{b0}", "\u{b1}", "\u{b2}", "\"", "£", "$", ":", "?",
    /* 10 */ "(", ")", ">", "<", "=", "+", "-", "*",
    /* 18 */ "/", ";", ",", ".", "0", "1", "2", "3",
    /* 20 */ "4", "5", "6", "7", "8", "9", "A", "B",
    /* 28 */ "C", "D", "E", "F", "G", "H", "I", "J",
    /* 30 */ "K", "L", "M", "N", "O", "P", "Q", "R",
    /* 38 */ "S", "T", "U", "V", "W", "X", "Y", "Z",
    /* 40 */ "RND", "INKEY$", "PI", "?", "?", "?", "?", "?",
    /* 48 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 50 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 58 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 60 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 68 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 70 */ "?", "?", "?", "?", "?", "?", "?", "?",
    /* 78 */ "?", "?", "?", "?", "?", "?", "?", "k",
    /* 80 */ "\u{cf}", "\u{ce}", "\u{cd}", "\u{cc}", "\u{cb}", "\u{ca}", "\u{c9}", "\u{c8}",
    /* 88 */ "\u{b3}", "\u{b4}", "\u{b5}", "\u{d2}", "\u{d5}", "\u{d4}", "\u{ea}", "\u{ef}",
    /* 90 */ "\u{d8}", "\u{d9}", "\u{ee}", "\u{ec}", "\u{ed}", "\u{db}", "\u{dd}", "\u{da}",
    /* 98 */ "\u{df}", "\u{eb}", "\u{dc}", "\u{de}", "\u{e0}", "\u{e1}", "\u{e2}", "\u{e3}",
    /* a0 */ "\u{e4}", "\u{e5}", "\u{e6}", "\u{e7}", "\u{e8}", "\u{e9}", "a", "b",
    /* a8 */ "c", "d", "e", "f", "g", "h", "i", "j",
    /* b0 */ "k", "l", "m", "n", "o", "p", "q", "r",
    /* b8 */ "s", "t", "u", "v", "w", "x", "y", "z",
    /* c0 */ "\"\"", "AT ", "TAB ", "?", "CODE ", "VAL ", "LEN ", "SIN ",
    /* c8 */ "COS ", "TAN ", "ASN ", "ACS ", "ATN ", "LN ", "EXP ", "INT ",
    /* d0 */ "SQR ", "SGN ", "ABS ", "PEEK ", "USR ", "STR$ ", "CHR$ ", "NOT ",
    /* d8 */ "**", " OR ", " AND ", "<=", ">=", "<>", " THEN ", " TO ",
    /* e0 */ " STEP ", " LPRINT ", " LLIST ", " STOP ", " SLOW ", " FAST ", " NEW ", " SCROLL ",
    /* e8 */ " CONT ", " DIM ", " REM ", " FOR ", " GOTO ", " GOSUB ", " INPUT ", " LOAD ",
    /* f0 */ " LIST ", " LET ", " PAUSE ", " NEXT ", " POKE ", " PRINT ", " PLOT ", " RUN ",
    /* f8 */ " SAVE ", " RAND ", " IF ", " CLS ", " UNPLOT ", " CLEAR ", " RETURN ", " COPY ",
];
