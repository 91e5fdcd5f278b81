/// ## Column wrapping text output
///
/// Knows nothing about tokens. It counts the characters on the current
/// row and breaks the row once it holds `width` of them, wherever that
/// falls, keywords included.
#[derive(Debug, Clone)]
pub struct Printer {
    width: usize,
    column: usize,
    was_space: bool,
    out: String,
}

impl Printer {
    pub fn new(width: usize) -> Printer {
        Printer {
            width,
            column: 0,
            was_space: false,
            out: String::new(),
        }
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn was_space(&self) -> bool {
        self.was_space
    }

    /// Prints a resolved token.
    ///
    /// Keywords carry a space on each side. A leading space is dropped
    /// when the previous character was already a space, unless the text is
    /// nothing but that space.
    pub fn print(&mut self, text: &str) {
        let mut text = text;
        if self.was_space && text.len() > 1 && text.starts_with(' ') {
            text = &text[1..];
        }
        let mut last = None;
        for ch in text.chars() {
            self.put(ch);
            last = Some(ch);
        }
        if let Some(ch) = last {
            self.was_space = ch == ' ';
        }
    }

    /// Places one character, wrapping first if the row is full.
    pub fn put(&mut self, ch: char) {
        if self.column == self.width {
            self.out.push('\n');
            self.column = 0;
        }
        self.out.push(ch);
        self.column += 1;
    }

    /// Writes the four cell line label and the cursor cell. Neither wraps
    /// nor collapses, and the row continues as if it ended in a space.
    pub fn start_line(&mut self, label: &str, cursor: &str) {
        self.out.push_str(label);
        self.out.push_str(cursor);
        self.column = label.chars().count() + cursor.chars().count();
        self.was_space = true;
    }

    pub fn newline(&mut self) {
        self.out.push('\n');
        self.column = 0;
        self.was_space = false;
    }

    /// Hands over everything printed so far.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_after_width() {
        let mut p = Printer::new(10);
        p.print("ABCDEFGHIJK");
        assert_eq!(p.take(), "ABCDEFGHIJ\nK");
        assert_eq!(p.column(), 1);
    }

    #[test]
    fn test_exact_width_does_not_wrap() {
        let mut p = Printer::new(10);
        p.print("ABCDEFGHIJ");
        assert_eq!(p.take(), "ABCDEFGHIJ");
        p.print("K");
        assert_eq!(p.take(), "\nK");
    }

    #[test]
    fn test_collapse() {
        let mut p = Printer::new(32);
        p.print("A");
        p.print(" AND ");
        p.print(" OR ");
        p.print("B");
        assert_eq!(p.take(), "A AND OR B");
    }

    #[test]
    fn test_lone_space_is_kept() {
        let mut p = Printer::new(32);
        p.print(" ");
        p.print(" ");
        assert_eq!(p.take(), "  ");
        assert!(p.was_space());
    }

    #[test]
    fn test_collapse_needs_space_before() {
        let mut p = Printer::new(32);
        p.print("A");
        p.print(" THEN ");
        assert_eq!(p.take(), "A THEN ");
        assert!(p.was_space());
    }

    #[test]
    fn test_start_line() {
        let mut p = Printer::new(8);
        p.start_line("  10", " ");
        p.print(" PRINT ");
        assert_eq!(p.take(), "  10 PRI\nNT ");
    }

    #[test]
    fn test_narrow_width_never_wraps() {
        let mut p = Printer::new(3);
        p.start_line("  10", " ");
        p.print("ABCDEF");
        assert_eq!(p.take(), "  10 ABCDEF");
    }

    #[test]
    fn test_newline_resets() {
        let mut p = Printer::new(4);
        p.print("ABC ");
        p.newline();
        assert_eq!(p.column(), 0);
        assert!(!p.was_space());
        p.print(" OR ");
        assert_eq!(p.take(), "ABC \n OR ");
    }
}
