use super::{Config, Image, Printer};
use crate::lang::LineNumber;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Cursor line for an engine that should not mark any line.
pub const NO_CURSOR: LineNumber = 0xffff;

/// What the firmware just did to the screen.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Event {
    /// A character code went to the display file.
    Char(u8),
    /// The print position moved to a new screen line.
    NewLine,
}

/// A machine that lists by running the real LIST.
///
/// The engine owns its CPU and memory. It is handed the program and
/// then reports screen output until the firmware stops.
pub trait Engine {
    fn load(&mut self, image: &Image, start_line: LineNumber, cursor_line: LineNumber);
    fn next_event(&mut self) -> Option<Event>;
}

/// Lists a program through `engine`, writing to `sink`.
///
/// The firmware's own 32 column screen is ignored; characters are
/// rewrapped to `config.width`. In full mode the image is cleaned of
/// spurious program endings first, since the real LIST would stop there.
/// Checks `interrupted` at every new line. Returns the number of lines
/// written.
pub fn run_engine<E: Engine, W: Write>(
    engine: &mut E,
    image: &Image,
    config: &Config,
    sink: &mut W,
    interrupted: &AtomicBool,
) -> std::io::Result<usize> {
    let mut image = image.clone();
    if config.full {
        image.strip_spurious_endings();
    }
    let cursor_line = if config.show_cursor {
        image.cursor_line()
    } else {
        NO_CURSOR
    };
    engine.load(&image, config.start_line, cursor_line);

    let mut printer = Printer::new(config.width);
    let mut lines = 0;
    while let Some(event) = engine.next_event() {
        match event {
            Event::Char(code) => {
                for ch in config.charset.resolve(code).chars() {
                    printer.put(ch);
                }
            }
            Event::NewLine => {
                printer.newline();
                sink.write_all(printer.take().as_bytes())?;
                lines += 1;
                if interrupted.load(Ordering::SeqCst) {
                    debug!("engine listing interrupted after {} lines", lines);
                    return Ok(lines);
                }
            }
        }
    }
    let rest = printer.take();
    if !rest.is_empty() {
        sink.write_all(rest.as_bytes())?;
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Charset;
    use crate::mach::PROGRAM;

    struct Script {
        events: Vec<Event>,
        loaded: Option<(u8, LineNumber, LineNumber)>,
    }

    impl Engine for Script {
        fn load(&mut self, image: &Image, start_line: LineNumber, cursor_line: LineNumber) {
            self.loaded = Some((image.peek(PROGRAM + 7), start_line, cursor_line));
            self.events.reverse();
        }
        fn next_event(&mut self) -> Option<Event> {
            self.events.pop()
        }
    }

    fn chars(s: &[u8]) -> Vec<Event> {
        s.iter().map(|c| Event::Char(*c)).collect()
    }

    #[test]
    fn test_rewrap() {
        // 10 PRINT A, as the firmware spells it out
        let mut events = chars(&[0x1d, 0x1c, 0x00, 0x35, 0x37, 0x2e, 0x33, 0x39, 0x00, 0x26]);
        events.push(Event::NewLine);
        let mut engine = Script {
            events,
            loaded: None,
        };
        let mut config = Config::default();
        config.width = 5;
        let mut out: Vec<u8> = vec![];
        let never = AtomicBool::new(false);
        let n = run_engine(&mut engine, &Image::default(), &config, &mut out, &never).unwrap();
        assert_eq!(n, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "10 PR\nINT A\n");
    }

    #[test]
    fn test_load_arguments() {
        let mut image = Image::default();
        image.poke_le_word(crate::mach::E_PPC, 20);
        // 10 A, spurious ending, 20 B
        image.load(
            PROGRAM,
            &[0x00, 0x0a, 0x03, 0x00, 0x26, 0x76, 0x76, 0x00, 0x14, 0x02, 0x00, 0x27, 0x76, 0x76],
        );
        let never = AtomicBool::new(false);
        let mut engine = Script {
            events: vec![],
            loaded: None,
        };
        let mut config = Config::accurate();
        config.full = true;
        config.start_line = 5;
        run_engine(&mut engine, &image, &config, &mut Vec::<u8>::new(), &never).unwrap();
        assert_eq!(engine.loaded, Some((0x14, 5, 20)));

        config.full = false;
        config.show_cursor = false;
        run_engine(&mut engine, &image, &config, &mut Vec::<u8>::new(), &never).unwrap();
        assert_eq!(engine.loaded, Some((0x00, 5, NO_CURSOR)));
    }

    #[test]
    fn test_interrupt_between_lines() {
        let mut events = chars(&[0x26]);
        events.push(Event::NewLine);
        events.extend(chars(&[0x27]));
        events.push(Event::NewLine);
        let mut engine = Script {
            events,
            loaded: None,
        };
        let mut config = Config::default();
        config.charset = Charset::Font;
        let stop = AtomicBool::new(true);
        let mut out: Vec<u8> = vec![];
        let n = run_engine(&mut engine, &Image::default(), &config, &mut out, &stop).unwrap();
        assert_eq!(n, 1);
        assert_eq!(out, b"A\n");
    }
}
