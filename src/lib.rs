//! # ZX81 P file lister
//!
//! Lists the BASIC program inside a ZX81 `.P` file the way the machine's
//! own LIST command showed it: four cell line numbers that run past 9999
//! as `A000`..`G383`, keywords spelled out with their spaces, packed
//! numbers hidden, lines wrapped at the screen edge and, optionally, the
//! inverse `>` cursor beside the current line.
//!
//! ```
//! use plist::mach::{list, Config, Image, PROGRAM};
//!
//! let mut image = Image::default();
//! // 10 PRINT "HI", then the end of the program
//! image.load(PROGRAM, &[0x00, 0x0a, 0x06, 0x00, 0xf5, 0x0b, 0x2d, 0x2e, 0x0b, 0x76, 0x76]);
//! assert_eq!(list(&image, &Config::default()), "  10 PRINT \"HI\"\n");
//! ```
//!
//! The `plist` binary does the same for a file:
//! ```text
//! plist -a game.p
//! ```

pub mod lang;
pub mod mach;
pub mod term;
