/*!
## Rust Machine Module

This Rust module holds the memory image of a ZX81 and lists the BASIC
program inside it, either by decoding tokens directly or by pumping the
display events of a firmware engine.

*/

pub type Address = usize;

mod config;
mod decode;
mod listing;
mod memory;
mod printer;
mod runtime;

pub use config::Config;
pub use decode::Tokens;
pub use listing::{list, Listing};
pub use memory::{Image, E_PPC, PROGRAM, P_FILE_ORIGIN};
pub use printer::Printer;
pub use runtime::{run_engine, Engine, Event, NO_CURSOR};

pub mod raster;
