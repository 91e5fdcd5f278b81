//! # plist
//!
//! LIST a ZX81 P file without a ZX81.
//!

fn main() {
    plist::term::main();
}
