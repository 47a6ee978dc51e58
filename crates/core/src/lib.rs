//! hamlink core - bit primitives
//!
//! Fixed-width bit arrays that parse from and render to the ASCII
//! `'0'`/`'1'` text used on the hamlink wire, plus the XOR parity helper
//! the Hamming code is built from.

pub mod bits;
pub mod error;

pub use bits::{parity, Bit, Bits};
pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        bits::{parity, Bit, Bits},
        error::{CoreError, Result},
    };
}
