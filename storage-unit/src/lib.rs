//! Quantities of information that read and write as human text.
//!
//! [`Bits`] counts bits with decimal prefixes (`"10Mb"` is ten million
//! bits) and [`Bytes`] counts bytes with binary prefixes (`"1KB"` is 1024
//! bytes). Both store a plain `u64` count of bits, so converting between
//! them never loses anything.
//!
//! ```
//! use storage_unit::{Bits, Bytes};
//!
//! let link: Bits = "2Kb".parse().unwrap();
//! assert_eq!(link.get(), 2000);
//!
//! let block: Bytes = "1.5KB".parse().unwrap();
//! assert_eq!(block.get(), 1536 * 8);
//! assert_eq!(block.to_string(), "1.5KB");
//! ```

mod bits;
mod bytes;
mod error;
mod hook;
mod scale;
mod serialize;

pub use bits::{parse_bits, BitScale, Bits};
pub use bytes::{parse_bytes, ByteScale, Bytes};
pub use error::Error;
pub use hook::{
    string_to_bits_hook, string_to_bytes_hook, DecodeHook, HookChain, Hooked, Kind,
    StringToUnitHook,
};
pub use scale::{Prefix, Scale, Unit};
