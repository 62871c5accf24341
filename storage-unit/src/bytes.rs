use crate::{
    bits::Bits,
    error::Error,
    scale::{Prefix, Scale, Unit},
};

/// Bytes with binary prefixes: `KB` is 1024 bytes, `MB` is 1024 `KB`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ByteScale;

impl Scale for ByteScale {
    const NAME: &'static str = "Byte";
    const MARKER: char = 'B';
    const BASE: u64 = 8;
    const STEP: u64 = 1024;
}

/// A count of bits read and written in bytes.
///
/// The stored count is still in bits, so `Bytes::BYTE.get()` is 8.
pub type Bytes = Unit<ByteScale>;

impl Unit<ByteScale> {
    pub const BYTE: Self = Self::new(8);
    pub const KILOBYTE: Self = Self::new(1024 * Self::BYTE.get());
    pub const MEGABYTE: Self = Self::new(1024 * Self::KILOBYTE.get());
    pub const GIGABYTE: Self = Self::new(1024 * Self::MEGABYTE.get());
    pub const TERABYTE: Self = Self::new(1024 * Self::GIGABYTE.get());
    pub const PETABYTE: Self = Self::new(1024 * Self::TERABYTE.get());
    pub const EXABYTE: Self = Self::new(1024 * Self::PETABYTE.get());

    pub const fn as_bits(self) -> Bits {
        Bits::new(self.get())
    }

    pub fn kilobytes(self) -> f64 {
        self.in_units(Prefix::Kilo)
    }

    pub fn megabytes(self) -> f64 {
        self.in_units(Prefix::Mega)
    }

    pub fn gigabytes(self) -> f64 {
        self.in_units(Prefix::Giga)
    }

    pub fn terabytes(self) -> f64 {
        self.in_units(Prefix::Tera)
    }

    pub fn petabytes(self) -> f64 {
        self.in_units(Prefix::Peta)
    }

    pub fn exabytes(self) -> f64 {
        self.in_units(Prefix::Exa)
    }
}

impl From<Bits> for Bytes {
    fn from(value: Bits) -> Self {
        value.as_bytes()
    }
}

pub fn parse_bytes(s: &str) -> Result<Bytes, Error> {
    Bytes::parse(s)
}
