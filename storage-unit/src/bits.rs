use crate::{
    bytes::Bytes,
    error::Error,
    scale::{Prefix, Scale, Unit},
};

/// Bits with decimal prefixes: `Kb` is 1000 bits, `Mb` is 1000 `Kb`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BitScale;

impl Scale for BitScale {
    const NAME: &'static str = "Bit";
    const MARKER: char = 'b';
    const BASE: u64 = 1;
    const STEP: u64 = 1000;
}

pub type Bits = Unit<BitScale>;

impl Unit<BitScale> {
    pub const BIT: Self = Self::new(1);
    pub const KILOBIT: Self = Self::new(1000);
    pub const MEGABIT: Self = Self::new(1000 * Self::KILOBIT.get());
    pub const GIGABIT: Self = Self::new(1000 * Self::MEGABIT.get());
    pub const TERABIT: Self = Self::new(1000 * Self::GIGABIT.get());
    pub const PETABIT: Self = Self::new(1000 * Self::TERABIT.get());
    pub const EXABIT: Self = Self::new(1000 * Self::PETABIT.get());

    /// The same amount of information counted in bytes.
    pub const fn as_bytes(self) -> Bytes {
        Bytes::new(self.get())
    }

    pub fn kilobits(self) -> f64 {
        self.in_units(Prefix::Kilo)
    }

    pub fn megabits(self) -> f64 {
        self.in_units(Prefix::Mega)
    }

    pub fn gigabits(self) -> f64 {
        self.in_units(Prefix::Giga)
    }

    pub fn terabits(self) -> f64 {
        self.in_units(Prefix::Tera)
    }

    pub fn petabits(self) -> f64 {
        self.in_units(Prefix::Peta)
    }

    pub fn exabits(self) -> f64 {
        self.in_units(Prefix::Exa)
    }
}

impl From<Bytes> for Bits {
    fn from(value: Bytes) -> Self {
        value.as_bits()
    }
}

pub fn parse_bits(s: &str) -> Result<Bits, Error> {
    Bits::parse(s)
}
