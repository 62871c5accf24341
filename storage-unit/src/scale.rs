use std::{
    fmt,
    marker::PhantomData,
    ops::{Add, Mul, Sub},
    str::FromStr,
};

use log::trace;

use crate::error::Error;

/// Magnitude prefix letter that may precede a unit marker.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Prefix {
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
}

impl Prefix {
    /// Every prefix, smallest first.
    pub const ALL: [Prefix; 6] = [
        Prefix::Kilo,
        Prefix::Mega,
        Prefix::Giga,
        Prefix::Tera,
        Prefix::Peta,
        Prefix::Exa,
    ];

    pub const fn letter(self) -> char {
        match self {
            Prefix::Kilo => 'K',
            Prefix::Mega => 'M',
            Prefix::Giga => 'G',
            Prefix::Tera => 'T',
            Prefix::Peta => 'P',
            Prefix::Exa => 'E',
        }
    }

    /// Prefix letters are uppercase only; `k` is not kilo.
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'K' => Some(Prefix::Kilo),
            'M' => Some(Prefix::Mega),
            'G' => Some(Prefix::Giga),
            'T' => Some(Prefix::Tera),
            'P' => Some(Prefix::Peta),
            'E' => Some(Prefix::Exa),
            _ => None,
        }
    }

    /// Power the family step is raised to: 1 for kilo up to 6 for exa.
    pub const fn rank(self) -> u32 {
        match self {
            Prefix::Kilo => 1,
            Prefix::Mega => 2,
            Prefix::Giga => 3,
            Prefix::Tera => 4,
            Prefix::Peta => 5,
            Prefix::Exa => 6,
        }
    }
}

/// A family of information units.
///
/// All quantities are stored as bit counts. A family fixes how many bits
/// its base unit holds, how far apart consecutive prefixes are and which
/// letter closes its textual form.
pub trait Scale {
    /// Name used in error messages, e.g. `"Bit"`.
    const NAME: &'static str;

    /// Mandatory trailing letter of the textual form.
    const MARKER: char;

    /// Bits per base unit.
    const BASE: u64;

    /// Ratio between consecutive prefixes.
    const STEP: u64;

    /// Number of bits in one `prefix` unit, or in the base unit for `None`.
    ///
    /// Implementors must keep `BASE * STEP^6` within `u64`; the product is
    /// not checked.
    fn multiplier(prefix: Option<Prefix>) -> u64 {
        let rank = prefix.map_or(0, Prefix::rank);
        Self::BASE * Self::STEP.pow(rank)
    }
}

/// An exact count of bits read and written in the units of `S`.
#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Unit<S> {
    count: u64,
    scale: PhantomData<S>,
}

impl<S> Unit<S> {
    pub const MIN: Self = Self::new(0);
    pub const MAX: Self = Self::new(u64::MAX);

    pub const fn new(count: u64) -> Self {
        Self {
            count,
            scale: PhantomData,
        }
    }

    /// The stored number of bits.
    pub const fn get(self) -> u64 {
        self.count
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.count.checked_add(rhs.count).map(Self::new)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.count.checked_sub(rhs.count).map(Self::new)
    }
}

impl<S> Unit<S>
where
    S: Scale,
{
    /// Parses `<number><prefix?><marker>`, e.g. `"1.5KB"` or `"10b"`.
    ///
    /// The empty string is zero. The number may be fractional; it is
    /// multiplied by the unit in `f64` and converted with `as u64`, so the
    /// result truncates toward zero, negative values and NaN become zero and
    /// anything past `u64::MAX` saturates. A number too large for `f64`
    /// itself is an error. Magnitudes beyond 2^53 bits lose
    /// precision on the way.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Ok(Self::MIN);
        }

        let invalid = || {
            trace!("rejecting {s:?}: not a {} quantity", S::NAME);
            Error::InvalidUnit(S::NAME)
        };

        if s.len() < 2 {
            return Err(invalid());
        }
        let rest = s.strip_suffix(S::MARKER).ok_or_else(invalid)?;
        let last = rest.chars().next_back().ok_or_else(invalid)?;

        let (literal, prefix) = match Prefix::from_letter(last) {
            Some(prefix) => (&rest[..rest.len() - 1], Some(prefix)),
            None if last.is_ascii_digit() => (rest, None),
            None => return Err(invalid()),
        };

        let n = literal.parse::<f64>().map_err(|err| {
            trace!("rejecting {s:?}: bad number {literal:?}");
            Error::from(err)
        })?;
        if n.is_infinite() && !is_infinity_literal(literal) {
            trace!("rejecting {s:?}: {literal:?} is out of range");
            return Err(Error::NumberOutOfRange(literal.to_owned()));
        }

        Ok(Self::new((n * S::multiplier(prefix) as f64) as u64))
    }

    /// The value expressed in `prefix` units of this family.
    pub fn in_units(self, prefix: Prefix) -> f64 {
        self.count as f64 / S::multiplier(Some(prefix)) as f64
    }
}

/// `inf` or `infinity` in any case, optionally signed. Anything else that
/// reads as infinite overflowed `f64`.
fn is_infinity_literal(literal: &str) -> bool {
    let unsigned = literal.strip_prefix(&['+', '-'][..]).unwrap_or(literal);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

impl<S> fmt::Display for Unit<S>
where
    S: Scale,
{
    /// Writes the value in the largest unit it reaches, so 1500 bits is
    /// `1.5Kb`. Below the first prefix the count of whole base units is
    /// written.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for prefix in Prefix::ALL.into_iter().rev() {
            let multiplier = S::multiplier(Some(prefix));
            if self.count >= multiplier {
                let n = self.count as f64 / multiplier as f64;
                return write!(f, "{n}{}{}", prefix.letter(), S::MARKER);
            }
        }

        write!(f, "{}{}", self.count / S::BASE, S::MARKER)
    }
}

impl<S> fmt::Debug for Unit<S>
where
    S: Scale,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s({})", S::NAME, self.count)
    }
}

impl<S> FromStr for Unit<S>
where
    S: Scale,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<S> From<u64> for Unit<S> {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl<S> From<Unit<S>> for u64 {
    fn from(value: Unit<S>) -> Self {
        value.count
    }
}

// Arithmetic wraps at the 64-bit bound; use `checked_*` to detect it.
impl<S> Add for Unit<S> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.count.wrapping_add(rhs.count))
    }
}

impl<S> Sub for Unit<S> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.count.wrapping_sub(rhs.count))
    }
}

impl<S> Mul<u64> for Unit<S> {
    type Output = Self;

    fn mul(self, rhs: u64) -> Self::Output {
        Self::new(self.count.wrapping_mul(rhs))
    }
}
