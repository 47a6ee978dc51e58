//! Single bits and fixed-width bit arrays

use crate::{CoreError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{BitXor, Index, Not};
use std::str::FromStr;

/// A single binary digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// Parse a bit from its ASCII character
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// ASCII character for this bit
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// Numeric value (0 or 1)
    pub fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    pub fn is_set(self) -> bool {
        self == Bit::One
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl TryFrom<u8> for Bit {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            _ => Err(CoreError::InvalidBitValue { value }),
        }
    }
}

impl BitXor for Bit {
    type Output = Bit;

    fn bitxor(self, rhs: Bit) -> Bit {
        Bit::from(self != rhs)
    }
}

impl Not for Bit {
    type Output = Bit;

    fn not(self) -> Bit {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// XOR of all bits (even parity)
pub fn parity(bits: &[Bit]) -> Bit {
    bits.iter().fold(Bit::Zero, |acc, &bit| acc ^ bit)
}

/// Fixed-width array of bits, rendered most significant (first) bit first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bits<const N: usize>([Bit; N]);

impl<const N: usize> Bits<N> {
    /// Number of bits held
    pub const LEN: usize = N;

    /// Create from an array of bits
    pub const fn new(bits: [Bit; N]) -> Self {
        Self(bits)
    }

    /// Create from numeric bit values, each of which must be 0 or 1
    pub fn from_values(values: &[u8]) -> Result<Self> {
        if values.len() != N {
            return Err(CoreError::LengthMismatch {
                expected: N,
                actual: values.len(),
            });
        }

        let mut bits = [Bit::Zero; N];
        for (slot, &value) in bits.iter_mut().zip(values) {
            *slot = Bit::try_from(value)?;
        }

        Ok(Self(bits))
    }

    /// Parse from a text of exactly `N` `'0'`/`'1'` characters.
    ///
    /// The length is checked before the characters so that a wrong-length
    /// input is always reported as a length problem.
    pub fn parse(text: &str) -> Result<Self> {
        let actual = text.chars().count();
        if actual != N {
            return Err(CoreError::LengthMismatch { expected: N, actual });
        }

        let mut bits = [Bit::Zero; N];
        for (position, (slot, ch)) in bits.iter_mut().zip(text.chars()).enumerate() {
            *slot = Bit::from_char(ch).ok_or(CoreError::InvalidBitChar {
                ch,
                position: position + 1,
            })?;
        }

        Ok(Self(bits))
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &[Bit; N] {
        &self.0
    }

    /// Consume into the underlying array
    pub fn into_array(self) -> [Bit; N] {
        self.0
    }

    /// Numeric values of every bit
    pub fn values(&self) -> [u8; N] {
        self.0.map(Bit::as_u8)
    }

    /// Iterate over the bits in order
    pub fn iter(&self) -> impl Iterator<Item = Bit> + '_ {
        self.0.iter().copied()
    }

    /// Invert the bit at a 1-based position
    pub fn toggle(&mut self, position: usize) -> Result<()> {
        if position == 0 || position > N {
            return Err(CoreError::PositionOutOfRange { position, len: N });
        }

        let slot = &mut self.0[position - 1];
        *slot = !*slot;
        Ok(())
    }
}

impl<const N: usize> Default for Bits<N> {
    fn default() -> Self {
        Self([Bit::Zero; N])
    }
}

impl<const N: usize> From<[Bit; N]> for Bits<N> {
    fn from(bits: [Bit; N]) -> Self {
        Self(bits)
    }
}

impl<const N: usize> Index<usize> for Bits<N> {
    type Output = Bit;

    fn index(&self, index: usize) -> &Bit {
        &self.0[index]
    }
}

impl<const N: usize> FromStr for Bits<N> {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<const N: usize> fmt::Display for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

// Serialized as the wire text, e.g. "1011"
impl<const N: usize> Serialize for Bits<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, const N: usize> Deserialize<'de> for Bits<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_bit_xor_and_not() {
        assert_eq!(Bit::One ^ Bit::One, Bit::Zero);
        assert_eq!(Bit::One ^ Bit::Zero, Bit::One);
        assert_eq!(Bit::Zero ^ Bit::Zero, Bit::Zero);
        assert_eq!(!Bit::Zero, Bit::One);
        assert_eq!(!Bit::One, Bit::Zero);
    }

    #[test]
    fn test_parity() {
        assert_eq!(parity(&[]), Bit::Zero);
        assert_eq!(parity(&[Bit::One, Bit::Zero, Bit::One]), Bit::Zero);
        assert_eq!(parity(&[Bit::One, Bit::One, Bit::One]), Bit::One);
    }

    #[test]
    fn test_parse_and_display() {
        let bits: Bits<4> = "1011".parse().unwrap();
        assert_eq!(bits.values(), [1, 0, 1, 1]);
        assert_eq!(bits.to_string(), "1011");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            Bits::<4>::parse("10110"),
            Err(CoreError::LengthMismatch { expected: 4, actual: 5 })
        );
        assert_eq!(
            Bits::<4>::parse(""),
            Err(CoreError::LengthMismatch { expected: 4, actual: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_non_binary() {
        assert_eq!(
            Bits::<4>::parse("10a1"),
            Err(CoreError::InvalidBitChar { ch: 'a', position: 3 })
        );
        // Multi-byte characters count once toward the length
        assert_eq!(
            Bits::<4>::parse("10é1"),
            Err(CoreError::InvalidBitChar { ch: 'é', position: 3 })
        );
    }

    #[test]
    fn test_from_values() {
        let bits = Bits::<3>::from_values(&[1, 0, 1]).unwrap();
        assert_eq!(bits.to_string(), "101");
        assert!(matches!(
            Bits::<3>::from_values(&[1, 2, 1]),
            Err(CoreError::InvalidBitValue { value: 2 })
        ));
        assert!(Bits::<3>::from_values(&[1, 0]).is_err());
    }

    #[test]
    fn test_toggle() {
        let mut bits: Bits<7> = "0110011".parse().unwrap();
        bits.toggle(3).unwrap();
        assert_eq!(bits.to_string(), "0100011");
        bits.toggle(3).unwrap();
        assert_eq!(bits.to_string(), "0110011");

        assert_eq!(
            bits.toggle(0),
            Err(CoreError::PositionOutOfRange { position: 0, len: 7 })
        );
        assert!(bits.toggle(8).is_err());
    }

    #[test]
    fn test_serde_as_text() {
        let bits: Bits<4> = "0110".parse().unwrap();
        let json = serde_json::to_string(&bits).unwrap();
        assert_eq!(json, "\"0110\"");

        let back: Bits<4> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bits);
        assert!(serde_json::from_str::<Bits<4>>("\"01\"").is_err());
    }

    #[quickcheck]
    fn prop_display_parse_identity(values: Vec<bool>) -> bool {
        let mut array = [Bit::Zero; 8];
        for (slot, value) in array.iter_mut().zip(values) {
            *slot = Bit::from(value);
        }
        let bits = Bits::new(array);
        bits.to_string().parse::<Bits<8>>() == Ok(bits)
    }
}
