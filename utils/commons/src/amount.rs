use concordium_std::*;
use core::{fmt, str::FromStr};

/// Unsigned 128-bit amount of the smallest currency or token unit.
///
/// Amounts never travel as fixed-width numbers: both the serialized form and
/// the textual form are decimal strings, so that values above 2^53 survive
/// every boundary untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct U128(pub u128);

impl U128 {
    pub const ZERO: U128 = U128(0);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u128 {
        self.0
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, rhs: U128) -> Option<U128> {
        self.0.checked_add(rhs.0).map(U128)
    }

    /// Checked multiplication. Returns `None` on overflow.
    pub fn checked_mul(self, rhs: U128) -> Option<U128> {
        self.0.checked_mul(rhs.0).map(U128)
    }
}

/// Error raised when a string is not a canonical decimal amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAmountError;

impl FromStr for U128 {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // `u128::from_str` tolerates a leading `+`, which is not a valid amount
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseAmountError);
        }
        s.parse::<u128>().map(U128).map_err(|_| ParseAmountError)
    }
}

impl fmt::Display for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Serial for U128 {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        self.to_string().serial(out)
    }
}

impl Deserial for U128 {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        let text = String::deserial(source)?;
        text.parse().map_err(|_| ParseError::default())
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_parse_rejects_non_canonical_text() {
        for input in ["", "+5", "-1", " 7", "1e3", "12a"] {
            assert!(input.parse::<U128>().is_err(), "`{}` should be rejected", input);
        }
        assert_eq!("0".parse::<U128>(), Ok(U128::ZERO));
        assert_eq!("007".parse::<U128>(), Ok(U128(7)));
    }

    #[concordium_test]
    fn test_parse_rejects_values_beyond_128_bits() {
        let max = u128::MAX.to_string();
        assert_eq!(max.parse::<U128>(), Ok(U128(u128::MAX)));
        assert!("340282366920938463463374607431768211456"
            .parse::<U128>()
            .is_err());
    }

    #[concordium_test]
    fn test_checked_arithmetic_reports_overflow() {
        assert_eq!(U128(2).checked_add(U128(3)), Some(U128(5)));
        assert_eq!(U128(u128::MAX).checked_add(U128(1)), None);
        assert_eq!(U128(u128::MAX / 2 + 1).checked_mul(U128(2)), None);
    }

    #[concordium_test]
    fn test_serialized_as_decimal_string() {
        let amount = U128(100_000_000_000_000_000_000_000);
        let bytes = to_bytes(&amount);
        assert_eq!(bytes, to_bytes(&String::from("100000000000000000000000")));
        assert_eq!(from_bytes::<U128>(&bytes), Ok(amount));
    }
}
