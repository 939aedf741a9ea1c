//! Account and contract identity type.

use core::fmt;

/// A 20-byte account or contract address.
///
/// `Address` identifies everything that can hold or emit tokens: wallet
/// accounts, token contracts, and the pool's custody account. It carries
/// no chain semantics of its own; equality and ordering are plain byte
/// comparisons.
///
/// # Examples
///
/// ```
/// use sumswap::domain::Address;
///
/// let a = Address::from_bytes([1u8; 20]);
/// let b = Address::from_bytes([2u8; 20]);
/// assert!(a < b);
/// assert_eq!(format!("{a}")[..6].to_string(), "0x0101");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_hex() {
        let addr = Address::from_bytes([0xAB; 20]);
        let s = format!("{addr}");
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 2 + 40);
        assert!(s[2..].chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn ordering_follows_bytes() {
        let lo = Address::from_bytes([0u8; 20]);
        let hi = Address::from_bytes([255u8; 20]);
        assert!(lo < hi);
    }

    #[test]
    fn round_trip_bytes() {
        let bytes = [42u8; 20];
        assert_eq!(*Address::from_bytes(bytes).as_bytes(), bytes);
    }

    #[test]
    fn copy_semantics() {
        let a = Address::from_bytes([1u8; 20]);
        let b = a;
        assert_eq!(a, b);
    }
}
