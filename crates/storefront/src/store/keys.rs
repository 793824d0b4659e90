//! Persisted list keys.

use std::fmt;

/// A persisted list in storage.
///
/// The string forms are the storage keys and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKey {
    Cart,
    Wishlist,
    Orders,
}

impl ListKey {
    /// Every persisted list.
    pub const ALL: [Self; 3] = [Self::Cart, Self::Wishlist, Self::Orders];

    /// Storage key for this list.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Wishlist => "wishlist",
            Self::Orders => "orders",
        }
    }

    /// Parse a storage key.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "cart" => Some(Self::Cart),
            "wishlist" => Some(Self::Wishlist),
            "orders" => Some(Self::Orders),
            _ => None,
        }
    }
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_parse() {
        for key in ListKey::ALL {
            assert_eq!(ListKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(ListKey::parse("theme"), None);
    }
}
