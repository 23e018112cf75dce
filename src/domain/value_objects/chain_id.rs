//! Chain identifier value object

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

/// EIP-155 chain identifier.
///
/// Always positive. Whether it matches the chain actually served at a network's
/// endpoint is trusted, not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(NonZeroU64);

impl ChainId {
    /// Returns `None` for zero.
    pub const fn new(id: u64) -> Option<Self> {
        match NonZeroU64::new(id) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(ChainId::new(0).is_none());
    }

    #[test]
    fn positive_ids_round_trip() {
        assert_eq!(ChainId::new(56).map(ChainId::get), Some(56));
    }

    #[test]
    fn serde_is_transparent() {
        let id = ChainId::new(97).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "97");
        assert!(serde_json::from_str::<ChainId>("0").is_err());
    }
}
