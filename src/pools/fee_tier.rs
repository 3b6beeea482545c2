use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::PoolGenError;

/// Swap fee rate classes a pool can be deployed with.
///
/// The discriminant is the fee in hundredths of a basis point, which is also the
/// value hashed into the pool address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FeeTier {
    /// 0.01%
    Lowest = 100,
    /// 0.05%
    Low = 500,
    /// 0.3%
    Medium = 3000,
    /// 1%
    High = 10_000,
}

impl FeeTier {
    /// Every tier, in the order candidate rows are expanded
    pub const ALL: [Self; 4] = [Self::Lowest, Self::Low, Self::Medium, Self::High];

    /// Fee in hundredths of a basis point
    #[must_use]
    pub const fn pips(self) -> u32 {
        self as u32
    }
}

impl Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pips())
    }
}

impl FromStr for FeeTier {
    type Err = PoolGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pips: u32 = s
            .trim()
            .parse()
            .map_err(|_| PoolGenError::InvalidFeeTier(s.to_string()))?;

        Self::ALL
            .into_iter()
            .find(|tier| tier.pips() == pips)
            .ok_or_else(|| PoolGenError::InvalidFeeTier(s.to_string()))
    }
}

/// Serialized as its canonical text, e.g. `"3000"`
impl Serialize for FeeTier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_text() {
        let text: Vec<String> = FeeTier::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["100", "500", "3000", "10000"]);
    }

    #[test]
    fn test_parse() {
        for tier in FeeTier::ALL {
            assert_eq!(tier.to_string().parse::<FeeTier>().unwrap(), tier);
        }
        assert_eq!(
            "2500".parse::<FeeTier>(),
            Err(PoolGenError::InvalidFeeTier("2500".to_string()))
        );
        assert!("0.3%".parse::<FeeTier>().is_err());
    }

    #[test]
    fn test_serialize() {
        assert_eq!(serde_json::to_string(&FeeTier::Medium).unwrap(), "\"3000\"");
    }
}
