use std::fmt;

use bitcoin::Amount;
use serde::{Deserialize, Serialize};

/// Fee rate in satoshis per serialized byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FeeRate(u64);

impl FeeRate {
    pub const ZERO: FeeRate = FeeRate(0);

    pub const fn from_sat_per_byte(sat_per_byte: u64) -> Self {
        Self(sat_per_byte)
    }

    pub const fn to_sat_per_byte(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sat/B", self.0)
    }
}

/// Fee owed for a transaction of `size` serialized bytes.
///
/// Saturates instead of overflowing; an absurd rate then simply fails coin
/// selection.
pub fn required_fee(size: usize, fee_rate: FeeRate) -> Amount {
    Amount::from_sat((size as u64).saturating_mul(fee_rate.to_sat_per_byte()))
}
