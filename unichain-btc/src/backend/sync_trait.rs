use anyhow::Result;
use bitcoin::{Address, Txid};

use crate::{FeeRate, SpendableOutput};

pub trait SyncChainBackend {
    fn spendable_outputs(&self, address: &Address) -> Result<Vec<SpendableOutput>>;

    fn fee_rate(&self, confirmation_target: u16) -> Result<FeeRate>;

    fn broadcast(&self, tx_hex: &str) -> Result<Txid>;
}
