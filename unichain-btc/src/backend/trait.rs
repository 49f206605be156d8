use anyhow::Result;
use bitcoin::{Address, Txid};

use crate::{FeeRate, SpendableOutput};

/// Async source of spendable outputs and fee estimates, and sink for signed
/// transactions.
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
pub trait ChainBackend: Send + Sync {
    /// Get the outputs of `address` that can be spent
    ///
    /// # Arguments
    /// * `address` - Address owning the outputs
    ///
    /// # Returns
    /// * Spendable outputs, in the order the data source reports them
    async fn spendable_outputs(&self, address: &Address) -> Result<Vec<SpendableOutput>>;

    /// Get a fee rate estimate
    ///
    /// # Arguments
    /// * `confirmation_target` - Number of blocks the transaction should confirm within
    ///
    /// # Returns
    /// * Fee rate in satoshis per byte
    async fn fee_rate(&self, confirmation_target: u16) -> Result<FeeRate>;

    /// Submit a signed transaction
    ///
    /// # Arguments
    /// * `tx_hex` - Wire format transaction, hex encoded
    ///
    /// # Returns
    /// * Id of the submitted transaction
    async fn broadcast(&self, tx_hex: &str) -> Result<Txid>;
}
