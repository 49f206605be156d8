use anyhow::Result;
use unichain_btc::{
    FeeRate, SpendableOutput, SyncChainBackend,
    bitcoin::{Address, Transaction, Txid, consensus::encode::deserialize_hex},
};

use crate::SyncGatewayClient;

#[derive(Debug)]
pub struct SyncGatewayBackend {
    client: SyncGatewayClient,
}

impl SyncGatewayBackend {
    pub fn new(gateway_url: String) -> Result<Self> {
        Ok(Self {
            client: SyncGatewayClient::new(gateway_url)?,
        })
    }
}

impl SyncChainBackend for SyncGatewayBackend {
    fn spendable_outputs(&self, address: &Address) -> Result<Vec<SpendableOutput>> {
        self.client
            .utxos(&address.to_string())?
            .into_iter()
            .map(|utxo| Ok(SpendableOutput::try_from(utxo)?))
            .collect()
    }

    fn fee_rate(&self, confirmation_target: u16) -> Result<FeeRate> {
        let sat_per_byte = self.client.estimate_fee(confirmation_target.into())?;
        Ok(FeeRate::from_sat_per_byte(sat_per_byte))
    }

    /// Submits `tx_hex` and returns its txid, computed locally.
    fn broadcast(&self, tx_hex: &str) -> Result<Txid> {
        let tx: Transaction = deserialize_hex(tx_hex)?;
        self.client.send(tx_hex.to_string())?;
        Ok(tx.compute_txid())
    }
}
