use anyhow::Result;
use async_trait::async_trait;
use unichain_btc::{
    ChainBackend, FeeRate, SpendableOutput,
    bitcoin::{Address, Transaction, Txid, consensus::encode::deserialize_hex},
};

use crate::GatewayClient;

#[derive(Clone, Debug)]
pub struct GatewayBackend {
    client: GatewayClient,
}

impl GatewayBackend {
    pub fn new(gateway_url: String) -> Result<Self> {
        Ok(Self {
            client: GatewayClient::new(gateway_url)?,
        })
    }

    pub fn with_client(client: GatewayClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChainBackend for GatewayBackend {
    async fn spendable_outputs(&self, address: &Address) -> Result<Vec<SpendableOutput>> {
        let utxos = self.client.utxos(&address.to_string()).await?;

        utxos
            .into_iter()
            .map(|utxo| Ok(SpendableOutput::try_from(utxo)?))
            .collect()
    }

    async fn fee_rate(&self, confirmation_target: u16) -> Result<FeeRate> {
        let sat_per_byte = self
            .client
            .estimate_fee(confirmation_target.into())
            .await?;
        Ok(FeeRate::from_sat_per_byte(sat_per_byte))
    }

    /// Submits `tx_hex` and returns its txid, computed locally.
    async fn broadcast(&self, tx_hex: &str) -> Result<Txid> {
        let tx: Transaction = deserialize_hex(tx_hex)?;
        self.client.send(tx_hex.to_string()).await?;
        Ok(tx.compute_txid())
    }
}
