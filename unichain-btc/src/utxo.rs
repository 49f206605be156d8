use std::str::FromStr;

use bitcoin::{Amount, OutPoint, Txid};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An unspent output the wallet may spend.
///
/// Values are always carried in satoshis; display-unit amounts reported by
/// data sources are dropped before a `SpendableOutput` is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpendableOutput {
    pub address: String,
    pub txid: String,
    pub vout: u32,
    /// Previous output script, hex encoded. Decoded only when signing.
    #[serde(rename = "scriptPubKey")]
    pub script_pubkey: String,
    #[serde(rename = "satoshis", with = "bitcoin::amount::serde::as_sat")]
    pub value: Amount,
    pub height: u32,
    pub confirmations: u32,
}

impl SpendableOutput {
    pub fn outpoint(&self) -> Result<OutPoint> {
        let txid = Txid::from_str(&self.txid).map_err(|_| Error::InvalidTxid(self.txid.clone()))?;
        Ok(OutPoint {
            txid,
            vout: self.vout,
        })
    }
}
