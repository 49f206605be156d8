use std::time::Duration;

use serde::Serialize;
use ureq::Agent;

use anyhow::Result;

use crate::Error;

use super::api_structs::{
    AddressRequest, EstimateFeeRequest, EstimateFeeResponse, SendRawTxRequest, UtxoResponse,
    parse_quantity,
};

#[derive(Clone, Debug)]
pub struct SyncGatewayClient {
    agent: Agent,
    host_url: String,
}

impl SyncGatewayClient {
    pub fn new(host_url: String) -> Result<Self> {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout_read(Duration::from_secs(30))
            .build();

        // we need a trailing slash, if not present we append it
        let host_url = if host_url.ends_with('/') {
            host_url
        } else {
            format!("{}/", host_url)
        };

        Ok(SyncGatewayClient { agent, host_url })
    }

    fn post_raw<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let url = format!("{}{}", self.host_url, path);

        match self.agent.post(&url).send_json(body) {
            Ok(response) => {
                let status = response.status();
                let text = response.into_string()?;
                log::debug!("response({}): {}", status, text);
                Ok(text)
            }
            Err(ureq::Error::Status(status, response)) => {
                let text = response.into_string().unwrap_or_default();
                log::debug!("response({}): {}", status, text);
                Err(Error::from_response(status, &text).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn utxos(&self, address: &str) -> Result<Vec<UtxoResponse>> {
        let body = self.post_raw("btc/getUtxo", &AddressRequest::new(address.to_string()))?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn send(&self, raw_tx: String) -> Result<()> {
        self.post_raw("btc/send", &SendRawTxRequest::new(raw_tx))?;
        Ok(())
    }

    pub fn estimate_fee(&self, nb_blocks: i64) -> Result<u64> {
        let body = self.post_raw("btc/estimatefee", &EstimateFeeRequest { nb_blocks })?;
        let resp: EstimateFeeResponse = serde_json::from_str(&body)?;
        Ok(parse_quantity(&resp.satoshi)?)
    }
}
