use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use url::Url;

use crate::Error;
use crate::api_structs::{
    AddressRequest, EstimateFeeRequest, EstimateFeeResponse, SendRawTxRequest, UtxoResponse,
    parse_quantity,
};

/// Client for the gateway REST api.
#[derive(Clone, Debug)]
pub struct GatewayClient {
    client: Client,
    host_url: Url,
}

impl GatewayClient {
    pub fn new(host_url: String) -> Result<Self> {
        Self::with_timeout(host_url, Duration::from_secs(30))
    }

    pub fn with_timeout(host_url: String, timeout: Duration) -> Result<Self> {
        let mut host_url = Url::parse(&host_url)?;

        // we need a trailing slash, if not present we append it
        if !host_url.path().ends_with('/') {
            host_url.set_path(&format!("{}/", host_url.path()));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()?;

        Ok(GatewayClient { client, host_url })
    }

    async fn post_raw<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<String> {
        let url = self.host_url.join(path)?;
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status();
        let text = response.text().await?;
        log::debug!("response({}): {}", status.as_u16(), text);

        if !status.is_success() {
            return Err(Error::from_response(status.as_u16(), &text).into());
        }

        Ok(text)
    }

    async fn post<T: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<R> {
        let text = self.post_raw(path, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    pub async fn utxos(&self, address: &str) -> Result<Vec<UtxoResponse>> {
        self.post("btc/getUtxo", &AddressRequest::new(address.to_string()))
            .await
    }

    pub async fn send(&self, raw_tx: String) -> Result<()> {
        self.post_raw("btc/send", &SendRawTxRequest::new(raw_tx))
            .await?;
        Ok(())
    }

    /// Fee rate estimate in satoshis per byte.
    pub async fn estimate_fee(&self, nb_blocks: i64) -> Result<u64> {
        let resp: EstimateFeeResponse = self
            .post("btc/estimatefee", &EstimateFeeRequest { nb_blocks })
            .await?;
        Ok(parse_quantity(&resp.satoshi)?)
    }
}
