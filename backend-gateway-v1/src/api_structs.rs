use serde::{Deserialize, Serialize};
use unichain_btc::{bitcoin::Amount, SpendableOutput};

use crate::Error;

#[derive(Debug, Serialize)]
pub struct AddressRequest {
    pub address: String,
}

impl AddressRequest {
    pub fn new(address: String) -> Self {
        Self { address }
    }
}

#[derive(Debug, Serialize)]
pub struct SendRawTxRequest {
    #[serde(rename = "rawtx")]
    pub raw_tx: String,
}

impl SendRawTxRequest {
    pub fn new(raw_tx: String) -> Self {
        Self { raw_tx }
    }
}

#[derive(Debug, Serialize)]
pub struct EstimateFeeRequest {
    #[serde(rename = "nbBlocks")]
    pub nb_blocks: i64,
}

#[derive(Debug, Deserialize)]
pub struct EstimateFeeResponse {
    /// Satoshis per byte as a `0x` prefixed hex quantity.
    pub satoshi: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: String,
}

/// Unspent output as reported by the gateway. Numbers arrive as floats.
#[derive(Debug, Clone, Deserialize)]
pub struct UtxoResponse {
    pub address: String,
    pub txid: String,
    pub vout: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pubkey: String,
    /// Display unit, never used for arithmetic.
    pub amount: f64,
    pub satoshis: f64,
    pub height: f64,
    pub confirmations: f64,
}

impl TryFrom<UtxoResponse> for SpendableOutput {
    type Error = Error;

    fn try_from(value: UtxoResponse) -> Result<Self, Self::Error> {
        let sats = value.satoshis;
        if !sats.is_finite() || sats < 0.0 || sats.fract() != 0.0 || sats >= u64::MAX as f64 {
            return Err(Error::InvalidValue(sats));
        }

        Ok(SpendableOutput {
            address: value.address,
            txid: value.txid,
            vout: value.vout,
            script_pubkey: value.script_pubkey,
            value: Amount::from_sat(sats as u64),
            // saturating casts
            height: value.height as u32,
            confirmations: value.confirmations as u32,
        })
    }
}

/// Parses a `0x` prefixed hex quantity; leading zeros are allowed and a bare
/// `0x` reads as zero.
pub fn parse_quantity(quantity: &str) -> Result<u64, Error> {
    let digits = quantity
        .strip_prefix("0x")
        .ok_or_else(|| Error::InvalidQuantity(quantity.to_string()))?
        .trim_start_matches('0');

    if digits.is_empty() {
        return Ok(0);
    }

    u64::from_str_radix(digits, 16).map_err(|_| Error::InvalidQuantity(quantity.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantities() {
        assert_eq!(parse_quantity("0x14").unwrap(), 20);
        assert_eq!(parse_quantity("0x00000a").unwrap(), 10);
        assert_eq!(parse_quantity("0x").unwrap(), 0);
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert!(parse_quantity("14").is_err());
        assert!(parse_quantity("0xzz").is_err());
        assert!(parse_quantity("0x1ffffffffffffffff").is_err());
    }

    #[test]
    fn utxo_uses_satoshis() {
        let json = r#"[{
            "address": "mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn",
            "txid": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
            "vout": 0,
            "scriptPubKey": "76a914243f1394f44554f4ce3fd68649c19adc483ce92488ac",
            "amount": 0.1,
            "satoshis": 10000000,
            "height": 215.0,
            "confirmations": 3
        }]"#;
        let resp: Vec<UtxoResponse> = serde_json::from_str(json).unwrap();
        let utxo = SpendableOutput::try_from(resp[0].clone()).unwrap();

        assert_eq!(utxo.value, Amount::from_sat(10_000_000));
        assert_eq!(utxo.height, 215);
        assert_eq!(utxo.confirmations, 3);
    }

    #[test]
    fn fractional_satoshis_rejected() {
        let resp = UtxoResponse {
            address: String::new(),
            txid: String::new(),
            vout: 0,
            script_pubkey: String::new(),
            amount: 0.0,
            satoshis: 12.5,
            height: 0.0,
            confirmations: 0.0,
        };
        assert!(matches!(
            SpendableOutput::try_from(resp),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn out_of_range_satoshis_rejected() {
        let json = r#"{
            "address": "mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn",
            "txid": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
            "vout": 0,
            "scriptPubKey": "76a914243f1394f44554f4ce3fd68649c19adc483ce92488ac",
            "amount": 0.0,
            "satoshis": 18446744073709551616.0,
            "height": 0,
            "confirmations": 0
        }"#;
        let resp: UtxoResponse = serde_json::from_str(json).unwrap();
        assert!(matches!(
            SpendableOutput::try_from(resp),
            Err(Error::InvalidValue(_))
        ));

        let mut negative: UtxoResponse = serde_json::from_str(json).unwrap();
        negative.satoshis = -1.0;
        assert!(matches!(
            SpendableOutput::try_from(negative),
            Err(Error::InvalidValue(_))
        ));
    }

    #[test]
    fn error_body() {
        let err = Error::from_response(400, r#"{"code": -26, "message": "dust"}"#);
        assert_eq!(err.to_string(), "(400) dust");

        let err = Error::from_response(500, r#"{"message": "no code"}"#);
        assert_eq!(err.to_string(), "(500) no code");

        let err = Error::from_response(502, "bad gateway");
        assert_eq!(err.to_string(), "(502) bad gateway");
    }
}
