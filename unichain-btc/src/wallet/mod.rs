//! Single-key payment wallet.
//!
//! [`Wallet`] holds one [`KeyMaterial`], the [`NetType`] it operates on and
//! the receiving address derived from the key. Its `pay*` methods drive a
//! fresh [`TxBuilder`] for every payment, returning change to the receiving
//! address, and serialize the signed result.

mod keys;
mod network;

pub use keys::KeyMaterial;
pub use network::NetType;

use std::{io::Write, str::FromStr};

use bitcoin::{
    address::NetworkUnchecked,
    secp256k1::{All, Secp256k1},
    Address, Amount, Network,
};

use crate::error::{Error, Result};
use crate::transaction::{FeeRate, TransactionDraft, TxBuilder};
use crate::SpendableOutput;

pub struct Wallet {
    key: KeyMaterial,
    net_type: NetType,
    address: Address,
    secp: Secp256k1<All>,
}

impl Wallet {
    pub fn new(key: KeyMaterial, net_type: NetType) -> Self {
        // the receiving address always hashes the uncompressed key
        let uncompressed = bitcoin::PublicKey::new_uncompressed(*key.public_key());
        let address = Address::p2pkh(uncompressed.pubkey_hash(), net_type.network());

        Self {
            key,
            net_type,
            address,
            secp: Secp256k1::new(),
        }
    }

    /// Opens a wallet from a WIF private key and a network name.
    pub fn from_wif(wif: &str, net_name: &str) -> Result<Self> {
        let net_type = NetType::from_str(net_name)?;
        let key = KeyMaterial::from_wif(wif)?;
        Ok(Self::new(key, net_type))
    }

    pub fn get_receiving_address(&self) -> &Address {
        &self.address
    }

    pub fn get_net_type(&self) -> NetType {
        self.net_type
    }

    pub fn get_network(&self) -> Network {
        self.net_type.network()
    }

    pub fn is_compressed(&self) -> bool {
        self.key.compressed()
    }

    fn parse_address(&self, address: &str) -> Result<Address> {
        Address::<NetworkUnchecked>::from_str(address)
            .map_err(|e| Error::InvalidAddress(format!("{address}: {e}")))?
            .require_network(self.get_network())
            .map_err(|e| Error::InvalidAddress(format!("{address}: {e}")))
    }

    /// Builds and signs a payment of `amount` to `to`, without serializing it.
    pub fn prepare_payment(
        &self,
        candidates: Vec<SpendableOutput>,
        to: &str,
        amount: Amount,
        fee_rate: FeeRate,
    ) -> Result<TransactionDraft> {
        let payee = self.parse_address(to)?;

        let draft = TxBuilder::new(candidates)
            .pay_to(payee, amount)
            .change_to(self.address.clone())
            .fee_rate(fee_rate)
            .sign_with(&self.key)
            .build(&self.secp)?;

        log::info!(
            "built payment {} with {} inputs, fee {}",
            draft.transaction().compute_txid(),
            draft.transaction().input.len(),
            draft.fee()
        );

        Ok(draft)
    }

    /// Pays `amount` to `to` and returns the signed transaction in wire format.
    pub fn pay(
        &self,
        candidates: Vec<SpendableOutput>,
        to: &str,
        amount: Amount,
        fee_rate: FeeRate,
    ) -> Result<Vec<u8>> {
        Ok(self
            .prepare_payment(candidates, to, amount, fee_rate)?
            .serialize())
    }

    pub fn pay_hex(
        &self,
        candidates: Vec<SpendableOutput>,
        to: &str,
        amount: Amount,
        fee_rate: FeeRate,
    ) -> Result<String> {
        Ok(self
            .prepare_payment(candidates, to, amount, fee_rate)?
            .serialize_hex())
    }

    pub fn pay_to_writer<W: Write + ?Sized>(
        &self,
        candidates: Vec<SpendableOutput>,
        to: &str,
        amount: Amount,
        fee_rate: FeeRate,
        writer: &mut W,
    ) -> Result<()> {
        self.prepare_payment(candidates, to, amount, fee_rate)?
            .write_to(writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use bitcoin::secp256k1::SecretKey;

    use super::*;

    #[test]
    fn address_hashes_uncompressed_key() {
        let sk = SecretKey::from_slice(&[0x33; 32]).unwrap();
        let compressed = Wallet::new(KeyMaterial::new(sk, true), NetType::RegTest);
        let uncompressed = Wallet::new(KeyMaterial::new(sk, false), NetType::RegTest);

        assert_eq!(
            compressed.get_receiving_address(),
            uncompressed.get_receiving_address()
        );
        assert!(compressed.is_compressed());
        assert!(!uncompressed.is_compressed());
    }

    #[test]
    fn address_follows_network() {
        let sk = SecretKey::from_slice(&[0x33; 32]).unwrap();
        let main = Wallet::new(KeyMaterial::new(sk, false), NetType::MainNet);
        let test = Wallet::new(KeyMaterial::new(sk, false), NetType::TestNet3);

        assert!(main.get_receiving_address().to_string().starts_with('1'));
        let test_address = test.get_receiving_address().to_string();
        assert!(test_address.starts_with('m') || test_address.starts_with('n'));
        assert_eq!(test.get_network(), Network::Testnet);
    }

    #[test]
    fn unknown_network_name() {
        let err = Wallet::from_wif(
            "93RdvTuHcJfMbihdZVqjSHvbEXpUzVEgFMxkwqK6jRqyDXBJf6w",
            "litecoin",
        )
        .err()
        .unwrap();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn destination_must_match_network() {
        let sk = SecretKey::from_slice(&[0x33; 32]).unwrap();
        let wallet = Wallet::new(KeyMaterial::new(sk, false), NetType::RegTest);

        assert!(wallet
            .parse_address("n3aVWR1nkPJ1bq3DTHs8grsqc6un4MNVR1")
            .is_ok());
        assert!(matches!(
            wallet.parse_address("1BvBMSEYstWetqTFn5Au4m4GFg7xJaNVN2"),
            Err(Error::InvalidAddress(_))
        ));
        assert!(matches!(
            wallet.parse_address("garbage"),
            Err(Error::InvalidAddress(_))
        ));
    }
}
