use bitcoin::{
    secp256k1::{PublicKey, Secp256k1, SecretKey},
    PrivateKey,
};

use crate::error::{Error, Result};

/// Signing key pair together with the serialization used for its public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    secret_key: SecretKey,
    public_key: PublicKey,
    compressed: bool,
}

impl KeyMaterial {
    pub fn new(secret_key: SecretKey, compressed: bool) -> Self {
        let secp = Secp256k1::signing_only();
        Self {
            public_key: secret_key.public_key(&secp),
            secret_key,
            compressed,
        }
    }

    /// Imports a WIF private key; the compression flag comes from the encoding.
    pub fn from_wif(wif: &str) -> Result<Self> {
        let private_key = PrivateKey::from_wif(wif).map_err(|e| Error::InvalidKey(e.to_string()))?;
        Ok(Self::new(private_key.inner, private_key.compressed))
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn compressed(&self) -> bool {
        self.compressed
    }

    /// Public key in the serialization pushed by signature scripts.
    pub fn bitcoin_public_key(&self) -> bitcoin::PublicKey {
        bitcoin::PublicKey {
            compressed: self.compressed,
            inner: self.public_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // regtest, uncompressed
    const UNCOMPRESSED_WIF: &str = "93RdvTuHcJfMbihdZVqjSHvbEXpUzVEgFMxkwqK6jRqyDXBJf6w";

    #[test]
    fn wif_compression_flag() {
        let key = KeyMaterial::from_wif(UNCOMPRESSED_WIF).unwrap();
        assert!(!key.compressed());
        assert_eq!(key.bitcoin_public_key().to_bytes().len(), 65);

        let compressed = PrivateKey::new(*key.secret_key(), bitcoin::Network::Regtest).to_wif();
        let key = KeyMaterial::from_wif(&compressed).unwrap();
        assert!(key.compressed());
        assert_eq!(key.bitcoin_public_key().to_bytes().len(), 33);
    }

    #[test]
    fn invalid_wif() {
        assert!(matches!(
            KeyMaterial::from_wif("not-a-key"),
            Err(Error::InvalidKey(_))
        ));
    }
}
