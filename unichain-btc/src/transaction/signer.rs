use bitcoin::{
    ecdsa,
    hashes::Hash,
    script::{Builder, PushBytesBuf},
    secp256k1::{All, Message, Secp256k1},
    sighash::SighashCache,
    ScriptBuf, Transaction,
};

use crate::constants::PAYMENT_SIGHASH_TYPE;
use crate::error::{Error, Result};
use crate::wallet::KeyMaterial;

/// Produces p2pkh signature scripts for a single key.
pub struct P2pkhSigner<'a> {
    secp: &'a Secp256k1<All>,
    key: &'a KeyMaterial,
}

impl<'a> P2pkhSigner<'a> {
    pub fn new(secp: &'a Secp256k1<All>, key: &'a KeyMaterial) -> Self {
        Self { secp, key }
    }

    /// Signs input `input_index` of `tx`, which spends an output locked by
    /// `prev_script_hex`.
    ///
    /// The public key is pushed in the serialization selected by the key's
    /// `compressed` flag, and must hash to the key hash the script locks to.
    pub fn sign_input(
        &self,
        tx: &Transaction,
        input_index: usize,
        prev_script_hex: &str,
    ) -> Result<ScriptBuf> {
        let script_pubkey = ScriptBuf::from_hex(prev_script_hex)
            .map_err(|e| Error::InvalidScript(format!("{prev_script_hex}: {e}")))?;

        if !script_pubkey.is_p2pkh() {
            return Err(Error::InvalidScript(format!(
                "{prev_script_hex}: not a pay-to-pubkey-hash script"
            )));
        }

        let public_key = self.key.bitcoin_public_key();
        if script_pubkey != ScriptBuf::new_p2pkh(&public_key.pubkey_hash()) {
            return Err(Error::SigningFailure(format!(
                "input {input_index} is locked to a different key (compressed: {})",
                self.key.compressed()
            )));
        }

        let sighash = SighashCache::new(tx)
            .legacy_signature_hash(input_index, &script_pubkey, PAYMENT_SIGHASH_TYPE.to_u32())
            .map_err(|e| Error::SigningFailure(e.to_string()))?;

        let message = Message::from_digest(sighash.to_byte_array());
        let signature = ecdsa::Signature {
            signature: self.secp.sign_ecdsa(&message, self.key.secret_key()),
            sighash_type: PAYMENT_SIGHASH_TYPE,
        };

        Ok(Builder::new()
            .push_slice(PushBytesBuf::try_from(signature.to_vec())?)
            .push_key(&public_key)
            .into_script())
    }
}
