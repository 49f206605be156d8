//! Type-state builder assembling one payment transaction.
//!
//! Each configuration step consumes the builder and returns it in the next
//! stage, so `build` is only reachable once destination, change address, fee
//! rate and key are known:
//!
//! ```ignore
//! let draft = TxBuilder::new(utxos)
//!     .pay_to(destination, amount)
//!     .change_to(change)
//!     .fee_rate(fee_rate)
//!     .sign_with(&key)
//!     .build(&secp)?;
//! ```
//!
//! `build` consumes the builder; a new one is needed for every transaction.

use bitcoin::{
    absolute::LockTime,
    secp256k1::{All, Secp256k1},
    Address, Amount, Transaction, TxOut,
};

use crate::constants::TX_VERSION;
use crate::error::{Error, Result};
use crate::transaction::{
    change::decide_change, draft::TransactionDraft, fee::FeeRate, selection::select_coins,
    signer::P2pkhSigner,
};
use crate::wallet::KeyMaterial;
use crate::SpendableOutput;

pub struct Created;

pub struct DestinationSet {
    payee: Address,
    amount: Amount,
}

pub struct ChangeAddressSet {
    payee: Address,
    amount: Amount,
    change: Address,
}

pub struct FeeRateSet {
    payee: Address,
    amount: Amount,
    change: Address,
    fee_rate: FeeRate,
}

pub struct KeySet {
    payee: Address,
    amount: Amount,
    change: Address,
    fee_rate: FeeRate,
    key: KeyMaterial,
}

pub struct TxBuilder<S> {
    candidates: Vec<SpendableOutput>,
    stage: S,
}

impl TxBuilder<Created> {
    /// Starts a transaction funded from `candidates`, tried in the given order.
    pub fn new(candidates: Vec<SpendableOutput>) -> Self {
        Self {
            candidates,
            stage: Created,
        }
    }

    pub fn pay_to(self, payee: Address, amount: Amount) -> TxBuilder<DestinationSet> {
        TxBuilder {
            candidates: self.candidates,
            stage: DestinationSet { payee, amount },
        }
    }
}

impl TxBuilder<DestinationSet> {
    pub fn change_to(self, change: Address) -> TxBuilder<ChangeAddressSet> {
        let DestinationSet { payee, amount } = self.stage;
        TxBuilder {
            candidates: self.candidates,
            stage: ChangeAddressSet {
                payee,
                amount,
                change,
            },
        }
    }
}

impl TxBuilder<ChangeAddressSet> {
    pub fn fee_rate(self, fee_rate: FeeRate) -> TxBuilder<FeeRateSet> {
        let ChangeAddressSet {
            payee,
            amount,
            change,
        } = self.stage;
        TxBuilder {
            candidates: self.candidates,
            stage: FeeRateSet {
                payee,
                amount,
                change,
                fee_rate,
            },
        }
    }
}

impl TxBuilder<FeeRateSet> {
    pub fn sign_with(self, key: &KeyMaterial) -> TxBuilder<KeySet> {
        let FeeRateSet {
            payee,
            amount,
            change,
            fee_rate,
        } = self.stage;
        TxBuilder {
            candidates: self.candidates,
            stage: KeySet {
                payee,
                amount,
                change,
                fee_rate,
                key: key.clone(),
            },
        }
    }
}

impl TxBuilder<KeySet> {
    /// Selects inputs, adds change and signs every input.
    ///
    /// Nothing is returned unless every step succeeds.
    pub fn build(self, secp: &Secp256k1<All>) -> Result<TransactionDraft> {
        let KeySet {
            payee,
            amount,
            change,
            fee_rate,
            key,
        } = self.stage;

        if amount == Amount::ZERO {
            return Err(Error::Configuration(
                "payment amount must be positive".to_string(),
            ));
        }

        log::debug!("paying {} to {}", amount, payee);

        let payment = TxOut {
            value: amount,
            script_pubkey: payee.script_pubkey(),
        };

        let selection = select_coins(&self.candidates, &payment, amount, fee_rate)?;

        let mut tx = Transaction {
            version: TX_VERSION,
            lock_time: LockTime::ZERO,
            input: selection.inputs,
            output: vec![payment],
        };

        let change_value = decide_change(selection.change);
        if let Some(value) = change_value {
            tx.output.push(TxOut {
                value,
                script_pubkey: change.script_pubkey(),
            });
        }

        // input order is the signing order
        let signer = P2pkhSigner::new(secp, &key);
        let script_sigs = selection
            .selected
            .iter()
            .enumerate()
            .map(|(index, utxo)| signer.sign_input(&tx, index, &utxo.script_pubkey))
            .collect::<Result<Vec<_>>>()?;

        for (input, script_sig) in tx.input.iter_mut().zip(script_sigs) {
            input.script_sig = script_sig;
        }

        Ok(TransactionDraft {
            tx,
            spent: selection.selected,
            fee: selection.fee,
            estimated_size: selection.estimated_size,
            change: change_value,
        })
    }
}
