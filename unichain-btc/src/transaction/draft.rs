use std::io::Write;

use bitcoin::{Amount, Transaction};

use crate::error::Result;
use crate::SpendableOutput;

/// A fully signed transaction, ready to be serialized once.
#[derive(Debug, PartialEq)]
pub struct TransactionDraft {
    pub(crate) tx: Transaction,
    pub(crate) spent: Vec<SpendableOutput>,
    pub(crate) fee: Amount,
    pub(crate) estimated_size: usize,
    pub(crate) change: Option<Amount>,
}

impl TransactionDraft {
    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    /// Outputs spent by the transaction, in input order.
    pub fn spent_outputs(&self) -> &[SpendableOutput] {
        &self.spent
    }

    /// Fee reserved during coin selection.
    pub fn fee(&self) -> Amount {
        self.fee
    }

    pub fn estimated_size(&self) -> usize {
        self.estimated_size
    }

    pub fn change(&self) -> Option<Amount> {
        self.change
    }

    pub fn serialize(self) -> Vec<u8> {
        bitcoin::consensus::encode::serialize(&self.tx)
    }

    pub fn serialize_hex(self) -> String {
        hex::encode(self.serialize())
    }

    pub fn write_to<W: Write + ?Sized>(self, writer: &mut W) -> Result<usize> {
        let bytes = self.serialize();
        writer.write_all(&bytes)?;
        Ok(bytes.len())
    }
}
