use bitcoin::{
    absolute::LockTime, Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Witness,
};

use crate::constants::{SPEND_SIZE, TX_VERSION};
use crate::error::{Error, Result};
use crate::transaction::fee::{required_fee, FeeRate};
use crate::SpendableOutput;

/// Outcome of a successful coin selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Unsigned inputs, in candidate order.
    pub inputs: Vec<TxIn>,
    /// The outputs spent by `inputs`, index for index.
    pub selected: Vec<SpendableOutput>,
    pub total: Amount,
    pub fee: Amount,
    pub change: Amount,
    /// Serialized size the fee was computed from, signature scripts included.
    pub estimated_size: usize,
}

pub(crate) fn unsigned_input(previous_output: OutPoint) -> TxIn {
    TxIn {
        previous_output,
        script_sig: ScriptBuf::new(),
        sequence: Sequence::MAX,
        witness: Witness::new(),
    }
}

/// Selects the shortest prefix of `candidates` that pays `target` plus fee.
///
/// Candidates are taken in the order given, never sorted by value: the first
/// prefix that covers the payment wins and the remaining candidates are not
/// looked at, even when a later one would make a cheaper transaction.
///
/// The size estimate covers the payment output and the selected inputs with
/// a worst case signature script ([`SPEND_SIZE`]) for each of them.
///
/// `target` must be strictly positive.
pub fn select_coins(
    candidates: &[SpendableOutput],
    payment: &TxOut,
    target: Amount,
    fee_rate: FeeRate,
) -> Result<Selection> {
    let mut skeleton = Transaction {
        version: TX_VERSION,
        lock_time: LockTime::ZERO,
        input: Vec::with_capacity(candidates.len()),
        output: vec![payment.clone()],
    };
    let mut selected = Vec::with_capacity(candidates.len());
    let mut total = Amount::ZERO;
    let mut fee = Amount::ZERO;

    for utxo in candidates {
        total = total.checked_add(utxo.value).ok_or(Error::ValueOverflow)?;
        skeleton.input.push(unsigned_input(utxo.outpoint()?));
        selected.push(utxo.clone());

        let estimated_size = skeleton.total_size() + SPEND_SIZE * skeleton.input.len();
        fee = required_fee(estimated_size, fee_rate);

        let funded = total
            .checked_sub(fee)
            .is_some_and(|available| available >= target);
        if !funded {
            continue;
        }

        let change = total
            .checked_sub(target)
            .and_then(|rest| rest.checked_sub(fee))
            .ok_or(Error::ChangeUnderflow)?;

        log::debug!(
            "selected {} of {} outputs, required fee: {}, change: {}",
            selected.len(),
            candidates.len(),
            fee.to_sat(),
            change.to_sat()
        );

        return Ok(Selection {
            inputs: skeleton.input,
            selected,
            total,
            fee,
            change,
            estimated_size,
        });
    }

    Err(Error::InsufficientFunds {
        needed: target.checked_add(fee).unwrap_or(Amount::MAX),
        available: total,
    })
}
