#[cfg(all(feature = "async", feature = "sync"))]
compile_error!("Features `async` and `sync` are mutually exclusive. Use `--no-default-features --features sync` for a sync build.");

#[cfg(not(any(feature = "async", feature = "sync")))]
compile_error!("Either feature `async` or `sync` must be enabled.");

mod backend;
pub mod constants;
mod error;
pub mod transaction;
mod utxo;
mod wallet;

pub use bitcoin;

pub use backend::*;
pub use error::{Error, Result};
pub use transaction::{
    decide_change, required_fee, select_coins, FeeRate, P2pkhSigner, Selection, TransactionDraft,
    TxBuilder,
};
pub use utxo::SpendableOutput;
pub use wallet::{KeyMaterial, NetType, Wallet};
