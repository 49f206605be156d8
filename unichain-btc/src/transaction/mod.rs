//! Payment transaction construction.
//!
//! - [`fee`] - fee rate and the size based fee model
//! - [`selection`] - incremental, order preserving coin selection
//! - [`change`] - change output decision
//! - [`builder`] - type-state builder wiring the above together
//! - [`signer`] - p2pkh signature scripts
//!
//! Data flows from a list of [`SpendableOutput`](crate::SpendableOutput)s
//! through [`select_coins`], then [`TxBuilder`] adds inputs and change, and
//! [`P2pkhSigner`] fills one signature script per input, in input order.

pub mod builder;
pub mod change;
mod draft;
pub mod fee;
pub mod selection;
pub mod signer;

pub use builder::TxBuilder;
pub use change::decide_change;
pub use draft::TransactionDraft;
pub use fee::{required_fee, FeeRate};
pub use selection::{select_coins, Selection};
pub use signer::P2pkhSigner;
