use bitcoin::Amount;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Coin selection
    #[error("not enough funds for coin selection: needed {needed}, available {available}")]
    InsufficientFunds { needed: Amount, available: Amount },
    #[error("total value of selected outputs overflows")]
    ValueOverflow,
    #[error("selected value does not cover payment and fee")]
    ChangeUnderflow,

    // Validation
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid previous output script: {0}")]
    InvalidScript(String),
    #[error("invalid transaction id {0}")]
    InvalidTxid(String),
    #[error("invalid private key: {0}")]
    InvalidKey(String),
    #[error("configuration: {0}")]
    Configuration(String),

    // Signing
    #[error("signing failed: {0}")]
    SigningFailure(String),

    // Wrapped external errors
    #[error(transparent)]
    PushBytes(#[from] bitcoin::script::PushBytesError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
