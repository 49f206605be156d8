use bitcoin::{sighash::EcdsaSighashType, transaction::Version};

/// Largest signature script spending a p2pkh output:
/// OP_DATA_73 <sig> OP_DATA_33 <pubkey>
///
/// Only a compressed pubkey fits. Inputs signed with an uncompressed key are
/// 32 bytes larger than reserved, so their transactions pay below the
/// requested fee rate.
pub const SPEND_SIZE: usize = 1 + 73 + 1 + 33;

pub const TX_VERSION: Version = Version::ONE;

/// Sighash type attached to every input signature.
///
/// Signatures commit to the inputs but not to the outputs, so inputs may be
/// added by other parties without invalidating them. Outputs are NOT
/// protected against tampering after signing. Switching this changes wire
/// compatibility with the network the wallet talks to.
pub const PAYMENT_SIGHASH_TYPE: EcdsaSighashType = EcdsaSighashType::None;
