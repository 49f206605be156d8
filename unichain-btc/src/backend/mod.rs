//! Collaborator interfaces of the payment core.
//!
//! The core never talks to the network itself: spendable outputs, fee
//! estimates and broadcasting are provided by a backend implementing one of
//! these traits.
//!
//! - [`SyncChainBackend`] - blocking interface (requires `sync` feature)
//! - [`ChainBackend`] - async interface (requires `async` feature)

#[cfg(feature = "sync")]
mod sync_trait;
#[cfg(feature = "async")]
mod r#trait;

#[cfg(feature = "async")]
pub use r#trait::ChainBackend;
#[cfg(feature = "sync")]
pub use sync_trait::SyncChainBackend;
