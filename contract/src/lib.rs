#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod collection;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod host;
pub mod identifiers;

// An in-memory host for exercising the contract
// logic off-chain.
#[cfg(any(test, feature = "test-support"))]
pub mod memory;

// A feature to allow the contract to be used
// as a library and a binary.
#[cfg(feature = "contract-support")]
pub mod utils;

pub use error::NFTCoreError;
