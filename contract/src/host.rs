use casper_types::{
    bytesrepr::{FromBytes, ToBytes},
    CLTyped, Key,
};

use crate::{error::NFTCoreError, events::Event};

/// Storage and context the collection logic runs against.
///
/// Named values mirror the contract's named keys, dictionaries mirror
/// Casper dictionaries seeded under a named key. Reading a value that was
/// never written yields `Ok(None)`; a malformed value is an error.
pub trait Host {
    /// The account or contract that invoked the current entry point.
    fn caller(&self) -> Result<Key, NFTCoreError>;

    fn read_named<T: CLTyped + FromBytes>(&self, name: &str) -> Result<Option<T>, NFTCoreError>;

    fn write_named<T: CLTyped + ToBytes>(
        &mut self,
        name: &str,
        value: T,
    ) -> Result<(), NFTCoreError>;

    fn new_dictionary(&mut self, name: &str) -> Result<(), NFTCoreError>;

    fn dictionary_get<T: CLTyped + FromBytes>(
        &self,
        dictionary_name: &str,
        item_key: &str,
    ) -> Result<Option<T>, NFTCoreError>;

    fn dictionary_put<T: CLTyped + ToBytes>(
        &mut self,
        dictionary_name: &str,
        item_key: &str,
        value: T,
    ) -> Result<(), NFTCoreError>;

    fn emit(&mut self, event: Event) -> Result<(), NFTCoreError>;
}

pub(crate) fn read_named_with_user_errors<H: Host, T: CLTyped + FromBytes>(
    host: &H,
    name: &str,
    missing: NFTCoreError,
    invalid: NFTCoreError,
) -> Result<T, NFTCoreError> {
    host.read_named::<T>(name)
        .map_err(|_| invalid)?
        .ok_or(missing)
}
