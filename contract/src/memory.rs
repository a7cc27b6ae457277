//! An in-memory [`Host`] used to exercise the collection logic natively.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

use casper_types::{
    bytesrepr::{Bytes, FromBytes, ToBytes},
    CLTyped, CLValue, Key,
};

use crate::{
    error::NFTCoreError, events::Event, host::Host, identifiers::validate_dictionary_item_key,
};

#[derive(Clone, Debug)]
pub struct InMemoryHost {
    caller: Option<Key>,
    named_values: BTreeMap<String, CLValue>,
    dictionaries: BTreeMap<String, BTreeMap<String, CLValue>>,
    events: Vec<Bytes>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            caller: None,
            named_values: BTreeMap::new(),
            dictionaries: BTreeMap::new(),
            events: Vec::new(),
        }
    }

    pub fn set_caller(&mut self, caller: Key) {
        self.caller = Some(caller);
    }

    /// Runs `call` as `caller`. Every write made by a failing call is
    /// discarded, the way a reverted deploy leaves global state untouched.
    pub fn exec<T, F>(&mut self, caller: Key, call: F) -> Result<T, NFTCoreError>
    where
        F: FnOnce(&mut Self) -> Result<T, NFTCoreError>,
    {
        let snapshot = self.clone();
        self.set_caller(caller);
        match call(self) {
            Ok(value) => Ok(value),
            Err(error) => {
                *self = snapshot;
                Err(error)
            }
        }
    }

    pub fn events(&self) -> &[Bytes] {
        &self.events
    }

    pub fn has_named_value(&self, name: &str) -> bool {
        self.named_values.contains_key(name)
    }

    pub fn has_dictionary(&self, name: &str) -> bool {
        self.dictionaries.contains_key(name)
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for InMemoryHost {
    fn caller(&self) -> Result<Key, NFTCoreError> {
        self.caller.ok_or(NFTCoreError::MissingCaller)
    }

    fn read_named<T: CLTyped + FromBytes>(&self, name: &str) -> Result<Option<T>, NFTCoreError> {
        self.named_values
            .get(name)
            .map(|cl_value| {
                cl_value
                    .clone()
                    .into_t::<T>()
                    .map_err(|_| NFTCoreError::InvalidStorageUref)
            })
            .transpose()
    }

    fn write_named<T: CLTyped + ToBytes>(
        &mut self,
        name: &str,
        value: T,
    ) -> Result<(), NFTCoreError> {
        let cl_value =
            CLValue::from_t(value).map_err(|_| NFTCoreError::FailedToConvertToCLValue)?;
        self.named_values.insert(name.to_string(), cl_value);
        Ok(())
    }

    fn new_dictionary(&mut self, name: &str) -> Result<(), NFTCoreError> {
        if self.dictionaries.contains_key(name) {
            return Err(NFTCoreError::FailedToCreateDictionary);
        }
        self.dictionaries.insert(name.to_string(), BTreeMap::new());
        Ok(())
    }

    fn dictionary_get<T: CLTyped + FromBytes>(
        &self,
        dictionary_name: &str,
        item_key: &str,
    ) -> Result<Option<T>, NFTCoreError> {
        validate_dictionary_item_key(item_key)?;
        let dictionary = self
            .dictionaries
            .get(dictionary_name)
            .ok_or(NFTCoreError::MissingStorageUref)?;
        dictionary
            .get(item_key)
            .map(|cl_value| {
                cl_value
                    .clone()
                    .into_t::<T>()
                    .map_err(|_| NFTCoreError::InvalidStorageUref)
            })
            .transpose()
    }

    fn dictionary_put<T: CLTyped + ToBytes>(
        &mut self,
        dictionary_name: &str,
        item_key: &str,
        value: T,
    ) -> Result<(), NFTCoreError> {
        validate_dictionary_item_key(item_key)?;
        let cl_value =
            CLValue::from_t(value).map_err(|_| NFTCoreError::FailedToConvertToCLValue)?;
        self.dictionaries
            .get_mut(dictionary_name)
            .ok_or(NFTCoreError::MissingStorageUref)?
            .insert(item_key.to_string(), cl_value);
        Ok(())
    }

    fn emit(&mut self, event: Event) -> Result<(), NFTCoreError> {
        let bytes = event
            .serialize()
            .map_err(|_| NFTCoreError::FailedToConvertToCLValue)?;
        self.events.push(Bytes::from(bytes));
        Ok(())
    }
}
