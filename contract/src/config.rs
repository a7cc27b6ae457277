use alloc::string::String;

use casper_types::U256;

use crate::error::NFTCoreError;

/// Installation arguments of a collection. These are fixed at `init`,
/// except for the base URI which the collection owner may change later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionConfig {
    pub collection_name: String,
    pub collection_symbol: String,
    pub max_supply: U256,
    pub base_uri: String,
}

impl CollectionConfig {
    pub fn new(
        collection_name: String,
        collection_symbol: String,
        max_supply: U256,
        base_uri: String,
    ) -> Self {
        Self {
            collection_name,
            collection_symbol,
            max_supply,
            base_uri,
        }
    }

    pub fn validate(&self) -> Result<(), NFTCoreError> {
        // A collection that can never hold a token is a misconfiguration.
        if self.max_supply.is_zero() {
            return Err(NFTCoreError::InvalidMaxSupply);
        }
        Ok(())
    }
}
