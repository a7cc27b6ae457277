use alloc::{string::String, vec::Vec};
use core::fmt;

use blake2::{
    digest::{Update, VariableOutput},
    VarBlake2b,
};
use casper_types::{account::AccountHash, bytesrepr::ToBytes, Key, BLAKE2B_DIGEST_LENGTH, U256};

use crate::{constants::DICTIONARY_ITEM_KEY_MAX_LENGTH, error::NFTCoreError};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct TokenIdentifier(U256);

impl TokenIdentifier {
    pub fn new(token_id: U256) -> Self {
        TokenIdentifier(token_id)
    }

    /// Big-endian hex of the id. Always 64 characters, so every `U256`
    /// fits the dictionary item key limit.
    pub fn get_dictionary_item_key(&self) -> String {
        let mut bytes = [0u8; 32];
        self.0.to_big_endian(&mut bytes);
        base16::encode_lower(&bytes)
    }
}

impl fmt::Display for TokenIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Only accounts and contracts can hold tokens or act on them.
pub fn validate_key(key: &Key) -> Result<(), NFTCoreError> {
    match key {
        Key::Account(_) | Key::Hash(_) => Ok(()),
        _ => Err(NFTCoreError::InvalidKey),
    }
}

/// The all-zero account hash and hash address play the role of the
/// null address and never own anything.
pub fn is_zero_key(key: &Key) -> bool {
    match key {
        Key::Account(account_hash) => *account_hash == AccountHash::default(),
        Key::Hash(hash_addr) => hash_addr.iter().all(|byte| *byte == 0),
        _ => false,
    }
}

pub fn owner_item_key(owner: &Key) -> Result<String, NFTCoreError> {
    validate_key(owner)?;
    let bytes = owner
        .to_bytes()
        .map_err(|_| NFTCoreError::FailedToSerializeKey)?;
    Ok(base16::encode_lower(&blake2b(&bytes)?))
}

pub fn operator_item_key(owner: &Key, operator: &Key) -> Result<String, NFTCoreError> {
    validate_key(owner)?;
    validate_key(operator)?;
    let mut bytes: Vec<u8> = owner
        .to_bytes()
        .map_err(|_| NFTCoreError::FailedToSerializeKey)?;
    bytes.extend(
        operator
            .to_bytes()
            .map_err(|_| NFTCoreError::FailedToSerializeKey)?,
    );
    Ok(base16::encode_lower(&blake2b(&bytes)?))
}

pub fn validate_dictionary_item_key(item_key: &str) -> Result<(), NFTCoreError> {
    if item_key.is_empty() || item_key.len() > DICTIONARY_ITEM_KEY_MAX_LENGTH {
        return Err(NFTCoreError::InvalidDictionaryItemKey);
    }
    Ok(())
}

fn blake2b(data: &[u8]) -> Result<[u8; BLAKE2B_DIGEST_LENGTH], NFTCoreError> {
    let mut result = [0u8; BLAKE2B_DIGEST_LENGTH];
    let mut hasher =
        VarBlake2b::new(BLAKE2B_DIGEST_LENGTH).map_err(|_| NFTCoreError::FailedToHashKey)?;
    hasher.update(data);
    hasher.finalize_variable(|slice| {
        result.copy_from_slice(slice);
    });
    Ok(result)
}
