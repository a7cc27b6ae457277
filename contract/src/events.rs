use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use casper_event_standard::Event as CesEvent;
use casper_types::{
    bytesrepr::{self, ToBytes},
    Key,
};

use crate::identifiers::TokenIdentifier;

#[derive(CesEvent, Debug, PartialEq, Eq)]
pub struct Mint {
    recipient: Key,
    token_id: String,
}

impl Mint {
    pub fn new(recipient: Key, token_id: TokenIdentifier) -> Self {
        Self {
            recipient,
            token_id: token_id.to_string(),
        }
    }
}

#[derive(CesEvent, Debug, PartialEq, Eq)]
pub struct Transfer {
    owner: Key,
    spender: Option<Key>,
    recipient: Key,
    token_id: String,
}

impl Transfer {
    pub fn new(
        owner: Key,
        spender: Option<Key>,
        recipient: Key,
        token_id: TokenIdentifier,
    ) -> Self {
        Self {
            owner,
            spender,
            recipient,
            token_id: token_id.to_string(),
        }
    }
}

#[derive(CesEvent, Debug, PartialEq, Eq)]
pub struct Approval {
    owner: Key,
    spender: Key,
    token_id: String,
}

impl Approval {
    pub fn new(owner: Key, spender: Key, token_id: TokenIdentifier) -> Self {
        Self {
            owner,
            spender,
            token_id: token_id.to_string(),
        }
    }
}

#[derive(CesEvent, Debug, PartialEq, Eq)]
pub struct ApprovalRevoked {
    owner: Key,
    token_id: String,
}

impl ApprovalRevoked {
    pub fn new(owner: Key, token_id: TokenIdentifier) -> Self {
        Self {
            owner,
            token_id: token_id.to_string(),
        }
    }
}

#[derive(CesEvent, Debug, PartialEq, Eq)]
pub struct ApprovalForAll {
    owner: Key,
    operator: Key,
}

impl ApprovalForAll {
    pub fn new(owner: Key, operator: Key) -> Self {
        Self { owner, operator }
    }
}

#[derive(CesEvent, Debug, PartialEq, Eq)]
pub struct RevokedForAll {
    owner: Key,
    operator: Key,
}

impl RevokedForAll {
    pub fn new(owner: Key, operator: Key) -> Self {
        Self { owner, operator }
    }
}

#[derive(CesEvent, Debug, PartialEq, Eq)]
pub struct OwnershipTransferred {
    previous_owner: Key,
    new_owner: Key,
}

impl OwnershipTransferred {
    pub fn new(previous_owner: Key, new_owner: Key) -> Self {
        Self {
            previous_owner,
            new_owner,
        }
    }
}

#[derive(CesEvent, Debug, PartialEq, Eq, Default)]
pub struct VariablesSet {}

impl VariablesSet {
    pub fn new() -> Self {
        Self {}
    }
}

/// Every event the collection can record, handed to the host as one value.
#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Mint(Mint),
    Transfer(Transfer),
    Approval(Approval),
    ApprovalRevoked(ApprovalRevoked),
    ApprovalForAll(ApprovalForAll),
    RevokedForAll(RevokedForAll),
    OwnershipTransferred(OwnershipTransferred),
    VariablesSet(VariablesSet),
}

impl Event {
    /// The bytesrepr encoding of the wrapped event, as stored in the event log.
    pub fn serialize(&self) -> Result<Vec<u8>, bytesrepr::Error> {
        match self {
            Event::Mint(event) => event.to_bytes(),
            Event::Transfer(event) => event.to_bytes(),
            Event::Approval(event) => event.to_bytes(),
            Event::ApprovalRevoked(event) => event.to_bytes(),
            Event::ApprovalForAll(event) => event.to_bytes(),
            Event::RevokedForAll(event) => event.to_bytes(),
            Event::OwnershipTransferred(event) => event.to_bytes(),
            Event::VariablesSet(event) => event.to_bytes(),
        }
    }
}
