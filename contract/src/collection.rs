//! Collection logic behind every entry point. Each operation validates
//! everything it needs before its first write, so a failing call never leaves
//! partial state behind even on hosts without revert semantics.

use alloc::{format, string::String};

use casper_types::{Key, U256};

use crate::{
    config::CollectionConfig,
    constants::{
        APPROVED, BALANCES, BASE_URI, COLLECTION_NAME, COLLECTION_OWNER, COLLECTION_SYMBOL,
        INSTALLER, MAX_SUPPLY, OPERATORS, TOKEN_OWNERS, TOTAL_SUPPLY,
    },
    error::NFTCoreError,
    events::{
        Approval, ApprovalForAll, ApprovalRevoked, Event, Mint, OwnershipTransferred,
        RevokedForAll, Transfer, VariablesSet,
    },
    host::{read_named_with_user_errors, Host},
    identifiers::{is_zero_key, operator_item_key, owner_item_key, validate_key, TokenIdentifier},
};

pub fn init<H: Host>(host: &mut H, config: CollectionConfig) -> Result<(), NFTCoreError> {
    // We only allow init to run once. If the collection name already exists
    // init has been called before.
    if host.read_named::<String>(COLLECTION_NAME)?.is_some() {
        return Err(NFTCoreError::ContractAlreadyInitialized);
    }

    // Only the installing account may call this method.
    let installer: Key = read_named_with_user_errors(
        host,
        INSTALLER,
        NFTCoreError::MissingInstaller,
        NFTCoreError::InvalidInstaller,
    )?;
    if installer != host.caller()? {
        return Err(NFTCoreError::InvalidAccount);
    }

    config.validate()?;

    host.write_named(COLLECTION_NAME, config.collection_name)?;
    host.write_named(COLLECTION_SYMBOL, config.collection_symbol)?;
    host.write_named(MAX_SUPPLY, config.max_supply)?;
    host.write_named(BASE_URI, config.base_uri)?;
    host.write_named(TOTAL_SUPPLY, U256::zero())?;
    host.write_named(COLLECTION_OWNER, installer)?;

    host.new_dictionary(TOKEN_OWNERS)?;
    host.new_dictionary(BALANCES)?;
    host.new_dictionary(APPROVED)?;
    host.new_dictionary(OPERATORS)?;
    Ok(())
}

pub fn name<H: Host>(host: &H) -> Result<String, NFTCoreError> {
    read_named_with_user_errors(
        host,
        COLLECTION_NAME,
        NFTCoreError::MissingCollectionName,
        NFTCoreError::InvalidCollectionName,
    )
}

pub fn symbol<H: Host>(host: &H) -> Result<String, NFTCoreError> {
    read_named_with_user_errors(
        host,
        COLLECTION_SYMBOL,
        NFTCoreError::MissingCollectionSymbol,
        NFTCoreError::InvalidCollectionSymbol,
    )
}

pub fn max_supply<H: Host>(host: &H) -> Result<U256, NFTCoreError> {
    read_named_with_user_errors(
        host,
        MAX_SUPPLY,
        NFTCoreError::MissingMaxSupply,
        NFTCoreError::InvalidMaxSupply,
    )
}

pub fn total_supply<H: Host>(host: &H) -> Result<U256, NFTCoreError> {
    read_named_with_user_errors(
        host,
        TOTAL_SUPPLY,
        NFTCoreError::MissingTotalSupply,
        NFTCoreError::InvalidTotalSupply,
    )
}

pub fn base_uri<H: Host>(host: &H) -> Result<String, NFTCoreError> {
    read_named_with_user_errors(
        host,
        BASE_URI,
        NFTCoreError::MissingBaseUri,
        NFTCoreError::InvalidBaseUri,
    )
}

/// The privileged account allowed to mint and to change collection variables.
pub fn owner<H: Host>(host: &H) -> Result<Key, NFTCoreError> {
    read_named_with_user_errors(
        host,
        COLLECTION_OWNER,
        NFTCoreError::MissingCollectionOwner,
        NFTCoreError::InvalidCollectionOwner,
    )
}

pub fn safe_mint<H: Host>(host: &mut H, to: Key, token_id: U256) -> Result<(), NFTCoreError> {
    // Authorization comes first so unprivileged callers learn nothing else.
    require_collection_owner(host)?;

    let total_supply = total_supply(host)?;
    if total_supply >= max_supply(host)? {
        return Err(NFTCoreError::MaxSupplyReached);
    }

    validate_recipient(&to)?;

    let token_id = TokenIdentifier::new(token_id);
    if token_owner(host, &token_id)?.is_some() {
        return Err(NFTCoreError::TokenAlreadyMinted);
    }

    let to_item_key = owner_item_key(&to)?;
    let updated_balance = balance_by_item_key(host, &to_item_key)? + U256::one();

    host.dictionary_put(TOKEN_OWNERS, &token_id.get_dictionary_item_key(), to)?;
    host.dictionary_put(BALANCES, &to_item_key, updated_balance)?;
    host.write_named(TOTAL_SUPPLY, total_supply + U256::one())?;

    host.emit(Event::Mint(Mint::new(to, token_id)))
}

pub fn owner_of<H: Host>(host: &H, token_id: U256) -> Result<Key, NFTCoreError> {
    existing_token_owner(host, &TokenIdentifier::new(token_id))
}

pub fn balance_of<H: Host>(host: &H, owner: Key) -> Result<U256, NFTCoreError> {
    if is_zero_key(&owner) {
        return Err(NFTCoreError::InvalidTokenOwner);
    }
    let owner_item_key = owner_item_key(&owner)?;
    balance_by_item_key(host, &owner_item_key)
}

pub fn token_uri<H: Host>(host: &H, token_id: U256) -> Result<String, NFTCoreError> {
    let token_id = TokenIdentifier::new(token_id);
    existing_token_owner(host, &token_id)?;

    let base_uri = base_uri(host)?;
    if base_uri.is_empty() {
        return Ok(base_uri);
    }
    Ok(format!("{}{}", base_uri, token_id))
}

// approve marks a token as transferable by a single spender. Passing no
// spender clears the current approval.
pub fn approve<H: Host>(
    host: &mut H,
    spender: Option<Key>,
    token_id: U256,
) -> Result<(), NFTCoreError> {
    let token_id = TokenIdentifier::new(token_id);
    let token_owner = existing_token_owner(host, &token_id)?;

    let caller = host.caller()?;
    if caller != token_owner && !is_approved_for_all(host, token_owner, caller)? {
        return Err(NFTCoreError::NotApprovedOrOwner);
    }

    let event = match spender {
        Some(spender) => {
            validate_key(&spender).map_err(|_| NFTCoreError::InvalidSpender)?;
            if is_zero_key(&spender) {
                return Err(NFTCoreError::InvalidSpender);
            }
            if spender == token_owner {
                return Err(NFTCoreError::ApprovalToCurrentOwner);
            }
            Event::Approval(Approval::new(token_owner, spender, token_id))
        }
        None => Event::ApprovalRevoked(ApprovalRevoked::new(token_owner, token_id)),
    };

    host.dictionary_put(APPROVED, &token_id.get_dictionary_item_key(), spender)?;
    host.emit(event)
}

pub fn get_approved<H: Host>(host: &H, token_id: U256) -> Result<Option<Key>, NFTCoreError> {
    let token_id = TokenIdentifier::new(token_id);
    existing_token_owner(host, &token_id)?;
    approved_spender(host, &token_id)
}

pub fn set_approval_for_all<H: Host>(
    host: &mut H,
    operator: Key,
    approved: bool,
) -> Result<(), NFTCoreError> {
    let caller = host.caller()?;

    validate_key(&operator).map_err(|_| NFTCoreError::InvalidOperator)?;
    if is_zero_key(&operator) {
        return Err(NFTCoreError::InvalidOperator);
    }
    if operator == caller {
        return Err(NFTCoreError::ApproveToCaller);
    }

    let item_key = operator_item_key(&caller, &operator)?;
    host.dictionary_put(OPERATORS, &item_key, approved)?;

    let event = if approved {
        Event::ApprovalForAll(ApprovalForAll::new(caller, operator))
    } else {
        Event::RevokedForAll(RevokedForAll::new(caller, operator))
    };
    host.emit(event)
}

pub fn is_approved_for_all<H: Host>(
    host: &H,
    owner: Key,
    operator: Key,
) -> Result<bool, NFTCoreError> {
    // Keys that can never hold tokens are never operators.
    if validate_key(&owner).is_err() || validate_key(&operator).is_err() {
        return Ok(false);
    }
    let item_key = operator_item_key(&owner, &operator)?;
    Ok(host
        .dictionary_get::<bool>(OPERATORS, &item_key)?
        .unwrap_or(false))
}

pub fn transfer_from<H: Host>(
    host: &mut H,
    from: Key,
    to: Key,
    token_id: U256,
) -> Result<(), NFTCoreError> {
    let token_id = TokenIdentifier::new(token_id);
    let token_owner = existing_token_owner(host, &token_id)?;

    // Revert if from account is not the token_owner
    if from != token_owner {
        return Err(NFTCoreError::IncorrectOwner);
    }

    validate_recipient(&to)?;

    let caller = host.caller()?;
    let approved = approved_spender(host, &token_id)?;
    let is_approved = approved == Some(caller);

    if caller != token_owner && !is_approved && !is_approved_for_all(host, token_owner, caller)? {
        return Err(NFTCoreError::NotApprovedOrOwner);
    }

    let from_item_key = owner_item_key(&from)?;
    let to_item_key = owner_item_key(&to)?;
    let from_balance = balance_by_item_key(host, &from_item_key)?;
    if from_balance.is_zero() {
        // This should never happen if balances are kept in step with owners.
        return Err(NFTCoreError::FatalBalanceUnderflow);
    }

    let item_key = token_id.get_dictionary_item_key();
    if approved.is_some() {
        host.dictionary_put(APPROVED, &item_key, Option::<Key>::None)?;
    }
    host.dictionary_put(BALANCES, &from_item_key, from_balance - U256::one())?;
    let to_balance = balance_by_item_key(host, &to_item_key)?;
    host.dictionary_put(BALANCES, &to_item_key, to_balance + U256::one())?;
    host.dictionary_put(TOKEN_OWNERS, &item_key, to)?;

    let spender = if caller == token_owner {
        None
    } else {
        Some(caller)
    };
    host.emit(Event::Transfer(Transfer::new(
        token_owner,
        spender,
        to,
        token_id,
    )))
}

pub fn set_base_uri<H: Host>(host: &mut H, base_uri: String) -> Result<(), NFTCoreError> {
    require_collection_owner(host)?;
    host.write_named(BASE_URI, base_uri)?;
    host.emit(Event::VariablesSet(VariablesSet::new()))
}

pub fn transfer_ownership<H: Host>(host: &mut H, new_owner: Key) -> Result<(), NFTCoreError> {
    let previous_owner = require_collection_owner(host)?;

    validate_key(&new_owner).map_err(|_| NFTCoreError::InvalidNewOwner)?;
    if is_zero_key(&new_owner) {
        return Err(NFTCoreError::InvalidNewOwner);
    }

    host.write_named(COLLECTION_OWNER, new_owner)?;
    host.emit(Event::OwnershipTransferred(OwnershipTransferred::new(
        previous_owner,
        new_owner,
    )))
}

fn require_collection_owner<H: Host>(host: &H) -> Result<Key, NFTCoreError> {
    let collection_owner = owner(host)?;
    if host.caller()? != collection_owner {
        return Err(NFTCoreError::NotAuthorized);
    }
    Ok(collection_owner)
}

fn validate_recipient(to: &Key) -> Result<(), NFTCoreError> {
    validate_key(to).map_err(|_| NFTCoreError::InvalidReceiver)?;
    if is_zero_key(to) {
        return Err(NFTCoreError::InvalidReceiver);
    }
    Ok(())
}

fn token_owner<H: Host>(host: &H, token_id: &TokenIdentifier) -> Result<Option<Key>, NFTCoreError> {
    host.dictionary_get::<Key>(TOKEN_OWNERS, &token_id.get_dictionary_item_key())
}

fn existing_token_owner<H: Host>(
    host: &H,
    token_id: &TokenIdentifier,
) -> Result<Key, NFTCoreError> {
    token_owner(host, token_id)?.ok_or(NFTCoreError::NonexistentToken)
}

fn approved_spender<H: Host>(
    host: &H,
    token_id: &TokenIdentifier,
) -> Result<Option<Key>, NFTCoreError> {
    Ok(host
        .dictionary_get::<Option<Key>>(APPROVED, &token_id.get_dictionary_item_key())?
        .flatten())
}

fn balance_by_item_key<H: Host>(host: &H, item_key: &str) -> Result<U256, NFTCoreError> {
    Ok(host
        .dictionary_get::<U256>(BALANCES, item_key)?
        .unwrap_or_else(U256::zero))
}
