#![no_std]
#![no_main]

#[cfg(not(target_arch = "wasm32"))]
compile_error!("target arch should be wasm32: compile with '--target wasm32-unknown-unknown'");

extern crate alloc;

use alloc::{
    string::{String, ToString},
    vec,
    vec::Vec,
};

use casper_contract::{
    contract_api::{runtime, storage},
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_event_standard::Schemas;
use casper_types::{
    bytesrepr::ToBytes, contracts::NamedKeys, runtime_args, CLType, CLTyped, CLValue,
    ContractHash, ContractVersion, EntryPoint, EntryPointAccess, EntryPointType, EntryPoints, Key,
    Parameter, RuntimeArgs, U256,
};

use nft_collection::{
    collection,
    config::CollectionConfig,
    constants::*,
    error::NFTCoreError,
    events::{
        Approval, ApprovalForAll, ApprovalRevoked, Mint, OwnershipTransferred, RevokedForAll,
        Transfer, VariablesSet,
    },
    utils::{get_named_arg_with_user_errors, CasperHost},
};

fn get_collection_config() -> CollectionConfig {
    let collection_name: String = get_named_arg_with_user_errors(
        ARG_COLLECTION_NAME,
        NFTCoreError::MissingCollectionName,
        NFTCoreError::InvalidCollectionName,
    )
    .unwrap_or_revert();

    let collection_symbol: String = get_named_arg_with_user_errors(
        ARG_COLLECTION_SYMBOL,
        NFTCoreError::MissingCollectionSymbol,
        NFTCoreError::InvalidCollectionSymbol,
    )
    .unwrap_or_revert();

    let max_supply: U256 = get_named_arg_with_user_errors(
        ARG_MAX_SUPPLY,
        NFTCoreError::MissingMaxSupply,
        NFTCoreError::InvalidMaxSupply,
    )
    .unwrap_or_revert();

    let base_uri: String = get_named_arg_with_user_errors(
        ARG_BASE_URI,
        NFTCoreError::MissingBaseUri,
        NFTCoreError::InvalidBaseUri,
    )
    .unwrap_or_revert();

    CollectionConfig::new(collection_name, collection_symbol, max_supply, base_uri)
}

fn get_token_id() -> U256 {
    get_named_arg_with_user_errors(
        ARG_TOKEN_ID,
        NFTCoreError::MissingTokenId,
        NFTCoreError::InvalidTokenId,
    )
    .unwrap_or_revert()
}

fn ret<T: CLTyped + ToBytes>(value: T) {
    let cl_value =
        CLValue::from_t(value).unwrap_or_revert_with(NFTCoreError::FailedToConvertToCLValue);
    runtime::ret(cl_value)
}

#[no_mangle]
pub extern "C" fn init() {
    let config = get_collection_config();
    let mut host = CasperHost;
    collection::init(&mut host, config).unwrap_or_revert();

    casper_event_standard::init(
        Schemas::new()
            .with::<Mint>()
            .with::<Transfer>()
            .with::<Approval>()
            .with::<ApprovalRevoked>()
            .with::<ApprovalForAll>()
            .with::<RevokedForAll>()
            .with::<OwnershipTransferred>()
            .with::<VariablesSet>(),
    );
}

#[no_mangle]
pub extern "C" fn name() {
    ret(collection::name(&CasperHost).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn symbol() {
    ret(collection::symbol(&CasperHost).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn max_supply() {
    ret(collection::max_supply(&CasperHost).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn total_supply() {
    ret(collection::total_supply(&CasperHost).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn base_uri() {
    ret(collection::base_uri(&CasperHost).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn owner() {
    ret(collection::owner(&CasperHost).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn safe_mint() {
    let to: Key = get_named_arg_with_user_errors(
        ARG_TO,
        NFTCoreError::MissingReceiver,
        NFTCoreError::InvalidReceiver,
    )
    .unwrap_or_revert();
    let token_id = get_token_id();

    collection::safe_mint(&mut CasperHost, to, token_id).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn owner_of() {
    let token_id = get_token_id();
    ret(collection::owner_of(&CasperHost, token_id).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn balance_of() {
    let owner: Key = get_named_arg_with_user_errors(
        ARG_OWNER,
        NFTCoreError::MissingTokenOwner,
        NFTCoreError::InvalidTokenOwner,
    )
    .unwrap_or_revert();
    ret(collection::balance_of(&CasperHost, owner).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn token_uri() {
    let token_id = get_token_id();
    ret(collection::token_uri(&CasperHost, token_id).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn approve() {
    let spender: Option<Key> = get_named_arg_with_user_errors(
        ARG_SPENDER,
        NFTCoreError::MissingSpender,
        NFTCoreError::InvalidSpender,
    )
    .unwrap_or_revert();
    let token_id = get_token_id();

    collection::approve(&mut CasperHost, spender, token_id).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn get_approved() {
    let token_id = get_token_id();
    ret(collection::get_approved(&CasperHost, token_id).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn set_approval_for_all() {
    let operator: Key = get_named_arg_with_user_errors(
        ARG_OPERATOR,
        NFTCoreError::MissingOperator,
        NFTCoreError::InvalidOperator,
    )
    .unwrap_or_revert();
    let approved: bool = get_named_arg_with_user_errors(
        ARG_APPROVED,
        NFTCoreError::MissingApproved,
        NFTCoreError::InvalidApproved,
    )
    .unwrap_or_revert();

    collection::set_approval_for_all(&mut CasperHost, operator, approved).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn is_approved_for_all() {
    let owner: Key = get_named_arg_with_user_errors(
        ARG_OWNER,
        NFTCoreError::MissingTokenOwner,
        NFTCoreError::InvalidTokenOwner,
    )
    .unwrap_or_revert();
    let operator: Key = get_named_arg_with_user_errors(
        ARG_OPERATOR,
        NFTCoreError::MissingOperator,
        NFTCoreError::InvalidOperator,
    )
    .unwrap_or_revert();

    ret(collection::is_approved_for_all(&CasperHost, owner, operator).unwrap_or_revert())
}

#[no_mangle]
pub extern "C" fn transfer_from() {
    let from: Key = get_named_arg_with_user_errors(
        ARG_FROM,
        NFTCoreError::MissingTokenOwner,
        NFTCoreError::InvalidTokenOwner,
    )
    .unwrap_or_revert();
    let to: Key = get_named_arg_with_user_errors(
        ARG_TO,
        NFTCoreError::MissingReceiver,
        NFTCoreError::InvalidReceiver,
    )
    .unwrap_or_revert();
    let token_id = get_token_id();

    collection::transfer_from(&mut CasperHost, from, to, token_id).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn set_base_uri() {
    let base_uri: String = get_named_arg_with_user_errors(
        ARG_BASE_URI,
        NFTCoreError::MissingBaseUri,
        NFTCoreError::InvalidBaseUri,
    )
    .unwrap_or_revert();

    collection::set_base_uri(&mut CasperHost, base_uri).unwrap_or_revert();
}

#[no_mangle]
pub extern "C" fn transfer_ownership() {
    let new_owner: Key = get_named_arg_with_user_errors(
        ARG_NEW_OWNER,
        NFTCoreError::MissingNewOwner,
        NFTCoreError::InvalidNewOwner,
    )
    .unwrap_or_revert();

    collection::transfer_ownership(&mut CasperHost, new_owner).unwrap_or_revert();
}

fn public_entry_point(name: &str, params: Vec<Parameter>, ret_type: CLType) -> EntryPoint {
    EntryPoint::new(
        name,
        params,
        ret_type,
        EntryPointAccess::Public,
        EntryPointType::Contract,
    )
}

fn store() -> (ContractHash, ContractVersion) {
    let entry_points = {
        let mut entry_points = EntryPoints::new();

        // This entrypoint initializes the contract and is required to be called during the session
        // where the contract is installed. It can only be called once and only by the installer.
        let init_contract = public_entry_point(
            ENTRY_POINT_INIT,
            vec![
                Parameter::new(ARG_COLLECTION_NAME, CLType::String),
                Parameter::new(ARG_COLLECTION_SYMBOL, CLType::String),
                Parameter::new(ARG_MAX_SUPPLY, CLType::U256),
                Parameter::new(ARG_BASE_URI, CLType::String),
            ],
            CLType::Unit,
        );

        let name = public_entry_point(ENTRY_POINT_NAME, vec![], CLType::String);
        let symbol = public_entry_point(ENTRY_POINT_SYMBOL, vec![], CLType::String);
        let max_supply = public_entry_point(ENTRY_POINT_MAX_SUPPLY, vec![], CLType::U256);
        let total_supply = public_entry_point(ENTRY_POINT_TOTAL_SUPPLY, vec![], CLType::U256);
        let base_uri = public_entry_point(ENTRY_POINT_BASE_URI, vec![], CLType::String);
        let owner = public_entry_point(ENTRY_POINT_OWNER, vec![], CLType::Key);

        // This entrypoint mints the token with the given id to the given recipient.
        // Reverts with NotAuthorized unless called by the collection owner, with
        // MaxSupplyReached once total_supply reaches max_supply, and with
        // TokenAlreadyMinted if the id is taken.
        let safe_mint = public_entry_point(
            ENTRY_POINT_SAFE_MINT,
            vec![
                Parameter::new(ARG_TO, CLType::Key),
                Parameter::new(ARG_TOKEN_ID, CLType::U256),
            ],
            CLType::Unit,
        );

        // Returns the owner of a minted token, reverts with NonexistentToken otherwise.
        let owner_of = public_entry_point(
            ENTRY_POINT_OWNER_OF,
            vec![Parameter::new(ARG_TOKEN_ID, CLType::U256)],
            CLType::Key,
        );

        let balance_of = public_entry_point(
            ENTRY_POINT_BALANCE_OF,
            vec![Parameter::new(ARG_OWNER, CLType::Key)],
            CLType::U256,
        );

        let token_uri = public_entry_point(
            ENTRY_POINT_TOKEN_URI,
            vec![Parameter::new(ARG_TOKEN_ID, CLType::U256)],
            CLType::String,
        );

        // Approves a single spender for a token, or clears the approval when
        // no spender is given. Callable by the token owner or one of its operators.
        let approve = public_entry_point(
            ENTRY_POINT_APPROVE,
            vec![
                Parameter::new(ARG_SPENDER, Option::<Key>::cl_type()),
                Parameter::new(ARG_TOKEN_ID, CLType::U256),
            ],
            CLType::Unit,
        );

        let get_approved = public_entry_point(
            ENTRY_POINT_GET_APPROVED,
            vec![Parameter::new(ARG_TOKEN_ID, CLType::U256)],
            Option::<Key>::cl_type(),
        );

        let set_approval_for_all = public_entry_point(
            ENTRY_POINT_SET_APPROVAL_FOR_ALL,
            vec![
                Parameter::new(ARG_OPERATOR, CLType::Key),
                Parameter::new(ARG_APPROVED, CLType::Bool),
            ],
            CLType::Unit,
        );

        let is_approved_for_all = public_entry_point(
            ENTRY_POINT_IS_APPROVED_FOR_ALL,
            vec![
                Parameter::new(ARG_OWNER, CLType::Key),
                Parameter::new(ARG_OPERATOR, CLType::Key),
            ],
            CLType::Bool,
        );

        // Moves a token from its owner to a new account. The caller must be the owner,
        // the approved spender of the token or an operator of the owner.
        let transfer_from = public_entry_point(
            ENTRY_POINT_TRANSFER_FROM,
            vec![
                Parameter::new(ARG_FROM, CLType::Key),
                Parameter::new(ARG_TO, CLType::Key),
                Parameter::new(ARG_TOKEN_ID, CLType::U256),
            ],
            CLType::Unit,
        );

        let set_base_uri = public_entry_point(
            ENTRY_POINT_SET_BASE_URI,
            vec![Parameter::new(ARG_BASE_URI, CLType::String)],
            CLType::Unit,
        );

        let transfer_ownership = public_entry_point(
            ENTRY_POINT_TRANSFER_OWNERSHIP,
            vec![Parameter::new(ARG_NEW_OWNER, CLType::Key)],
            CLType::Unit,
        );

        entry_points.add_entry_point(init_contract);
        entry_points.add_entry_point(name);
        entry_points.add_entry_point(symbol);
        entry_points.add_entry_point(max_supply);
        entry_points.add_entry_point(total_supply);
        entry_points.add_entry_point(base_uri);
        entry_points.add_entry_point(owner);
        entry_points.add_entry_point(safe_mint);
        entry_points.add_entry_point(owner_of);
        entry_points.add_entry_point(balance_of);
        entry_points.add_entry_point(token_uri);
        entry_points.add_entry_point(approve);
        entry_points.add_entry_point(get_approved);
        entry_points.add_entry_point(set_approval_for_all);
        entry_points.add_entry_point(is_approved_for_all);
        entry_points.add_entry_point(transfer_from);
        entry_points.add_entry_point(set_base_uri);
        entry_points.add_entry_point(transfer_ownership);

        entry_points
    };

    let named_keys = {
        let mut named_keys = NamedKeys::new();
        let installer = Key::from(runtime::get_caller());
        named_keys.insert(INSTALLER.to_string(), storage::new_uref(installer).into());
        named_keys
    };

    storage::new_contract(
        entry_points,
        Some(named_keys),
        Some(HASH_KEY_NAME.to_string()),
        Some(ACCESS_KEY_NAME.to_string()),
    )
}

#[no_mangle]
pub extern "C" fn call() {
    let config = get_collection_config();
    // Fail the install early rather than inside init.
    config.validate().unwrap_or_revert();

    let (contract_hash, contract_version) = store();

    // Store contract_hash and contract_version under the keys CONTRACT_NAME and CONTRACT_VERSION
    runtime::put_key(CONTRACT_NAME, contract_hash.into());
    runtime::put_key(CONTRACT_VERSION, storage::new_uref(contract_version).into());

    // Call contract to initialize it
    runtime::call_contract::<()>(
        contract_hash,
        ENTRY_POINT_INIT,
        runtime_args! {
            ARG_COLLECTION_NAME => config.collection_name,
            ARG_COLLECTION_SYMBOL => config.collection_symbol,
            ARG_MAX_SUPPLY => config.max_supply,
            ARG_BASE_URI => config.base_uri,
        },
    );
}
