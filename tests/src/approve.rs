use casper_types::{Key, U256};
use nft_collection::{collection, memory::InMemoryHost, NFTCoreError};

use crate::utility::{
    constants::{
        DEFAULT_ACCOUNT_KEY, MARKETPLACE_KEY, USER_1_KEY, USER_2_KEY, ZERO_ACCOUNT_KEY,
    },
    support::{self, assert_expected_error},
};

fn approve(
    builder: &mut InMemoryHost,
    caller: Key,
    spender: Option<Key>,
    token_id: u64,
) -> Result<(), NFTCoreError> {
    builder.exec(caller, |host| {
        collection::approve(host, spender, U256::from(token_id))
    })
}

fn set_approval_for_all(
    builder: &mut InMemoryHost,
    caller: Key,
    operator: Key,
    approved: bool,
) -> Result<(), NFTCoreError> {
    builder.exec(caller, |host| {
        collection::set_approval_for_all(host, operator, approved)
    })
}

fn collection_with_token_owned_by_user_1() -> InMemoryHost {
    let mut builder = support::install_default_collection();
    support::mint(&mut builder, *DEFAULT_ACCOUNT_KEY, *USER_1_KEY, 1).unwrap();
    builder
}

#[test]
fn should_approve_and_revoke_a_spender() {
    let mut builder = collection_with_token_owned_by_user_1();
    assert_eq!(collection::get_approved(&builder, U256::one()).unwrap(), None);

    approve(&mut builder, *USER_1_KEY, Some(*USER_2_KEY), 1).unwrap();
    assert_eq!(
        collection::get_approved(&builder, U256::one()).unwrap(),
        Some(*USER_2_KEY)
    );

    approve(&mut builder, *USER_1_KEY, None, 1).unwrap();
    assert_eq!(collection::get_approved(&builder, U256::one()).unwrap(), None);
}

#[test]
fn should_disallow_approval_by_non_owner() {
    let mut builder = collection_with_token_owned_by_user_1();

    let error = approve(&mut builder, *USER_2_KEY, Some(*USER_2_KEY), 1).unwrap_err();
    assert_expected_error(error, 41u16, "Caller is not token owner or approved");
    assert_eq!(collection::get_approved(&builder, U256::one()).unwrap(), None);
}

#[test]
fn should_disallow_approving_the_current_owner() {
    let mut builder = collection_with_token_owned_by_user_1();

    let error = approve(&mut builder, *USER_1_KEY, Some(*USER_1_KEY), 1).unwrap_err();
    assert_expected_error(error, 42u16, "Approval to current owner");
}

#[test]
fn should_disallow_approving_the_zero_account() {
    let mut builder = collection_with_token_owned_by_user_1();

    let error = approve(&mut builder, *USER_1_KEY, Some(*ZERO_ACCOUNT_KEY), 1).unwrap_err();
    assert_expected_error(error, 30u16, "Invalid spender");
}

#[test]
fn should_not_approve_or_query_nonexistent_token() {
    let mut builder = support::install_default_collection();

    let error = approve(&mut builder, *USER_1_KEY, Some(*USER_2_KEY), 5).unwrap_err();
    assert_expected_error(error, 39u16, "Nonexistent token");

    let error = collection::get_approved(&builder, U256::from(5u64)).unwrap_err();
    assert_expected_error(error, 39u16, "Nonexistent token");
}

#[test]
fn operator_should_approve_on_behalf_of_owner() {
    let mut builder = collection_with_token_owned_by_user_1();

    set_approval_for_all(&mut builder, *USER_1_KEY, *MARKETPLACE_KEY, true).unwrap();
    approve(&mut builder, *MARKETPLACE_KEY, Some(*USER_2_KEY), 1).unwrap();

    assert_eq!(
        collection::get_approved(&builder, U256::one()).unwrap(),
        Some(*USER_2_KEY)
    );
}

#[test]
fn should_set_and_revoke_operator() {
    let mut builder = collection_with_token_owned_by_user_1();

    assert!(!collection::is_approved_for_all(&builder, *USER_1_KEY, *MARKETPLACE_KEY).unwrap());

    set_approval_for_all(&mut builder, *USER_1_KEY, *MARKETPLACE_KEY, true).unwrap();
    assert!(collection::is_approved_for_all(&builder, *USER_1_KEY, *MARKETPLACE_KEY).unwrap());
    assert!(
        !collection::is_approved_for_all(&builder, *MARKETPLACE_KEY, *USER_1_KEY).unwrap(),
        "operator approval is not symmetric"
    );

    set_approval_for_all(&mut builder, *USER_1_KEY, *MARKETPLACE_KEY, false).unwrap();
    assert!(!collection::is_approved_for_all(&builder, *USER_1_KEY, *MARKETPLACE_KEY).unwrap());

    let error = support::transfer(&mut builder, *MARKETPLACE_KEY, *USER_1_KEY, *USER_2_KEY, 1)
        .unwrap_err();
    assert_eq!(error, NFTCoreError::NotApprovedOrOwner);
}

#[test]
fn should_disallow_approving_self_as_operator() {
    let mut builder = collection_with_token_owned_by_user_1();

    let error = set_approval_for_all(&mut builder, *USER_1_KEY, *USER_1_KEY, true).unwrap_err();
    assert_expected_error(error, 43u16, "Approve to caller");
}

#[test]
fn should_disallow_invalid_operator() {
    let mut builder = collection_with_token_owned_by_user_1();

    let error =
        set_approval_for_all(&mut builder, *USER_1_KEY, *ZERO_ACCOUNT_KEY, true).unwrap_err();
    assert_expected_error(error, 32u16, "Invalid operator");

    let error = set_approval_for_all(&mut builder, *USER_1_KEY, Key::Balance([9u8; 32]), true)
        .unwrap_err();
    assert_expected_error(error, 32u16, "Invalid operator");
}

#[test]
fn keys_that_cannot_hold_tokens_are_never_operators() {
    let builder = collection_with_token_owned_by_user_1();

    assert_eq!(
        collection::is_approved_for_all(&builder, Key::Balance([9u8; 32]), *USER_1_KEY),
        Ok(false)
    );
    assert_eq!(
        collection::is_approved_for_all(&builder, *USER_1_KEY, Key::Balance([9u8; 32])),
        Ok(false)
    );
}
