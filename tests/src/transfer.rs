use casper_types::{Key, U256};
use nft_collection::{collection, memory::InMemoryHost, NFTCoreError};

use crate::utility::{
    constants::{
        DEFAULT_ACCOUNT_KEY, MARKETPLACE_KEY, USER_1_KEY, USER_2_KEY, ZERO_ACCOUNT_KEY,
    },
    support::{self, assert_expected_error},
};

fn collection_with_token_owned_by(owner: Key) -> InMemoryHost {
    let mut builder = support::install_default_collection();
    support::mint(&mut builder, *DEFAULT_ACCOUNT_KEY, owner, 1).unwrap();
    builder
}

#[test]
fn should_transfer_token() {
    let mut builder = collection_with_token_owned_by(*DEFAULT_ACCOUNT_KEY);

    support::transfer(
        &mut builder,
        *DEFAULT_ACCOUNT_KEY,
        *DEFAULT_ACCOUNT_KEY,
        *USER_1_KEY,
        1,
    )
    .expect("token owner should be able to transfer");

    assert_eq!(support::owner_of(&builder, 1), *USER_1_KEY);
}

#[test]
fn transfer_should_move_balances() {
    let mut builder = collection_with_token_owned_by(*DEFAULT_ACCOUNT_KEY);
    support::mint(&mut builder, *DEFAULT_ACCOUNT_KEY, *DEFAULT_ACCOUNT_KEY, 2).unwrap();
    assert_eq!(
        support::balance_of(&builder, *DEFAULT_ACCOUNT_KEY),
        U256::from(2u64)
    );

    support::transfer(
        &mut builder,
        *DEFAULT_ACCOUNT_KEY,
        *DEFAULT_ACCOUNT_KEY,
        *USER_1_KEY,
        1,
    )
    .unwrap();

    assert_eq!(
        support::balance_of(&builder, *DEFAULT_ACCOUNT_KEY),
        U256::one()
    );
    assert_eq!(support::balance_of(&builder, *USER_1_KEY), U256::one());
    assert_eq!(
        collection::total_supply(&builder).unwrap(),
        U256::from(2u64),
        "transfers should not change total supply"
    );
}

#[test]
fn should_allow_transfer_to_self() {
    let mut builder = collection_with_token_owned_by(*USER_1_KEY);

    support::transfer(&mut builder, *USER_1_KEY, *USER_1_KEY, *USER_1_KEY, 1).unwrap();

    assert_eq!(support::owner_of(&builder, 1), *USER_1_KEY);
    assert_eq!(support::balance_of(&builder, *USER_1_KEY), U256::one());
}

#[test]
fn should_disallow_transfer_by_unapproved_caller() {
    let mut builder = collection_with_token_owned_by(*USER_1_KEY);

    let error =
        support::transfer(&mut builder, *USER_2_KEY, *USER_1_KEY, *USER_2_KEY, 1).unwrap_err();
    assert_expected_error(error, 41u16, "Caller is not token owner or approved");
    assert_eq!(support::owner_of(&builder, 1), *USER_1_KEY);

    // Minting rights do not include moving other accounts' tokens.
    let error = support::transfer(
        &mut builder,
        *DEFAULT_ACCOUNT_KEY,
        *USER_1_KEY,
        *DEFAULT_ACCOUNT_KEY,
        1,
    )
    .unwrap_err();
    assert_expected_error(error, 41u16, "Caller is not token owner or approved");
}

#[test]
fn should_disallow_transfer_from_incorrect_owner() {
    let mut builder = collection_with_token_owned_by(*USER_1_KEY);

    let error =
        support::transfer(&mut builder, *USER_1_KEY, *USER_2_KEY, *USER_1_KEY, 1).unwrap_err();
    assert_expected_error(error, 40u16, "Transfer from incorrect owner");
}

#[test]
fn should_disallow_transfer_of_nonexistent_token() {
    let mut builder = support::install_default_collection();

    let error = support::transfer(
        &mut builder,
        *DEFAULT_ACCOUNT_KEY,
        *DEFAULT_ACCOUNT_KEY,
        *USER_1_KEY,
        99,
    )
    .unwrap_err();
    assert_expected_error(error, 39u16, "Nonexistent token");
}

#[test]
fn should_disallow_transfer_to_the_zero_account() {
    let mut builder = collection_with_token_owned_by(*USER_1_KEY);

    let error = support::transfer(
        &mut builder,
        *USER_1_KEY,
        *USER_1_KEY,
        *ZERO_ACCOUNT_KEY,
        1,
    )
    .unwrap_err();
    assert_expected_error(error, 28u16, "Invalid receiver");
    assert_eq!(support::balance_of(&builder, *USER_1_KEY), U256::one());
}

#[test]
fn approved_spender_should_transfer_and_lose_approval() {
    let mut builder = collection_with_token_owned_by(*USER_1_KEY);

    builder
        .exec(*USER_1_KEY, |host| {
            collection::approve(host, Some(*MARKETPLACE_KEY), U256::one())
        })
        .unwrap();

    support::transfer(&mut builder, *MARKETPLACE_KEY, *USER_1_KEY, *USER_2_KEY, 1).unwrap();

    assert_eq!(support::owner_of(&builder, 1), *USER_2_KEY);
    assert_eq!(
        collection::get_approved(&builder, U256::one()).unwrap(),
        None,
        "a transfer should clear the single token approval"
    );

    // The old approval must not allow moving the token again.
    let error = support::transfer(&mut builder, *MARKETPLACE_KEY, *USER_2_KEY, *USER_1_KEY, 1)
        .unwrap_err();
    assert_eq!(error, NFTCoreError::NotApprovedOrOwner);
}

#[test]
fn operator_should_transfer_any_token_of_the_owner() {
    let mut builder = collection_with_token_owned_by(*USER_1_KEY);
    support::mint(&mut builder, *DEFAULT_ACCOUNT_KEY, *USER_1_KEY, 2).unwrap();

    builder
        .exec(*USER_1_KEY, |host| {
            collection::set_approval_for_all(host, *MARKETPLACE_KEY, true)
        })
        .unwrap();

    support::transfer(&mut builder, *MARKETPLACE_KEY, *USER_1_KEY, *USER_2_KEY, 1).unwrap();
    support::transfer(&mut builder, *MARKETPLACE_KEY, *USER_1_KEY, *USER_2_KEY, 2).unwrap();

    assert_eq!(support::balance_of(&builder, *USER_1_KEY), U256::zero());
    assert_eq!(support::balance_of(&builder, *USER_2_KEY), U256::from(2u64));
}

#[test]
fn new_owner_should_be_able_to_transfer_again() {
    let mut builder = collection_with_token_owned_by(*DEFAULT_ACCOUNT_KEY);

    support::transfer(
        &mut builder,
        *DEFAULT_ACCOUNT_KEY,
        *DEFAULT_ACCOUNT_KEY,
        *USER_1_KEY,
        1,
    )
    .unwrap();
    support::transfer(&mut builder, *USER_1_KEY, *USER_1_KEY, *USER_2_KEY, 1).unwrap();

    assert_eq!(support::owner_of(&builder, 1), *USER_2_KEY);
    assert_eq!(
        support::balance_of(&builder, *DEFAULT_ACCOUNT_KEY),
        U256::zero()
    );
}
