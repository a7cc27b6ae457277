use alloc::vec::Vec;

use casper_contract::{
    contract_api::{self, runtime, storage},
    ext_ffi,
    unwrap_or_revert::UnwrapOrRevert,
};
use casper_types::{
    api_error,
    bytesrepr::{self, FromBytes, ToBytes},
    system::CallStackElement,
    ApiError, CLTyped, Key, URef,
};

use crate::{error::NFTCoreError, events::Event, host::Host};

/// [`Host`] backed by the Casper runtime of the executing contract.
pub struct CasperHost;

impl Host for CasperHost {
    fn caller(&self) -> Result<Key, NFTCoreError> {
        get_verified_caller()
    }

    fn read_named<T: CLTyped + FromBytes>(&self, name: &str) -> Result<Option<T>, NFTCoreError> {
        match runtime::get_key(name) {
            Some(key) => {
                let uref = key
                    .into_uref()
                    .ok_or(NFTCoreError::UnexpectedKeyVariant)?;
                storage::read::<T>(uref).map_err(|_| NFTCoreError::InvalidStorageUref)
            }
            None => Ok(None),
        }
    }

    fn write_named<T: CLTyped + ToBytes>(
        &mut self,
        name: &str,
        value: T,
    ) -> Result<(), NFTCoreError> {
        match runtime::get_key(name) {
            Some(key) => {
                let uref = key
                    .into_uref()
                    .ok_or(NFTCoreError::UnexpectedKeyVariant)?;
                storage::write(uref, value);
            }
            None => runtime::put_key(name, storage::new_uref(value).into()),
        }
        Ok(())
    }

    fn new_dictionary(&mut self, name: &str) -> Result<(), NFTCoreError> {
        storage::new_dictionary(name).map_err(|_| NFTCoreError::FailedToCreateDictionary)?;
        Ok(())
    }

    fn dictionary_get<T: CLTyped + FromBytes>(
        &self,
        dictionary_name: &str,
        item_key: &str,
    ) -> Result<Option<T>, NFTCoreError> {
        let seed_uref = get_dictionary_uref(dictionary_name)?;
        storage::dictionary_get::<T>(seed_uref, item_key)
            .map_err(|_| NFTCoreError::InvalidStorageUref)
    }

    fn dictionary_put<T: CLTyped + ToBytes>(
        &mut self,
        dictionary_name: &str,
        item_key: &str,
        value: T,
    ) -> Result<(), NFTCoreError> {
        let seed_uref = get_dictionary_uref(dictionary_name)?;
        storage::dictionary_put(seed_uref, item_key, value);
        Ok(())
    }

    fn emit(&mut self, event: Event) -> Result<(), NFTCoreError> {
        match event {
            Event::Mint(event) => casper_event_standard::emit(event),
            Event::Transfer(event) => casper_event_standard::emit(event),
            Event::Approval(event) => casper_event_standard::emit(event),
            Event::ApprovalRevoked(event) => casper_event_standard::emit(event),
            Event::ApprovalForAll(event) => casper_event_standard::emit(event),
            Event::RevokedForAll(event) => casper_event_standard::emit(event),
            Event::OwnershipTransferred(event) => casper_event_standard::emit(event),
            Event::VariablesSet(event) => casper_event_standard::emit(event),
        }
        Ok(())
    }
}

fn get_dictionary_uref(dictionary_name: &str) -> Result<URef, NFTCoreError> {
    runtime::get_key(dictionary_name)
        .ok_or(NFTCoreError::MissingStorageUref)?
        .into_uref()
        .ok_or(NFTCoreError::InvalidStorageUref)
}

// The immediate caller sits one below the current frame on the call stack.
pub(crate) fn get_verified_caller() -> Result<Key, NFTCoreError> {
    match runtime::get_call_stack()
        .iter()
        .nth_back(1)
        .ok_or(NFTCoreError::MissingCaller)?
    {
        CallStackElement::Session {
            account_hash: calling_account_hash,
        } => Ok(Key::Account(*calling_account_hash)),
        CallStackElement::StoredSession { contract_hash, .. }
        | CallStackElement::StoredContract { contract_hash, .. } => {
            Ok(Key::from(*contract_hash))
        }
    }
}

pub fn get_named_arg_size(name: &str) -> Option<usize> {
    let mut arg_size: usize = 0;
    let ret = unsafe {
        ext_ffi::casper_get_named_arg_size(
            name.as_bytes().as_ptr(),
            name.len(),
            &mut arg_size as *mut usize,
        )
    };
    match api_error::result_from(ret) {
        Ok(_) => Some(arg_size),
        Err(ApiError::MissingArgument) => None,
        Err(e) => runtime::revert(e),
    }
}

pub fn get_named_arg_with_user_errors<T: FromBytes>(
    name: &str,
    missing: NFTCoreError,
    invalid: NFTCoreError,
) -> Result<T, NFTCoreError> {
    let arg_size = get_named_arg_size(name).ok_or(missing)?;
    let arg_bytes = if arg_size > 0 {
        let res = {
            let data_non_null_ptr = contract_api::alloc_bytes(arg_size);
            let ret = unsafe {
                ext_ffi::casper_get_named_arg(
                    name.as_bytes().as_ptr(),
                    name.len(),
                    data_non_null_ptr.as_ptr(),
                    arg_size,
                )
            };
            let data =
                unsafe { Vec::from_raw_parts(data_non_null_ptr.as_ptr(), arg_size, arg_size) };
            api_error::result_from(ret).map(|_| data)
        };
        // Assumed to be safe as `get_named_arg_size` checks the argument already
        res.unwrap_or_revert_with(NFTCoreError::FailedToGetArgBytes)
    } else {
        // Avoids allocation with 0 bytes and a call to get_named_arg
        Vec::new()
    };

    bytesrepr::deserialize(arg_bytes).map_err(|_| invalid)
}
