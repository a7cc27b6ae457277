use core::fmt;

use casper_types::ApiError;

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NFTCoreError {
    NotAuthorized = 1,
    InvalidAccount = 2,
    MissingInstaller = 3,
    InvalidInstaller = 4,
    UnexpectedKeyVariant = 5,
    FailedToGetArgBytes = 6,
    FailedToCreateDictionary = 7,
    MissingStorageUref = 8,
    InvalidStorageUref = 9,
    FailedToConvertToCLValue = 10,
    MissingCollectionName = 11,
    InvalidCollectionName = 12,
    MissingCollectionSymbol = 13,
    InvalidCollectionSymbol = 14,
    MissingMaxSupply = 15,
    InvalidMaxSupply = 16,
    MissingBaseUri = 17,
    InvalidBaseUri = 18,
    MissingTotalSupply = 19,
    InvalidTotalSupply = 20,
    MissingCollectionOwner = 21,
    InvalidCollectionOwner = 22,
    MissingTokenId = 23,
    InvalidTokenId = 24,
    MissingTokenOwner = 25,
    InvalidTokenOwner = 26,
    MissingReceiver = 27,
    InvalidReceiver = 28,
    MissingSpender = 29,
    InvalidSpender = 30,
    MissingOperator = 31,
    InvalidOperator = 32,
    MissingApproved = 33,
    InvalidApproved = 34,
    MissingNewOwner = 35,
    InvalidNewOwner = 36,
    MaxSupplyReached = 37,
    TokenAlreadyMinted = 38,
    NonexistentToken = 39,
    IncorrectOwner = 40,
    NotApprovedOrOwner = 41,
    ApprovalToCurrentOwner = 42,
    ApproveToCaller = 43,
    InvalidKey = 44,
    InvalidDictionaryItemKey = 45,
    ContractAlreadyInitialized = 46,
    FailedToSerializeKey = 47,
    FatalBalanceUnderflow = 48,
    MissingCaller = 49,
    FailedToHashKey = 50,
}

impl NFTCoreError {
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Human readable reason reported alongside the revert code.
    pub fn message(self) -> &'static str {
        match self {
            NFTCoreError::NotAuthorized => "Not authorized",
            NFTCoreError::InvalidAccount => "Caller is not the installing account",
            NFTCoreError::MissingInstaller => "Missing installer",
            NFTCoreError::InvalidInstaller => "Invalid installer",
            NFTCoreError::UnexpectedKeyVariant => "Unexpected key variant",
            NFTCoreError::FailedToGetArgBytes => "Failed to read argument bytes",
            NFTCoreError::FailedToCreateDictionary => "Failed to create dictionary",
            NFTCoreError::MissingStorageUref => "Missing storage uref",
            NFTCoreError::InvalidStorageUref => "Invalid storage uref",
            NFTCoreError::FailedToConvertToCLValue => "Failed to convert to CLValue",
            NFTCoreError::MissingCollectionName => "Missing collection name",
            NFTCoreError::InvalidCollectionName => "Invalid collection name",
            NFTCoreError::MissingCollectionSymbol => "Missing collection symbol",
            NFTCoreError::InvalidCollectionSymbol => "Invalid collection symbol",
            NFTCoreError::MissingMaxSupply => "Missing max supply",
            NFTCoreError::InvalidMaxSupply => "Invalid max supply",
            NFTCoreError::MissingBaseUri => "Missing base uri",
            NFTCoreError::InvalidBaseUri => "Invalid base uri",
            NFTCoreError::MissingTotalSupply => "Missing total supply",
            NFTCoreError::InvalidTotalSupply => "Invalid total supply",
            NFTCoreError::MissingCollectionOwner => "Missing collection owner",
            NFTCoreError::InvalidCollectionOwner => "Invalid collection owner",
            NFTCoreError::MissingTokenId => "Missing token id",
            NFTCoreError::InvalidTokenId => "Invalid token id",
            NFTCoreError::MissingTokenOwner => "Missing token owner",
            NFTCoreError::InvalidTokenOwner => "Invalid token owner",
            NFTCoreError::MissingReceiver => "Missing receiver",
            NFTCoreError::InvalidReceiver => "Invalid receiver",
            NFTCoreError::MissingSpender => "Missing spender",
            NFTCoreError::InvalidSpender => "Invalid spender",
            NFTCoreError::MissingOperator => "Missing operator",
            NFTCoreError::InvalidOperator => "Invalid operator",
            NFTCoreError::MissingApproved => "Missing approved flag",
            NFTCoreError::InvalidApproved => "Invalid approved flag",
            NFTCoreError::MissingNewOwner => "Missing new owner",
            NFTCoreError::InvalidNewOwner => "Invalid new owner",
            NFTCoreError::MaxSupplyReached => "Max supply reached",
            NFTCoreError::TokenAlreadyMinted => "Token already minted",
            NFTCoreError::NonexistentToken => "Nonexistent token",
            NFTCoreError::IncorrectOwner => "Transfer from incorrect owner",
            NFTCoreError::NotApprovedOrOwner => "Caller is not token owner or approved",
            NFTCoreError::ApprovalToCurrentOwner => "Approval to current owner",
            NFTCoreError::ApproveToCaller => "Approve to caller",
            NFTCoreError::InvalidKey => "Invalid key",
            NFTCoreError::InvalidDictionaryItemKey => "Invalid dictionary item key",
            NFTCoreError::ContractAlreadyInitialized => "Contract already initialized",
            NFTCoreError::FailedToSerializeKey => "Failed to serialize key",
            NFTCoreError::FatalBalanceUnderflow => "Balance underflow",
            NFTCoreError::MissingCaller => "Missing caller",
            NFTCoreError::FailedToHashKey => "Failed to hash key",
        }
    }
}

impl fmt::Display for NFTCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<NFTCoreError> for ApiError {
    fn from(e: NFTCoreError) -> Self {
        ApiError::User(e as u16)
    }
}
