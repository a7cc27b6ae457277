pub const ARG_COLLECTION_NAME: &str = "collection_name";
pub const ARG_COLLECTION_SYMBOL: &str = "collection_symbol";
pub const ARG_MAX_SUPPLY: &str = "max_supply";
pub const ARG_BASE_URI: &str = "base_uri";
pub const ARG_TOKEN_ID: &str = "token_id";
pub const ARG_TO: &str = "to";
pub const ARG_FROM: &str = "from";
pub const ARG_OWNER: &str = "owner";
pub const ARG_SPENDER: &str = "spender";
pub const ARG_OPERATOR: &str = "operator";
pub const ARG_APPROVED: &str = "approved";
pub const ARG_NEW_OWNER: &str = "new_owner";

pub const INSTALLER: &str = "installer";
pub const COLLECTION_OWNER: &str = "collection_owner";
pub const CONTRACT_NAME: &str = "nft_collection_contract";
pub const HASH_KEY_NAME: &str = "nft_collection_contract_package";
pub const ACCESS_KEY_NAME: &str = "nft_collection_contract_package_access";
pub const CONTRACT_VERSION: &str = "contract_version";
pub const COLLECTION_NAME: &str = "collection_name";
pub const COLLECTION_SYMBOL: &str = "collection_symbol";
pub const MAX_SUPPLY: &str = "max_supply";
pub const TOTAL_SUPPLY: &str = "total_supply";
pub const BASE_URI: &str = "base_uri";

// Dictionaries
pub const TOKEN_OWNERS: &str = "token_owners";
pub const BALANCES: &str = "balances";
pub const APPROVED: &str = "approved";
pub const OPERATORS: &str = "operators";

pub const ENTRY_POINT_INIT: &str = "init";
pub const ENTRY_POINT_NAME: &str = "name";
pub const ENTRY_POINT_SYMBOL: &str = "symbol";
pub const ENTRY_POINT_MAX_SUPPLY: &str = "max_supply";
pub const ENTRY_POINT_TOTAL_SUPPLY: &str = "total_supply";
pub const ENTRY_POINT_BASE_URI: &str = "base_uri";
pub const ENTRY_POINT_OWNER: &str = "owner";
pub const ENTRY_POINT_SAFE_MINT: &str = "safe_mint";
pub const ENTRY_POINT_OWNER_OF: &str = "owner_of";
pub const ENTRY_POINT_BALANCE_OF: &str = "balance_of";
pub const ENTRY_POINT_TOKEN_URI: &str = "token_uri";
pub const ENTRY_POINT_APPROVE: &str = "approve";
pub const ENTRY_POINT_GET_APPROVED: &str = "get_approved";
pub const ENTRY_POINT_SET_APPROVAL_FOR_ALL: &str = "set_approval_for_all";
pub const ENTRY_POINT_IS_APPROVED_FOR_ALL: &str = "is_approved_for_all";
pub const ENTRY_POINT_TRANSFER_FROM: &str = "transfer_from";
pub const ENTRY_POINT_SET_BASE_URI: &str = "set_base_uri";
pub const ENTRY_POINT_TRANSFER_OWNERSHIP: &str = "transfer_ownership";

// Casper rejects dictionary item keys longer than this.
pub const DICTIONARY_ITEM_KEY_MAX_LENGTH: usize = 64;
