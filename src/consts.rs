/// Gas limit handed to the widget for every destination contract call.
pub const DEFAULT_GAS_LIMIT: u64 = 800_000;

/// Placeholder the widget replaces with the routed amount in templated calldata.
pub const AMOUNT_PLACEHOLDER: &str = "AARC";

/// Token address the widget uses to mean "the chain's native coin".
pub const NATIVE_COIN_MARKER: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Orderly vault on Arbitrum.
pub(crate) const ORDERLY_VAULT_MAINNET: &str = "0x816f722424B49Cf1275cc86DA9840Fbd5a6167e9";
pub(crate) const ORDERLY_BROKER_ID: &str = "orderly";
pub(crate) const ORDERLY_LOGO_URI: &str =
    "https://mintlify.s3.us-west-1.amazonaws.com/orderly/logo/dark.svg";

pub(crate) const INJECTIVE_PEGGY_MAINNET: &str = "0xF955C57f9EA9Dc8781965FEaE0b6A2acE2BAD6f3";
pub(crate) const INJECTIVE_LOGO_URI: &str = "https://explorer.injective.network/favicon.png";

pub(crate) const APEX_OMNI_LOGO_URI: &str = "https://omni.apex.exchange/favicon.ico?v=1.0.2";

pub(crate) const AARC_API_KEY_ENV: &str = "AARC_API_KEY";
pub(crate) const APEX_OMNI_CONTRACT_ENV: &str = "APEX_OMNI_CONTRACT";

/// Parses one of the address literals above.
pub(crate) fn known_address(literal: &'static str) -> ethers::types::Address {
    crate::address::parse_hex_address(literal)
        .unwrap_or_else(|e| panic!("address constant {literal} is invalid: {e}"))
}
