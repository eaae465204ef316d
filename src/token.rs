use ethers::types::Address;
use lazy_static::lazy_static;

use crate::address::parse_hex_address;
use crate::prelude::Result;
use crate::Error;

const MAX_DECIMALS: u8 = 18;

/// A fungible token a user can pick as the deposit asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenDescriptor {
    pub symbol: &'static str,
    /// ERC-20 contract, or the zero address for the chain's native coin.
    pub contract_address: Address,
    pub decimals: u8,
    pub quick_amounts: Vec<&'static str>,
}

impl TokenDescriptor {
    pub fn new(
        symbol: &'static str,
        contract_address: &str,
        decimals: u8,
        quick_amounts: Vec<&'static str>,
    ) -> Result<Self> {
        if decimals > MAX_DECIMALS {
            return Err(Error::Config(format!(
                "{symbol} has {decimals} decimals, at most {MAX_DECIMALS} are supported"
            )));
        }

        Ok(TokenDescriptor {
            symbol,
            contract_address: parse_hex_address(contract_address)?,
            decimals,
            quick_amounts,
        })
    }

    pub fn native(symbol: &'static str, quick_amounts: Vec<&'static str>) -> Self {
        TokenDescriptor {
            symbol,
            contract_address: Address::zero(),
            decimals: MAX_DECIMALS,
            quick_amounts,
        }
    }

    pub fn is_native(&self) -> bool {
        self.contract_address.is_zero()
    }

    /// The address the funding widget expects for this token.
    pub fn widget_token_address(&self) -> Address {
        if self.is_native() {
            native_coin_marker()
        } else {
            self.contract_address
        }
    }

    /// The first quick amount, used as the pre-filled amount when the token is selected.
    pub fn default_amount(&self) -> Option<&'static str> {
        self.quick_amounts.first().copied()
    }

    pub fn find<'a>(tokens: &'a [TokenDescriptor], symbol: &str) -> Option<&'a TokenDescriptor> {
        tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }
}

/// [`crate::NATIVE_COIN_MARKER`] is `0xee` repeated over all 20 bytes.
fn native_coin_marker() -> Address {
    Address::repeat_byte(0xee)
}

fn static_token(
    symbol: &'static str,
    contract_address: &str,
    decimals: u8,
    quick_amounts: Vec<&'static str>,
) -> TokenDescriptor {
    TokenDescriptor::new(symbol, contract_address, decimals, quick_amounts)
        .unwrap_or_else(|e| panic!("static token table entry {symbol} is invalid: {e}"))
}

lazy_static! {
    /// Tokens bridged from Ethereum mainnet into Injective.
    pub static ref INJECTIVE_TOKENS: Vec<TokenDescriptor> = vec![
        static_token(
            "INJ",
            "0xe28b3B32B6c345A34Ff64674606124Dd5Aceca30",
            18,
            vec!["1", "5", "10", "20"],
        ),
        static_token(
            "USDT",
            "0xdAC17F958D2ee523a2206206994597C13D831ec7",
            6,
            vec!["10", "20", "50", "100"],
        ),
        static_token(
            "USDC",
            "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
            6,
            vec!["10", "20", "50", "100"],
        ),
    ];

    /// Tokens accepted by the Apex Omni deposit contract on Arbitrum.
    pub static ref APEX_OMNI_TOKENS: Vec<TokenDescriptor> = vec![
        static_token(
            "USDT",
            "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9",
            6,
            vec!["20", "50", "100", "500"],
        ),
        static_token(
            "USDC",
            "0xaf88d065e77c8cC2239327C5EDb3A432268e5831",
            6,
            vec!["20", "50", "100", "500"],
        ),
        TokenDescriptor::native("ETH", vec!["0.01", "0.05", "0.1", "0.5"]),
    ];

    /// Tokens the Orderly vault on Arbitrum accepts. The vault keys them by symbol hash.
    pub static ref ORDERLY_TOKENS: Vec<TokenDescriptor> = vec![static_token(
        "USDT",
        "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9",
        6,
        vec!["20", "50", "100", "500"],
    )];
}
