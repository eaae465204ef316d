use ethers::types::U256;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),
    #[error("Amount parse error: {0}")]
    AmountParseError(String),
    #[error("Amount {amount} does not fit in uint{bits}")]
    AmountOverflow { amount: U256, bits: usize },
    #[error("Token {symbol} is not supported by {target}")]
    UnsupportedToken { symbol: String, target: String },
    #[error("ABI encoding error: {0}")]
    Abi(String),
    #[error("Widget error: {0}")]
    Widget(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Json parse error {0:?}")]
    JsonParse(String),
}
