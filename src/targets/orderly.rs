use ethers::abi::{encode, Token};
use ethers::types::{Address, H256};
use ethers::utils::keccak256;

use super::{DepositFunction, DepositTarget};
use crate::address::{parse_hex_address, AccountIdentifier};
use crate::consts::{known_address, ORDERLY_BROKER_ID, ORDERLY_LOGO_URI, ORDERLY_VAULT_MAINNET};
use crate::deposit::TemplateParam;
use crate::prelude::Result;
use crate::token::TokenDescriptor;

const DEPOSIT: DepositFunction = DepositFunction::new(
    "function deposit(bytes32 accountId, bytes32 brokerHash, bytes32 tokenHash, uint128 tokenAmount) external payable",
);

/// Orderly Network vault. Accounts are keyed by wallet and broker, tokens by symbol hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orderly {
    pub vault: Address,
    pub broker_id: String,
}

impl Orderly {
    pub fn new(vault: &str, broker_id: impl Into<String>) -> Result<Self> {
        Ok(Orderly {
            vault: parse_hex_address(vault)?,
            broker_id: broker_id.into(),
        })
    }

    pub fn mainnet() -> Self {
        Orderly {
            vault: known_address(ORDERLY_VAULT_MAINNET),
            broker_id: ORDERLY_BROKER_ID.to_string(),
        }
    }

    pub fn broker_hash(&self) -> H256 {
        H256::from(keccak256(self.broker_id.as_bytes()))
    }

    pub fn token_hash(symbol: &str) -> H256 {
        H256::from(keccak256(symbol.as_bytes()))
    }

    /// `keccak256(abi.encode(wallet, brokerHash))`
    pub fn account_id(&self, wallet: &AccountIdentifier) -> H256 {
        let encoded = encode(&[
            Token::Address(wallet.payload()),
            Token::FixedBytes(self.broker_hash().as_bytes().to_vec()),
        ]);
        H256::from(keccak256(encoded))
    }
}

impl DepositTarget for Orderly {
    fn contract_name(&self) -> &str {
        "Orderly Deposit"
    }

    fn contract_address(&self) -> Address {
        self.vault
    }

    fn logo_uri(&self) -> &str {
        ORDERLY_LOGO_URI
    }

    fn token_deposit(&self) -> DepositFunction {
        DEPOSIT
    }

    fn token_deposit_params(
        &self,
        token: &TokenDescriptor,
        recipient: &AccountIdentifier,
    ) -> Vec<TemplateParam> {
        vec![
            TemplateParam::Value(Token::FixedBytes(
                self.account_id(recipient).as_bytes().to_vec(),
            )),
            TemplateParam::Value(Token::FixedBytes(self.broker_hash().as_bytes().to_vec())),
            TemplateParam::Value(Token::FixedBytes(
                Self::token_hash(token.symbol).as_bytes().to_vec(),
            )),
            TemplateParam::Amount,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashes_match_published_constants() {
        let orderly = Orderly::mainnet();

        assert_eq!(
            format!("{:?}", orderly.broker_hash()),
            "0x95d85ced8adb371760e4b6437896a075632fbd6cefe699f8125a8bc1d9b19e5b"
        );
        assert_eq!(
            format!("{:?}", Orderly::token_hash("USDT")),
            "0x8b1a1d9c2b109e527c9134b25b1a1833b16b6594f92daa9f6d9b7a6024bce9d0"
        );
        assert_eq!(
            format!("{:?}", Orderly::token_hash("USDC")),
            "0xd6aca1be9729c13d677335161321649cccae6a591554772516700f986f942eaa"
        );
    }

    #[test]
    fn test_account_id() {
        let wallet: AccountIdentifier = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6"
            .parse()
            .unwrap();

        assert_eq!(
            format!("{:?}", Orderly::mainnet().account_id(&wallet)),
            "0xf1e6dfeaf30438699d1022c1f54acb96219003e0b5e5eeff33a728771b9872d7"
        );
    }

    #[test]
    fn test_has_no_native_path() {
        let orderly = Orderly::mainnet();
        assert!(orderly.native_deposit().is_none());
        assert_eq!(orderly.gas_limit(), 800_000);
        assert_eq!(
            orderly.contract_address(),
            "0x816f722424B49Cf1275cc86DA9840Fbd5a6167e9".parse().unwrap()
        );
    }
}
