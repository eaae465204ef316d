use std::env;

use ethers::abi::Token;
use ethers::types::{Address, U256};
use log::debug;

use super::{DepositFunction, DepositTarget};
use crate::address::{parse_hex_address, AccountIdentifier};
use crate::consts::{APEX_OMNI_CONTRACT_ENV, APEX_OMNI_LOGO_URI};
use crate::deposit::TemplateParam;
use crate::prelude::Result;
use crate::token::TokenDescriptor;
use crate::Error;

const DEPOSIT_ERC20: DepositFunction = DepositFunction::new(
    "function depositERC20(address _token, uint104 _amount, bytes32 _zkLinkAddress, uint8 _subAccountId, bool _mapping) external",
);

const DEPOSIT_ETH: DepositFunction = DepositFunction::new(
    "function depositETH(bytes32 _zkLinkAddress, uint8 _subAccountId) external payable",
);

/// Apex Omni deposit contract on Arbitrum (zkLink based).
///
/// Token amounts are `uint104` on this contract, so large ERC-20 deposits are rejected with
/// [`Error::AmountOverflow`] before anything reaches the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApexOmni {
    pub contract: Address,
    pub sub_account_id: u8,
}

impl ApexOmni {
    pub fn new(contract: &str) -> Result<Self> {
        Ok(ApexOmni {
            contract: parse_hex_address(contract)?,
            sub_account_id: 0,
        })
    }

    /// Reads the contract address from `APEX_OMNI_CONTRACT`, loading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let contract = env::var(APEX_OMNI_CONTRACT_ENV).map_err(|_| {
            Error::Config(format!(
                "{APEX_OMNI_CONTRACT_ENV} environment variable not found. Please set it in your .env file or environment."
            ))
        })?;
        debug!("Using Apex Omni contract {contract}");
        Self::new(&contract)
    }

    pub fn with_sub_account(mut self, sub_account_id: u8) -> Self {
        self.sub_account_id = sub_account_id;
        self
    }

    fn sub_account(&self) -> TemplateParam {
        TemplateParam::Value(Token::Uint(U256::from(self.sub_account_id)))
    }
}

impl DepositTarget for ApexOmni {
    fn contract_name(&self) -> &str {
        "Apex Omni Deposit"
    }

    fn contract_address(&self) -> Address {
        self.contract
    }

    fn logo_uri(&self) -> &str {
        APEX_OMNI_LOGO_URI
    }

    fn token_deposit(&self) -> DepositFunction {
        DEPOSIT_ERC20
    }

    fn token_deposit_params(
        &self,
        token: &TokenDescriptor,
        recipient: &AccountIdentifier,
    ) -> Vec<TemplateParam> {
        vec![
            TemplateParam::Value(Token::Address(token.contract_address)),
            TemplateParam::Amount,
            TemplateParam::Value(Token::FixedBytes(recipient.to_slot().as_bytes().to_vec())),
            self.sub_account(),
            TemplateParam::Value(Token::Bool(false)),
        ]
    }

    fn native_deposit(&self) -> Option<DepositFunction> {
        Some(DEPOSIT_ETH)
    }

    fn native_deposit_params(&self, recipient: &AccountIdentifier) -> Vec<TemplateParam> {
        vec![
            TemplateParam::Value(Token::FixedBytes(recipient.to_slot().as_bytes().to_vec())),
            self.sub_account(),
        ]
    }
}
