//! Peggy bridge contract moving ERC-20s from Ethereum into Injective accounts.

use ethers::abi::Token;
use ethers::types::Address;

use super::{DepositFunction, DepositTarget};
use crate::address::{parse_hex_address, AccountIdentifier};
use crate::config::FundKitModules;
use crate::consts::{known_address, INJECTIVE_LOGO_URI, INJECTIVE_PEGGY_MAINNET};
use crate::deposit::TemplateParam;
use crate::prelude::Result;
use crate::token::TokenDescriptor;

const SEND_TO_INJECTIVE: DepositFunction = DepositFunction::new(
    "function sendToInjective(address _tokenContract, bytes32 _destination, uint256 _amount, string _data) external",
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectiveBridge {
    pub peggy: Address,
}

impl InjectiveBridge {
    pub fn new(peggy: &str) -> Result<Self> {
        Ok(InjectiveBridge {
            peggy: parse_hex_address(peggy)?,
        })
    }

    pub fn mainnet() -> Self {
        InjectiveBridge {
            peggy: known_address(INJECTIVE_PEGGY_MAINNET),
        }
    }
}

impl DepositTarget for InjectiveBridge {
    fn contract_name(&self) -> &str {
        "Injective Deposit"
    }

    fn contract_address(&self) -> Address {
        self.peggy
    }

    fn logo_uri(&self) -> &str {
        INJECTIVE_LOGO_URI
    }

    fn token_deposit(&self) -> DepositFunction {
        SEND_TO_INJECTIVE
    }

    fn token_deposit_params(
        &self,
        token: &TokenDescriptor,
        recipient: &AccountIdentifier,
    ) -> Vec<TemplateParam> {
        vec![
            TemplateParam::Value(Token::Address(token.contract_address)),
            TemplateParam::Value(Token::FixedBytes(recipient.to_slot().as_bytes().to_vec())),
            TemplateParam::Amount,
            TemplateParam::Value(Token::String(String::new())),
        ]
    }

    // INJ can only arrive through the bridge route; the exchange route would deliver it on
    // the wrong chain.
    fn module_overrides(&self, token: &TokenDescriptor) -> Option<FundKitModules> {
        if token.symbol.eq_ignore_ascii_case("INJ") {
            let mut modules = FundKitModules::all_enabled();
            modules.exchange.enabled = false;
            Some(modules)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::INJECTIVE_TOKENS;

    #[test]
    fn test_exchange_disabled_for_inj_only() {
        let bridge = InjectiveBridge::mainnet();
        let inj = TokenDescriptor::find(&INJECTIVE_TOKENS, "INJ").unwrap();
        let usdt = TokenDescriptor::find(&INJECTIVE_TOKENS, "USDT").unwrap();

        let modules = bridge.module_overrides(inj).unwrap();
        assert!(!modules.exchange.enabled);
        assert!(modules.bridge_and_swap.enabled);
        assert!(bridge.module_overrides(usdt).is_none());
    }

    #[test]
    fn test_params_embed_recipient_slot() {
        let bridge = InjectiveBridge::mainnet();
        let usdt = TokenDescriptor::find(&INJECTIVE_TOKENS, "USDT").unwrap();
        let recipient: AccountIdentifier = "inj1wskntnrxxnq9x2f95wudfjwmjmztfk9krfctp7"
            .parse()
            .unwrap();

        let params = bridge.token_deposit_params(usdt, &recipient);
        assert_eq!(params.len(), 4);
        assert_eq!(
            params[1],
            TemplateParam::Value(Token::FixedBytes(recipient.to_slot().as_bytes().to_vec()))
        );
        assert_eq!(params[2], TemplateParam::Amount);
        assert!(bridge.native_deposit().is_none());
    }

    #[test]
    fn test_rejects_bad_contract() {
        assert!(InjectiveBridge::new("0x1234").is_err());
    }
}
