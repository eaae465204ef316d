//! Destination protocols a deposit can be routed into.

mod apex_omni;
mod injective;
mod orderly;

pub use apex_omni::ApexOmni;
pub use injective::InjectiveBridge;
pub use orderly::Orderly;

use ethers::abi::Function;
use ethers::types::Address;

use crate::address::AccountIdentifier;
use crate::config::FundKitModules;
use crate::consts::DEFAULT_GAS_LIMIT;
use crate::deposit::{parse_function, TemplateParam};
use crate::prelude::Result;
use crate::token::TokenDescriptor;

/// A deposit entry point given by its human-readable Solidity signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositFunction {
    pub signature: &'static str,
}

impl DepositFunction {
    pub const fn new(signature: &'static str) -> Self {
        Self { signature }
    }

    pub fn parse(&self) -> Result<Function> {
        parse_function(self.signature)
    }
}

/// A protocol contract accepting deposits on the destination chain.
///
/// Argument layouts are expressed as [`TemplateParam`]s so the same layout serves both fully
/// encoded calldata and widget-completed templates.
pub trait DepositTarget {
    fn contract_name(&self) -> &str;

    fn contract_address(&self) -> Address;

    fn logo_uri(&self) -> &str;

    fn gas_limit(&self) -> u64 {
        DEFAULT_GAS_LIMIT
    }

    /// Entry point for ERC-20 deposits.
    fn token_deposit(&self) -> DepositFunction;

    fn token_deposit_params(
        &self,
        token: &TokenDescriptor,
        recipient: &AccountIdentifier,
    ) -> Vec<TemplateParam>;

    /// Entry point for native coin deposits, if the contract has one. The amount travels as
    /// the call value, never as an argument.
    fn native_deposit(&self) -> Option<DepositFunction> {
        None
    }

    fn native_deposit_params(&self, _recipient: &AccountIdentifier) -> Vec<TemplateParam> {
        Vec::new()
    }

    /// Widget modules to switch on or off before depositing `token`.
    fn module_overrides(&self, _token: &TokenDescriptor) -> Option<FundKitModules> {
        None
    }
}
