use ethers::types::{Bytes, U256};
use log::{debug, info};

use super::amount::parse_amount;
use super::calldata::encode_call;
use super::descriptor::DestinationContractDescriptor;
use super::template::{CalldataTemplate, TemplateParam};
use crate::address::AccountIdentifier;
use crate::prelude::Result;
use crate::targets::DepositTarget;
use crate::token::TokenDescriptor;
use crate::Error;

/// Calldata plus the native value to attach when calling the destination contract.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositCall {
    pub calldata: Bytes,
    pub value_wei: U256,
}

/// Assembles deposit calls for one destination protocol. Never submits anything itself.
#[derive(Debug)]
pub struct DepositRequestBuilder<'a, T: DepositTarget + ?Sized> {
    target: &'a T,
}

impl<'a, T: DepositTarget + ?Sized> DepositRequestBuilder<'a, T> {
    pub fn new(target: &'a T) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &T {
        self.target
    }

    /// Encodes a deposit of `amount` (a decimal string in whole token units) for `recipient`.
    ///
    /// ERC-20 tokens go through the target's token deposit function with a zero call value.
    /// The native coin goes through its native deposit function with the amount as call value.
    pub fn build_erc20_deposit(
        &self,
        token: &TokenDescriptor,
        amount: &str,
        recipient: &AccountIdentifier,
    ) -> Result<DepositCall> {
        let amount = parse_amount(amount, token.decimals)?;

        let (function, params, value_wei) = if token.is_native() {
            let function = self
                .target
                .native_deposit()
                .ok_or_else(|| self.unsupported(token))?;
            (function, self.target.native_deposit_params(recipient), amount)
        } else {
            (
                self.target.token_deposit(),
                self.target.token_deposit_params(token, recipient),
                U256::zero(),
            )
        };

        let args: Vec<_> = params.iter().map(|param| param.resolve(amount)).collect();
        let calldata = encode_call(&function.parse()?, &args)?;

        info!(
            "Built {} deposit of {} {} for {recipient}",
            self.target.contract_name(),
            amount,
            token.symbol
        );
        debug!("Calldata: {calldata}, value: {value_wei}");

        Ok(DepositCall {
            calldata,
            value_wei,
        })
    }

    /// Builds calldata the widget completes with the routed amount. Only ERC-20 deposits can
    /// be templated since the native path carries its amount as call value.
    pub fn build_templated_deposit(
        &self,
        token: &TokenDescriptor,
        recipient: &AccountIdentifier,
    ) -> Result<CalldataTemplate> {
        if token.is_native() {
            return Err(self.unsupported(token));
        }

        let function = self.target.token_deposit().parse()?;
        let params: Vec<TemplateParam> = self.target.token_deposit_params(token, recipient);
        let template = CalldataTemplate::new(&function, &params)?;

        debug!("Templated {} params: {}", function.name, template.params);
        Ok(template)
    }

    pub fn destination_contract(&self, call: DepositCall) -> DestinationContractDescriptor {
        let value_wei = (!call.value_wei.is_zero()).then_some(call.value_wei);
        self.descriptor(Some(call.calldata), value_wei, None)
    }

    pub fn templated_destination_contract(
        &self,
        template: CalldataTemplate,
    ) -> DestinationContractDescriptor {
        self.descriptor(None, None, Some(template))
    }

    fn descriptor(
        &self,
        calldata: Option<Bytes>,
        value_wei: Option<U256>,
        template: Option<CalldataTemplate>,
    ) -> DestinationContractDescriptor {
        DestinationContractDescriptor {
            contract_address: self.target.contract_address(),
            contract_name: self.target.contract_name().to_string(),
            calldata,
            gas_limit: self.target.gas_limit(),
            value_wei,
            logo_uri: self.target.logo_uri().to_string(),
            template,
        }
    }

    fn unsupported(&self, token: &TokenDescriptor) -> Error {
        Error::UnsupportedToken {
            symbol: token.symbol.to_string(),
            target: self.target.contract_name().to_string(),
        }
    }
}
