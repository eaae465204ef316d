use ethers::abi::{AbiParser, Function, ParamType, Token};
use ethers::types::Bytes;

use super::amount::ensure_fits;
use crate::prelude::Result;
use crate::Error;

/// Parses a human-readable signature such as
/// `"function depositETH(bytes32 _zkLinkAddress, uint8 _subAccountId) external payable"`
/// or the bare `"transfer(address,uint256)"` form.
pub(crate) fn parse_function(signature: &str) -> Result<Function> {
    AbiParser::default()
        .parse_function(signature)
        .map_err(|e| Error::Abi(format!("{signature}: {e}")))
}

/// Encodes a contract call with the canonical Ethereum ABI: the 4-byte Keccak-256 selector of
/// the canonical signature followed by the head/tail encoded arguments.
///
/// Every `uintN` argument is range-checked against its declared width first, so an amount
/// that would be silently truncated on-chain is reported as [`Error::AmountOverflow`].
pub fn build_contract_call_deposit(signature: &str, args: &[Token]) -> Result<Bytes> {
    let function = parse_function(signature)?;
    encode_call(&function, args)
}

pub(crate) fn encode_call(function: &Function, args: &[Token]) -> Result<Bytes> {
    if function.inputs.len() != args.len() {
        return Err(Error::Abi(format!(
            "{} takes {} arguments, got {}",
            function.name,
            function.inputs.len(),
            args.len()
        )));
    }

    for (param, arg) in function.inputs.iter().zip(args) {
        check_uint_widths(&param.kind, arg)?;
    }

    let data = function
        .encode_input(args)
        .map_err(|e| Error::Abi(format!("{}: {e}", function.name)))?;
    Ok(data.into())
}

fn check_uint_widths(kind: &ParamType, token: &Token) -> Result<()> {
    match (kind, token) {
        (ParamType::Uint(bits), Token::Uint(value)) => ensure_fits(*value, *bits),
        (ParamType::Array(inner), Token::Array(items))
        | (ParamType::FixedArray(inner, _), Token::FixedArray(items)) => items
            .iter()
            .try_for_each(|item| check_uint_widths(inner, item)),
        (ParamType::Tuple(kinds), Token::Tuple(items)) => kinds
            .iter()
            .zip(items)
            .try_for_each(|(kind, item)| check_uint_widths(kind, item)),
        _ => Ok(()),
    }
}
