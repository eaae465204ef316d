use ethers::abi::{Function, StateMutability, Token};
use ethers::types::U256;
use serde::Serialize;
use serde_json::json;

use crate::consts::AMOUNT_PLACEHOLDER;
use crate::prelude::Result;
use crate::Error;

/// One argument of a deposit call, where the amount may be left for the widget to fill in.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateParam {
    Value(Token),
    Amount,
}

impl TemplateParam {
    pub(crate) fn resolve(&self, amount: U256) -> Token {
        match self {
            TemplateParam::Value(token) => token.clone(),
            TemplateParam::Amount => Token::Uint(amount),
        }
    }

    fn render(&self) -> Result<String> {
        match self {
            TemplateParam::Amount => Ok(AMOUNT_PLACEHOLDER.to_string()),
            TemplateParam::Value(token) => render_token(token),
        }
    }
}

/// Calldata the widget completes itself once it knows the routed amount.
///
/// `abi` is a JSON ABI fragment holding the single deposit function and `params` the
/// comma-joined arguments with [`AMOUNT_PLACEHOLDER`] in the amount position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalldataTemplate {
    #[serde(rename = "calldataABI")]
    pub abi: String,
    #[serde(rename = "calldataParams")]
    pub params: String,
}

impl CalldataTemplate {
    pub fn new(function: &Function, params: &[TemplateParam]) -> Result<Self> {
        if function.inputs.len() != params.len() {
            return Err(Error::Abi(format!(
                "{} takes {} arguments, got {}",
                function.name,
                function.inputs.len(),
                params.len()
            )));
        }

        let inputs: Vec<_> = function
            .inputs
            .iter()
            .map(|param| {
                let kind = param.kind.to_string();
                json!({ "internalType": kind, "name": param.name, "type": kind })
            })
            .collect();

        let abi = json!([{
            "inputs": inputs,
            "name": function.name,
            "outputs": [],
            "stateMutability": state_mutability(&function.state_mutability),
            "type": "function",
        }]);

        let params = params
            .iter()
            .map(TemplateParam::render)
            .collect::<Result<Vec<_>>>()?
            .join(",");

        Ok(CalldataTemplate {
            abi: abi.to_string(),
            params,
        })
    }
}

fn state_mutability(mutability: &StateMutability) -> &'static str {
    match mutability {
        StateMutability::Pure => "pure",
        StateMutability::View => "view",
        StateMutability::NonPayable => "nonpayable",
        StateMutability::Payable => "payable",
    }
}

fn render_token(token: &Token) -> Result<String> {
    match token {
        Token::Address(address) => Ok(format!("0x{}", hex::encode(address.as_bytes()))),
        Token::FixedBytes(bytes) | Token::Bytes(bytes) => Ok(format!("0x{}", hex::encode(bytes))),
        Token::Uint(value) | Token::Int(value) => Ok(value.to_string()),
        Token::Bool(value) => Ok(value.to_string()),
        Token::String(value) if value.contains(',') => Err(Error::Abi(format!(
            "string parameter {value:?} cannot contain a comma"
        ))),
        Token::String(value) => Ok(value.clone()),
        other => Err(Error::Abi(format!(
            "{other:?} cannot be passed as a template parameter"
        ))),
    }
}
