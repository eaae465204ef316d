use ethers::types::{Address, Bytes, U256};
use serde::{Serialize, Serializer};

use super::template::CalldataTemplate;

/// The contract call the funding widget performs on the destination chain once funds arrive.
///
/// Serializes with the widget's own field names, e.g.
/// ```json
/// {
///   "contractAddress": "0x...",
///   "contractName": "Apex Omni Deposit",
///   "contractPayload": "0x7648ce45...",
///   "contractGasLimit": "800000",
///   "contractAmount": "10000000000000000",
///   "contractLogoURI": "https://omni.apex.exchange/favicon.ico?v=1.0.2"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationContractDescriptor {
    pub contract_address: Address,
    pub contract_name: String,
    /// Absent when the widget builds the calldata from `template`.
    #[serde(rename = "contractPayload", skip_serializing_if = "Option::is_none")]
    pub calldata: Option<Bytes>,
    #[serde(rename = "contractGasLimit", serialize_with = "serialize_decimal")]
    pub gas_limit: u64,
    /// Native coin forwarded with the call.
    #[serde(
        rename = "contractAmount",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_decimal"
    )]
    pub value_wei: Option<U256>,
    #[serde(rename = "contractLogoURI")]
    pub logo_uri: String,
    #[serde(flatten)]
    pub template: Option<CalldataTemplate>,
}

impl DestinationContractDescriptor {
    pub fn is_payable(&self) -> bool {
        self.value_wei.is_some_and(|value| !value.is_zero())
    }

    pub fn to_json(&self) -> crate::prelude::Result<String> {
        serde_json::to_string(self).map_err(|e| crate::Error::JsonParse(e.to_string()))
    }
}

fn serialize_decimal<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_string())
}

fn serialize_optional_decimal<S: Serializer>(
    value: &Option<U256>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(value) => serializer.serialize_str(&value.to_string()),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn descriptor() -> DestinationContractDescriptor {
        DestinationContractDescriptor {
            contract_address: Address::repeat_byte(0x11),
            contract_name: "Apex Omni Deposit".to_string(),
            calldata: Some(Bytes::from(vec![0x76, 0x48, 0xce, 0x45])),
            gas_limit: 800_000,
            value_wei: Some(U256::from(10_000_000_000_000_000u64)),
            logo_uri: "https://omni.apex.exchange/favicon.ico?v=1.0.2".to_string(),
            template: None,
        }
    }

    #[test]
    fn test_serializes_widget_field_names() {
        let json: Value = serde_json::from_str(&descriptor().to_json().unwrap()).unwrap();

        assert_eq!(
            json["contractAddress"],
            "0x1111111111111111111111111111111111111111"
        );
        assert_eq!(json["contractName"], "Apex Omni Deposit");
        assert_eq!(json["contractPayload"], "0x7648ce45");
        assert_eq!(json["contractGasLimit"], "800000");
        assert_eq!(json["contractAmount"], "10000000000000000");
        assert_eq!(
            json["contractLogoURI"],
            "https://omni.apex.exchange/favicon.ico?v=1.0.2"
        );
        assert!(json.get("calldataABI").is_none());
        assert!(descriptor().is_payable());
    }

    #[test]
    fn test_omits_amount_and_flattens_template() {
        let templated = DestinationContractDescriptor {
            calldata: None,
            value_wei: None,
            template: Some(CalldataTemplate {
                abi: "[]".to_string(),
                params: "0x00,AARC".to_string(),
            }),
            ..descriptor()
        };
        let json: Value = serde_json::from_str(&templated.to_json().unwrap()).unwrap();

        assert!(json.get("contractAmount").is_none());
        assert!(json.get("contractPayload").is_none());
        assert_eq!(json["calldataABI"], "[]");
        assert_eq!(json["calldataParams"], "0x00,AARC");
        assert!(!templated.is_payable());
    }

    #[test]
    fn test_empty_payload_is_kept_without_template() {
        let placeholder = DestinationContractDescriptor {
            calldata: Some(Bytes::default()),
            value_wei: None,
            ..descriptor()
        };
        let json: Value = serde_json::from_str(&placeholder.to_json().unwrap()).unwrap();

        assert_eq!(json["contractPayload"], "0x");
    }
}
