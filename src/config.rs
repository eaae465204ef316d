use std::env;

use ethers::types::{Address, Bytes};
use serde::Serialize;

use crate::consts::{known_address, AARC_API_KEY_ENV, INJECTIVE_PEGGY_MAINNET, NATIVE_COIN_MARKER};
use crate::deposit::DestinationContractDescriptor;
use crate::prelude::Result;
use crate::targets::{DepositTarget, InjectiveBridge};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedChainId {
    Ethereum,
    Arbitrum,
}

impl SupportedChainId {
    pub fn chain_id(&self) -> u64 {
        match self {
            SupportedChainId::Ethereum => 1,
            SupportedChainId::Arbitrum => 42161,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleToggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeAndSwapModule {
    pub enabled: bool,
    pub fetch_only_destination_balance: bool,
    pub route_type: String,
    pub connectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundKitModules {
    pub exchange: ModuleToggle,
    pub on_ramp: ModuleToggle,
    pub bridge_and_swap: BridgeAndSwapModule,
}

impl FundKitModules {
    pub fn all_enabled() -> Self {
        FundKitModules {
            exchange: ModuleToggle { enabled: true },
            on_ramp: ModuleToggle { enabled: true },
            bridge_and_swap: BridgeAndSwapModule {
                enabled: true,
                fetch_only_destination_balance: false,
                route_type: "Value".to_string(),
                connectors: vec!["ETHEREUM".to_string()],
            },
        }
    }

    /// Only centralized exchange withdrawals.
    pub fn exchange_only() -> Self {
        let mut modules = Self::all_enabled();
        modules.on_ramp.enabled = false;
        modules.bridge_and_swap.enabled = false;
        modules
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract: Option<DestinationContractDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Appearance {
    pub roundness: u32,
    pub theme: Theme,
}

impl Default for Appearance {
    fn default() -> Self {
        Appearance {
            roundness: 42,
            theme: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiKeys {
    #[serde(rename = "aarcSDK")]
    pub aarc_sdk: String,
}

/// Configuration object the funding widget is constructed with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FundKitConfig {
    pub app_name: String,
    pub user_id: String,
    pub dapp_id: String,
    pub module: FundKitModules,
    pub destination: WidgetDestination,
    pub appearance: Appearance,
    pub api_keys: ApiKeys,
}

impl FundKitConfig {
    /// Widget for deposits into Injective through the Peggy bridge on Ethereum.
    pub fn injective(api_key: String) -> Self {
        let bridge = InjectiveBridge::mainnet();
        let placeholder = DestinationContractDescriptor {
            contract_address: bridge.contract_address(),
            contract_name: bridge.contract_name().to_string(),
            calldata: Some(Bytes::default()),
            gas_limit: 300_000,
            value_wei: None,
            logo_uri: bridge.logo_uri().to_string(),
            template: None,
        };

        FundKitConfig {
            app_name: "Injective x Aarc".to_string(),
            user_id: "0x".to_string(),
            dapp_id: "Injective demo".to_string(),
            module: FundKitModules::all_enabled(),
            destination: WidgetDestination {
                contract: Some(placeholder),
                token_address: Some(known_address(NATIVE_COIN_MARKER)),
                wallet_address: Some(INJECTIVE_PEGGY_MAINNET.to_string()),
                chain_id: Some(SupportedChainId::Ethereum.chain_id()),
            },
            appearance: Appearance::default(),
            api_keys: ApiKeys { aarc_sdk: api_key },
        }
    }

    /// Widget used for withdrawing from centralized exchanges straight to a wallet.
    pub fn cex(api_key: String) -> Self {
        FundKitConfig {
            app_name: "Injective x Aarc".to_string(),
            user_id: "0x".to_string(),
            dapp_id: "Injective CEX demo".to_string(),
            module: FundKitModules::exchange_only(),
            destination: WidgetDestination {
                contract: None,
                token_address: None,
                wallet_address: None,
                chain_id: None,
            },
            appearance: Appearance::default(),
            api_keys: ApiKeys { aarc_sdk: api_key },
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::JsonParse(e.to_string()))
    }
}

/// Reads the widget API key from `AARC_API_KEY`, loading `.env` first if present.
pub fn api_key_from_env() -> Result<String> {
    dotenv::dotenv().ok();

    env::var(AARC_API_KEY_ENV).map_err(|_| {
        Error::Config(format!(
            "{AARC_API_KEY_ENV} environment variable not found. Please set it in your .env file or environment."
        ))
    })
}
