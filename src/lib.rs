#![deny(unreachable_pub)]
mod address;
mod config;
mod consts;
mod deposit;
mod errors;
pub mod prelude;
mod targets;
mod token;
pub mod widget;

pub use address::{AccountIdentifier, AddressCodec, AddressKind, INJECTIVE_HRP};
pub use config::{
    api_key_from_env, ApiKeys, Appearance, BridgeAndSwapModule, FundKitConfig, FundKitModules,
    ModuleToggle, SupportedChainId, Theme, WidgetDestination,
};
pub use consts::{AMOUNT_PLACEHOLDER, DEFAULT_GAS_LIMIT, NATIVE_COIN_MARKER};
pub use deposit::{
    build_contract_call_deposit, parse_amount, CalldataTemplate, DepositCall,
    DepositRequestBuilder, DestinationContractDescriptor, TemplateParam,
};
pub use errors::Error;
pub use targets::{ApexOmni, DepositFunction, DepositTarget, InjectiveBridge, Orderly};
pub use token::{TokenDescriptor, APEX_OMNI_TOKENS, INJECTIVE_TOKENS, ORDERLY_TOKENS};
pub use widget::{
    await_outcome, settle_deposit, DepositCallbacks, DepositFlow, DepositOutcome, FundingWidget,
    WidgetEvent,
};
