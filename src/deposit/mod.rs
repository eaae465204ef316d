mod amount;
mod builder;
mod calldata;
mod descriptor;
mod template;

pub use amount::parse_amount;
pub use builder::{DepositCall, DepositRequestBuilder};
pub use calldata::build_contract_call_deposit;
pub(crate) use calldata::parse_function;
pub use descriptor::DestinationContractDescriptor;
pub use template::{CalldataTemplate, TemplateParam};
