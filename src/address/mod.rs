mod account;
mod codec;

pub use account::AccountIdentifier;
pub use codec::{AddressCodec, AddressKind, INJECTIVE_HRP};
pub(crate) use codec::parse_hex_address;
