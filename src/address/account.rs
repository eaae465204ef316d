use std::fmt;
use std::str::FromStr;

use ethers::types::{Address, H256};

use super::codec::{format_hex_address, parse_hex_address, AddressCodec, AddressKind};
use crate::prelude::Result;
use crate::Error;

/// An account in either of its two encodings. Both variants wrap the same 20-byte payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountIdentifier {
    Hex(Address),
    /// Bech32 account under the `inj` prefix.
    Bech32(Address),
}

impl AccountIdentifier {
    pub fn kind(&self) -> AddressKind {
        match self {
            AccountIdentifier::Hex(_) => AddressKind::Hex,
            AccountIdentifier::Bech32(_) => AddressKind::Bech32,
        }
    }

    pub fn payload(&self) -> Address {
        match self {
            AccountIdentifier::Hex(address) | AccountIdentifier::Bech32(address) => *address,
        }
    }

    /// The payload left-padded into a 32-byte ABI word, as deposit contracts expect for
    /// `bytes32` recipients.
    pub fn to_slot(&self) -> H256 {
        let mut slot = H256::zero();
        slot.0[12..].copy_from_slice(self.payload().as_bytes());
        slot
    }

    pub fn to_hex(&self) -> Self {
        AccountIdentifier::Hex(self.payload())
    }

    pub fn to_bech32(&self) -> Self {
        AccountIdentifier::Bech32(self.payload())
    }
}

impl From<Address> for AccountIdentifier {
    fn from(address: Address) -> Self {
        AccountIdentifier::Hex(address)
    }
}

impl FromStr for AccountIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let codec = AddressCodec::injective();
        let bech32_prefix = format!("{}1", codec.hrp().to_lowercase());

        if s.to_lowercase().starts_with(&bech32_prefix) {
            codec.decode(s).map(AccountIdentifier::Bech32)
        } else {
            parse_hex_address(s).map(AccountIdentifier::Hex)
        }
    }
}

impl fmt::Display for AccountIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountIdentifier::Hex(address) => write!(f, "{}", format_hex_address(address)),
            AccountIdentifier::Bech32(address) => {
                let encoded = AddressCodec::injective()
                    .encode(address)
                    .map_err(|_| fmt::Error)?;
                write!(f, "{encoded}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HEX: &str = "0x742d35cc6634c0532925a3b8d4c9db96c4b4d8b6";
    const SAMPLE_INJ: &str = "inj1wskntnrxxnq9x2f95wudfjwmjmztfk9krfctp7";

    #[test]
    fn test_parse_detects_kind() {
        let hex: AccountIdentifier = SAMPLE_HEX.parse().unwrap();
        let inj: AccountIdentifier = SAMPLE_INJ.parse().unwrap();

        assert_eq!(hex.kind(), AddressKind::Hex);
        assert_eq!(inj.kind(), AddressKind::Bech32);
        assert_eq!(hex.payload(), inj.payload());
        assert_eq!(hex.to_bech32(), inj);
        assert_eq!(inj.to_hex(), hex);
    }

    #[test]
    fn test_display_in_own_form() {
        let hex: AccountIdentifier = SAMPLE_HEX.parse().unwrap();

        assert_eq!(hex.to_string(), SAMPLE_HEX);
        assert_eq!(hex.to_bech32().to_string(), SAMPLE_INJ);
    }

    #[test]
    fn test_slot_is_left_padded() {
        let account: AccountIdentifier = SAMPLE_INJ.parse().unwrap();
        let slot = account.to_slot();

        assert_eq!(&slot.0[..12], &[0u8; 12]);
        assert_eq!(
            format!("0x{}", hex::encode(slot.as_bytes())),
            format!("0x000000000000000000000000{}", &SAMPLE_HEX[2..])
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            "inj1wskntnrxxnq9x2f95wudfjwmjmztfk9krfctp8".parse::<AccountIdentifier>(),
            Err(Error::InvalidAddressFormat(_))
        ));
        assert!(matches!(
            "not an address".parse::<AccountIdentifier>(),
            Err(Error::InvalidAddressFormat(_))
        ));
    }
}
