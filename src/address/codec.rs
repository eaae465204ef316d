//! Conversion between Ethereum hex addresses and Cosmos bech32 account addresses.
//!
//! Injective accounts are derived from the same secp256k1 key as the Ethereum
//! account, so both forms carry the same 20-byte payload. Only the encoding differs.

use bech32::{primitives::decode::CheckedHrpstring, Bech32, Hrp};
use ethers::types::Address;
use log::debug;

use crate::prelude::Result;
use crate::Error;

/// Human-readable prefix of Injective account addresses.
pub const INJECTIVE_HRP: Hrp = Hrp::parse_unchecked("inj");

const ADDRESS_LENGTH: usize = 20;
const HEX_ADDRESS_DIGITS: usize = ADDRESS_LENGTH * 2;
/// 160 payload bits re-packed into 5-bit groups.
const PAYLOAD_GROUPS: usize = 32;
const CHECKSUM_LENGTH: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Hex,
    Bech32,
}

#[derive(Debug, Clone, Copy)]
pub struct AddressCodec {
    hrp: Hrp,
}

impl Default for AddressCodec {
    fn default() -> Self {
        Self::injective()
    }
}

impl AddressCodec {
    pub fn new(hrp: Hrp) -> Self {
        Self { hrp }
    }

    pub fn injective() -> Self {
        Self::new(INJECTIVE_HRP)
    }

    pub fn hrp(&self) -> Hrp {
        self.hrp
    }

    /// Converts a `0x`-prefixed (or bare) 40 digit hex address into its bech32 form.
    pub fn to_bech32(&self, hex_address: &str) -> Result<String> {
        let address = parse_hex_address(hex_address)?;
        self.encode(&address)
    }

    /// Converts a bech32 address into lowercase `0x`-prefixed hex.
    pub fn to_hex(&self, bech32_address: &str) -> Result<String> {
        let address = self.decode(bech32_address)?;
        Ok(format_hex_address(&address))
    }

    pub fn is_valid(&self, address: &str, expected_kind: AddressKind) -> bool {
        match expected_kind {
            AddressKind::Hex => parse_hex_address(address).is_ok(),
            AddressKind::Bech32 => self.decode(address).is_ok(),
        }
    }

    pub fn encode(&self, address: &Address) -> Result<String> {
        bech32::encode::<Bech32>(self.hrp, address.as_bytes())
            .map_err(|e| Error::InvalidAddressFormat(e.to_string()))
    }

    pub fn decode(&self, bech32_address: &str) -> Result<Address> {
        let expected_length = self.hrp.len() + 1 + PAYLOAD_GROUPS + CHECKSUM_LENGTH;
        if bech32_address.len() != expected_length {
            return Err(Error::InvalidAddressFormat(format!(
                "{bech32_address}: expected {expected_length} characters, got {}",
                bech32_address.len()
            )));
        }

        let checked = CheckedHrpstring::new::<Bech32>(bech32_address)
            .map_err(|e| Error::InvalidAddressFormat(format!("{bech32_address}: {e}")))?;

        if checked.hrp().to_lowercase() != self.hrp.to_lowercase() {
            return Err(Error::InvalidAddressFormat(format!(
                "{bech32_address}: expected prefix {}, got {}",
                self.hrp,
                checked.hrp()
            )));
        }

        let payload: Vec<u8> = checked.byte_iter().collect();
        if payload.len() != ADDRESS_LENGTH {
            return Err(Error::InvalidAddressFormat(format!(
                "{bech32_address}: payload is {} bytes",
                payload.len()
            )));
        }

        let address = Address::from_slice(&payload);
        debug!("Decoded {bech32_address} to {}", format_hex_address(&address));
        Ok(address)
    }
}

/// Parses a 20-byte hex address. The `0x` prefix is optional and checksum casing is ignored.
pub(crate) fn parse_hex_address(input: &str) -> Result<Address> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);

    if digits.len() != HEX_ADDRESS_DIGITS {
        return Err(Error::InvalidAddressFormat(format!(
            "{input}: expected {HEX_ADDRESS_DIGITS} hex digits, got {}",
            digits.len()
        )));
    }

    let mut bytes = [0u8; ADDRESS_LENGTH];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|e| Error::InvalidAddressFormat(format!("{input}: {e}")))?;
    Ok(Address::from(bytes))
}

pub(crate) fn format_hex_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_bytes()))
}
