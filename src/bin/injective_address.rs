use aarc_deposits::prelude::Result;
use aarc_deposits::{AccountIdentifier, AddressCodec, AddressKind};
use log::info;
use std::env;

fn main() -> Result<()> {
    env_logger::init();
    let codec = AddressCodec::injective();

    let inputs: Vec<String> = env::args().skip(1).collect();
    if inputs.is_empty() {
        println!("Usage: injective_address <0x... | inj1...>...");
        return Ok(());
    }

    for input in inputs {
        info!("Converting {input}");
        let account: AccountIdentifier = match input.parse() {
            Ok(account) => account,
            Err(e) => {
                println!("❌ {input}: {e}");
                continue;
            }
        };

        match account.kind() {
            AddressKind::Hex => {
                let bech32 = codec.to_bech32(&input)?;
                println!("{input} -> {bech32}");
            }
            AddressKind::Bech32 => {
                let hex = codec.to_hex(&input)?;
                println!("{input} -> {hex}");
            }
        }
    }

    Ok(())
}
