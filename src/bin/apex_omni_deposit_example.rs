use aarc_deposits::prelude::Result;
use aarc_deposits::{
    settle_deposit, AccountIdentifier, ApexOmni, DepositCallbacks, DepositFlow,
    DestinationContractDescriptor, Error, FundKitModules, FundingWidget, TokenDescriptor,
    WidgetEvent, APEX_OMNI_TOKENS,
};
use ethers::types::Address;
use log::{error, info};
use serde_json::json;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};

/// Stands in for the browser widget: prints what it is given and reports a successful
/// transaction as soon as it is opened.
struct ConsoleWidget {
    events: UnboundedSender<WidgetEvent>,
}

impl FundingWidget for ConsoleWidget {
    fn open_modal(&mut self) -> Result<()> {
        println!("  Widget opened");
        self.send(WidgetEvent::Opened)?;
        self.send(WidgetEvent::TransactionSuccess(json!({ "status": "demo" })))
    }

    fn close(&mut self) -> Result<()> {
        println!("  Widget closed");
        self.send(WidgetEvent::Closed)
    }

    fn update_destination_contract(
        &mut self,
        descriptor: &DestinationContractDescriptor,
    ) -> Result<()> {
        println!("  Destination contract: {}", descriptor.to_json()?);
        Ok(())
    }

    fn update_destination_token(&mut self, token: Address) -> Result<()> {
        println!("  Destination token: {token:?}");
        Ok(())
    }

    fn update_requested_amount(&mut self, amount: f64) -> Result<()> {
        println!("  Requested amount: {amount}");
        Ok(())
    }

    fn update_destination_wallet_address(&mut self, address: &str) -> Result<()> {
        println!("  Destination wallet: {address}");
        Ok(())
    }

    fn update_destination_chain_id(&mut self, chain_id: u64) -> Result<()> {
        println!("  Destination chain: {chain_id}");
        Ok(())
    }

    fn update_modules(&mut self, modules: &FundKitModules) -> Result<()> {
        println!("  Modules: {modules:?}");
        Ok(())
    }
}

impl ConsoleWidget {
    fn send(&self, event: WidgetEvent) -> Result<()> {
        self.events
            .send(event)
            .map_err(|e| Error::Widget(e.to_string()))
    }
}

struct PrintCallbacks;

impl DepositCallbacks for PrintCallbacks {
    fn on_complete(&mut self, descriptor: &DestinationContractDescriptor) {
        println!("✅ Deposit into {} completed", descriptor.contract_name);
    }

    fn on_failure(&mut self, error: &Error) {
        println!("❌ Deposit failed: {error}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let apex = ApexOmni::from_env()?;
    let (tx, mut rx) = unbounded_channel();
    let mut widget = ConsoleWidget { events: tx };

    // Any funded wallet works here; the example never signs anything.
    let wallet: AccountIdentifier = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6".parse()?;

    for (symbol, amount) in [("ETH", "0.01"), ("USDC", "20"), ("USDT", "0.0000001")] {
        println!("\n💸 Depositing {amount} {symbol} into Apex Omni");
        let token = TokenDescriptor::find(&APEX_OMNI_TOKENS, symbol)
            .ok_or_else(|| Error::Config(format!("unknown token {symbol}")))?;

        let descriptor = match DepositFlow::new(&mut widget).continue_deposit(
            &apex,
            token,
            amount,
            &wallet,
        ) {
            Ok(descriptor) => descriptor,
            Err(e) => {
                error!("Could not prepare deposit: {e}");
                // The flow closed the widget; drain that event before the next attempt.
                rx.try_recv().ok();
                continue;
            }
        };

        let outcome = settle_deposit(&descriptor, &mut rx, &mut PrintCallbacks).await;
        info!("Outcome: {outcome:?}");
    }

    Ok(())
}
