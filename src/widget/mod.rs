//! The seam to the external funding widget.
//!
//! The widget performs the actual bridging and swapping. This crate only configures it and
//! listens for the outcome it reports.

mod flow;

pub use flow::{settle_deposit, DepositCallbacks, DepositFlow};

use ethers::types::Address;
use log::{debug, info, warn};
use serde_json::Value;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::FundKitModules;
use crate::deposit::DestinationContractDescriptor;
use crate::prelude::Result;

/// Operations the funding widget exposes to the page embedding it.
pub trait FundingWidget {
    fn open_modal(&mut self) -> Result<()>;

    fn close(&mut self) -> Result<()>;

    fn update_destination_contract(
        &mut self,
        descriptor: &DestinationContractDescriptor,
    ) -> Result<()>;

    fn update_destination_token(&mut self, token: Address) -> Result<()>;

    fn update_requested_amount(&mut self, amount: f64) -> Result<()>;

    fn update_destination_wallet_address(&mut self, address: &str) -> Result<()>;

    fn update_destination_chain_id(&mut self, chain_id: u64) -> Result<()>;

    fn update_modules(&mut self, modules: &FundKitModules) -> Result<()>;
}

/// Lifecycle events reported by the widget.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    Opened,
    Closed,
    TransactionSuccess(Value),
    TransactionError(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DepositOutcome {
    Completed(Value),
    Failed(Value),
    /// The user closed the widget, or it went away, before a transaction settled.
    Dismissed,
}

/// Waits for the first event that settles a deposit attempt.
pub async fn await_outcome(events: &mut UnboundedReceiver<WidgetEvent>) -> DepositOutcome {
    while let Some(event) = events.recv().await {
        match event {
            WidgetEvent::Opened => debug!("Widget opened"),
            WidgetEvent::Closed => {
                info!("Widget closed before a transaction settled");
                return DepositOutcome::Dismissed;
            }
            WidgetEvent::TransactionSuccess(data) => {
                info!("Transaction successful: {data}");
                return DepositOutcome::Completed(data);
            }
            WidgetEvent::TransactionError(data) => {
                warn!("Transaction failed: {data}");
                return DepositOutcome::Failed(data);
            }
        }
    }

    warn!("Widget event channel closed");
    DepositOutcome::Dismissed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn test_success_after_open() {
        let (tx, mut rx) = unbounded_channel();
        tx.send(WidgetEvent::Opened).unwrap();
        tx.send(WidgetEvent::TransactionSuccess(json!({ "txHash": "0xabc" })))
            .unwrap();
        tx.send(WidgetEvent::Closed).unwrap();

        assert_eq!(
            await_outcome(&mut rx).await,
            DepositOutcome::Completed(json!({ "txHash": "0xabc" }))
        );
        // The trailing close is left for the next attempt.
        assert_eq!(rx.recv().await, Some(WidgetEvent::Closed));
    }

    #[tokio::test]
    async fn test_error_and_dismissal() {
        let (tx, mut rx) = unbounded_channel();
        tx.send(WidgetEvent::TransactionError(json!("rejected")))
            .unwrap();
        tx.send(WidgetEvent::Closed).unwrap();

        assert_eq!(
            await_outcome(&mut rx).await,
            DepositOutcome::Failed(json!("rejected"))
        );
        assert_eq!(await_outcome(&mut rx).await, DepositOutcome::Dismissed);
    }

    #[tokio::test]
    async fn test_dropped_sender_dismisses() {
        let (tx, mut rx) = unbounded_channel::<WidgetEvent>();
        drop(tx);

        assert_eq!(await_outcome(&mut rx).await, DepositOutcome::Dismissed);
    }
}
