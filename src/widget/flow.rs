use std::fmt;

use log::{error, info, warn};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{await_outcome, DepositOutcome, FundingWidget, WidgetEvent};
use crate::address::{AccountIdentifier, AddressCodec};
use crate::config::SupportedChainId;
use crate::deposit::{parse_amount, DepositRequestBuilder, DestinationContractDescriptor};
use crate::prelude::Result;
use crate::targets::DepositTarget;
use crate::token::TokenDescriptor;
use crate::Error;

/// Receives the settled result of a deposit the widget was opened for.
pub trait DepositCallbacks {
    fn on_complete(&mut self, descriptor: &DestinationContractDescriptor);

    fn on_failure(&mut self, error: &Error);
}

/// Drives one widget instance through deposit attempts.
///
/// The widget is created once per session and borrowed here, so every attempt reuses it.
pub struct DepositFlow<'w, W: FundingWidget + ?Sized> {
    widget: &'w mut W,
    codec: AddressCodec,
}

impl<W: FundingWidget + ?Sized> fmt::Debug for DepositFlow<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DepositFlow")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl<'w, W: FundingWidget + ?Sized> DepositFlow<'w, W> {
    pub fn new(widget: &'w mut W) -> Self {
        Self {
            widget,
            codec: AddressCodec::injective(),
        }
    }

    /// Handles "Continue": builds the deposit call, hands it to the widget and opens it.
    ///
    /// On failure the widget is closed and the error returned, so the attempt can be retried
    /// with corrected input.
    pub fn continue_deposit<T: DepositTarget + ?Sized>(
        &mut self,
        target: &T,
        token: &TokenDescriptor,
        amount: &str,
        recipient: &AccountIdentifier,
    ) -> Result<DestinationContractDescriptor> {
        let result = self.open_with(target, token, amount, |builder| {
            let call = builder.build_erc20_deposit(token, amount, recipient)?;
            Ok(builder.destination_contract(call))
        });
        self.close_on_error(result)
    }

    /// Like [`Self::continue_deposit`] but leaves the amount for the widget to fill into the
    /// calldata after routing.
    pub fn continue_templated_deposit<T: DepositTarget + ?Sized>(
        &mut self,
        target: &T,
        token: &TokenDescriptor,
        amount: &str,
        recipient: &AccountIdentifier,
    ) -> Result<DestinationContractDescriptor> {
        let result = self.open_with(target, token, amount, |builder| {
            let template = builder.build_templated_deposit(token, recipient)?;
            Ok(builder.templated_destination_contract(template))
        });
        self.close_on_error(result)
    }

    /// Points the widget at a plain wallet destination for a centralized exchange withdrawal.
    ///
    /// `destination` must be a valid `inj` address. When it is `None` the connected wallet's
    /// own Injective account is used.
    pub fn prepare_cex_withdrawal(
        &mut self,
        token: &TokenDescriptor,
        amount: &str,
        connected_wallet: &AccountIdentifier,
        destination: Option<&str>,
        chain: SupportedChainId,
    ) -> Result<AccountIdentifier> {
        let destination = match destination {
            Some(address) => AccountIdentifier::Bech32(self.codec.decode(address)?),
            None => connected_wallet.to_bech32(),
        };
        let amount_value = requested_amount(amount, token)?;

        self.widget.update_requested_amount(amount_value)?;
        self.widget
            .update_destination_token(token.widget_token_address())?;
        self.widget.update_destination_chain_id(chain.chain_id())?;
        self.widget
            .update_destination_wallet_address(&destination.to_string())?;
        self.widget.open_modal()?;

        info!("Opened exchange withdrawal of {amount} {} to {destination}", token.symbol);
        Ok(destination)
    }

    fn open_with<T, F>(
        &mut self,
        target: &T,
        token: &TokenDescriptor,
        amount: &str,
        build: F,
    ) -> Result<DestinationContractDescriptor>
    where
        T: DepositTarget + ?Sized,
        F: FnOnce(&DepositRequestBuilder<'_, T>) -> Result<DestinationContractDescriptor>,
    {
        let builder = DepositRequestBuilder::new(target);
        let descriptor = build(&builder)?;
        let amount_value = requested_amount(amount, token)?;

        self.widget.update_requested_amount(amount_value)?;
        self.widget
            .update_destination_token(token.widget_token_address())?;
        if let Some(modules) = target.module_overrides(token) {
            self.widget.update_modules(&modules)?;
        }
        self.widget.update_destination_contract(&descriptor)?;
        self.widget.open_modal()?;

        info!(
            "Opened widget for {} {} into {}",
            amount,
            token.symbol,
            target.contract_name()
        );
        Ok(descriptor)
    }

    fn close_on_error(
        &mut self,
        result: Result<DestinationContractDescriptor>,
    ) -> Result<DestinationContractDescriptor> {
        if let Err(e) = &result {
            error!("Error preparing deposit: {e}");
            if let Err(close_error) = self.widget.close() {
                warn!("Failed to close widget: {close_error}");
            }
        }
        result
    }
}

/// Waits for the widget to settle an attempt opened for `descriptor` and reports it through
/// `callbacks`.
pub async fn settle_deposit<C: DepositCallbacks + ?Sized>(
    descriptor: &DestinationContractDescriptor,
    events: &mut UnboundedReceiver<WidgetEvent>,
    callbacks: &mut C,
) -> DepositOutcome {
    let outcome = await_outcome(events).await;
    match &outcome {
        DepositOutcome::Completed(_) => callbacks.on_complete(descriptor),
        DepositOutcome::Failed(data) => {
            callbacks.on_failure(&Error::Widget(format!("transaction failed: {data}")))
        }
        DepositOutcome::Dismissed => info!("{} dismissed", descriptor.contract_name),
    }
    outcome
}

/// The widget takes the requested amount as a plain number in whole token units.
fn requested_amount(amount: &str, token: &TokenDescriptor) -> Result<f64> {
    parse_amount(amount, token.decimals)?;
    amount
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::AmountParseError(format!("{amount:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_amount() {
        let token = TokenDescriptor::native("ETH", vec![]);

        assert_eq!(requested_amount("0.01", &token).unwrap(), 0.01);
        assert_eq!(requested_amount("20", &token).unwrap(), 20.0);
        assert!(requested_amount("1e3", &token).is_err());
        assert!(requested_amount("", &token).is_err());
    }

    struct SilentWidget;

    impl FundingWidget for SilentWidget {
        fn open_modal(&mut self) -> Result<()> {
            Ok(())
        }

        fn close(&mut self) -> Result<()> {
            Ok(())
        }

        fn update_destination_contract(&mut self, _: &DestinationContractDescriptor) -> Result<()> {
            Ok(())
        }

        fn update_destination_token(&mut self, _: ethers::types::Address) -> Result<()> {
            Ok(())
        }

        fn update_requested_amount(&mut self, _: f64) -> Result<()> {
            Ok(())
        }

        fn update_destination_wallet_address(&mut self, _: &str) -> Result<()> {
            Ok(())
        }

        fn update_destination_chain_id(&mut self, _: u64) -> Result<()> {
            Ok(())
        }

        fn update_modules(&mut self, _: &crate::config::FundKitModules) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_debug_without_widget_debug() {
        let mut widget = SilentWidget;
        let flow = DepositFlow::new(&mut widget);

        let rendered = format!("{flow:?}");
        assert!(rendered.starts_with("DepositFlow"), "{rendered}");
        assert!(rendered.contains("codec"), "{rendered}");
    }
}
