//! Checkout: validate, summarise, hand off, clear.

use pantry_cache::KvStore;
use serde::Serialize;
use tracing::{info, warn};

use crate::cart::CartStore;
use crate::checkout::{CustomerDetails, DeepLink, OrderHandoff, OrderMessage, OrderSummary};
use crate::settings::CheckoutSettings;
use crate::CommerceError;

/// What was handed off for a submitted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReceipt {
    pub customer: CustomerDetails,
    pub summary: OrderSummary,
    pub message: OrderMessage,
    pub link: DeepLink,
}

/// Turns the cart and the order form into a messaging handoff.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    settings: CheckoutSettings,
}

impl Checkout {
    pub fn new(settings: CheckoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CheckoutSettings {
        &self.settings
    }

    /// Validate the form and build the receipt without touching the cart.
    pub fn prepare<S: KvStore>(
        &self,
        store: &CartStore<S>,
        details: &CustomerDetails,
    ) -> Result<OrderReceipt, CommerceError> {
        details.validate()?;

        if store.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let summary = OrderSummary::from_cart(store.cart())?;
        let message = OrderMessage::render(details, &summary, &self.settings);
        let link = DeepLink::whatsapp(&self.settings.whatsapp_number, &message.text);

        Ok(OrderReceipt {
            customer: details.clone(),
            summary,
            message,
            link,
        })
    }

    /// Submit an order.
    ///
    /// On a validation failure or an empty cart nothing is handed off and
    /// the cart is untouched. Once `handoff` accepts the link the order is
    /// placed and the receipt is returned, even if clearing the stored cart
    /// then fails; whether the shop ever sees the message is not tracked.
    pub fn submit<S, H>(
        &self,
        store: &mut CartStore<S>,
        details: &CustomerDetails,
        handoff: &mut H,
    ) -> Result<OrderReceipt, CommerceError>
    where
        S: KvStore,
        H: OrderHandoff + ?Sized,
    {
        let receipt = self.prepare(store, details).inspect_err(|e| {
            warn!(error = %e, "order rejected");
        })?;

        handoff.deliver(&receipt.link)?;
        if let Err(e) = store.clear() {
            warn!(error = %e, "order handed off but the cart could not be cleared");
        }

        info!(
            lines = receipt.summary.lines.len(),
            total = receipt.summary.total.amount(),
            "order handed off"
        );
        Ok(receipt)
    }
}
