//! Order summary and the order message text.

use serde::Serialize;

use crate::cart::Cart;
use crate::checkout::CustomerDetails;
use crate::money::Money;
use crate::settings::CheckoutSettings;
use crate::CommerceError;

/// One numbered line of the order summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    /// 1-based position in the cart.
    pub position: usize,
    pub name: String,
    pub weight: String,
    pub quantity: u32,
    pub line_total: Money,
}

/// Numbered cart lines plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total: Money,
}

impl OrderSummary {
    pub fn from_cart(cart: &Cart) -> Result<Self, CommerceError> {
        let lines = cart
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                Ok(OrderLine {
                    position: index + 1,
                    name: item.name.clone(),
                    weight: item.weight.clone(),
                    quantity: item.quantity,
                    line_total: item.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        Ok(Self {
            lines,
            total: cart.total_price()?,
        })
    }

    /// `"1. Name x 2 = ₹300"` per line, then a blank line and the total.
    pub fn render(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(&format!(
                "{}. {} x {} = {}\n",
                line.position, line.name, line.quantity, line.line_total
            ));
        }
        text.push_str(&format!("\nTotal Amount: {}", self.total));
        text
    }
}

/// The human-readable order handed to the messaging service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderMessage {
    pub text: String,
}

impl OrderMessage {
    pub fn render(
        details: &CustomerDetails,
        summary: &OrderSummary,
        settings: &CheckoutSettings,
    ) -> Self {
        let rule = "\u{2501}".repeat(21);
        let text = format!(
            "\u{1f6d2} *NEW ORDER - {shop_upper}*\n\
             \n\
             \u{1f4dd} *ORDER DETAILS:*\n\
             1\u{fe0f}\u{20e3} *Name:* {name}\n\
             2\u{fe0f}\u{20e3} *Phone Number:* {phone}\n\
             3\u{fe0f}\u{20e3} *Address:* {address}\n\
             4\u{fe0f}\u{20e3} *Order:*\n\
             {summary}\n\
             5\u{fe0f}\u{20e3} *Timing:* {timing}\n\
             \n\
             \u{1f4cb} *ORDER RECEIPT*\n\
             {rule}\n\
             *{shop}*\n\
             \"{tagline}\"\n\
             {rule}\n\
             \n\
             \u{23f0} *Please confirm this order within {minutes} minutes*\n\
             \n\
             Thank you for choosing us! \u{1f64f}",
            shop_upper = settings.shop_name.to_uppercase(),
            name = details.name,
            phone = details.phone,
            address = details.address,
            summary = summary.render(),
            timing = details.timing.describe(),
            rule = rule,
            shop = settings.shop_name,
            tagline = settings.tagline,
            minutes = settings.confirm_within_minutes,
        );
        Self { text }
    }
}
