//! Checkout module.
//!
//! Contains customer details and their validation, the order summary and
//! message, and the handoff of that message to an external messaging link.

mod customer;
mod flow;
mod handoff;
mod order;

pub use customer::{CheckoutError, CustomerDetails, DeliveryTiming};
pub use flow::{Checkout, OrderReceipt};
pub use handoff::{DeepLink, OrderHandoff};
pub use order::{OrderLine, OrderMessage, OrderSummary};
