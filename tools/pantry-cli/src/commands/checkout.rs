//! Order checkout.

use anyhow::Result;
use pantry_commerce::checkout::{Checkout, CustomerDetails, DeepLink, DeliveryTiming};
use pantry_commerce::CommerceError;

use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
///
/// The terminal has no messaging app to open, so the handoff prints the deep
/// link; once printed the order counts as handed off and the cart is cleared.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.cart()?;
    let details = CustomerDetails::new(
        &args.name,
        &args.phone,
        &args.address,
        DeliveryTiming::from_form(&args.timing, &args.custom_time),
    );

    let json = ctx.output.is_json();
    let mut print_link = |link: &DeepLink| -> Result<(), CommerceError> {
        if !json {
            println!("{}", link.as_str());
        }
        Ok(())
    };

    let checkout = Checkout::new(ctx.config.checkout.clone());
    let receipt = checkout.submit(&mut store, &details, &mut print_link)?;

    if json {
        ctx.output.json(&receipt);
        return Ok(());
    }

    ctx.output.header("Order Summary");
    ctx.output.block(&receipt.summary.render());
    ctx.output.info("");
    ctx.output.success("Order sent to WhatsApp! We'll confirm your order shortly.");

    Ok(())
}
