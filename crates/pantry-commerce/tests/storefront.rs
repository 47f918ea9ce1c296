//! End-to-end behaviour of the cart store, theme store and checkout against
//! shared storage.

use pantry_cache::{FileStore, KvStore, MemoryStore};
use pantry_commerce::prelude::*;

fn mango(weight: &str, price: i64, quantity: u32) -> LineItem {
    LineItem::new("Mango Pickle", ProductType::Pickle, weight, Money::new(price), quantity)
}

fn chapathi(quantity: u32) -> LineItem {
    LineItem::single("Plain Chapathi", ProductType::Chapathi, Money::new(10), quantity)
}

fn idli_podi(quantity: u32) -> LineItem {
    LineItem::single("Idli Podi", ProductType::Powder, Money::new(400), quantity)
}

fn open(store: MemoryStore) -> CartStore<MemoryStore> {
    CartStore::open(store, CartSettings::default())
}

fn customer(name: &str) -> CustomerDetails {
    CustomerDetails::new(
        name,
        "9848022338",
        "12 Temple St, Vijayawada",
        DeliveryTiming::Slot("Morning (9 AM - 12 PM)".to_string()),
    )
}

#[test]
fn test_adding_same_variant_merges_quantities() {
    let mut cart = open(MemoryStore::new());
    cart.add(mango("250gm", 150, 2)).unwrap();
    cart.add(mango("250gm", 150, 3)).unwrap();

    assert_eq!(cart.items().len(), 1);
    assert_eq!(cart.quantity_of(&LineItemId::for_variant("Mango Pickle", "250gm")), 5);
}

#[test]
fn test_replacing_variant_overwrites_quantity() {
    let mut cart = open(MemoryStore::new());
    cart.add(mango("250gm", 150, 4)).unwrap();
    cart.replace_variant(mango("250gm", 150, 1)).unwrap();

    assert_eq!(cart.total_item_count(), 1);
}

#[test]
fn test_removing_twice_is_harmless() {
    let mut cart = open(MemoryStore::new());
    cart.add(mango("250gm", 150, 1)).unwrap();
    cart.add(idli_podi(1)).unwrap();

    let id = LineItemId::for_variant("Mango Pickle", "250gm");
    cart.remove(&id).unwrap();
    let after_first = cart.cart().clone();
    cart.remove(&id).unwrap();

    assert_eq!(cart.cart(), &after_first);
    assert_eq!(cart.items().len(), 1);
}

#[test]
fn test_chapathi_minimum_on_single_quantity_controls() {
    let mut cart = open(MemoryStore::new());
    let template = chapathi(1);

    let change = cart.increase(&template).unwrap();
    assert_eq!(change.quantity, 5);
    assert!(change.minimum_applied);

    let change = cart.set_single_quantity(&template, 3).unwrap();
    assert_eq!(change.quantity, 5);

    let change = cart.set_single_quantity(&template, 7).unwrap();
    assert_eq!(change.quantity, 7);
    assert!(!change.minimum_applied);

    cart.set_single_quantity(&template, 5).unwrap();
    let change = cart.decrease(&template.id).unwrap().unwrap();
    assert!(change.removed());
    assert!(cart.is_empty());
}

#[test]
fn test_other_categories_have_no_minimum() {
    let mut cart = open(MemoryStore::new());
    let change = cart.increase(&idli_podi(1)).unwrap();

    assert_eq!(change.quantity, 1);
    assert!(!change.minimum_applied);
}

#[test]
fn test_totals_sum_every_line() {
    let mut cart = open(MemoryStore::new());
    cart.add(mango("250gm", 150, 2)).unwrap();
    cart.add(mango("500gm", 280, 1)).unwrap();
    cart.add(chapathi(5)).unwrap();

    assert_eq!(cart.total_item_count(), 8);
    assert_eq!(cart.total_price().unwrap(), Money::new(630));

    let view = CartView::of(cart.cart()).unwrap();
    assert_eq!(view.lines.len(), 3);
    assert_eq!(view.subtotal, Money::new(630));
}

#[test]
fn test_cart_survives_reopen_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let mut cart = CartStore::open(FileStore::open(&path).unwrap(), CartSettings::default());
        cart.add(mango("250gm", 150, 2)).unwrap();
        cart.add(chapathi(5)).unwrap();
        cart.add(idli_podi(1)).unwrap();
    }

    let cart = CartStore::open(FileStore::open(&path).unwrap(), CartSettings::default());
    assert_eq!(cart.items().len(), 3);
    assert_eq!(cart.items()[0].id.as_str(), "Mango Pickle_250gm");
    assert_eq!(cart.items()[1].quantity, 5);
    assert_eq!(cart.total_price().unwrap(), Money::new(750));
}

#[test]
fn test_malformed_storage_starts_empty() {
    let store = MemoryStore::with_entries([("brahmin_cart", "{not json")]);
    let mut cart = open(store.clone());
    assert!(cart.is_empty());

    cart.add(idli_podi(1)).unwrap();
    assert!(store.get("brahmin_cart").unwrap().is_some());
}

#[test]
fn test_theme_and_cart_share_storage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut cart = CartStore::open(FileStore::open(&path).unwrap(), CartSettings::default());
    let theme = ThemeStore::open(FileStore::open(&path).unwrap(), ThemeSettings::default());

    cart.add(chapathi(5)).unwrap();
    assert_eq!(theme.toggle().unwrap(), Theme::Light);
    cart.add(idli_podi(1)).unwrap();

    let reopened = CartStore::open(FileStore::open(&path).unwrap(), CartSettings::default());
    let theme = ThemeStore::open(FileStore::open(&path).unwrap(), ThemeSettings::default());
    assert_eq!(reopened.total_item_count(), 6);
    assert_eq!(theme.current(), Theme::Light);
}

#[test]
fn test_checkout_with_blank_name_keeps_cart() {
    let mut cart = open(MemoryStore::new());
    cart.add(mango("250gm", 150, 2)).unwrap();

    let mut delivered = 0;
    let mut handoff = |_: &DeepLink| -> Result<(), CommerceError> {
        delivered += 1;
        Ok(())
    };
    let err = Checkout::default()
        .submit(&mut cart, &customer("   "), &mut handoff)
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Please fill in all required fields (Name, Phone, Address)"
    );
    assert_eq!(delivered, 0);
    assert_eq!(cart.total_item_count(), 2);
}

#[test]
fn test_checkout_hands_off_and_empties_cart() {
    let store = MemoryStore::new();
    let mut cart = open(store.clone());
    cart.add(mango("250gm", 150, 2)).unwrap();
    cart.add(chapathi(5)).unwrap();

    let mut links = Vec::new();
    let mut handoff = |link: &DeepLink| -> Result<(), CommerceError> {
        links.push(link.url.clone());
        Ok(())
    };
    let receipt = Checkout::default()
        .submit(&mut cart, &customer("Lakshmi"), &mut handoff)
        .unwrap();

    assert!(cart.is_empty());
    assert!(open(store).is_empty());
    assert_eq!(receipt.summary.total, Money::new(350));
    assert!(receipt.message.text.contains("1. Mango Pickle x 2 = \u{20b9}300"));
    assert!(receipt.message.text.contains("Total Amount: \u{20b9}350"));
    assert_eq!(links.len(), 1);
    assert!(links[0].starts_with("https://wa.me/919182002644?text="));
}
