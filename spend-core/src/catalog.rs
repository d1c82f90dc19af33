//! The fixed price list shown on the purchase menu.

use std::fmt::Write;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Menu number of the item that requires [`TESLA_MODEL_Y`] to be bought first.
pub const FSD_SOFTWARE: u32 = 15;
pub const TESLA_MODEL_Y: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Item {
    /// 1-based position on the menu.
    pub number: u32,
    pub name: &'static str,
    pub price: Decimal,
}

const fn item(
    number: u32,
    name: &'static str,
    price: Decimal,
) -> Item {
    Item {
        number,
        name,
        price,
    }
}

pub const CATALOG: [Item; 19] = [
    item(1, "Apples", dec!(1)),
    item(2, "Candies", dec!(2)),
    item(3, "Kessel Lunch", dec!(10)),
    item(4, "Steam Gaming Gift Cards", dec!(20)),
    item(5, "Palworld copy", dec!(25)),
    item(6, "Stocks", dec!(50)),
    item(7, "Donate to Charity", dec!(100)),
    item(8, "Expensive Dinner", dec!(500)),
    item(9, "iPhone X", dec!(1000)),
    item(10, "iPhone 15 Pro Max", dec!(1500)),
    item(11, "Samsung Galaxy ZFold", dec!(2000)),
    item(12, "Gaming Beast", dec!(5000)),
    item(13, "80000 Robux", dec!(10000)),
    item(14, "Used Subaru Forester", dec!(12500)),
    item(FSD_SOFTWARE, "FSD Software", dec!(15000)),
    item(TESLA_MODEL_Y, "Tesla Model Y", dec!(50000)),
    item(17, "Maybach", dec!(250000)),
    item(18, "New home", dec!(800000)),
    item(19, "Mansion", dec!(5000000)),
];

/// Looks up an item by its menu number.
pub fn find(number: u32) -> Option<&'static Item> {
    CATALOG.iter().find(|item| item.number == number)
}

/// Price of the least expensive item on the menu.
pub fn cheapest_price() -> Decimal {
    CATALOG
        .iter()
        .map(|item| item.price)
        .min()
        .unwrap_or(Decimal::ZERO)
}

/// Menu text, one `N. Name ($price)` line per item.
pub fn menu() -> String {
    let mut out = String::new();
    for item in &CATALOG {
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}. {} (${})", item.number, item.name, item.price);
    }
    out
}
