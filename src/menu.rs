//! BitBar/xbar plugin-text output.
//!
//! The host reads the dropdown as plain lines: `---` is a separator, and a
//! row's color/href ride after a `|` as `key=value` parameters.

use std::fmt::Write;

use crate::config::Palette;
use crate::model::MergedCoin;
use crate::pipeline::format::{display_row, DisplayRow};
use crate::pipeline::rank::{self, Direction, SortKey};

const MENU_TITLE: &str = "Binance Prices";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Text(String),
    Separator,
    Row(DisplayRow),
}

/// Title plus every coin in fetch order. The fast-refresh variant.
pub fn flat_menu(coins: &[MergedCoin], palette: &Palette) -> Vec<Item> {
    let mut items = vec![Item::Text(MENU_TITLE.to_string()), Item::Separator];
    items.extend(coins.iter().map(|c| Item::Row(display_row(c, palette))));
    items
}

/// Top-5 / bottom-5 / all-coins sections. The slow-refresh variant.
pub fn ranked_menu(coins: &[MergedCoin], palette: &Palette) -> Vec<Item> {
    let mut items = vec![Item::Text(MENU_TITLE.to_string()), Item::Separator];

    items.push(Item::Text("TOP 5".to_string()));
    items.extend(
        rank::top5(coins)
            .iter()
            .map(|c| Item::Row(display_row(c, palette))),
    );

    items.push(Item::Separator);
    items.push(Item::Text("BOTTOM 5".to_string()));
    items.extend(
        rank::bottom5(coins)
            .iter()
            .map(|c| Item::Row(display_row(c, palette))),
    );

    items.push(Item::Separator);
    items.push(Item::Text("ALL COINS".to_string()));
    items.extend(
        rank::sorted(coins, SortKey::Symbol, Direction::Ascending)
            .iter()
            .map(|c| Item::Row(display_row(c, palette))),
    );

    items
}

/// Single user-visible row shown when any fetch or transform fails.
pub fn error_menu() -> Vec<Item> {
    vec![
        Item::Text(MENU_TITLE.to_string()),
        Item::Separator,
        Item::Text("price data unavailable".to_string()),
    ]
}

/// Renders items into the plugin text handed to the host.
pub fn render(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        match item {
            Item::Text(text) => {
                let _ = writeln!(out, "{text}");
            }
            Item::Separator => {
                let _ = writeln!(out, "---");
            }
            Item::Row(row) => {
                let _ = writeln!(out, "{} | color={} href={}", row.text, row.color, row.href);
            }
        }
    }
    out
}
