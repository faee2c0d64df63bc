use std::collections::HashMap;

use crate::error::BarError;
use crate::model::{MergedCoin, TickerRow, VolatilityRow};

// Longest suffix first, so "BTCUSDT" strips to "BTC" and not "BTCUSD" + "T".
const QUOTE_SUFFIXES: [&str; 2] = ["USDT", "BTC"];

/// Joins converted ticker rows with 24h stats by exact symbol.
///
/// Volatility rows are indexed by symbol up front, so the join is O(n+m).
/// Ticker rows without a stats entry are dropped; a malformed percent string
/// aborts the run with a parse error.
pub fn merge_coins(
    ticker: &[TickerRow],
    volatility: &[VolatilityRow],
) -> Result<Vec<MergedCoin>, BarError> {
    let by_symbol: HashMap<&str, &VolatilityRow> = volatility
        .iter()
        .map(|row| (row.symbol.as_str(), row))
        .collect();

    let mut coins = Vec::with_capacity(ticker.len());
    for row in ticker {
        let Some(stats) = by_symbol.get(row.symbol.as_str()) else {
            continue;
        };
        let percent = stats
            .price_change_percent
            .trim()
            .parse::<f64>()
            .map_err(|_| BarError::Parse {
                field: "priceChangePercent",
                value: stats.price_change_percent.clone(),
            })?;
        coins.push(MergedCoin {
            symbol: display_symbol(&row.symbol),
            price: row.price,
            price_change_percent: percent,
        });
    }
    Ok(coins)
}

/// Strips the quote-currency suffix for display.
///
/// A strip that would leave an empty label keeps the pair symbol instead, so
/// a hypothetical "BTC" or "USDT" row never renders as "[]".
fn display_symbol(symbol: &str) -> String {
    for suffix in QUOTE_SUFFIXES {
        if let Some(base) = symbol.strip_suffix(suffix) {
            if !base.is_empty() {
                return base.to_string();
            }
        }
    }
    symbol.to_string()
}
