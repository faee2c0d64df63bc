//! The transform chain: filter, currency conversion, merge, rank, format.
//!
//! Every stage is a pure single-pass function over in-memory rows. The only
//! fallible stages are the anchor/FX lookups and the percent parse in the
//! merge; everything downstream assumes well-formed input.

pub mod convert;
pub mod filter;
pub mod format;
pub mod merge;
pub mod rank;

use crate::error::BarError;
use crate::model::{MarketSnapshot, MergedCoin};

/// Quote suffix selecting which pairs we display.
pub const QUOTE_SUFFIX: &str = "BTC";

/// The BTC/USD ticker entry used to rescale BTC-quoted prices into USD.
pub const ANCHOR_SYMBOL: &str = "BTCUSDT";

/// Runs filter, conversion and merge over one fetched snapshot.
///
/// Output order follows the ticker list; ranking is left to the caller since
/// the two output variants order the rows differently.
pub fn merged_coins(snapshot: &MarketSnapshot) -> Result<Vec<MergedCoin>, BarError> {
    let yen_per_usd = snapshot.fx.rate("JPY")?;
    let anchor_price = snapshot
        .ticker
        .iter()
        .find(|row| row.symbol == ANCHOR_SYMBOL)
        .map(|row| row.price)
        .ok_or(BarError::DataUnavailable("BTC/USD anchor row"))?;

    let pairs = filter::btc_pairs(&snapshot.ticker, QUOTE_SUFFIX, Some(ANCHOR_SYMBOL));
    let converted = convert::to_local_currency(&pairs, ANCHOR_SYMBOL, anchor_price, yen_per_usd);
    merge::merge_coins(&converted, &snapshot.volatility)
}
