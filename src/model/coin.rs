/// A ticker row joined with its 24h stats, price already in local currency.
///
/// `symbol` has the quote suffix stripped ("ETHBTC" becomes "ETH"); the BTC
/// anchor row keeps "BTC" as its label. Lives only within a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedCoin {
    pub symbol: String,
    pub price: f64,
    pub price_change_percent: f64,
}
