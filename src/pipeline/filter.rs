use crate::model::TickerRow;

/// Selects the pairs quoted in `quote_suffix`, plus the anchor row when given.
///
/// Returns a subsequence of the input in its original order; nothing is
/// mutated.
pub fn btc_pairs(ticker: &[TickerRow], quote_suffix: &str, anchor: Option<&str>) -> Vec<TickerRow> {
    ticker
        .iter()
        .filter(|row| {
            row.symbol.ends_with(quote_suffix) || anchor.is_some_and(|a| row.symbol == a)
        })
        .cloned()
        .collect()
}
