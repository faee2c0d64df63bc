use crate::model::TickerRow;

/// Rescales filtered rows into the local currency.
///
/// The anchor row is already USD-denominated, so it only picks up the FX
/// rate. Every other row is quoted in BTC and goes through the anchor price
/// first. Returns new rows; the input is untouched.
pub fn to_local_currency(
    rows: &[TickerRow],
    anchor_symbol: &str,
    anchor_price: f64,
    fx_rate: f64,
) -> Vec<TickerRow> {
    rows.iter()
        .map(|row| {
            let price = if row.symbol == anchor_symbol {
                row.price * fx_rate
            } else {
                row.price * anchor_price * fx_rate
            };
            TickerRow {
                symbol: row.symbol.clone(),
                price,
            }
        })
        .collect()
}
