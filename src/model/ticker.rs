use serde::{Deserialize, Deserializer, Serialize};

// Binance quotes prices as decimal strings ("0.05000000"). We want f64s
// downstream, so deserialize through a string field.
fn price_from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse::<f64>().map_err(serde::de::Error::custom)
}

/// One row of the full ticker list (`/api/v3/ticker/price`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TickerRow {
    pub symbol: String,
    #[serde(deserialize_with = "price_from_str")]
    pub price: f64,
}

/// One row of the 24-hour stats list (`/api/v3/ticker/24hr`).
///
/// The percent change stays a wire string here; the merge stage parses it so
/// a malformed value surfaces as a `Parse` error with the offending symbol.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VolatilityRow {
    pub symbol: String,
    pub price_change_percent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_row_parses_price_string() {
        let row: TickerRow =
            serde_json::from_str(r#"{"symbol":"ETHBTC","price":"0.05000000"}"#).unwrap();
        assert_eq!(row.symbol, "ETHBTC");
        assert_eq!(row.price, 0.05);
    }

    #[test]
    fn test_ticker_row_rejects_malformed_price() {
        let result: Result<TickerRow, _> =
            serde_json::from_str(r#"{"symbol":"ETHBTC","price":"abc"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_volatility_row_keeps_percent_as_string() {
        let raw = r#"{"symbol":"ETHBTC","priceChangePercent":"3.200","lastPrice":"0.05"}"#;
        let row: VolatilityRow = serde_json::from_str(raw).unwrap();
        assert_eq!(row.price_change_percent, "3.200");
    }
}
