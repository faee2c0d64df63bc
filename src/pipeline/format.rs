use crate::config::Palette;
use crate::model::MergedCoin;

const TRADE_URL: &str = "https://www.binance.com/trade.html";

/// Terminal output of the pipeline: one rendered dropdown line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub text: String,
    pub color: String,
    pub href: String,
}

/// Renders one merged coin. Pure; assumes well-formed input from upstream.
pub fn display_row(coin: &MergedCoin, palette: &Palette) -> DisplayRow {
    let up = coin.price_change_percent >= 0.0;
    let arrow = if up { '↑' } else { '↓' };
    DisplayRow {
        text: format!(
            "[{}] {} ({} {}%)",
            coin.symbol, coin.price, arrow, coin.price_change_percent
        ),
        color: if up {
            palette.up.clone()
        } else {
            palette.down.clone()
        },
        href: trade_url(&coin.symbol),
    }
}

// The BTC anchor trades against USDT; every other displayed coin against BTC.
fn trade_url(symbol: &str) -> String {
    let quote = if symbol == "BTC" { "USDT" } else { "BTC" };
    format!("{TRADE_URL}?symbol={symbol}_{quote}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(symbol: &str, price: f64, percent: f64) -> MergedCoin {
        MergedCoin {
            symbol: symbol.to_string(),
            price,
            price_change_percent: percent,
        }
    }

    #[test]
    fn test_falling_coin_renders_down_arrow_and_color() {
        let palette = Palette::default();
        let row = display_row(&coin("ETH", 500_000.0, -2.5), &palette);
        assert_eq!(row.text, "[ETH] 500000 (↓ -2.5%)");
        assert_eq!(row.color, palette.down);
    }

    #[test]
    fn test_zero_change_counts_as_up() {
        let palette = Palette::default();
        let row = display_row(&coin("ADA", 100.0, 0.0), &palette);
        assert_eq!(row.text, "[ADA] 100 (↑ 0%)");
        assert_eq!(row.color, palette.up);
    }

    #[test]
    fn test_href_targets_the_trade_page() {
        let palette = Palette::default();
        let row = display_row(&coin("ETH", 1.0, 1.0), &palette);
        assert_eq!(
            row.href,
            "https://www.binance.com/trade.html?symbol=ETH_BTC"
        );
    }

    #[test]
    fn test_anchor_href_targets_usdt_market() {
        let palette = Palette::default();
        let row = display_row(&coin("BTC", 1.0, 1.0), &palette);
        assert_eq!(
            row.href,
            "https://www.binance.com/trade.html?symbol=BTC_USDT"
        );
    }
}
