use crate::model::MergedCoin;

/// How many coins the top/bottom sections show.
const RANKED_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Symbol,
    PercentChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Stable sort over a copy of the coins.
///
/// Symbols compare case-insensitively; percents compare numerically with a
/// total order, so the result is deterministic for any input. Ties keep
/// their original relative order.
pub fn sorted(coins: &[MergedCoin], key: SortKey, direction: Direction) -> Vec<MergedCoin> {
    let mut sorted: Vec<MergedCoin> = coins.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Symbol => a
                .symbol
                .to_uppercase()
                .cmp(&b.symbol.to_uppercase()),
            SortKey::PercentChange => a
                .price_change_percent
                .total_cmp(&b.price_change_percent),
        };
        match direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Five best performers by 24h change (fewer when the input is smaller).
pub fn top5(coins: &[MergedCoin]) -> Vec<MergedCoin> {
    let mut ranked = sorted(coins, SortKey::PercentChange, Direction::Descending);
    ranked.truncate(RANKED_COUNT);
    ranked
}

/// Five worst performers by 24h change.
pub fn bottom5(coins: &[MergedCoin]) -> Vec<MergedCoin> {
    let mut ranked = sorted(coins, SortKey::PercentChange, Direction::Ascending);
    ranked.truncate(RANKED_COUNT);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(symbol: &str, percent: f64) -> MergedCoin {
        MergedCoin {
            symbol: symbol.to_string(),
            price: 1.0,
            price_change_percent: percent,
        }
    }

    #[test]
    fn test_symbol_sort_is_case_insensitive() {
        let coins = vec![coin("eth", 0.0), coin("ADA", 0.0), coin("Eos", 0.0)];
        let sorted = sorted(&coins, SortKey::Symbol, Direction::Ascending);
        let symbols: Vec<_> = sorted.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, ["ADA", "Eos", "eth"]);
    }

    #[test]
    fn test_percent_sort_descending() {
        let coins = vec![coin("A", -1.0), coin("B", 5.0), coin("C", 2.0)];
        let sorted = sorted(&coins, SortKey::PercentChange, Direction::Descending);
        let symbols: Vec<_> = sorted.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(symbols, ["B", "C", "A"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let coins = vec![coin("A", 1.0), coin("B", 1.0), coin("C", 1.0)];
        let ascending = sorted(&coins, SortKey::PercentChange, Direction::Ascending);
        let descending = sorted(&coins, SortKey::PercentChange, Direction::Descending);
        let asc: Vec<_> = ascending.iter().map(|c| c.symbol.as_str()).collect();
        let desc: Vec<_> = descending.iter().map(|c| c.symbol.as_str()).collect();
        assert_eq!(asc, ["A", "B", "C"]);
        assert_eq!(desc, ["A", "B", "C"]);
    }

    #[test]
    fn test_top5_and_bottom5_split_distinct_changes() {
        let coins: Vec<MergedCoin> = (0..12)
            .map(|i| coin(&format!("C{i}"), i as f64))
            .collect();
        let top = top5(&coins);
        let bottom = bottom5(&coins);
        assert_eq!(top.len(), 5);
        assert_eq!(bottom.len(), 5);
        assert_eq!(top[0].symbol, "C11");
        assert_eq!(bottom[0].symbol, "C0");
        // Distinct percents over a large enough input: no overlap.
        for t in &top {
            assert!(bottom.iter().all(|b| b.symbol != t.symbol));
        }
    }

    #[test]
    fn test_small_inputs_rank_short() {
        let coins = vec![coin("A", 1.0), coin("B", -1.0)];
        assert_eq!(top5(&coins).len(), 2);
        assert_eq!(bottom5(&coins).len(), 2);
    }
}
