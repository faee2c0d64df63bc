pub mod account;
pub mod coin;
pub mod fx;
pub mod ticker;

pub use account::{AccountInfo, Balance};
pub use coin::MergedCoin;
pub use fx::FxRates;
pub use ticker::{TickerRow, VolatilityRow};

/// Joined result of the concurrent fetch, handed to the transform pipeline.
///
/// Account info is only present when API credentials are configured. It is
/// carried for a future balance row and not rendered today.
#[derive(Debug, Clone)]
pub struct MarketSnapshot {
    pub ticker: Vec<TickerRow>,
    pub volatility: Vec<VolatilityRow>,
    pub fx: FxRates,
    pub account: Option<AccountInfo>,
}
