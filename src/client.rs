use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::time::{sleep, Duration};
use tracing::{debug, warn};

use crate::auth;
use crate::config::Config;
use crate::error::BarError;
use crate::model::{AccountInfo, FxRates, MarketSnapshot, TickerRow, VolatilityRow};

const EXCHANGE_BASE_URL: &str = "https://api.binance.com";
const RATE_BASE_URL: &str = "https://api.fixer.io";

/// Base currency the FX API is queried against.
const BASE_RATE: &str = "USD";

/// Per-request timeout. The host re-invokes us every few seconds, so a hung
/// request must not outlive the refresh cadence by much.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_ATTEMPTS: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// REST client for the exchange and currency-rate APIs.
///
/// Holds one shared `reqwest::Client`; base URLs are swappable so tests can
/// point at a local server.
pub struct BinanceClient {
    http: reqwest::Client,
    exchange_url: String,
    rate_url: String,
}

impl BinanceClient {
    pub fn new() -> Result<Self, BarError> {
        Ok(Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()?,
            exchange_url: EXCHANGE_BASE_URL.to_string(),
            rate_url: RATE_BASE_URL.to_string(),
        })
    }

    /// Same client with custom base URLs.
    pub fn with_base_urls(
        exchange_url: impl Into<String>,
        rate_url: impl Into<String>,
    ) -> Result<Self, BarError> {
        let mut client = Self::new()?;
        client.exchange_url = exchange_url.into();
        client.rate_url = rate_url.into();
        Ok(client)
    }

    /// Full ticker list: current price for every trading pair.
    pub async fn ticker_prices(&self) -> Result<Vec<TickerRow>, BarError> {
        let url = format!("{}/api/v3/ticker/price", self.exchange_url);
        self.get_with_retry(&url).await
    }

    /// 24-hour stats for every trading pair.
    pub async fn day_stats(&self) -> Result<Vec<VolatilityRow>, BarError> {
        let url = format!("{}/api/v3/ticker/24hr", self.exchange_url);
        self.get_with_retry(&url).await
    }

    /// FX rates for the base currency. Only the JPY entry is consumed.
    pub async fn usd_rates(&self) -> Result<FxRates, BarError> {
        let url = format!("{}/latest?base={}", self.rate_url, BASE_RATE);
        self.get_with_retry(&url).await
    }

    /// Signed account-info request.
    ///
    /// Re-signs on every attempt so the timestamp stays fresh across retries.
    pub async fn account(&self, api_key: &str, api_secret: &str) -> Result<AccountInfo, BarError> {
        let mut attempt = 1;
        loop {
            match self.account_once(api_key, api_secret).await {
                Ok(account) => return Ok(account),
                Err(BarError::Network(e)) if attempt < MAX_ATTEMPTS => {
                    warn!("Account request failed (attempt {attempt}/{MAX_ATTEMPTS}): {e}");
                    sleep(RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn account_once(&self, api_key: &str, api_secret: &str) -> Result<AccountInfo, BarError> {
        let query = format!("timestamp={}", auth::timestamp_ms()?);
        let signature = auth::sign_query(api_secret, &query)?;
        let url = format!(
            "{}/api/v3/account?{}&signature={}",
            self.exchange_url, query, signature
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            "X-MBX-APIKEY",
            HeaderValue::from_str(api_key).map_err(|e| BarError::Auth(e.to_string()))?,
        );

        let account = self
            .http
            .get(&url)
            .headers(headers)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(account)
    }

    /// Issues the independent fetches concurrently and waits for all of them.
    ///
    /// Barrier semantics: the pipeline needs every response, so the first
    /// failure aborts the join and the run. The account fetch joins only
    /// when credentials are configured.
    pub async fn fetch_market(&self, config: &Config) -> Result<MarketSnapshot, BarError> {
        let account = async {
            match config.credentials() {
                Some((key, secret)) => self.account(key, secret).await.map(Some),
                None => Ok(None),
            }
        };

        let (ticker, volatility, fx, account) = tokio::try_join!(
            self.ticker_prices(),
            self.day_stats(),
            self.usd_rates(),
            account,
        )?;
        debug!(
            "Fetched {} ticker rows, {} stats rows, {} fx rates",
            ticker.len(),
            volatility.len(),
            fx.rates.len()
        );

        Ok(MarketSnapshot {
            ticker,
            volatility,
            fx,
            account,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        self.http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }

    /// GET with bounded retry and linear backoff. Retries cover the network
    /// stage only; transform failures downstream are never retried.
    async fn get_with_retry<T: DeserializeOwned>(&self, url: &str) -> Result<T, BarError> {
        let mut attempt = 1;
        loop {
            match self.get_json(url).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < MAX_ATTEMPTS => {
                    warn!("Request to {url} failed (attempt {attempt}/{MAX_ATTEMPTS}): {e}");
                    sleep(RETRY_BACKOFF * attempt).await;
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
