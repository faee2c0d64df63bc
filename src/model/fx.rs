use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::BarError;

/// Response of the currency-rate API (`?base=USD`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FxRates {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

impl FxRates {
    /// Rate for one currency code, or `DataUnavailable` when the API
    /// did not include it.
    pub fn rate(&self, currency: &str) -> Result<f64, BarError> {
        self.rates
            .get(currency)
            .copied()
            .ok_or(BarError::DataUnavailable("JPY exchange rate"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_lookup() {
        let raw = r#"{"base":"USD","rates":{"JPY":110.0,"EUR":0.9}}"#;
        let fx: FxRates = serde_json::from_str(raw).unwrap();
        assert_eq!(fx.rate("JPY").unwrap(), 110.0);
    }

    #[test]
    fn test_missing_rate_is_unavailable() {
        let fx = FxRates {
            base: "USD".to_string(),
            rates: HashMap::new(),
        };
        assert!(matches!(
            fx.rate("JPY"),
            Err(BarError::DataUnavailable(_))
        ));
    }
}
