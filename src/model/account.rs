use serde::{Deserialize, Serialize};

/// Signed account-endpoint response. Fetched when credentials are configured;
/// reserved for a future balance row in the dropdown.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccountInfo {
    #[serde(default)]
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Balance {
    pub asset: String,
    pub free: String,
    pub locked: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_decodes_balances() {
        let raw = r#"{
            "makerCommission": 10,
            "balances": [
                {"asset":"BTC","free":"0.1","locked":"0.0"},
                {"asset":"ETH","free":"2.5","locked":"0.5"}
            ]
        }"#;
        let account: AccountInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(account.balances.len(), 2);
        assert_eq!(account.balances[0].asset, "BTC");
    }
}
