//! Tool for fetching stock price data from Yahoo Finance

use chat_core::Result as AgentResult;
use chat_tools::Tool;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Value, json};
use yahoo_finance_api as yahoo;

use crate::error::{ChatError, Result};

/// Tool for fetching current and recent stock price data
pub struct StockDataTool;

#[derive(Debug, Deserialize)]
struct StockDataParams {
    symbol: String,
    #[serde(default = "default_range")]
    range: String,
}

fn default_range() -> String {
    "1d".to_string()
}

impl StockDataTool {
    /// Create a new stock data tool
    pub fn new() -> Self {
        Self
    }

    /// Fetch the latest quote plus a summary over the requested range
    async fn fetch(&self, params: StockDataParams) -> Result<Value> {
        let symbol = params.symbol.to_uppercase();

        let provider = yahoo::YahooConnector::new()
            .map_err(|e| ChatError::DataError(e.to_string()))?;

        let response = provider
            .get_latest_quotes(&symbol, &params.range)
            .await
            .map_err(|e| ChatError::DataError(format!("{symbol}: {e}")))?;

        let quotes = response
            .quotes()
            .map_err(|e| ChatError::DataError(format!("{symbol}: {e}")))?;

        let latest = response
            .last_quote()
            .map_err(|e| ChatError::DataError(format!("{symbol}: {e}")))?;

        let timestamp = DateTime::from_timestamp(latest.timestamp as i64, 0)
            .unwrap_or_else(Utc::now);

        let mut result = json!({
            "symbol": symbol,
            "current_quote": {
                "timestamp": timestamp.to_rfc3339(),
                "open": latest.open,
                "high": latest.high,
                "low": latest.low,
                "close": latest.close,
                "volume": latest.volume,
                "adjusted_close": latest.adjclose,
                "change_percent": change_percent(latest.open, latest.close),
            }
        });

        // Range summary gives the model context beyond a single candle
        if quotes.len() > 1 {
            result["range_summary"] = json!({
                "range": params.range,
                "data_points": quotes.len(),
                "high": quotes.iter().map(|q| q.high).fold(f64::MIN, f64::max),
                "low": quotes.iter().map(|q| q.low).fold(f64::MAX, f64::min),
                "average_volume": quotes.iter().map(|q| q.volume).sum::<u64>() / quotes.len() as u64,
            });
        }

        Ok(result)
    }
}

impl Default for StockDataTool {
    fn default() -> Self {
        Self::new()
    }
}

fn change_percent(open: f64, close: f64) -> f64 {
    if open == 0.0 {
        0.0
    } else {
        (close - open) / open * 100.0
    }
}

#[async_trait]
impl Tool for StockDataTool {
    async fn execute(&self, params: Value) -> AgentResult<Value> {
        let params: StockDataParams = serde_json::from_value(params).map_err(|e| {
            chat_core::Error::ProcessingFailed(format!("Invalid parameters: {e}"))
        })?;

        self.fetch(params)
            .await
            .map_err(|e| chat_core::Error::ProcessingFailed(e.to_string()))
    }

    fn name(&self) -> &str {
        "stock_data"
    }

    fn description(&self) -> &str {
        "Fetch current stock price data for a given symbol. Returns the \
         latest quote (open, high, low, close, volume) and a summary over \
         the requested range."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "symbol": {
                    "type": "string",
                    "description": "Stock ticker symbol (e.g., 'AAPL', 'TSLA')"
                },
                "range": {
                    "type": "string",
                    "description": "Time range for the quote data",
                    "enum": ["1d", "5d", "1mo", "3mo", "6mo", "1y"],
                    "default": "1d"
                }
            },
            "required": ["symbol"]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_metadata() {
        let tool = StockDataTool::new();

        assert_eq!(tool.name(), "stock_data");
        assert!(!tool.description().is_empty());

        let schema = tool.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["symbol"].is_object());
    }

    #[test]
    fn test_params_default_range() {
        let params: StockDataParams =
            serde_json::from_value(json!({"symbol": "aapl"})).expect("valid params");
        assert_eq!(params.symbol, "aapl");
        assert_eq!(params.range, "1d");
    }

    #[test]
    fn test_params_reject_missing_symbol() {
        let result: std::result::Result<StockDataParams, _> =
            serde_json::from_value(json!({"range": "1d"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_change_percent() {
        assert!((change_percent(100.0, 110.0) - 10.0).abs() < f64::EPSILON);
        assert!((change_percent(0.0, 110.0)).abs() < f64::EPSILON);
    }
}
