//! Ticker API Client
//!
//! One GET of the full 24h ticker snapshot. Paging and filtering happen
//! client side, so no query parameters are sent.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::domain::config::AppConfig;
use crate::domain::ticker::TickerRow;
use crate::error::Result;
use crate::services::runtime::{TokioTask, spawn_abortable};

/// Source of ticker snapshots
pub trait TickerSource: Send + Sync + 'static {
    /// Fetch the complete ticker collection
    fn fetch_tickers(&self) -> impl Future<Output = Result<Vec<TickerRow>>> + Send;
}

/// Fetch a snapshot on the tokio runtime; dropping the handle cancels it
pub fn spawn_fetch<S: TickerSource>(source: S) -> TokioTask<Result<Vec<TickerRow>>> {
    spawn_abortable(async move { source.fetch_tickers().await })
}

/// Parse a ticker snapshot body
pub fn parse_tickers(body: &[u8]) -> Result<Vec<TickerRow>> {
    Ok(serde_json::from_slice(body)?)
}

/// HTTP client for the public ticker endpoint
#[derive(Debug, Clone)]
pub struct TickerClient {
    client: Client,
    endpoint: String,
}

impl TickerClient {
    /// Create a client for `endpoint` with a request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TickerSource for TickerClient {
    async fn fetch_tickers(&self) -> Result<Vec<TickerRow>> {
        debug!(endpoint = %self.endpoint, "Fetching tickers");
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        let rows = parse_tickers(&body)?;
        info!(endpoint = %self.endpoint, rows = rows.len(), bytes = body.len(), "Tickers fetched");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_snapshot() {
        let body = br#"[
            {"symbol":"ETHBTC","lastPrice":"0.05216000","askQty":"1.2","openTime":0,"count":7},
            {"symbol":"LTCBTC","lastPrice":0.0012,"askQty":3,"openTime":1700000000000,"count":0}
        ]"#;
        let rows = parse_tickers(body).expect("parse");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].last_price.as_str(), "0.05216000");
        assert_eq!(rows[1].last_price.as_str(), "0.0012");
        assert_eq!(rows[1].ask_qty.as_str(), "3");
        assert_eq!(rows[1].open_time, 1_700_000_000_000);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let result = parse_tickers(br#"{"code":-1121,"msg":"Invalid symbol."}"#);
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    struct FixedSource(&'static str);

    impl TickerSource for FixedSource {
        async fn fetch_tickers(&self) -> Result<Vec<TickerRow>> {
            parse_tickers(self.0.as_bytes())
        }
    }

    #[test]
    fn test_spawn_fetch_delivers_rows() {
        let task = spawn_fetch(FixedSource(r#"[{"symbol":"ETHBTC"},{"symbol":"BNBBTC"}]"#));
        let rows = futures::executor::block_on(task)
            .and_then(|rows| rows)
            .expect("rows");
        let symbols: Vec<_> = rows.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(symbols, ["ETHBTC", "BNBBTC"]);
    }

    #[test]
    fn test_spawn_fetch_reports_source_error() {
        let result = futures::executor::block_on(spawn_fetch(FixedSource("not json")))
            .and_then(|rows| rows);
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[test]
    fn test_client_from_config() {
        let client = TickerClient::from_config(&AppConfig::default()).expect("client");
        assert_eq!(client.endpoint(), crate::constants::TICKER_ENDPOINT);
    }
}
