//! Ticker - 24h Market Ticker Data

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::grid::{CellValue, GridRow};

/// Decimal value kept exactly as transported
///
/// The ticker API sends prices and quantities as JSON strings, other sources
/// send plain numbers. Both are kept as text so display never rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NumericText(String);

impl NumericText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NumericText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for NumericText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NumericText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = match Value::deserialize(deserializer)? {
            Value::String(text) => text,
            other => other.to_string(),
        };
        Ok(Self(text))
    }
}

/// One 24h ticker record per traded symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TickerRow {
    pub symbol: String,
    pub price_change: NumericText,
    pub price_change_percent: NumericText,
    pub weighted_avg_price: NumericText,
    pub prev_close_price: NumericText,
    pub last_price: NumericText,
    pub last_qty: NumericText,
    pub bid_price: NumericText,
    pub bid_qty: NumericText,
    pub ask_price: NumericText,
    pub ask_qty: NumericText,
    pub open_price: NumericText,
    pub high_price: NumericText,
    pub low_price: NumericText,
    pub volume: NumericText,
    pub quote_volume: NumericText,
    /// Window start, epoch milliseconds
    pub open_time: i64,
    /// Window end, epoch milliseconds
    pub close_time: i64,
    pub first_id: i64,
    pub last_id: i64,
    /// Number of trades in the window
    pub count: i64,
}

/// Addressable ticker fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TickerField {
    Symbol,
    PriceChange,
    PriceChangePercent,
    WeightedAvgPrice,
    PrevClosePrice,
    LastPrice,
    LastQty,
    BidPrice,
    BidQty,
    AskPrice,
    AskQty,
    OpenPrice,
    HighPrice,
    LowPrice,
    Volume,
    QuoteVolume,
    OpenTime,
    CloseTime,
    FirstId,
    LastId,
    Count,
}

impl TickerField {
    pub const ALL: [TickerField; 21] = [
        TickerField::Symbol,
        TickerField::PriceChange,
        TickerField::PriceChangePercent,
        TickerField::WeightedAvgPrice,
        TickerField::PrevClosePrice,
        TickerField::LastPrice,
        TickerField::LastQty,
        TickerField::BidPrice,
        TickerField::BidQty,
        TickerField::AskPrice,
        TickerField::AskQty,
        TickerField::OpenPrice,
        TickerField::HighPrice,
        TickerField::LowPrice,
        TickerField::Volume,
        TickerField::QuoteVolume,
        TickerField::OpenTime,
        TickerField::CloseTime,
        TickerField::FirstId,
        TickerField::LastId,
        TickerField::Count,
    ];

    /// JSON key of the field
    pub fn key(self) -> &'static str {
        match self {
            TickerField::Symbol => "symbol",
            TickerField::PriceChange => "priceChange",
            TickerField::PriceChangePercent => "priceChangePercent",
            TickerField::WeightedAvgPrice => "weightedAvgPrice",
            TickerField::PrevClosePrice => "prevClosePrice",
            TickerField::LastPrice => "lastPrice",
            TickerField::LastQty => "lastQty",
            TickerField::BidPrice => "bidPrice",
            TickerField::BidQty => "bidQty",
            TickerField::AskPrice => "askPrice",
            TickerField::AskQty => "askQty",
            TickerField::OpenPrice => "openPrice",
            TickerField::HighPrice => "highPrice",
            TickerField::LowPrice => "lowPrice",
            TickerField::Volume => "volume",
            TickerField::QuoteVolume => "quoteVolume",
            TickerField::OpenTime => "openTime",
            TickerField::CloseTime => "closeTime",
            TickerField::FirstId => "firstId",
            TickerField::LastId => "lastId",
            TickerField::Count => "count",
        }
    }
}

impl GridRow for TickerRow {
    type Field = TickerField;

    fn cell(&self, field: TickerField) -> CellValue<'_> {
        match field {
            TickerField::Symbol => CellValue::Text(&self.symbol),
            TickerField::PriceChange => CellValue::Text(self.price_change.as_str()),
            TickerField::PriceChangePercent => CellValue::Text(self.price_change_percent.as_str()),
            TickerField::WeightedAvgPrice => CellValue::Text(self.weighted_avg_price.as_str()),
            TickerField::PrevClosePrice => CellValue::Text(self.prev_close_price.as_str()),
            TickerField::LastPrice => CellValue::Text(self.last_price.as_str()),
            TickerField::LastQty => CellValue::Text(self.last_qty.as_str()),
            TickerField::BidPrice => CellValue::Text(self.bid_price.as_str()),
            TickerField::BidQty => CellValue::Text(self.bid_qty.as_str()),
            TickerField::AskPrice => CellValue::Text(self.ask_price.as_str()),
            TickerField::AskQty => CellValue::Text(self.ask_qty.as_str()),
            TickerField::OpenPrice => CellValue::Text(self.open_price.as_str()),
            TickerField::HighPrice => CellValue::Text(self.high_price.as_str()),
            TickerField::LowPrice => CellValue::Text(self.low_price.as_str()),
            TickerField::Volume => CellValue::Text(self.volume.as_str()),
            TickerField::QuoteVolume => CellValue::Text(self.quote_volume.as_str()),
            TickerField::OpenTime => CellValue::Integer(self.open_time),
            TickerField::CloseTime => CellValue::Integer(self.close_time),
            TickerField::FirstId => CellValue::Integer(self.first_id),
            TickerField::LastId => CellValue::Integer(self.last_id),
            TickerField::Count => CellValue::Integer(self.count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "symbol": "ETHBTC",
        "priceChange": "-0.00021000",
        "priceChangePercent": "-0.401",
        "weightedAvgPrice": "0.05227000",
        "prevClosePrice": "0.05237000",
        "lastPrice": "0.05216000",
        "lastQty": "0.10280000",
        "bidPrice": "0.05216000",
        "bidQty": "12.90220000",
        "askPrice": "0.05217000",
        "askQty": 37.5,
        "openPrice": "0.05237000",
        "highPrice": "0.05259000",
        "lowPrice": "0.05193000",
        "volume": "25049.72250000",
        "quoteVolume": "1309.31049730",
        "openTime": 1700000000000,
        "closeTime": 1700086399999,
        "firstId": 434000000,
        "lastId": 434091234,
        "count": 91235
    }"#;

    #[test]
    fn test_deserialize_mixed_numeric_transport() {
        let row: TickerRow = serde_json::from_str(SAMPLE).expect("parse");
        assert_eq!(row.symbol, "ETHBTC");
        assert_eq!(row.price_change.as_str(), "-0.00021000");
        assert_eq!(row.ask_qty.as_str(), "37.5");
        assert_eq!(row.open_price.as_str(), "0.05237000");
        assert_eq!(row.count, 91235);
    }

    #[test]
    fn test_missing_fields_default() {
        let row: TickerRow = serde_json::from_str(r#"{"symbol":"BNBBTC","lastPrice":null}"#)
            .expect("parse");
        assert_eq!(row.last_price.as_str(), "null");
        assert_eq!(row.volume.as_str(), "");
        assert_eq!(row.open_time, 0);
    }

    #[test]
    fn test_serialize_keeps_camel_case_keys() {
        let row: TickerRow = serde_json::from_str(SAMPLE).expect("parse");
        let value = serde_json::to_value(&row).expect("serialize");
        for field in TickerField::ALL {
            assert!(value.get(field.key()).is_some(), "missing {}", field.key());
        }
        assert_eq!(value["lastPrice"], "0.05216000");
    }

    #[test]
    fn test_cells_by_field() {
        let row: TickerRow = serde_json::from_str(SAMPLE).expect("parse");
        assert_eq!(row.cell(TickerField::Symbol), CellValue::Text("ETHBTC"));
        assert_eq!(row.cell(TickerField::OpenTime), CellValue::Integer(1_700_000_000_000));
        assert_eq!(row.cell(TickerField::LowPrice).raw(), "0.05193000");
    }
}
