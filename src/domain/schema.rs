//! Schema - Ticker Table Columns

use crate::domain::ticker::TickerField;
use crate::grid::{ColumnDescriptor, FilterKind, Formatter};

/// Columns flipped by the Toggle button
pub const TOGGLE_COLUMNS: [TickerField; 2] = [TickerField::Symbol, TickerField::PriceChange];

/// Column schema of the ticker table, in display order
pub static TICKER_COLUMNS: [ColumnDescriptor<TickerField>; 21] = [
    ColumnDescriptor::new(TickerField::Symbol, "Symbol").checkbox_selection(),
    ColumnDescriptor::new(TickerField::PriceChange, "Price Change").formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::PriceChangePercent, "Price Change Percent")
        .formatter(Formatter::Percentage),
    ColumnDescriptor::new(TickerField::WeightedAvgPrice, "Weighted Average Price")
        .formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::PrevClosePrice, "Previous Close Price")
        .formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::LastPrice, "Last Price").formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::LastQty, "Last Quantity"),
    ColumnDescriptor::new(TickerField::BidPrice, "Bid Price").formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::BidQty, "Bid Quantity"),
    ColumnDescriptor::new(TickerField::AskPrice, "Ask Price").formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::AskQty, "Ask Quantity").formatter(Formatter::Units),
    ColumnDescriptor::new(TickerField::OpenPrice, "Open Price").formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::HighPrice, "High Price").formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::LowPrice, "Low Price").formatter(Formatter::Currency),
    ColumnDescriptor::new(TickerField::Volume, "Volume"),
    ColumnDescriptor::new(TickerField::QuoteVolume, "Quote Volume"),
    ColumnDescriptor::new(TickerField::OpenTime, "Open Time")
        .formatter(Formatter::Time)
        .filter(FilterKind::Date),
    ColumnDescriptor::new(TickerField::CloseTime, "Close Time")
        .formatter(Formatter::Time)
        .filter(FilterKind::Date),
    ColumnDescriptor::new(TickerField::FirstId, "First ID").filter(FilterKind::Number),
    ColumnDescriptor::new(TickerField::LastId, "Last ID").filter(FilterKind::Number),
    ColumnDescriptor::new(TickerField::Count, "Count").filter(FilterKind::Number),
];
