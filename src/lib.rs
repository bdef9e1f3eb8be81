//! Ticker Table Library
//!
//! A native desktop grid of 24h crypto ticker statistics with sorting,
//! filtering, paging, selection and CSV export.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod grid;
pub mod helpers;
pub mod services;
pub mod states;
pub mod views;
