//! Application State
//!
//! Global application state: read-only configuration, UI locale and the
//! shared ticker client.

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::helpers::config_file_path;
use crate::services::TickerClient;
use gpui::{Action, App, AppContext, Context, Entity, Global};
use locale_config::Locale;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

/// Locales with translations in `locales/`
const SUPPORTED_LOCALES: [&str; 2] = ["en", "zh"];

// ==================== Actions ====================

/// Theme selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum ThemeAction {
    Light,
    Dark,
}

/// Locale selection action
#[derive(Clone, Copy, PartialEq, Debug, Deserialize, JsonSchema, Action)]
pub enum LocaleAction {
    En,
    Zh,
}

impl LocaleAction {
    pub fn code(self) -> &'static str {
        match self {
            LocaleAction::En => "en",
            LocaleAction::Zh => "zh",
        }
    }
}

/// Pick a supported locale from a tag such as "zh-CN"
fn supported_locale(tag: &str) -> Option<&'static str> {
    let lang = tag.split(['-', '_']).next().unwrap_or_default().to_lowercase();
    SUPPORTED_LOCALES.into_iter().find(|l| *l == lang)
}

/// Application state, fixed for the session
#[derive(Debug, Clone)]
pub struct TickerAppState {
    config: AppConfig,
    locale: String,
}

impl TickerAppState {
    /// Load the config file, falling back to defaults when absent
    pub fn try_load() -> Result<Self> {
        let path = config_file_path()?;
        let config = AppConfig::load(&path)?;
        Ok(Self::new(config))
    }

    /// Create state from a config, resolving the locale
    pub fn new(config: AppConfig) -> Self {
        let system = Locale::current().to_string();
        let locale = config
            .locale
            .as_deref()
            .and_then(supported_locale)
            .or_else(|| supported_locale(&system))
            .unwrap_or("en")
            .to_string();
        info!(locale = %locale, endpoint = %config.endpoint, "Application state ready");
        Self { config, locale }
    }

    // ==================== Getters ====================

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    // ==================== Setters ====================

    /// Switch the UI language for this session
    pub fn set_locale(&mut self, locale: &str, cx: &mut Context<Self>) {
        if let Some(locale) = supported_locale(locale)
            && self.locale != locale
        {
            self.locale = locale.to_string();
            cx.notify();
        }
    }
}

// ==================== Global Store ====================

/// Global store accessible via `cx.global::<TickerGlobalStore>()`
#[derive(Clone)]
pub struct TickerGlobalStore {
    app_state: Entity<TickerAppState>,
    client: TickerClient,
}

impl TickerGlobalStore {
    /// Create a new global store
    pub fn new(app_state: TickerAppState, client: TickerClient, cx: &mut App) -> Self {
        Self {
            app_state: cx.new(|_| app_state),
            client,
        }
    }

    /// Get the app state entity
    pub fn app_state(&self) -> Entity<TickerAppState> {
        self.app_state.clone()
    }

    /// Get the ticker client
    pub fn client(&self) -> &TickerClient {
        &self.client
    }

    /// Read app state
    pub fn read<'a>(&self, cx: &'a App) -> &'a TickerAppState {
        self.app_state.read(cx)
    }
}

impl Global for TickerGlobalStore {}
