//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppConfig;
use crate::helpers::{MenuAction, new_key_bindings};
use crate::services::TickerClient;
use crate::states::{LocaleAction, ThemeAction, TickerAppState, TickerGlobalStore};
use crate::views::TickerTableView;
use gpui::{App, AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};
use gpui_component::{Root, Theme, ThemeMode, TitleBar};
use tracing::{error, info};

fn init_handlers(cx: &mut App) {
    cx.on_action(|action: &MenuAction, cx: &mut App| match action {
        MenuAction::Quit => cx.quit(),
    });

    cx.on_action(|action: &LocaleAction, cx: &mut App| {
        let app_state = cx.global::<TickerGlobalStore>().app_state();
        app_state.update(cx, |state, cx| state.set_locale(action.code(), cx));
        info!(locale = action.code(), "Locale changed");
        cx.refresh_windows();
    });

    cx.on_action(|action: &ThemeAction, cx: &mut App| {
        let mode = match action {
            ThemeAction::Light => ThemeMode::Light,
            ThemeAction::Dark => ThemeMode::Dark,
        };
        Theme::change(mode, None, cx);
        cx.refresh_windows();
    });

    // Quit the app when all windows are closed
    cx.on_window_closed(|cx| {
        if cx.windows().is_empty() {
            cx.quit();
        }
    })
    .detach();
}

/// Run the ticker table application
pub fn run_app() {
    let app = Application::new().with_assets(gpui_component_assets::Assets);

    app.run(|cx: &mut App| {
        gpui_component::init(cx);
        cx.bind_keys(new_key_bindings());
        init_handlers(cx);

        let app_state = TickerAppState::try_load().unwrap_or_else(|e| {
            error!(error = %e, "Failed to load config, using defaults");
            TickerAppState::new(AppConfig::default())
        });
        let client = match TickerClient::from_config(app_state.config()) {
            Ok(client) => client,
            Err(e) => {
                error!(error = %e, "Failed to build HTTP client");
                cx.quit();
                return;
            }
        };
        let store = TickerGlobalStore::new(app_state, client, cx);
        cx.set_global(store);

        let bounds = Bounds::centered(
            None,
            size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitleBar::title_bar_options()),
            ..Default::default()
        };

        cx.spawn(async move |cx| {
            cx.open_window(window_options, |window, cx| {
                let view = cx.new(|cx| TickerTableView::new(window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;
            Ok::<_, anyhow::Error>(())
        })
        .detach();

        cx.activate(true);
    });
}
