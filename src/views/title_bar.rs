//! Title Bar Component
//!
//! Custom title bar with the app name and a settings menu.

use crate::states::{LocaleAction, ThemeAction, TickerGlobalStore, i18n_table};
use gpui::{App, Context, Corner, Window, prelude::*};
use gpui_component::{
    ActiveTheme, IconName, Sizable, TitleBar,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    menu::{DropdownMenu, PopupMenu},
};

/// Title bar component
pub struct TickerTitleBar;

impl TickerTitleBar {
    /// Create a new title bar
    pub fn new(_window: &mut Window, _cx: &mut Context<Self>) -> Self {
        Self
    }

    /// Render the settings dropdown menu
    fn render_settings_menu(menu: PopupMenu, _window: &mut Window, cx: &App) -> PopupMenu {
        let locale = cx.global::<TickerGlobalStore>().read(cx).locale().to_string();
        let dark = cx.theme().is_dark();

        menu.label(i18n_table(cx, "language"))
            .menu_with_check("中文", locale == "zh", Box::new(LocaleAction::Zh))
            .menu_with_check("English", locale == "en", Box::new(LocaleAction::En))
            .separator()
            .label(i18n_table(cx, "theme"))
            .menu_with_check(i18n_table(cx, "light"), !dark, Box::new(ThemeAction::Light))
            .menu_with_check(i18n_table(cx, "dark"), dark, Box::new(ThemeAction::Dark))
    }
}

impl Render for TickerTitleBar {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        TitleBar::new()
            .child(
                h_flex()
                    .flex_1()
                    .items_center()
                    .pl_4()
                    .child(Label::new(i18n_table(cx, "app_name")).text_sm()),
            )
            .child(
                h_flex().items_center().justify_end().px_2().mr_2().child(
                    Button::new("settings")
                        .tooltip(i18n_table(cx, "settings"))
                        .icon(IconName::Settings2)
                        .small()
                        .ghost()
                        .dropdown_menu(|menu, window, cx| Self::render_settings_menu(menu, window, cx))
                        .anchor(Corner::TopRight),
                ),
            )
    }
}
