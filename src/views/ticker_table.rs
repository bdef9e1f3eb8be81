//! Ticker Table View
//!
//! The single page of the app: instructions, column toggle, page-size
//! selector, quick filter, the grid, and CSV export.

use crate::domain::schema::TICKER_COLUMNS;
use crate::grid::{FilterKind, PageSize};
use crate::helpers::{TableAction, humanize_keystroke};
use crate::states::{TickerGlobalStore, TickerTableState, UIEvent, i18n_table};
use crate::views::{ColumnFilterInput, TickerGrid, TickerTitleBar};
use gpui::{Context, Entity, FocusHandle, SharedString, Subscription, Window, div, prelude::*};
use gpui_component::{
    ActiveTheme, Disableable, Icon, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputEvent, InputState},
    label::Label,
    v_flex,
};

/// Status line content
struct Status {
    message: SharedString,
    is_error: bool,
}

/// Ticker table page
pub struct TickerTableView {
    title_bar: Entity<TickerTitleBar>,
    state: Entity<TickerTableState>,
    /// Quick filter input
    filter_input: Entity<InputState>,
    /// One filter input per column, in schema order
    column_filters: Vec<ColumnFilterInput>,
    focus_handle: FocusHandle,
    status: Option<Status>,
    _subscriptions: Vec<Subscription>,
}

impl TickerTableView {
    /// Create the view and start loading tickers
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let page_size = cx
            .global::<TickerGlobalStore>()
            .read(cx)
            .config()
            .default_page_size;
        let state = cx.new(|_| TickerTableState::new(page_size));
        let title_bar = cx.new(|cx| TickerTitleBar::new(window, cx));

        let placeholder = i18n_table(cx, "search_placeholder");
        let filter_input = cx.new(|cx| {
            InputState::new(window, cx)
                .clean_on_escape()
                .placeholder(placeholder)
        });
        let column_filters: Vec<ColumnFilterInput> = TICKER_COLUMNS
            .iter()
            .map(|column| {
                let hint = i18n_table(
                    cx,
                    match column.filter {
                        FilterKind::Text => "filter_text",
                        FilterKind::Number => "filter_number",
                        FilterKind::Date => "filter_date",
                    },
                );
                let input = cx.new(|cx| {
                    InputState::new(window, cx)
                        .clean_on_escape()
                        .placeholder(hint)
                });
                (column.field, input)
            })
            .collect();

        let mut subscriptions = Vec::new();

        subscriptions.push(cx.observe(&state, |_this, _model, cx| {
            cx.notify();
        }));

        subscriptions.push(cx.subscribe(&state, |this, _state, event: &UIEvent, cx| {
            let UIEvent::Toast { message, is_error } = event;
            this.status = Some(Status {
                message: message.clone(),
                is_error: *is_error,
            });
            cx.notify();
        }));

        let quick_state = state.clone();
        subscriptions.push(cx.subscribe(&filter_input, move |_this, input, event, cx| {
            if matches!(event, InputEvent::Change) {
                let text = input.read(cx).value().to_string();
                quick_state.update(cx, |state, cx| state.apply_quick_filter(&text, cx));
            }
        }));

        for (field, input) in &column_filters {
            let field = *field;
            let column_state = state.clone();
            subscriptions.push(cx.subscribe(input, move |_this, input, event, cx| {
                if matches!(event, InputEvent::Change) {
                    let text = input.read(cx).value().to_string();
                    column_state.update(cx, |state, cx| state.set_column_filter(field, &text, cx));
                }
            }));
        }

        // Initial load on mount
        state.update(cx, |state, cx| state.load(cx));

        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);

        Self {
            title_bar,
            state,
            filter_input,
            column_filters,
            focus_handle,
            status: None,
            _subscriptions: subscriptions,
        }
    }

    fn on_table_action(&mut self, action: &TableAction, _window: &mut Window, cx: &mut Context<Self>) {
        self.state.update(cx, |state, cx| match action {
            TableAction::Reload => state.load(cx),
            TableAction::ToggleColumns => state.toggle_columns(cx),
            TableAction::Export => state.export_csv(cx),
            TableAction::NextPage => state.next_page(cx),
            TableAction::PreviousPage => state.previous_page(cx),
        });
    }

    /// Render a bold section caption
    fn render_caption(&self, text: SharedString) -> impl IntoElement {
        Label::new(text).font_bold().text_base()
    }

    fn render_toggle(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.state.clone();
        v_flex()
            .gap_2()
            .child(self.render_caption(i18n_table(cx, "toggle_hint")))
            .child(
                Button::new("toggle-columns")
                    .label(i18n_table(cx, "toggle"))
                    .outline()
                    .tooltip(humanize_keystroke("secondary-t"))
                    .on_click(move |_, _, cx| {
                        state.update(cx, |state, cx| state.toggle_columns(cx));
                    }),
            )
    }

    fn render_page_sizes(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let current = self
            .state
            .read(cx)
            .table()
            .grid()
            .view()
            .page_size();

        v_flex()
            .gap_2()
            .child(self.render_caption(i18n_table(cx, "page_size_hint")))
            .child(h_flex().gap_1().children(PageSize::options().map(|size| {
                let state = self.state.clone();
                let button = Button::new(("page-size", size.get()))
                    .label(size.to_string())
                    .small()
                    .on_click(move |_, _, cx| {
                        let requested = size.to_string();
                        state.update(cx, |state, cx| state.change_page_size(&requested, cx));
                    });
                if size == current {
                    button.primary()
                } else {
                    button.outline()
                }
            })))
    }

    fn render_quick_filter(&self, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .gap_2()
            .child(self.render_caption(i18n_table(cx, "filter_hint")))
            .child(
                div().w_96().child(
                    Input::new(&self.filter_input)
                        .prefix(Icon::new(IconName::Search).small())
                        .cleanable(true),
                ),
            )
    }

    fn render_export(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let state = self.state.clone();
        let loaded = self.state.read(cx).load_state().is_loaded();
        v_flex()
            .gap_2()
            .child(self.render_caption(i18n_table(cx, "export_hint")))
            .child(
                Button::new("export-csv")
                    .label(i18n_table(cx, "export"))
                    .outline()
                    .disabled(!loaded)
                    .tooltip(humanize_keystroke("secondary-e"))
                    .on_click(move |_, _, cx| {
                        state.update(cx, |state, cx| state.export_csv(cx));
                    }),
            )
    }

    fn render_status(&self, cx: &mut Context<Self>) -> Option<impl IntoElement> {
        let status = self.status.as_ref()?;
        let color = if status.is_error {
            cx.theme().danger
        } else {
            cx.theme().success
        };
        Some(
            Label::new(status.message.clone())
                .text_sm()
                .text_color(color),
        )
    }
}

impl Render for TickerTableView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        v_flex()
            .id("ticker-table-view")
            .key_context("TickerTable")
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::on_table_action))
            .size_full()
            .bg(cx.theme().background)
            .text_color(cx.theme().foreground)
            .child(self.title_bar.clone())
            .child(
                div().id("ticker-table-scroll").flex_1().overflow_y_scroll().child(
                    v_flex()
                        .p_6()
                        .gap_6()
                        .child(Label::new(i18n_table(cx, "title")).text_2xl().font_bold())
                        .child(self.render_toggle(cx))
                        .child(self.render_page_sizes(cx))
                        .child(self.render_quick_filter(cx))
                        .child(TickerGrid::new(self.state.clone(), self.column_filters.clone()))
                        .child(self.render_export(cx))
                        .children(self.render_status(cx)),
                ),
            )
    }
}
