//! Ticker Grid
//!
//! Renders the current page of the ticker grid: header with sort indicators
//! and select-all checkbox, a filter input under every column, rows, and the
//! pagination footer. Loading, error and empty states replace the body.

use crate::components::{Checkbox, Pagination};
use crate::constants::{CHECKBOX_COLUMN_WIDTH, GRID_HEADER_HEIGHT, GRID_HEIGHT, GRID_ROW_HEIGHT};
use crate::domain::table::LoadState;
use crate::domain::ticker::TickerField;
use crate::grid::{ColumnDescriptor, SortDirection};
use crate::states::{TickerTableState, i18n_format, i18n_table};
use gpui::{
    App, Entity, Hsla, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::*, px,
};
use gpui_component::{
    ActiveTheme, Colorize, Icon, IconName, Sizable, StyledExt,
    button::{Button, ButtonVariants},
    h_flex,
    input::{Input, InputState},
    label::Label,
    v_flex,
};

type Column = &'static ColumnDescriptor<TickerField>;

/// One rendered row of the current page
struct PageRow {
    index: usize,
    selected: bool,
    cells: Vec<SharedString>,
}

/// Filter input of one column
pub type ColumnFilterInput = (TickerField, Entity<InputState>);

/// Ticker grid element
#[derive(IntoElement)]
pub struct TickerGrid {
    state: Entity<TickerTableState>,
    column_filters: Vec<ColumnFilterInput>,
}

impl TickerGrid {
    pub fn new(state: Entity<TickerTableState>, column_filters: Vec<ColumnFilterInput>) -> Self {
        Self {
            state,
            column_filters,
        }
    }

    fn filter_input(&self, field: TickerField) -> Option<&Entity<InputState>> {
        self.column_filters
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, input)| input)
    }

    fn column_width(column: Column) -> f32 {
        if column.checkbox_selection {
            column.width + CHECKBOX_COLUMN_WIDTH
        } else {
            column.width
        }
    }

    fn render_header(
        &self,
        columns: &[Column],
        sort: Option<(TickerField, SortDirection)>,
        all_selected: bool,
        has_rows: bool,
        cx: &App,
    ) -> impl IntoElement {
        let theme = cx.theme();
        h_flex()
            .h(px(GRID_HEADER_HEIGHT))
            .bg(theme.secondary)
            .border_b_1()
            .border_color(theme.border)
            .children(columns.iter().enumerate().map(|(i, column)| {
                let field = column.field;
                let state = self.state.clone();
                let sort_icon = match sort {
                    Some((sorted, SortDirection::Ascending)) if sorted == field => {
                        Some(IconName::SortAscending)
                    }
                    Some((sorted, SortDirection::Descending)) if sorted == field => {
                        Some(IconName::SortDescending)
                    }
                    _ => None,
                };

                h_flex()
                    .id(("ticker-header", i))
                    .w(px(Self::column_width(column)))
                    .h_full()
                    .flex_none()
                    .px_2()
                    .gap_2()
                    .items_center()
                    .border_r_1()
                    .border_color(theme.border)
                    .when(column.checkbox_selection, |this| {
                        let state = self.state.clone();
                        this.child(
                            Checkbox::new(("ticker-select-all", i))
                                .checked(all_selected)
                                .disabled(!has_rows)
                                .on_change(move |checked, _, cx| {
                                    state.update(cx, |state, cx| state.select_displayed(checked, cx));
                                }),
                        )
                    })
                    .child(
                        Label::new(column.header)
                            .text_sm()
                            .font_semibold()
                            .text_ellipsis(),
                    )
                    .children(sort_icon.map(|icon| Icon::new(icon).small()))
                    .when(column.sortable, |this| {
                        this.cursor_pointer().on_click(move |_, _, cx| {
                            state.update(cx, |state, cx| state.sort_by(field, cx));
                        })
                    })
            }))
    }

    fn render_floating_filters(&self, columns: &[Column], cx: &App) -> impl IntoElement {
        h_flex()
            .h(px(GRID_ROW_HEIGHT))
            .border_b_1()
            .border_color(cx.theme().border)
            .children(columns.iter().map(|column| {
                div()
                    .w(px(Self::column_width(column)))
                    .flex_none()
                    .px_1()
                    .children(
                        self.filter_input(column.field)
                            .map(|input| Input::new(input).small().cleanable(true)),
                    )
            }))
    }

    fn render_row(&self, columns: &[Column], row: PageRow, stripe: bool, cx: &App) -> impl IntoElement {
        let theme = cx.theme();
        let bg: Hsla = if row.selected {
            theme.accent
        } else if stripe {
            if theme.is_dark() {
                theme.background.lighten(0.3)
            } else {
                theme.background.darken(0.01)
            }
        } else {
            theme.background
        };
        let hover = theme.accent.opacity(0.5);
        let index = row.index;
        let selected = row.selected;
        let state = self.state.clone();

        h_flex()
            .id(("ticker-row", index))
            .h(px(GRID_ROW_HEIGHT))
            .bg(bg)
            .border_b_1()
            .border_color(theme.border)
            .cursor_pointer()
            .hover(move |this| this.bg(hover))
            .on_click(move |_, _, cx| {
                state.update(cx, |state, cx| state.toggle_row(index, cx));
            })
            .children(columns.iter().zip(row.cells).map(|(column, text)| {
                let state = self.state.clone();
                h_flex()
                    .w(px(Self::column_width(column)))
                    .h_full()
                    .flex_none()
                    .px_2()
                    .gap_2()
                    .items_center()
                    .when(column.checkbox_selection, |this| {
                        this.child(
                            Checkbox::new(("ticker-select", index))
                                .checked(selected)
                                .on_change(move |_, _, cx| {
                                    state.update(cx, |state, cx| state.toggle_row(index, cx));
                                }),
                        )
                    })
                    .child(Label::new(text).text_sm().text_ellipsis())
            }))
    }

    fn render_overlay(&self, load_state: &LoadState, cx: &App) -> impl IntoElement {
        let theme = cx.theme();
        let content = match load_state {
            LoadState::Idle | LoadState::Loading => h_flex()
                .gap_2()
                .child(Icon::new(IconName::Loader).size_4())
                .child(Label::new(i18n_table(cx, "loading")).text_color(theme.muted_foreground))
                .into_any_element(),
            LoadState::Error(message) => {
                let state = self.state.clone();
                v_flex()
                    .gap_3()
                    .items_center()
                    .child(Label::new(i18n_table(cx, "load_failed")).text_color(theme.danger))
                    .child(
                        Label::new(SharedString::from(message.to_string()))
                            .text_sm()
                            .text_color(theme.muted_foreground),
                    )
                    .child(
                        Button::new("ticker-retry")
                            .label(i18n_table(cx, "retry"))
                            .primary()
                            .on_click(move |_, _, cx| {
                                state.update(cx, |state, cx| state.load(cx));
                            }),
                    )
                    .into_any_element()
            }
            LoadState::Loaded => Label::new(i18n_table(cx, "no_rows"))
                .text_color(theme.muted_foreground)
                .into_any_element(),
        };

        div()
            .w_full()
            .h(px(GRID_HEIGHT))
            .flex()
            .items_center()
            .justify_center()
            .child(content)
    }
}

impl RenderOnce for TickerGrid {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let state = self.state.read(cx);
        let load_state = state.load_state().clone();
        let grid = state.table().grid();

        let columns: Vec<Column> = grid.visible_columns().collect();
        let sort = grid.view().sort().map(|sort| (sort.field, sort.direction));
        let all_selected = grid.all_displayed_selected();
        let has_rows = grid.displayed_count() > 0;
        let rows: Vec<PageRow> = grid
            .page_rows()
            .into_iter()
            .map(|(index, row)| PageRow {
                index,
                selected: grid.is_selected(index),
                cells: columns.iter().map(|c| c.display(row).into()).collect(),
            })
            .collect();
        let (current_page, page_count) = (grid.current_page(), grid.page_count());
        let summary = i18n_format(
            cx,
            "table.rows_summary",
            &[
                ("shown", grid.displayed_count().to_string().as_str()),
                ("total", grid.row_count().to_string().as_str()),
                ("selected", grid.selected_count().to_string().as_str()),
            ],
        );

        let total_width: f32 = columns.iter().map(|c| Self::column_width(c)).sum();
        let body = if rows.is_empty() {
            self.render_overlay(&load_state, cx).into_any_element()
        } else {
            v_flex()
                .children(
                    rows.into_iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(&columns, row, i % 2 == 0, cx)),
                )
                .into_any_element()
        };

        let state = self.state.clone();
        v_flex()
            .w_full()
            .border_1()
            .border_color(cx.theme().border)
            .rounded_md()
            .child(
                div()
                    .id("ticker-grid-scroll")
                    .w_full()
                    .h(px(GRID_HEIGHT))
                    .overflow_scroll()
                    .child(
                        v_flex()
                            .w(px(total_width))
                            .child(self.render_header(&columns, sort, all_selected, has_rows, cx))
                            .child(self.render_floating_filters(&columns, cx))
                            .child(body),
                    ),
            )
            .child(
                Pagination::new(current_page, page_count)
                    .summary(summary)
                    .on_page_change(move |page, _, cx| {
                        state.update(cx, |state, cx| state.go_to_page(page, cx));
                    }),
            )
    }
}
