//! Pagination Component
//!
//! Page navigation footer for the ticker grid.

use std::rc::Rc;

use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window};
use gpui_component::{
    ActiveTheme, Disableable, IconName, Sizable,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
};

type PageHandler = Rc<dyn Fn(usize, &mut Window, &mut App) + 'static>;

/// Pagination footer
///
/// Pages are zero-based in the API and shown one-based.
#[derive(IntoElement)]
pub struct Pagination {
    current_page: usize,
    page_count: usize,
    summary: SharedString,
    on_page_change: Option<PageHandler>,
}

impl Pagination {
    /// Create a new pagination footer
    pub fn new(current_page: usize, page_count: usize) -> Self {
        Self {
            current_page,
            page_count: page_count.max(1),
            summary: SharedString::default(),
            on_page_change: None,
        }
    }

    /// Text shown on the left, e.g. the row count
    pub fn summary(mut self, summary: impl Into<SharedString>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the page change handler
    pub fn on_page_change(mut self, handler: impl Fn(usize, &mut Window, &mut App) + 'static) -> Self {
        self.on_page_change = Some(Rc::new(handler));
        self
    }

    fn nav_button(&self, id: &'static str, icon: IconName, target: usize, enabled: bool) -> Button {
        let button = Button::new(id).icon(icon).ghost().small().disabled(!enabled);
        match self.on_page_change.clone() {
            Some(handler) if enabled => {
                button.on_click(move |_, window, cx| handler(target, window, cx))
            }
            _ => button,
        }
    }
}

impl RenderOnce for Pagination {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let current = self.current_page;
        let last = self.page_count - 1;
        let can_prev = current > 0;
        let can_next = current < last;

        h_flex()
            .w_full()
            .px_4()
            .py_2()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            .child(
                Label::new(self.summary.clone())
                    .text_sm()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                h_flex()
                    .items_center()
                    .gap_1()
                    .child(self.nav_button("page-first", IconName::ArrowLeft, 0, can_prev))
                    .child(self.nav_button(
                        "page-prev",
                        IconName::ChevronLeft,
                        current.saturating_sub(1),
                        can_prev,
                    ))
                    .child(
                        Label::new(format!("{} / {}", current + 1, self.page_count))
                            .text_sm()
                            .px_2(),
                    )
                    .child(self.nav_button("page-next", IconName::ChevronRight, current + 1, can_next))
                    .child(self.nav_button("page-last", IconName::ArrowRight, last, can_next)),
            )
    }
}
