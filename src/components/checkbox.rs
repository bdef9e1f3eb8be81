//! Checkbox Component

use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_component::{ActiveTheme, Icon, IconName, Sizable};

/// A themed checkbox
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    disabled: bool,
    on_change: Option<Box<dyn Fn(bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            disabled: false,
            on_change: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the change handler, called with the new state
    pub fn on_change(mut self, handler: impl Fn(bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let checked = self.checked;
        let theme = cx.theme();
        let (bg, border) = if checked {
            (theme.primary, theme.primary)
        } else {
            (theme.background, theme.input)
        };
        let check_color = theme.primary_foreground;

        let mut checkbox = div()
            .id(self.id)
            .size(px(16.0))
            .flex_none()
            .rounded_sm()
            .border_1()
            .border_color(border)
            .bg(bg)
            .flex()
            .items_center()
            .justify_center()
            .when(checked, |this| {
                this.child(
                    Icon::new(IconName::Check)
                        .xsmall()
                        .text_color(check_color),
                )
            });

        let next = toggled_state(checked, self.disabled);
        let handler = self.on_change;
        if self.disabled {
            checkbox = checkbox.opacity(0.5);
        } else {
            checkbox = checkbox.cursor_pointer();
        }

        // Clicks never reach the parent, even when disabled
        checkbox.on_click(move |_event, window, cx| {
            cx.stop_propagation();
            if let (Some(checked), Some(handler)) = (next, handler.as_ref()) {
                handler(checked, window, cx);
            }
        })
    }
}

/// State a click switches to, or `None` when the checkbox ignores clicks
fn toggled_state(checked: bool, disabled: bool) -> Option<bool> {
    (!disabled).then_some(!checked)
}
