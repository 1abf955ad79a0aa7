//! Button Component

use gpui::{
    App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, Sizable};

use crate::theme::colors::AppColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled accent button
    #[default]
    Primary,
    /// Gray button
    Secondary,
    /// Transparent button, text colored
    Ghost,
}

/// A styled button with an optional leading icon and trailing badge
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    icon: Option<Icon>,
    badge: Option<SharedString>,
    selected: bool,
    disabled: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            icon: None,
            badge: None,
            selected: false,
            disabled: false,
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Leading icon
    pub fn icon(mut self, icon: impl Into<Icon>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Small count bubble after the label. Empty text hides it.
    pub fn badge(mut self, text: impl Into<SharedString>) -> Self {
        let text = text.into();
        self.badge = (!text.is_empty()).then_some(text);
        self
    }

    /// Render as the active choice of a group
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    pub fn secondary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Secondary)
    }

    pub fn ghost(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Ghost)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (bg_color, text_color, hover_bg) = match (self.variant, self.selected) {
            (ButtonVariant::Primary, _) | (_, true) => (
                AppColors::button_primary_bg(),
                AppColors::button_primary_text(),
                AppColors::accent_hover(),
            ),
            (ButtonVariant::Secondary, false) => (
                AppColors::button_secondary_bg(),
                AppColors::text_primary(),
                AppColors::button_secondary_hover(),
            ),
            (ButtonVariant::Ghost, false) => (
                gpui::rgba(0x00000000),
                AppColors::accent(),
                AppColors::button_ghost_hover(),
            ),
        };

        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_1()
            .px(px(12.0))
            .py(px(6.0))
            .bg(bg_color)
            .text_color(text_color)
            .text_size(px(13.0))
            .rounded_md()
            .when(self.disabled, |el| el.opacity(0.5))
            .when_some(self.icon, |el, icon| el.child(icon.small()))
            .child(self.label)
            .when_some(self.badge, |el, badge| {
                el.child(
                    div()
                        .min_w(px(18.0))
                        .h(px(18.0))
                        .px_1()
                        .rounded_full()
                        .flex()
                        .items_center()
                        .justify_center()
                        .bg(AppColors::badge_bg())
                        .text_color(AppColors::text_light())
                        .text_size(px(11.0))
                        .child(badge),
                )
            });

        if !self.disabled {
            element = element.cursor_pointer().hover(|s| s.bg(hover_bg));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
