//! Upload Action
//!
//! Button that opens the native file picker. The picker result is handled by
//! the owning table, which reports the first file and resets the input.

use gpui::{App, ClickEvent, IntoElement, RenderOnce, SharedString, Window};

use crate::assets::CustomIconName;
use crate::components::primitives::button::Button;

type PickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct UploadAction {
    label: SharedString,
    on_pick: Option<PickHandler>,
}

impl UploadAction {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            on_pick: None,
        }
    }

    pub fn on_pick(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_pick = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for UploadAction {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let button = Button::ghost("table-upload", self.label).icon(CustomIconName::Upload);
        match self.on_pick {
            Some(handler) => button.on_click(handler),
            None => button,
        }
    }
}
