//! Header Cell
//!
//! Column label with optional info icon and, for sortable columns, the sort
//! arrow. Inactive arrows are drawn faded.

use gpui::{
    App, ClickEvent, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    StatefulInteractiveElement, Styled, Window, div, prelude::*, px,
};
use gpui_component::{Icon, IconName, Sizable};

use super::column_width;
use crate::domain::sort::SortOrder;
use crate::state::table_state::HeaderCell;
use crate::theme::colors::AppColors;

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

#[derive(IntoElement)]
pub struct HeaderCellView {
    index: usize,
    label: String,
    width: Option<f32>,
    sortable: bool,
    show_info_icon: bool,
    direction: Option<SortOrder>,
    active: bool,
    on_click: Option<ClickHandler>,
}

impl HeaderCellView {
    pub fn new(index: usize, cell: &HeaderCell<'_>) -> Self {
        Self {
            index,
            label: cell.column.description.clone(),
            width: cell.column.width,
            sortable: cell.column.sortable,
            show_info_icon: cell.column.show_info_icon,
            direction: cell.direction,
            active: cell.active,
            on_click: None,
        }
    }

    /// Only attached for sortable columns
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        if self.sortable {
            self.on_click = Some(Box::new(handler));
        }
        self
    }
}

impl RenderOnce for HeaderCellView {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let arrow = self.sortable.then(|| {
            let icon = match self.direction {
                Some(SortOrder::Desc) => IconName::ArrowDown,
                _ => IconName::ArrowUp,
            };
            div()
                .text_color(if self.active {
                    AppColors::accent()
                } else {
                    AppColors::text_muted()
                })
                .when(self.direction.is_none(), |el| el.opacity(0.4))
                .child(Icon::new(icon).xsmall())
        });

        column_width(div().id(("header-cell", self.index)), self.width)
            .px_3()
            .flex()
            .items_center()
            .gap_1()
            .text_size(px(13.0))
            .font_weight(gpui::FontWeight::MEDIUM)
            .text_color(AppColors::text_primary())
            .child(self.label)
            .when(self.show_info_icon, |el| {
                el.child(
                    div()
                        .text_color(AppColors::text_muted())
                        .child(Icon::new(IconName::Info).xsmall()),
                )
            })
            .children(arrow)
            .when(self.sortable, |el| el.cursor_pointer())
            .when_some(self.on_click, |el, handler| el.on_click(handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::column::ColumnDescriptor;

    #[test]
    fn label_is_description_verbatim() {
        let column = ColumnDescriptor::new("paid_at", "paid at (UTC)").sortable();
        let cell = HeaderCell {
            column: &column,
            direction: None,
            active: false,
        };
        let view = HeaderCellView::new(2, &cell);
        assert_eq!(view.label, "paid at (UTC)");
        assert!(view.sortable);
    }
}
