//! Row rendering for the member table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use roster_business::{EditField, TableAction, TableRowView, UserDraft};

use super::cells::{
    render_edit_actions, render_edit_cell, render_id_cell, render_select_cell, render_text_cell,
    render_view_actions,
};

/// Renders one member. `editing` is the draft when this row is under edit.
///
/// Selected rows are highlighted.
#[inline]
pub fn render_user_row(
    row: &mut TableRow<'_, '_>,
    data: &TableRowView,
    editing: Option<&UserDraft>,
    actions: &mut Vec<TableAction>,
) {
    let id = data.user.id;
    row.set_selected(data.selected);

    row.col(|ui| {
        if render_select_cell(ui, data.selected) {
            actions.push(TableAction::ToggleRow(id));
        }
        draw_cell_bottom_border(ui);
    });

    row.col(|ui| {
        render_id_cell(ui, id);
        draw_cell_bottom_border(ui);
    });

    for field in EditField::ALL {
        row.col(|ui| {
            match editing {
                Some(draft) => {
                    if let Some(value) = render_edit_cell(ui, draft, field) {
                        actions.push(TableAction::EditField(field, value));
                    }
                }
                None => render_text_cell(ui, field_value(data, field)),
            }
            draw_cell_bottom_border(ui);
        });
    }

    row.col(|ui| {
        let action = if editing.is_some() {
            render_edit_actions(ui)
        } else {
            render_view_actions(ui, id)
        };
        actions.extend(action);
        draw_cell_bottom_border(ui);
    });
}

fn field_value(data: &TableRowView, field: EditField) -> &str {
    match field {
        EditField::Name => &data.user.name,
        EditField::Email => &data.user.email,
        EditField::Role => &data.user.role,
    }
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
