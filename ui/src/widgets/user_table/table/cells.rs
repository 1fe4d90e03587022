//! Cell rendering functions for the member table.

use egui::{Button, Checkbox, RichText, TextEdit, Ui};
use roster_business::{EditField, TableAction, UserDraft, UserId};

use crate::utils::colors::COLOR_RED;

/// Row checkbox. Returns `true` when toggled.
#[inline]
pub fn render_select_cell(ui: &mut Ui, selected: bool) -> bool {
    let mut checked = selected;
    ui.add(Checkbox::without_text(&mut checked)).changed()
}

#[inline]
pub fn render_id_cell(ui: &mut Ui, id: UserId) {
    ui.label(RichText::new(id.to_string()).monospace());
}

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Inline editor for one draft field. Returns the new value when it changed.
#[inline]
pub fn render_edit_cell(ui: &mut Ui, draft: &UserDraft, field: EditField) -> Option<String> {
    let mut value = draft.get(field).to_owned();
    let response = ui.add(
        TextEdit::singleline(&mut value)
            .hint_text(field.label())
            .desired_width(f32::INFINITY),
    );
    response.changed().then_some(value)
}

/// Edit and delete buttons of a row in view mode.
#[inline]
pub fn render_view_actions(ui: &mut Ui, id: UserId) -> Option<TableAction> {
    let mut action = None;
    if ui.button("✏").on_hover_text("Edit").clicked() {
        action = Some(TableAction::BeginEdit(id));
    }
    if ui
        .add(Button::new(RichText::new("🗑").color(COLOR_RED)))
        .on_hover_text("Delete")
        .clicked()
    {
        action = Some(TableAction::DeleteRow(id));
    }
    action
}

/// Save and cancel buttons of the row under edit.
#[inline]
pub fn render_edit_actions(ui: &mut Ui) -> Option<TableAction> {
    let mut action = None;
    if ui.button("Save").clicked() {
        action = Some(TableAction::CommitEdit);
    }
    if ui.button("Cancel").clicked() {
        action = Some(TableAction::CancelEdit);
    }
    action
}
