//! Table header rendering for the member table.

use egui::{Checkbox, Ui};
use egui_extras::TableRow;
use roster_business::SelectAllState;

/// Header labels after the select-all column.
const HEADERS: [&str; 5] = ["ID", "Name", "Email", "Role", "Actions"];

/// Renders the header row. Returns `true` when the select-all checkbox was clicked.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, select_all: SelectAllState) -> bool {
    let mut clicked = false;
    header.col(|ui| {
        let mut checked = select_all.is_checked();
        let checkbox =
            Checkbox::without_text(&mut checked).indeterminate(select_all.is_indeterminate());
        clicked = ui.add(checkbox).on_hover_text("Select all").clicked();
    });
    for label in HEADERS {
        header.col(|ui| {
            render_header_cell(ui, label);
        });
    }
    clicked
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.strong(label);
}
