//! Table components for the member table.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Header row with the select-all checkbox
//! - `row`: One member per row, in view or edit mode
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use egui::{Align, Layout, Ui};
use egui_extras::TableBuilder;
use roster_business::{TableAction, UserTableView};

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::render_user_row;

/// Renders the rows of the current page.
pub fn render_table(ui: &mut Ui, view: &UserTableView, actions: &mut Vec<TableAction>) {
    let mut builder = TableBuilder::new(ui)
        .id_salt("user_table")
        .striped(true)
        .resizable(false)
        .vscroll(false)
        .cell_layout(Layout::left_to_right(Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            if render_table_header(&mut header, view.select_all) {
                actions.push(TableAction::ToggleSelectAll);
            }
        })
        .body(|mut body| {
            for row_view in &view.rows {
                let editing = view
                    .editing
                    .as_ref()
                    .filter(|draft| draft.id == row_view.user.id);
                body.row(ROW_HEIGHT, |mut row| {
                    render_user_row(&mut row, row_view, editing, actions);
                });
            }
        });

    if view.rows.is_empty() {
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.weak("No users");
        });
    }
}
