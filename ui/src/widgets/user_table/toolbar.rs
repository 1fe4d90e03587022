use egui::{Button, RichText, TextEdit, Ui};
use roster_business::{TableAction, UserTableView};

use crate::utils::colors::{COLOR_AMBER, COLOR_RED};

pub const SEARCH_HINT: &str = "Search by name, email or role";

/// Search box, bulk delete button and fetch indicator.
pub fn render_toolbar(
    ui: &mut Ui,
    mut search: String,
    view: &UserTableView,
    loading: bool,
    actions: &mut Vec<TableAction>,
) {
    ui.horizontal(|ui| {
        let search_box = ui.add(
            TextEdit::singleline(&mut search)
                .hint_text(SEARCH_HINT)
                .desired_width(280.0),
        );
        if search_box.changed() {
            actions.push(TableAction::Search(search));
        }

        let label = format!("Delete Selected ({})", view.selected_count);
        let delete = ui.add_enabled(
            view.selected_count > 0,
            Button::new(RichText::new(label).color(COLOR_RED)),
        );
        if delete.clicked() {
            actions.push(TableAction::DeleteSelected);
        }

        if loading {
            ui.spinner();
            ui.label(RichText::new("Loading users...").color(COLOR_AMBER));
        }
    });
}
