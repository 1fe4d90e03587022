use egui::{Button, Ui};
use roster_business::{PageNav, TableAction, UserTableView};

/// First / previous / numbered pages / next / last, followed by the page label.
pub fn render_pagination(ui: &mut Ui, view: &UserTableView, actions: &mut Vec<TableAction>) {
    let current = view.current_page;
    let last = view.page_count.max(1);

    ui.horizontal(|ui| {
        let mut nav = None;

        if ui.add_enabled(current > 1, Button::new("First")).clicked() {
            nav = Some(PageNav::First);
        }
        if ui.add_enabled(current > 1, Button::new("Previous")).clicked() {
            nav = Some(PageNav::Previous);
        }
        for page in 1..=view.page_count {
            if ui
                .add(Button::new(page.to_string()).selected(page == current))
                .clicked()
            {
                nav = Some(PageNav::To(page));
            }
        }
        if ui.add_enabled(current < last, Button::new("Next")).clicked() {
            nav = Some(PageNav::Next);
        }
        if ui.add_enabled(current < last, Button::new("Last")).clicked() {
            nav = Some(PageNav::Last);
        }

        ui.separator();
        ui.label(view.page_label());

        if let Some(nav) = nav {
            actions.push(TableAction::Page(nav));
        }
    });
}
