use egui::{Frame, Margin, Response, Stroke, Ui};
use log::error;
use roster_business::{FetchUsersCompute, TableAction, UserTableState, UserTableView};
use roster_states::StateCtx;

use super::pagination::render_pagination;
use super::table::render_table;
use super::toolbar::render_toolbar;
use crate::utils::colors::TABLE_BORDER_COLOR;

/// Displays the member table: toolbar, current page of rows and pagination controls.
///
/// Interactions are collected while rendering and reduced into [`UserTableState`] afterwards.
pub fn user_table_panel(state_ctx: &mut StateCtx, ui: &mut Ui) -> Response {
    let view = state_ctx
        .cached::<UserTableView>()
        .cloned()
        .unwrap_or_default();
    let search = state_ctx
        .state::<UserTableState>()
        .map(|state| state.search().to_owned())
        .unwrap_or_default();
    let loading = state_ctx
        .cached::<FetchUsersCompute>()
        .is_some_and(FetchUsersCompute::is_loading);

    // Collect actions (avoiding borrow issues)
    let mut actions: Vec<TableAction> = Vec::new();

    let response = ui
        .vertical(|ui| {
            render_toolbar(ui, search, &view, loading, &mut actions);
            ui.add_space(8.0);

            Frame::NONE
                .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
                .inner_margin(Margin::symmetric(4, 4))
                .show(ui, |ui| {
                    render_table(ui, &view, &mut actions);
                });

            ui.add_space(8.0);
            render_pagination(ui, &view, &mut actions);
        })
        .response;

    if !actions.is_empty() {
        let applied = state_ctx.update::<UserTableState, _>(|state| {
            for action in actions {
                state.apply(action);
            }
        });
        if let Err(err) = applied {
            error!("Cannot apply table actions: {err}");
        }
        ui.ctx().request_repaint();
    }

    response
}
