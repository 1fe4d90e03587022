//! Integration tests for search, selection, edit and delete.
//!
//! Clicks inside egui_extras `TableBuilder` rows do not reach the widgets under
//! egui_kittest, so row-level interactions go through `UserTableState` directly and
//! the tests assert on what is rendered afterwards. Controls outside the table, such as
//! the search box and the pager, are driven through the UI.

mod common;

use crate::common::{TestCtx, members, step_frames};
use egui::accesskit::Role;
use egui_kittest::Harness;
use kittest::Queryable;
use roster_business::{
    EditField, SelectAllState, TableAction, UserId, UserTableState, UserTableView,
};
use roster_ui::RosterApp;

fn apply(harness: &mut Harness<'_, RosterApp>, actions: Vec<TableAction>) {
    harness
        .state_mut()
        .state
        .ctx
        .update::<UserTableState, _>(|state| {
            for action in actions {
                state.apply(action);
            }
        })
        .unwrap();
    step_frames(harness, 3);
}

fn table<'a>(harness: &'a Harness<'_, RosterApp>) -> &'a UserTableState {
    harness.state().state.ctx.state::<UserTableState>().unwrap()
}

#[tokio::test]
async fn test_search_filters_rows_and_resets_page() {
    let mut ctx = TestCtx::new_app(members(25)).await;
    let harness = ctx.harness_mut();

    harness.get_by_label("Next").click();
    step_frames(harness, 3);

    assert!(harness.query_by_label("Page 2 of 3").is_some());

    harness.get_by_role(Role::TextInput).type_text("ADMIN");
    step_frames(harness, 3);

    assert_eq!(table(harness).search(), "ADMIN");
    // Every third member is an admin: 3, 6, ..., 24.
    assert!(harness.query_by_label("Page 1 of 1").is_some());
    assert!(harness.query_by_label_contains("Member 03").is_some());
    assert!(harness.query_by_label_contains("Member 24").is_some());
    assert!(harness.query_by_label_contains("Member 01").is_none());
}

#[tokio::test]
async fn test_bulk_delete_selected_rows() {
    let mut ctx = TestCtx::new_app(members(12)).await;
    let harness = ctx.harness_mut();

    apply(
        harness,
        vec![
            TableAction::ToggleRow(UserId::from("1")),
            TableAction::ToggleRow(UserId::from("12")),
        ],
    );

    harness.get_by_label("Delete Selected (2)").click();
    step_frames(harness, 3);

    let state = table(harness);
    assert_eq!(state.users().len(), 10);
    assert!(state.selection().is_empty());
    assert!(harness.query_by_label("Page 1 of 1").is_some());
    assert!(harness.query_by_label_contains("Member 01").is_none());
    assert!(harness.query_by_label("Delete Selected (0)").is_some());
}

#[tokio::test]
async fn test_select_all_then_delete_row() {
    let mut ctx = TestCtx::new_app(members(2)).await;
    let harness = ctx.harness_mut();

    apply(
        harness,
        vec![
            TableAction::ToggleSelectAll,
            TableAction::DeleteRow(UserId::from("1")),
        ],
    );

    let view = harness.state().state.ctx.cached::<UserTableView>().unwrap();
    assert_eq!(view.selected_count, 1);
    assert_eq!(view.select_all, SelectAllState::Checked);
    assert!(harness.query_by_label("Delete Selected (1)").is_some());
    assert!(harness.query_by_label_contains("Member 01").is_none());
    assert!(harness.query_by_label_contains("Member 02").is_some());
}

#[tokio::test]
async fn test_inline_edit_commits_on_save() {
    let mut ctx = TestCtx::new_app(members(3)).await;
    let harness = ctx.harness_mut();

    apply(harness, vec![TableAction::BeginEdit(UserId::from("2"))]);
    assert!(harness.query_by_label("Save").is_some());
    assert!(harness.query_by_label("Cancel").is_some());

    apply(
        harness,
        vec![
            TableAction::EditField(EditField::Name, "Renamed Member".to_owned()),
            TableAction::CommitEdit,
        ],
    );

    assert!(harness.query_by_label("Save").is_none());
    assert!(harness.query_by_label_contains("Renamed Member").is_some());
    assert!(harness.query_by_label_contains("Member 02").is_none());
}
