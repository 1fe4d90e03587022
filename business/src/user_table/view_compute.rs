use std::any::{Any, TypeId};

use roster_states::{Compute, ComputeDeps, Dep, State, Updater};

use crate::{SelectAllState, User, UserDraft, UserTableState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRowView {
    pub user: User,
    pub selected: bool,
}

/// What the table renders this frame, derived from [`UserTableState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTableView {
    pub rows: Vec<TableRowView>,
    pub filtered_count: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub select_all: SelectAllState,
    pub selected_count: usize,
    pub editing: Option<UserDraft>,
}

impl Default for UserTableView {
    fn default() -> Self {
        Self::of(&UserTableState::default())
    }
}

impl UserTableView {
    pub fn of(state: &UserTableState) -> Self {
        let selection = state.selection();
        let rows = state
            .visible()
            .into_iter()
            .map(|user| TableRowView {
                user: user.clone(),
                selected: selection.contains(&user.id),
            })
            .collect();

        Self {
            rows,
            filtered_count: state.filtered().len(),
            page_count: state.page_count(),
            current_page: state.current_page(),
            select_all: state.select_all(),
            selected_count: selection.len(),
            editing: state.edit().draft().cloned(),
        }
    }

    /// Label shown next to the pagination controls.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.page_count)
    }
}

impl State for UserTableView {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for UserTableView {
    fn deps(&self) -> ComputeDeps {
        vec![TypeId::of::<UserTableState>()]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let Some(state) = deps.state::<UserTableState>() else {
            return;
        };
        updater.set(Self::of(state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PageNav, TableAction, UserId};
    use roster_states::StateCtx;

    fn ctx(users: Vec<User>) -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(UserTableState::with_users(users));
        ctx.record_compute(UserTableView::default());
        ctx
    }

    fn users(n: i64) -> Vec<User> {
        (1..=n)
            .map(|i| User::new(i, format!("User {i}"), format!("user{i}@x.io"), "member"))
            .collect()
    }

    #[test]
    fn view_follows_state_changes() {
        let mut ctx = ctx(users(25));
        ctx.run_computed();

        let view = ctx.cached::<UserTableView>().unwrap();
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.page_count, 3);
        assert_eq!(view.page_label(), "Page 1 of 3");

        ctx.update::<UserTableState, _>(|s| {
            s.apply(TableAction::Page(PageNav::Last));
            s.apply(TableAction::ToggleRow(UserId::Number(21)));
        })
        .unwrap();
        ctx.run_computed();

        let view = ctx.cached::<UserTableView>().unwrap();
        assert_eq!(view.current_page, 3);
        assert_eq!(view.rows.len(), 5);
        assert!(view.rows[0].selected);
        assert!(!view.rows[1].selected);
        assert_eq!(view.selected_count, 1);
        assert_eq!(view.select_all, SelectAllState::Indeterminate);
    }

    #[test]
    fn empty_view() {
        let view = UserTableView::default();

        assert!(view.rows.is_empty());
        assert_eq!(view.filtered_count, 0);
        assert_eq!(view.page_label(), "Page 1 of 0");
        assert!(view.editing.is_none());
    }
}
