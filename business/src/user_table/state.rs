use std::any::Any;

use log::{debug, info, warn};
use roster_states::State;

use crate::user_table::{pagination, search};
use crate::{
    EditOutcome, EditPhase, SelectAllState, Selection, TableAction, User, UserDraft, UserId,
    UserPatch,
};

/// Working copy of the member table.
///
/// Only changed through [`UserTableState::reduce`] / [`UserTableState::apply`]; every
/// transition leaves `current_page` inside `1..=max(1, page_count)` and the selection a
/// subset of the ids in `users`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTableState {
    users: Vec<User>,
    selection: Selection,
    search: String,
    current_page: usize,
    edit: EditPhase,
    last_edit: Option<EditOutcome>,
}

impl Default for UserTableState {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            selection: Selection::default(),
            search: String::new(),
            current_page: 1,
            edit: EditPhase::Viewing,
            last_edit: None,
        }
    }
}

impl UserTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self::new().reduce(TableAction::Loaded(users))
    }

    pub fn reduce(mut self, action: TableAction) -> Self {
        self.apply(action);
        self
    }

    pub fn apply(&mut self, action: TableAction) {
        debug!("UserTableState: {action:?}");
        match action {
            TableAction::Loaded(users) => {
                self.users = users;
                let users = &self.users;
                self.selection.retain(|id| users.iter().any(|u| &u.id == id));
                let stale = self.edit.draft().is_some_and(|draft| !self.contains(&draft.id));
                if stale {
                    self.cancel_edit();
                }
            }
            TableAction::Search(term) => {
                self.search = term;
                self.current_page = 1;
            }
            TableAction::ToggleRow(id) => {
                if self.contains(&id) {
                    self.selection.toggle(id);
                }
            }
            TableAction::ToggleSelectAll => {
                let scope: Vec<_> = self.filtered().iter().map(|user| user.id).collect();
                if SelectAllState::of(&self.selection, &scope).is_checked() {
                    for id in &scope {
                        self.selection.remove(id);
                    }
                } else {
                    self.selection.extend(scope);
                }
            }
            TableAction::DeleteRow(id) => {
                self.users.retain(|user| user.id != id);
                self.selection.remove(&id);
                if self.edit.is_editing(&id) {
                    self.cancel_edit();
                }
            }
            TableAction::DeleteSelected => {
                if self.selection.is_empty() {
                    return;
                }
                let before = self.users.len();
                let selection = &self.selection;
                self.users.retain(|user| !selection.contains(&user.id));
                if self
                    .edit
                    .draft()
                    .is_some_and(|draft| self.selection.contains(&draft.id))
                {
                    self.cancel_edit();
                }
                self.selection.clear();
                info!("Deleted {} selected members", before - self.users.len());
            }
            TableAction::BeginEdit(id) => {
                if let Some(user) = self.users.iter().find(|user| user.id == id) {
                    self.edit = EditPhase::Editing(UserDraft::of(user));
                }
            }
            TableAction::EditField(field, value) => {
                if let EditPhase::Editing(draft) = &mut self.edit {
                    draft.set(field, value);
                }
            }
            TableAction::CommitEdit => {
                let EditPhase::Editing(draft) = std::mem::take(&mut self.edit) else {
                    return;
                };
                let (id, patch) = draft.into_patch();
                if self.patch_user(&id, patch) {
                    self.last_edit = Some(EditOutcome::Committed(id));
                } else {
                    warn!("Dropping edit of {id}: record no longer exists");
                    self.last_edit = Some(EditOutcome::Cancelled(id));
                }
            }
            TableAction::CancelEdit => self.cancel_edit(),
            TableAction::ApplyPatch(id, patch) => {
                if !patch.is_empty() {
                    self.patch_user(&id, patch);
                }
            }
            TableAction::Page(nav) => {
                self.current_page = nav.resolve(self.current_page, self.page_count());
            }
        }
        self.current_page = pagination::clamp_page(self.current_page, self.page_count());
    }

    /// Returns false when no record has `id`.
    fn patch_user(&mut self, id: &UserId, patch: UserPatch) -> bool {
        match self.users.iter_mut().find(|user| &user.id == id) {
            Some(user) => {
                patch.apply_to(user);
                true
            }
            None => false,
        }
    }

    fn cancel_edit(&mut self) {
        if let EditPhase::Editing(draft) = std::mem::take(&mut self.edit) {
            self.last_edit = Some(EditOutcome::Cancelled(draft.id));
        }
    }

    fn contains(&self, id: &UserId) -> bool {
        self.users.iter().any(|user| &user.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn edit(&self) -> &EditPhase {
        &self.edit
    }

    pub fn last_edit(&self) -> Option<EditOutcome> {
        self.last_edit
    }

    /// Records matching the current search term.
    pub fn filtered(&self) -> Vec<&User> {
        search::filter(&self.users, &self.search)
    }

    pub fn page_count(&self) -> usize {
        pagination::page_count(self.filtered().len())
    }

    /// Rows of the current page.
    pub fn visible(&self) -> Vec<&User> {
        let filtered = self.filtered();
        let range = pagination::page_range(self.current_page, filtered.len());
        filtered[range].to_vec()
    }

    pub fn select_all(&self) -> SelectAllState {
        SelectAllState::of(&self.selection, self.filtered().into_iter().map(|user| &user.id))
    }
}

impl State for UserTableState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
