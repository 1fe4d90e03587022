use crate::{EditField, PageNav, User, UserId, UserPatch};

/// Every transition the table accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableAction {
    /// Replace the working list with freshly fetched records.
    Loaded(Vec<User>),
    Search(String),
    ToggleRow(UserId),
    ToggleSelectAll,
    DeleteRow(UserId),
    DeleteSelected,
    BeginEdit(UserId),
    EditField(EditField, String),
    CommitEdit,
    CancelEdit,
    /// Programmatic partial edit of one record. `None` fields are kept and an empty
    /// patch does nothing. The table UI edits through `BeginEdit`/`CommitEdit`, and a
    /// commit is written through this same patch path.
    ApplyPatch(UserId, UserPatch),
    Page(PageNav),
}
