//! The member table: search, pagination, selection, inline edit and delete, all in memory.

mod action;
mod edit;
mod pagination;
mod search;
mod selection;
mod state;
mod view_compute;

use log::info;
use roster_states::StateCtx;

pub use action::TableAction;
pub use edit::{EditField, EditOutcome, EditPhase, UserDraft, UserPatch};
pub use pagination::{PAGE_SIZE, PageNav, clamp_page, page_count, page_range};
pub use search::{filter, matches};
pub use selection::{SelectAllState, Selection};
pub use state::UserTableState;
pub use view_compute::{TableRowView, UserTableView};

use crate::FetchUsersCompute;

/// Move users delivered by the fetch into the table. Returns whether anything was applied.
///
/// Call after [`StateCtx::sync_computes`]; a given fetch result is applied once.
pub fn apply_fetched_users(ctx: &mut StateCtx) -> bool {
    let has_users = ctx
        .cached::<FetchUsersCompute>()
        .is_some_and(|fetch| matches!(fetch.result, crate::FetchUsersResult::Loaded { .. }));
    if !has_users {
        return false;
    }

    let Ok(Some(users)) = ctx.update::<FetchUsersCompute, _>(FetchUsersCompute::take_users) else {
        return false;
    };
    info!("Loading {} members into the table", users.len());
    ctx.update::<UserTableState, _>(|state| state.apply(TableAction::Loaded(users)))
        .is_ok()
}
