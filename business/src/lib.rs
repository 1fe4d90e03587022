//! Domain layer of the roster table: user records, the table reducer, the derived view and the
//! one-shot fetch of the member list.
//!
//! UI code only reads [`UserTableView`] via `ctx.cached::<UserTableView>()` and feeds
//! [`TableAction`]s back through [`UserTableState::apply`].

mod config;
mod fetch_service;
mod fetch_users_compute;
mod user;
pub mod user_table;

pub use config::RosterConfig;
pub use fetch_service::{EhttpFetcher, FetchService, FetchState};
#[cfg(test)]
pub use fetch_service::MockFetcher;
pub use fetch_users_compute::{
    FetchError, FetchUsersCommand, FetchUsersCompute, FetchUsersResult, decode_users,
};
pub use user::{User, UserId};
pub use user_table::{
    EditField, EditOutcome, EditPhase, PAGE_SIZE, PageNav, SelectAllState, Selection,
    TableAction, TableRowView, UserDraft, UserPatch, UserTableState, UserTableView,
    apply_fetched_users,
};

use roster_states::StateCtx;

/// Register every state, compute and command the table needs.
pub fn register(ctx: &mut StateCtx, config: RosterConfig, fetch: FetchState) {
    ctx.add_state(config);
    ctx.add_state(fetch);
    ctx.add_state(UserTableState::new());
    ctx.record_compute(UserTableView::default());
    ctx.record_compute(FetchUsersCompute::default());
    ctx.record_command(FetchUsersCommand);
}
