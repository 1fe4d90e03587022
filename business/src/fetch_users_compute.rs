//! Initial member list fetch.
//!
//! `FetchUsersCommand` performs the network read and publishes into `FetchUsersCompute`
//! through the `Updater`. The compute itself never does IO: computes may run implicitly,
//! commands only run when dispatched.
//!
//! Loaded users are parked in the compute until [`apply_fetched_users`](crate::apply_fetched_users)
//! moves them into the table state.

use std::any::{Any, TypeId};

use log::{error, info};
use roster_states::{Command, Compute, ComputeDeps, Dep, State, Updater};
use thiserror::Error;

use crate::{FetchState, RosterConfig, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed member list: {0}")]
    Decode(String),
}

/// Turn a raw response into the member list.
pub fn decode_users(status: u16, bytes: &[u8]) -> Result<Vec<User>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }
    serde_json::from_slice(bytes).map_err(|err| FetchError::Decode(err.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchUsersResult {
    /// Nothing dispatched yet.
    #[default]
    Idle,
    Pending,
    Loaded {
        count: usize,
    },
    Failed(FetchError),
}

#[derive(Debug, Default)]
pub struct FetchUsersCompute {
    pub result: FetchUsersResult,
    pending_users: Option<Vec<User>>,
}

impl FetchUsersCompute {
    pub fn loaded(users: Vec<User>) -> Self {
        Self {
            result: FetchUsersResult::Loaded { count: users.len() },
            pending_users: Some(users),
        }
    }

    pub fn pending() -> Self {
        Self {
            result: FetchUsersResult::Pending,
            pending_users: None,
        }
    }

    pub fn failed(err: FetchError) -> Self {
        Self {
            result: FetchUsersResult::Failed(err),
            pending_users: None,
        }
    }

    /// Hand the loaded users over. Returns `Some` at most once per fetch.
    pub fn take_users(&mut self) -> Option<Vec<User>> {
        self.pending_users.take()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.result, FetchUsersResult::Pending)
    }

    pub fn error(&self) -> Option<&FetchError> {
        match &self.result {
            FetchUsersResult::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl State for FetchUsersCompute {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Compute for FetchUsersCompute {
    fn deps(&self) -> ComputeDeps {
        Vec::<TypeId>::new()
    }

    // Filled by `FetchUsersCommand` only.
    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {}
}

/// Reads the member list from [`RosterConfig::source_url`].
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let url = deps
            .state::<RosterConfig>()
            .map(|config| config.source_url.clone())
            .unwrap_or_else(|| RosterConfig::DEFAULT_SOURCE_URL.to_owned());
        let Some(fetch) = deps.state::<FetchState>() else {
            error!("FetchUsersCommand: no FetchState registered");
            return;
        };

        info!("FetchUsersCommand: fetching members from {url}");
        updater.set(FetchUsersCompute::pending());

        let request = ehttp::Request::get(&url);
        fetch.inner.fetch(
            request,
            Box::new(move |result| {
                let decoded = result
                    .map_err(FetchError::Transport)
                    .and_then(|response| decode_users(response.status, &response.bytes));
                match decoded {
                    Ok(users) => {
                        info!("FetchUsersCommand: fetched {} members", users.len());
                        updater.set(FetchUsersCompute::loaded(users));
                    }
                    Err(err) => {
                        error!("FetchUsersCommand: {err}");
                        updater.set(FetchUsersCompute::failed(err));
                    }
                }
            }),
        );
    }
}
