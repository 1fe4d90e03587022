//! Typed state container shared by the roster business and UI crates.
//!
//! - [`State`]: plain data owned by [`StateCtx`], mutated by the UI or commands.
//! - [`Compute`]: a derived value re-run whenever one of its dependencies is dirty.
//! - [`Command`]: a manually dispatched side effect (network IO and the like).
//!
//! Results of computes and commands travel back through an [`Updater`] channel and
//! are applied on the next [`StateCtx::sync_computes`].

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod runtime;
mod state;
mod state_sync_status;
mod updater;

pub use command::Command;
pub use compute::{Compute, ComputeDeps};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use runtime::StateRuntime;
pub use state::State;
pub use state_sync_status::StateSyncStatus;
pub use updater::Updater;
