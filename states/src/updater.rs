use std::any::TypeId;

use flume::Sender;
use log::warn;

use crate::{Compute, State};

/// A replacement value travelling from a compute or command back to the context.
#[derive(Debug)]
pub(crate) enum Update {
    State(Box<dyn State>),
    Compute(Box<dyn Compute>),
}

impl Update {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::State(state) => state.name(),
            Self::Compute(compute) => compute.name(),
        }
    }
}

/// Cloneable handle used by computes and commands to publish new values.
///
/// Values are queued and only become visible after
/// [`StateCtx::sync_computes`](crate::StateCtx::sync_computes). The handle is `Send`, so it can
/// be moved into IO callbacks running on other threads.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<(TypeId, Update)>,
}

impl Updater {
    pub(crate) fn new(send: Sender<(TypeId, Update)>) -> Self {
        Self { send }
    }

    /// Replace the cached value of compute `T`.
    pub fn set<T: Compute>(&self, value: T) {
        self.push(TypeId::of::<T>(), Update::Compute(Box::new(value)));
    }

    /// Replace state `T`.
    pub fn set_state<T: State>(&self, value: T) {
        self.push(TypeId::of::<T>(), Update::State(Box::new(value)));
    }

    fn push(&self, id: TypeId, update: Update) {
        let name = update.name();
        if self.send.send((id, update)).is_err() {
            // The context was dropped; nobody is left to observe the value.
            warn!("Dropping update for {name}: state context is gone");
        }
    }
}
