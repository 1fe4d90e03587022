use std::fmt::Debug;

use crate::{Dep, Updater};

/// A manual-only side effect.
///
/// Commands never run implicitly. They are executed by
/// [`StateCtx::dispatch`](crate::StateCtx::dispatch).
pub trait Command: Send + Sync + Debug + 'static {
    fn run(&self, deps: Dep<'_>, updater: Updater);
}
