use std::any::TypeId;

use crate::{Dep, State, Updater};

/// Type ids of the states and computes a compute reads.
pub type ComputeDeps = Vec<TypeId>;

/// A derived value.
///
/// `compute` is called by [`StateCtx::run_computed`](crate::StateCtx::run_computed) when the
/// compute has never run or one of its dependencies changed. It must not perform IO: publish the
/// new value through `updater.set(..)` instead.
pub trait Compute: State {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);
}
