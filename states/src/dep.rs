use std::any::TypeId;
use std::collections::BTreeMap;

use crate::ctx::{Entry, Slot};
use crate::{Compute, State};

/// Read-only view over the context handed to computes and commands.
#[derive(Debug, Clone, Copy)]
pub struct Dep<'a> {
    storage: &'a BTreeMap<TypeId, Entry>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(storage: &'a BTreeMap<TypeId, Entry>) -> Self {
        Self { storage }
    }

    /// Borrow a registered state (computes are states too).
    pub fn state<T: State>(&self) -> Option<&'a T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.slot.as_any().downcast_ref::<T>())
    }

    /// Borrow the cached value of a registered compute.
    pub fn compute<T: Compute>(&self) -> Option<&'a T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|entry| match &entry.slot {
                Slot::Compute(compute) => compute.as_any().downcast_ref::<T>(),
                Slot::State(_) => None,
            })
    }
}
