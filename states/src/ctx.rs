use std::any::{Any, TypeId, type_name};
use std::collections::{BTreeMap, BTreeSet};

use log::{debug, error, warn};

use crate::updater::Update;
use crate::{
    Command, Compute, Dep, Error, State, StateRuntime, StateSyncStatus, TopologyError, Updater,
};

#[derive(Debug)]
pub(crate) enum Slot {
    State(Box<dyn State>),
    Compute(Box<dyn Compute>),
}

impl Slot {
    pub(crate) fn as_any(&self) -> &dyn Any {
        match self {
            Self::State(state) => state.as_any(),
            Self::Compute(compute) => compute.as_any(),
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        match self {
            Self::State(state) => state.as_any_mut(),
            Self::Compute(compute) => compute.as_any_mut(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) slot: Slot,
    status: StateSyncStatus,
}

impl Entry {
    fn new(slot: Slot) -> Self {
        Self {
            slot,
            status: StateSyncStatus::Init,
        }
    }
}

/// Owner of every state, compute and command of the application.
#[derive(Debug, Default)]
pub struct StateCtx {
    runtime: StateRuntime,

    storage: BTreeMap<TypeId, Entry>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage
            .insert(TypeId::of::<T>(), Entry::new(Slot::State(Box::new(state))));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.runtime.record(id, type_name::<T>(), &compute.deps());
        self.storage
            .insert(id, Entry::new(Slot::Compute(Box::new(compute))));
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(TypeId::of::<T>(), Box::new(command));
    }

    pub fn state<T: State>(&self) -> Option<&T> {
        Dep::new(&self.storage).state::<T>()
    }

    /// Mutable access to a state. The state is marked dirty, so computes reading it re-run.
    pub fn state_mut<T: State>(&mut self) -> Option<&mut T> {
        let entry = self.storage.get_mut(&TypeId::of::<T>())?;
        entry.status = StateSyncStatus::Dirty;
        entry.slot.as_any_mut().downcast_mut::<T>()
    }

    pub fn update<T: State, R>(&mut self, f: impl FnOnce(&mut T) -> R) -> Result<R, Error> {
        self.state_mut::<T>()
            .map(f)
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// Latest value of a compute.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        Dep::new(&self.storage).compute::<T>()
    }

    pub fn status<T: State>(&self) -> Option<StateSyncStatus> {
        self.storage.get(&TypeId::of::<T>()).map(|entry| entry.status)
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    pub fn verify_deps(&self) -> Result<(), TopologyError<TypeId>> {
        self.runtime.verify_deps().map(|_| ())
    }

    /// Run a command right away.
    pub fn dispatch<T: Command>(&self) -> Result<(), Error> {
        let command = self
            .commands
            .get(&TypeId::of::<T>())
            .ok_or_else(Error::command_not_found::<T>)?;
        debug!("Dispatching {}", type_name::<T>());
        command.run(Dep::new(&self.storage), self.runtime.updater());
        Ok(())
    }

    /// Apply every value published through an [`Updater`] since the last call.
    ///
    /// Returns how many values were applied.
    pub fn sync_computes(&mut self) -> usize {
        let mut applied = 0;
        for (id, update) in self.runtime.drain() {
            let Some(entry) = self.storage.get_mut(&id) else {
                warn!("Dropping update for unregistered {}", update.name());
                continue;
            };
            match (&mut entry.slot, update) {
                (Slot::Compute(slot), Update::Compute(value)) => *slot = value,
                (Slot::State(slot), Update::State(value)) => *slot = value,
                (_, update) => {
                    warn!("Dropping update for {}: kind mismatch", update.name());
                    continue;
                }
            }
            entry.status = StateSyncStatus::Dirty;
            applied += 1;
        }
        applied
    }

    /// Re-run computes that never ran or whose dependencies changed, in dependency order,
    /// then apply their results.
    pub fn run_computed(&mut self) {
        let order = match self.runtime.verify_deps() {
            Ok(order) => order,
            Err(err) => {
                error!("Skipping compute run: {err}");
                return;
            }
        };

        let dirty: BTreeSet<TypeId> = self
            .storage
            .iter()
            .filter(|(_, entry)| entry.status == StateSyncStatus::Dirty)
            .map(|(id, _)| *id)
            .collect();
        let affected = self.runtime.affected(&dirty);
        let updater = self.runtime.updater();

        for id in order {
            let Some(entry) = self.storage.get(&id) else {
                continue;
            };
            let Slot::Compute(compute) = &entry.slot else {
                continue;
            };
            if entry.status == StateSyncStatus::Init || affected.contains(&id) {
                debug!("Running compute {}", compute.name());
                compute.compute(Dep::new(&self.storage), updater.clone());
            }
        }

        for entry in self.storage.values_mut() {
            entry.status = StateSyncStatus::Clean;
        }

        self.sync_computes();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Counter(i32);

    impl State for Counter {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[derive(Debug, Default)]
    struct Doubled {
        value: i32,
        runs: usize,
    }

    impl State for Doubled {
        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    impl Compute for Doubled {
        fn deps(&self) -> crate::ComputeDeps {
            vec![TypeId::of::<Counter>()]
        }

        fn compute(&self, deps: Dep<'_>, updater: Updater) {
            let Some(counter) = deps.state::<Counter>() else {
                return;
            };
            updater.set(Doubled {
                value: counter.0 * 2,
                runs: self.runs + 1,
            });
        }
    }

    #[derive(Debug)]
    struct ResetCounter;

    impl Command for ResetCounter {
        fn run(&self, _deps: Dep<'_>, updater: Updater) {
            updater.set_state(Counter(100));
        }
    }

    fn ctx() -> StateCtx {
        let mut ctx = StateCtx::new();
        ctx.add_state(Counter(1));
        ctx.record_compute(Doubled::default());
        ctx
    }

    #[test]
    fn compute_runs_on_first_pass() {
        let mut ctx = ctx();
        ctx.run_computed();

        let doubled = ctx.cached::<Doubled>().unwrap();
        assert_eq!(doubled.value, 2);
        assert_eq!(doubled.runs, 1);
    }

    #[test]
    fn compute_reruns_only_when_dependency_is_dirty() {
        let mut ctx = ctx();
        ctx.run_computed();
        ctx.run_computed();
        assert_eq!(ctx.cached::<Doubled>().unwrap().runs, 1);

        ctx.update::<Counter, _>(|c| c.0 = 5).unwrap();
        assert_eq!(ctx.status::<Counter>(), Some(StateSyncStatus::Dirty));
        ctx.run_computed();

        let doubled = ctx.cached::<Doubled>().unwrap();
        assert_eq!(doubled.value, 10);
        assert_eq!(doubled.runs, 2);
    }

    #[test]
    fn dispatched_command_applies_on_sync() {
        let mut ctx = ctx();
        ctx.record_command(ResetCounter);

        ctx.dispatch::<ResetCounter>().unwrap();
        assert_eq!(ctx.state::<Counter>().unwrap().0, 1);

        assert_eq!(ctx.sync_computes(), 1);
        assert_eq!(ctx.state::<Counter>().unwrap().0, 100);

        ctx.run_computed();
        assert_eq!(ctx.cached::<Doubled>().unwrap().value, 200);
    }

    #[test]
    fn missing_registrations_are_errors() {
        let mut ctx = StateCtx::new();

        assert_eq!(
            ctx.dispatch::<ResetCounter>(),
            Err(Error::command_not_found::<ResetCounter>())
        );
        assert_eq!(
            ctx.update::<Counter, _>(|c| c.0 += 1),
            Err(Error::state_not_found::<Counter>())
        );
        assert!(ctx.cached::<Doubled>().is_none());
    }

    #[test]
    fn updates_for_unregistered_types_are_dropped() {
        let mut ctx = StateCtx::new();
        ctx.updater().set_state(Counter(3));

        assert_eq!(ctx.sync_computes(), 0);
        assert!(ctx.state::<Counter>().is_none());
    }

    #[test]
    fn compute_is_also_readable_as_state() {
        let mut ctx = ctx();
        ctx.run_computed();

        assert_eq!(ctx.state::<Doubled>().unwrap().value, 2);
    }
}
