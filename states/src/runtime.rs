use std::any::TypeId;
use std::collections::BTreeSet;

use flume::{Receiver, Sender};
use log::warn;

use crate::updater::Update;
use crate::{Graph, TopologyError, Updater};

/// Update channel plus the compute dependency graph.
#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<(TypeId, Update)>,
    recv: Receiver<(TypeId, Update)>,

    graph: Graph<TypeId>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            graph: Graph::new(),
        }
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub(crate) fn drain(&self) -> Vec<(TypeId, Update)> {
        self.recv.try_iter().collect()
    }

    pub fn record(&mut self, id: TypeId, name: &str, deps: &[TypeId]) {
        self.graph.add_node(id);
        for dep in deps {
            if let Err(err) = self.graph.route_to(*dep, id) {
                warn!("{name}: {err}");
            }
        }
    }

    /// Topological order of every registered node.
    pub fn verify_deps(&self) -> Result<Vec<TypeId>, TopologyError<TypeId>> {
        self.graph.topology_sort()
    }

    /// Computes that must re-run because one of `dirty` changed.
    pub fn affected(&self, dirty: &BTreeSet<TypeId>) -> BTreeSet<TypeId> {
        dirty
            .iter()
            .flat_map(|id| self.graph.dependents(*id))
            .collect()
    }
}
