use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
    #[error("Duplicate edge detected in dependency graph, {:?}", .0)]
    DuplicateEdge(DepRoute<T>),
}

/// A path through the graph, first element is the start node.
pub struct DepRoute<T> {
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph. An edge `from -> to` means `to` reads `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    nodes: BTreeSet<Node>,
    edges: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Register a node without edges, so it shows up in the topological order.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    pub fn route_to(&mut self, from: Node, to: Node) -> Result<(), TopologyError<Node>> {
        self.nodes.insert(from);
        self.nodes.insert(to);
        if self.edges.entry(from).or_default().insert(to) {
            Ok(())
        } else {
            Err(TopologyError::DuplicateEdge(DepRoute {
                route: vec![from, to],
            }))
        }
    }

    fn direct(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges.get(&node).into_iter().flatten().copied()
    }

    /// Kahn's algorithm. Every node appears after all nodes it depends on.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> = self.nodes.iter().map(|n| (*n, 0)).collect();
        for targets in self.edges.values() {
            for to in targets {
                *in_degree.entry(*to).or_default() += 1;
            }
        }

        let mut ready: VecDeque<Node> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut order = Vec::with_capacity(self.nodes.len());

        while let Some(node) = ready.pop_front() {
            order.push(node);
            for next in self.direct(node) {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(next);
                    }
                }
            }
        }

        if order.len() == self.nodes.len() {
            return Ok(order);
        }

        let placed: BTreeSet<Node> = order.into_iter().collect();
        let remaining: Vec<Node> = self.nodes.difference(&placed).copied().collect();
        let route = self.find_cycle(&remaining).unwrap_or(remaining);
        Err(TopologyError::CycleDetected(DepRoute { route }))
    }

    fn find_cycle(&self, candidates: &[Node]) -> Option<Vec<Node>> {
        let mut done = BTreeSet::new();
        for &start in candidates {
            let mut path = Vec::new();
            if let Some(cycle) = self.walk(start, &mut path, &mut done) {
                return Some(cycle);
            }
        }
        None
    }

    fn walk(
        &self,
        node: Node,
        path: &mut Vec<Node>,
        done: &mut BTreeSet<Node>,
    ) -> Option<Vec<Node>> {
        if let Some(pos) = path.iter().position(|n| *n == node) {
            let mut cycle = path[pos..].to_vec();
            cycle.push(node);
            return Some(cycle);
        }
        if done.contains(&node) {
            return None;
        }

        path.push(node);
        for next in self.direct(node) {
            if let Some(cycle) = self.walk(next, path, done) {
                return Some(cycle);
            }
        }
        path.pop();
        done.insert(node);
        None
    }

    /// Every node that transitively depends on `node`, excluding `node` itself
    /// unless it sits on a cycle.
    pub fn dependents(&self, node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for next in self.direct(current) {
                if collected.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        collected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_sort_orders_dependencies_first() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2).unwrap();
        graph.route_to(2, 3).unwrap();
        graph.route_to(1, 3).unwrap();
        graph.add_node(7);

        let order = graph.topology_sort().unwrap();
        let pos = |n: u32| order.iter().position(|x| *x == n).unwrap();

        assert_eq!(order.len(), 4);
        assert!(pos(1) < pos(2));
        assert!(pos(2) < pos(3));
        assert!(order.contains(&7));
    }

    #[test]
    fn cycle_is_reported_as_closed_route() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2).unwrap();
        graph.route_to(2, 3).unwrap();
        graph.route_to(3, 1).unwrap();

        match graph.topology_sort() {
            Err(TopologyError::CycleDetected(route)) => {
                let nodes = route.nodes();
                assert_eq!(nodes.first(), nodes.last());
                assert_eq!(nodes.len(), 4);

                let message = TopologyError::CycleDetected(route).to_string();
                assert!(message.contains("Cycle detected"));
                assert!(message.contains("->"));
            }
            other => panic!("Expected CycleDetected, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_edge_is_rejected() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2).unwrap();

        let err = graph.route_to(1, 2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Duplicate edge detected in dependency graph, 1 -> 2"
        );
    }

    #[test]
    fn dependents_are_transitive() {
        let mut graph: Graph<u32> = Graph::new();
        graph.route_to(1, 2).unwrap();
        graph.route_to(2, 3).unwrap();
        graph.route_to(4, 3).unwrap();

        assert_eq!(graph.dependents(1), BTreeSet::from([2, 3]));
        assert_eq!(graph.dependents(4), BTreeSet::from([3]));
        assert!(graph.dependents(3).is_empty());
    }

    #[test]
    fn empty_route_debug() {
        let route: DepRoute<u32> = DepRoute { route: vec![] };
        assert_eq!(format!("{route:?}"), "[]");
    }
}
