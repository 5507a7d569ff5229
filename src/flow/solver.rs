//! Min-cost max-flow solving.
//!
//! The roster engine consumes min-cost flow as a capability through the
//! [`FlowSolver`] trait: given a network and its (source, sink) pair,
//! return the active arcs of a minimum-cost maximum flow. The contract
//! required of an implementation is optimality (minimum total cost among
//! all maximum flows) and termination on finite graphs with integral
//! capacities.
//!
//! [`SuccessiveShortestPaths`] is the shipped implementation: repeated
//! cheapest augmenting paths over the residual network until no improving
//! path remains. Path search is Bellman–Ford with a work queue (residual
//! reverse arcs carry negative costs); each augmentation pushes the path
//! bottleneck and pays `bottleneck × path cost`.
//!
//! # Reference
//! Ahuja, Magnanti, Orlin (1993), "Network Flows", Ch. 9.7

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::network::{FlowNetwork, NodeId};

/// An arc carrying positive flow in the solved network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcFlow {
    pub from: NodeId,
    pub to: NodeId,
    /// Units of flow on the arc.
    pub flow: i64,
    /// Per-unit cost of the arc.
    pub cost: i64,
}

/// The solved flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowOutcome {
    /// Total flow from source to sink.
    pub value: i64,
    /// Total cost of that flow.
    pub cost: i64,
    /// Arcs with positive flow, in the network's arc order.
    pub active: Vec<ArcFlow>,
}

/// A minimum-cost maximum-flow capability.
pub trait FlowSolver {
    /// Computes a minimum-cost maximum flow from the network's source to
    /// its sink.
    fn solve(&self, network: &FlowNetwork) -> FlowOutcome;
}

/// Successive shortest augmenting paths on the residual network.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuccessiveShortestPaths;

struct ResidualEdge {
    to: NodeId,
    /// Index of the paired reverse edge in `adj[to]`.
    rev: usize,
    cap: i64,
    cost: i64,
}

struct Residual {
    adj: Vec<Vec<ResidualEdge>>,
    /// Position of each original arc's forward edge: (node, edge index).
    arc_pos: Vec<(NodeId, usize)>,
}

impl Residual {
    fn build(network: &FlowNetwork) -> Self {
        let mut adj: Vec<Vec<ResidualEdge>> =
            (0..network.node_count()).map(|_| Vec::new()).collect();
        let mut arc_pos = Vec::with_capacity(network.arcs().len());

        for arc in network.arcs() {
            let forward = adj[arc.from].len();
            let backward = adj[arc.to].len();
            adj[arc.from].push(ResidualEdge {
                to: arc.to,
                rev: backward,
                cap: arc.capacity,
                cost: arc.cost,
            });
            adj[arc.to].push(ResidualEdge {
                to: arc.from,
                rev: forward,
                cap: 0,
                cost: -arc.cost,
            });
            arc_pos.push((arc.from, forward));
        }

        Self { adj, arc_pos }
    }

    /// Cheapest augmenting path from `source`; returns per-node distance
    /// and predecessor (node, edge index) links.
    fn cheapest_paths(&self, source: NodeId) -> (Vec<i64>, Vec<Option<(NodeId, usize)>>) {
        let n = self.adj.len();
        let mut dist = vec![i64::MAX; n];
        let mut prev: Vec<Option<(NodeId, usize)>> = vec![None; n];
        let mut in_queue = vec![false; n];
        let mut queue = VecDeque::new();

        dist[source] = 0;
        queue.push_back(source);
        in_queue[source] = true;

        while let Some(u) = queue.pop_front() {
            in_queue[u] = false;
            for (e, edge) in self.adj[u].iter().enumerate() {
                if edge.cap <= 0 || dist[u] == i64::MAX {
                    continue;
                }
                let candidate = dist[u] + edge.cost;
                if candidate < dist[edge.to] {
                    dist[edge.to] = candidate;
                    prev[edge.to] = Some((u, e));
                    if !in_queue[edge.to] {
                        queue.push_back(edge.to);
                        in_queue[edge.to] = true;
                    }
                }
            }
        }

        (dist, prev)
    }

    /// Pushes the bottleneck along the found path; returns (units, cost).
    fn augment(
        &mut self,
        source: NodeId,
        sink: NodeId,
        prev: &[Option<(NodeId, usize)>],
    ) -> i64 {
        let mut bottleneck = i64::MAX;
        let mut v = sink;
        while v != source {
            let (u, e) = prev[v].expect("predecessor missing on augmenting path");
            bottleneck = bottleneck.min(self.adj[u][e].cap);
            v = u;
        }

        let mut v = sink;
        while v != source {
            let (u, e) = prev[v].expect("predecessor missing on augmenting path");
            self.adj[u][e].cap -= bottleneck;
            let rev = self.adj[u][e].rev;
            self.adj[v][rev].cap += bottleneck;
            v = u;
        }

        bottleneck
    }
}

impl FlowSolver for SuccessiveShortestPaths {
    fn solve(&self, network: &FlowNetwork) -> FlowOutcome {
        let mut residual = Residual::build(network);
        let source = network.source();
        let sink = network.sink();
        let mut value = 0;
        let mut cost = 0;

        loop {
            let (dist, prev) = residual.cheapest_paths(source);
            if dist[sink] == i64::MAX {
                break;
            }
            let pushed = residual.augment(source, sink, &prev);
            value += pushed;
            cost += pushed * dist[sink];
        }

        let active = network
            .arcs()
            .iter()
            .zip(&residual.arc_pos)
            .filter_map(|(arc, &(node, edge))| {
                let flow = arc.capacity - residual.adj[node][edge].cap;
                (flow > 0).then(|| ArcFlow {
                    from: arc.from,
                    to: arc.to,
                    flow,
                    cost: arc.cost,
                })
            })
            .collect();

        FlowOutcome {
            value,
            cost,
            active,
        }
    }
}
