//! Flow network construction.
//!
//! Pure translation of a roster problem into a capacitated, costed
//! directed graph. The topology *is* the optimization model:
//!
//! ```text
//! source ─(cap |slots|, cost 0)→ person
//! person ─(cap 1, cost 0)→ tier c        for c in 0..=3
//! tier c ─(cap 1, cost c²)→ person-in-period
//! person-in-period ─(cap 1, cost 0)→ slot    only if the person may take it
//! slot ─(cap 1, cost 0)→ sink
//! ```
//!
//! A person's first use in a period is free, the second costs 1, the third
//! 4, the fourth 9, and a fifth has no arc at all. Any integral flow of
//! value `|slots|` therefore assigns exactly one person per slot,
//! respects unavailability, and pays the sum of quadratic per-period
//! repetition penalties.
//!
//! Built fresh per solve from the problem; never shared or mutated after
//! construction.

use serde::{Deserialize, Serialize};

use crate::models::RosterProblem;

/// Number of tier arcs per (person, period); caps a person's uses within
/// one period.
pub const TIER_COUNT: usize = 4;

/// Index of a node within a [`FlowNetwork`].
pub type NodeId = usize;

/// What a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Supply node.
    Source,
    /// Demand node.
    Sink,
    /// A person (index into the problem's people).
    Person(usize),
    /// One repetition tier of a person within a period.
    Tier {
        person: usize,
        period: usize,
        repetition: usize,
    },
    /// A person's presence in one period.
    Period { person: usize, period: usize },
    /// A slot (index into the problem's slots).
    Slot(usize),
}

/// A directed arc with capacity and per-unit cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arc {
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: i64,
    pub cost: i64,
}

/// The immutable graph value handed to a [`FlowSolver`](super::FlowSolver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNetwork {
    nodes: Vec<NodeKind>,
    arcs: Vec<Arc>,
    source: NodeId,
    sink: NodeId,
}

impl FlowNetwork {
    fn with_source_and_sink() -> Self {
        Self {
            nodes: vec![NodeKind::Source, NodeKind::Sink],
            arcs: Vec::new(),
            source: 0,
            sink: 1,
        }
    }

    fn add_node(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(kind);
        self.nodes.len() - 1
    }

    fn add_arc(&mut self, from: NodeId, to: NodeId, capacity: i64, cost: i64) {
        self.arcs.push(Arc {
            from,
            to,
            capacity,
            cost,
        });
    }

    /// The supply node.
    #[inline]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The demand node.
    #[inline]
    pub fn sink(&self) -> NodeId {
        self.sink
    }

    /// What a node stands for.
    pub fn node(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id]
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All arcs, in construction order.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }
}

/// Builds the flow network for a roster problem.
///
/// The slot partition uses fixed, non-sliding periods of `spacing` slots
/// (last one may be shorter) — an approximation of the local search's
/// rolling per-person gap, kept as designed.
pub fn build_network(problem: &RosterProblem) -> FlowNetwork {
    let mut network = FlowNetwork::with_source_and_sink();
    let spacing = problem.spacing.max(1);
    let supply = problem.slot_count() as i64;

    let slot_nodes: Vec<NodeId> = (0..problem.slot_count())
        .map(|s| network.add_node(NodeKind::Slot(s)))
        .collect();
    for &slot_node in &slot_nodes {
        network.add_arc(slot_node, network.sink, 1, 0);
    }

    for (p, person) in problem.people.iter().enumerate() {
        let person_node = network.add_node(NodeKind::Person(p));
        network.add_arc(network.source, person_node, supply, 0);

        for (period, chunk) in problem.periods().enumerate() {
            let period_node = network.add_node(NodeKind::Period { person: p, period });

            for repetition in 0..TIER_COUNT {
                let tier_node = network.add_node(NodeKind::Tier {
                    person: p,
                    period,
                    repetition,
                });
                network.add_arc(person_node, tier_node, 1, 0);
                network.add_arc(tier_node, period_node, 1, (repetition * repetition) as i64);
            }

            for (offset, slot) in chunk.iter().enumerate() {
                let s = period * spacing + offset;
                if !problem.unavailability.is_blocked(slot, person) {
                    network.add_arc(period_node, slot_nodes[s], 1, 0);
                }
            }
        }
    }

    network
}
