//! Redirect-map construction and chain/loop classification.
//!
//! The redirect map is keyed by normalized source path; destinations stay
//! raw so the static cross-check can see the author's original spelling.
//! Classification follows each source through the map until it reaches a
//! terminal destination (an external URL, or a path that is not itself a
//! redirect source) or revisits a node on the active path.
//!
//! Traversal uses an explicit two-phase work list (discover, then
//! finalize) with memoized per-node results, so arbitrarily long chains
//! and cycles never grow the call stack and each node's outgoing edge is
//! followed at most once during finalization.

use std::collections::HashMap;

use tracing::debug;

use crate::normalize::{has_scheme, normalize};
use crate::types::{Classification, Rule};

/// Mapping from normalized source path to raw destination.
///
/// Built by inserting rules in input order with last-write-wins semantics:
/// a duplicated source is reported, but the map keeps the destination of
/// the last rule, and traversal follows it.
#[derive(Debug, Default)]
pub struct RedirectMap {
    entries: HashMap<String, String>,
}

impl RedirectMap {
    /// Build the map from an ordered rule list.
    ///
    /// Returns the map plus the normalized source of every rule whose
    /// source was already present when it was processed, in input order.
    /// The first occurrence is not a duplicate; every subsequent one is.
    #[must_use]
    pub fn build(rules: &[Rule]) -> (Self, Vec<String>) {
        let mut entries: HashMap<String, String> = HashMap::with_capacity(rules.len());
        let mut duplicates = Vec::new();

        for rule in rules {
            let source = normalize(&rule.source);
            if entries.contains_key(&source) {
                duplicates.push(source.clone());
            }
            entries.insert(source, rule.destination.clone());
        }

        (Self { entries }, duplicates)
    }

    /// Number of distinct normalized sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw destination for a normalized source.
    #[must_use]
    pub fn destination(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    fn sources(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Edge each source follows inside the map, if any.
    ///
    /// `None` means the source is terminal: its destination has a scheme,
    /// or its normalized destination is not itself a redirect source.
    fn next_hops(&self) -> HashMap<String, Option<String>> {
        let mut next = HashMap::with_capacity(self.entries.len());
        for (source, destination) in &self.entries {
            let hop = if has_scheme(destination) {
                None
            } else {
                let target = normalize(destination);
                self.entries.contains_key(&target).then_some(target)
            };
            next.insert(source.clone(), hop);
        }
        next
    }
}

/// Result of classifying every source in a [`RedirectMap`].
#[derive(Debug)]
pub struct GraphAnalysis {
    /// Per-source classification, keyed by normalized source path.
    pub classifications: HashMap<String, Classification>,
    /// Sources whose resolution never terminates.
    pub loops: usize,
    /// Sources that resolve in more than one hop without looping.
    pub chains: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NodeState {
    /// On the current traversal path, not yet finalized.
    Active,
    /// Finalized; its classification is never recomputed or overwritten.
    Done,
}

/// Classify every source in the map exactly once.
///
/// A source whose traversal reaches a cycle is looped, with hop count 0;
/// loop status, once finalized, is never overwritten by a later,
/// non-cyclic path through the same node. Everything else carries the hop
/// count to its terminal destination.
#[must_use]
pub fn analyze(map: &RedirectMap) -> GraphAnalysis {
    let next_hops = map.next_hops();
    let mut state: HashMap<String, NodeState> = HashMap::with_capacity(map.len());
    let mut classifications: HashMap<String, Classification> = HashMap::with_capacity(map.len());

    for source in map.sources() {
        explore(source, &next_hops, &mut state, &mut classifications);
    }

    let loops = classifications.values().filter(|c| c.looped).count();
    let chains = classifications
        .values()
        .filter(|c| c.is_chain())
        .count();

    debug!(sources = map.len(), loops, chains, "classified redirect graph");

    GraphAnalysis {
        classifications,
        loops,
        chains,
    }
}

/// Iterative depth-first walk from one source.
///
/// Each node is pushed in two phases: a discover entry that marks it
/// active and schedules its successor, and a finalize entry that computes
/// its classification from the (by then finalized) successor. Revisiting
/// an active node finalizes it as a loop on the spot.
fn explore(
    start: &str,
    next_hops: &HashMap<String, Option<String>>,
    state: &mut HashMap<String, NodeState>,
    classifications: &mut HashMap<String, Classification>,
) {
    let mut stack: Vec<(String, bool)> = vec![(start.to_string(), false)];

    while let Some((node, finalize)) = stack.pop() {
        if finalize {
            finalize_node(&node, next_hops, state, classifications);
            continue;
        }

        match state.get(&node) {
            Some(NodeState::Done) => {},
            Some(NodeState::Active) => {
                // Reached a node still on the active path: cycle.
                state.insert(node.clone(), NodeState::Done);
                classifications.insert(
                    node,
                    Classification {
                        hops: 0,
                        looped: true,
                    },
                );
            },
            None => {
                state.insert(node.clone(), NodeState::Active);
                stack.push((node.clone(), true));
                if let Some(Some(next)) = next_hops.get(&node) {
                    if state.get(next) != Some(&NodeState::Done) {
                        stack.push((next.clone(), false));
                    }
                }
            },
        }
    }
}

fn finalize_node(
    node: &str,
    next_hops: &HashMap<String, Option<String>>,
    state: &mut HashMap<String, NodeState>,
    classifications: &mut HashMap<String, Classification>,
) {
    // Already finalized as part of a loop detected during the forward
    // phase; that result is kept.
    if state.get(node) == Some(&NodeState::Done) {
        return;
    }

    let classification = match next_hops.get(node).and_then(Option::as_ref) {
        None => Classification {
            hops: 0,
            looped: false,
        },
        Some(next) => match state.get(next.as_str()) {
            Some(NodeState::Active) => Classification {
                hops: 0,
                looped: true,
            },
            Some(NodeState::Done) => {
                let next_class = classifications[next.as_str()];
                if next_class.looped {
                    // Feeding a cycle never terminates either.
                    Classification {
                        hops: 0,
                        looped: true,
                    }
                } else {
                    Classification {
                        hops: next_class.hops + 1,
                        looped: false,
                    }
                }
            },
            None => Classification {
                hops: 0,
                looped: false,
            },
        },
    };

    state.insert(node.to_string(), NodeState::Done);
    classifications.insert(node.to_string(), classification);
}
