//! Work-list propagation from newly used assets. O(V+E).
//!
//! Seeds the queue with every undetermined entry point, then marks each
//! undetermined dependent of a dequeued asset as used. Whatever is left
//! undetermined afterwards is unreferenced. Produces the same classification
//! as the fixed-point passes.
//!
//! `cancel` is polled once before seeding and then at every dequeue.

use std::collections::VecDeque;

use keeper_core::events::types::ReachabilityPassEvent;
use keeper_core::events::EventDispatcher;
use keeper_core::traits::Cancellable;

use super::engine::{Labelling, ReachabilityInput};
use super::types::Classification;

pub(crate) fn label(
    input: &ReachabilityInput<'_>,
    is_entry: &[bool],
    mut states: Vec<Classification>,
    cancel: &dyn Cancellable,
    events: &EventDispatcher,
) -> Labelling {
    if cancel.is_cancelled() {
        return Labelling {
            states,
            iterations: 0,
            cancelled: true,
        };
    }

    let dependents = input.dependents();
    let mut queue = VecDeque::new();

    for node in 0..input.nodes.len() {
        if is_entry[node] && states[node] == Classification::Undetermined {
            states[node] = Classification::Used;
            queue.push_back(node);
        }
    }

    let mut dequeued = 0;
    while let Some(node) = queue.pop_front() {
        if cancel.is_cancelled() {
            return Labelling {
                states,
                iterations: dequeued,
                cancelled: true,
            };
        }
        dequeued += 1;
        for &dependent in &dependents[node] {
            if states[dependent] == Classification::Undetermined {
                states[dependent] = Classification::Used;
                queue.push_back(dependent);
            }
        }
    }

    let mut used = 0;
    for state in states.iter_mut() {
        match state {
            Classification::Undetermined => *state = Classification::Unreferenced,
            Classification::Used => used += 1,
            Classification::Unreferenced => {}
        }
    }

    tracing::debug!(dequeued, used, "work-list propagation finished");
    events.emit_reachability_pass(&ReachabilityPassEvent {
        pass: 1,
        used,
        unreferenced: states.len() - used,
        undetermined: 0,
    });

    Labelling {
        states,
        iterations: dequeued,
        cancelled: false,
    }
}
