//! Repeated full passes until a pass changes nothing.
//!
//! Each pass visits every undetermined asset in lexicographic order:
//! 1. entry point (literal or pattern) → used
//! 2. no referencers at all → unreferenced
//! 3. any referencer already used → used
//!
//! Assets still undetermined at the fixed point only have referencers that
//! never became used (isolated cycles, referencers outside the universe) and
//! are unreferenced. Every productive pass decides at least one asset, so the
//! loop runs at most `|nodes| + 1` passes. O(V·E) overall.

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
    let mut passes = 0;

    loop {
        if cancel.is_cancelled() {
            return Labelling {
                states,
                iterations: passes,
                cancelled: true,
            };
        }

        passes += 1;
        let mut changed = false;

        for node in 0..input.nodes.len() {
            if states[node] != Classification::Undetermined {
                continue;
            }
            let decision = if is_entry[node] {
                Some(Classification::Used)
            } else if input.referencer_count[node] == 0 {
                Some(Classification::Unreferenced)
            } else if input.referencers[node]
                .iter()
                .any(|&r| states[r] == Classification::Used)
            {
                Some(Classification::Used)
            } else {
                None
            };
            if let Some(state) = decision {
                states[node] = state;
                changed = true;
            }
        }

        emit_pass(events, passes, &states);
        tracing::debug!(pass = passes, changed, "reachability pass");

        if !changed {
            break;
        }
    }

    for state in states.iter_mut() {
        if *state == Classification::Undetermined {
            *state = Classification::Unreferenced;
        }
    }

    Labelling {
        states,
        iterations: passes,
        cancelled: false,
    }
}

fn emit_pass(events: &EventDispatcher, pass: usize, states: &[Classification]) {
    if events.handler_count() == 0 {
        return;
    }
    let mut event = ReachabilityPassEvent {
        pass,
        used: 0,
        unreferenced: 0,
        undetermined: 0,
    };
    for state in states {
        match state {
            Classification::Used => event.used += 1,
            Classification::Unreferenced => event.unreferenced += 1,
            Classification::Undetermined => event.undetermined += 1,
        }
    }
    events.emit_reachability_pass(&event);
}
