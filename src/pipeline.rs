//! Sales pipeline stage tracking.
//!
//! The step bar is a pure display derivation: completed/active/pending is
//! recomputed from the single stored status every time, never cached. Any
//! stage marker is clickable, so status moves arbitrarily — backward and
//! stage-skipping transitions are permitted by design and happen through
//! [`crate::store::Store::set_opportunity_status`].

use serde::{Deserialize, Serialize};

use crate::types::OpportunityStatus;

/// The ordered forward sequence. `Lost` is terminal and deliberately absent:
/// a lost deal renders the step bar with no active marker.
pub const STAGES: [OpportunityStatus; 5] = [
    OpportunityStatus::New,
    OpportunityStatus::Discovery,
    OpportunityStatus::Proposal,
    OpportunityStatus::Negotiation,
    OpportunityStatus::Won,
];

/// Display state of one step marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

/// Zero-based position of `status` in [`STAGES`], `None` when the status is
/// outside the forward sequence (i.e. `Lost`).
pub fn stage_index(status: OpportunityStatus) -> Option<usize> {
    STAGES.iter().position(|s| *s == status)
}

/// Derive the display state of every step marker for the given status.
///
/// Steps strictly before the current index are completed, the current index
/// is active, everything else pends. With no index (Lost) all steps pend.
pub fn step_states(status: OpportunityStatus) -> [StepState; 5] {
    let current = stage_index(status);
    let mut states = [StepState::Pending; 5];
    if let Some(current) = current {
        for (i, state) in states.iter_mut().enumerate() {
            *state = if i < current {
                StepState::Completed
            } else if i == current {
                StepState::Active
            } else {
                StepState::Pending
            };
        }
    }
    states
}
