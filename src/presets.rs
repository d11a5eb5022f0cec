//! Embedded demo dataset.
//!
//! The fixture ships inside the binary so a fresh install opens with a
//! populated back office instead of empty screens.

use crate::store::{Snapshot, Store};

const SEED: &str = include_str!("../presets/seed.json");

/// Parse the embedded seed fixture.
pub fn seed_snapshot() -> Result<Snapshot, serde_json::Error> {
    serde_json::from_str(SEED)
}

/// A store pre-populated with the demo dataset: two customers, one
/// opportunity with an owned task, one scheduled event, a four-instructor
/// roster, two team tasks, and the default training-type labels.
pub fn seed_store() -> Result<Store, serde_json::Error> {
    Ok(Store::from_snapshot(seed_snapshot()?))
}
