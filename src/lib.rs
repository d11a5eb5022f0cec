//! trainops — back-office core for a training company.
//!
//! Customer records, a sales-opportunity pipeline, instructor scheduling,
//! and team task management. All state lives in memory inside a single
//! [`store::Store`]; derivations (availability, pipeline steps, dashboard
//! summaries, task views) are pure functions over snapshots of its
//! collections. There is no persistence, no networking, and no concurrency:
//! the store is owned by the application shell and every mutation is an
//! atomic whole-collection replacement.

pub mod availability;
mod error;
pub mod pipeline;
pub mod presets;
pub mod reports;
pub mod store;
pub mod tasks;
pub mod types;
pub mod util;

pub use error::StoreError;
