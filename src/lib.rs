//! Scheduling problems for a home battery and a set of appliances.
//!
//! The crate validates problem payloads before they reach an external optimizer, fingerprints
//! them for deduplication, and decodes the optimizer's per-timestep plans into device tasks.

pub mod fingerprint;
pub mod plan;
pub mod prelude;
pub mod problem;
