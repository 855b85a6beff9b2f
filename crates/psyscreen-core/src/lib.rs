//! psyscreen-core
//!
//! Pure domain types shared by the aggregation engine: instrument
//! identities, severity tiers, evaluation results and clinical profiles.
//! No scoring logic lives here. This is the shared vocabulary of the
//! PsyScreen system.

pub mod error;
pub mod models;
