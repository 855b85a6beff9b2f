//! psyscreen-triage
//!
//! Resolves a subject's evaluation results into exactly one clinical
//! profile, then annotates it with cross-instrument differential notes.
//! Every entry point is a pure function of its inputs.

pub mod annotate;
pub mod assess;
pub mod resolve;
