//! psyscreen-audit
//!
//! Structured audit events for clinically significant engine outcomes.

pub mod events;
