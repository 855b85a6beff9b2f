//! psyscreen-report
//!
//! Hands an assessment to the narrative-report collaborator: a structured
//! prompt context block and Tera-rendered summaries.

pub mod context;
pub mod error;
pub mod render;
