pub mod evaluation;
pub mod instrument;
pub mod profile;
pub mod tier;
