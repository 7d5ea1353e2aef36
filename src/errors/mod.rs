//! Diagnostics produced while parsing.
//!
//! Parse problems never abort a run. Each one is recorded as an [`errors::Error`]
//! carrying:
//!
//! - the specific error variant and the tokens involved
//! - the source position it was found at
//! - a human-readable message and an optional suggestion

pub mod errors;
